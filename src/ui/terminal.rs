//! Full-screen renderer built on ratatui

use std::io::{self, Stdout};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use super::display;
use super::state::SoundLog;
use crate::core::error::Result;
use crate::core::types::{Side, View};
use crate::simulation::session::RenderSink;
use crate::simulation::snapshot::{ShiftSummary, Snapshot};

/// Raw mode and the alternate screen for as long as it lives
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
    }
}

pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    sounds: SoundLog,
    default_sound: String,
}

impl TerminalRenderer<CrosstermBackend<Stdout>> {
    pub fn stdout(default_sound: impl Into<String>) -> Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()), default_sound)
    }
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B, default_sound: impl Into<String>) -> Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            sounds: SoundLog::new(),
            default_sound: default_sound.into(),
        })
    }

    pub fn sounds(&self) -> &SoundLog {
        &self.sounds
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> RenderSink for TerminalRenderer<B> {
    fn present(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.sounds.observe(snapshot, &self.default_sound);
        let sounds = &self.sounds;
        self.terminal
            .draw(|frame| draw_shift(frame, snapshot, sounds))?;
        Ok(())
    }

    fn conclude(&mut self, summary: &ShiftSummary) -> Result<()> {
        let sounds = &self.sounds;
        self.terminal.draw(|frame| {
            draw_shift(frame, &summary.final_state, sounds);
            draw_summary(frame, summary);
        })?;
        Ok(())
    }
}

fn draw_shift(frame: &mut Frame, snapshot: &Snapshot, sounds: &SoundLog) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(frame.size());

    let hints = display::control_hints(snapshot);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(hints.len() as u16 + 2),
            Constraint::Length(if snapshot.has_dialog() { 3 } else { 0 }),
        ])
        .split(columns[0]);

    draw_header(frame, rows[0], snapshot);
    draw_power(frame, rows[1], snapshot);
    draw_facility(frame, rows[2], snapshot);
    draw_controls(frame, rows[3], &hints);
    if snapshot.has_dialog() {
        draw_dialog(frame, rows[4], snapshot);
    }
    draw_sounds(frame, columns[1], sounds);
}

fn draw_header(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(display::time_text(snapshot));
    let lines = vec![
        Line::from(vec![
            Span::raw("Last Sound: "),
            Span::styled(
                snapshot.ambient_event.clone(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(display::view_line(snapshot.view)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_power(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let color = match snapshot.power_percent {
        0..=15 => Color::Red,
        16..=40 => Color::Yellow,
        _ => Color::Green,
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Power  Usage {}",
            display::usage_meter(snapshot.active_systems)
        )))
        .gauge_style(Style::default().fg(color))
        .percent(snapshot.power_percent.min(100) as u16)
        .label(display::power_text(snapshot));
    frame.render_widget(gauge, area);
}

fn draw_facility(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let mut lines = Vec::new();

    if let Some(feed) = &snapshot.camera {
        lines.push(Line::from(Span::styled(
            display::camera_line(feed),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    for side in [Side::Left, Side::Right] {
        let faced = snapshot.view.side() == Some(side);
        let style = if faced {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            display::side_line(side, snapshot.side(side)),
            style,
        )));
    }

    let title = match snapshot.view {
        View::CameraGrid => "Cameras",
        _ => "Office",
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_controls(frame: &mut Frame, area: Rect, hints: &[display::ControlHint]) {
    let lines: Vec<Line> = hints
        .iter()
        .map(|hint| {
            Line::from(vec![
                Span::styled(hint.key, Style::default().fg(Color::Yellow)),
                Span::raw(format!("  {}", hint.action)),
            ])
        })
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Controls");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_dialog(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Dialog")
        .border_style(Style::default().fg(Color::Magenta));
    let paragraph = Paragraph::new(snapshot.dialog.clone())
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_sounds(frame: &mut Frame, area: Rect, sounds: &SoundLog) {
    let lines: Vec<Line> = sounds
        .entries()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{:>2}AM ", entry.hour_label),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.message.clone()),
            ])
        })
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Recent Sounds");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_summary(frame: &mut Frame, summary: &ShiftSummary) {
    let area = centered(frame.size(), 56, 6);
    let lines: Vec<Line> = display::summary_lines(summary)
        .into_iter()
        .map(Line::from)
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Shift Over")
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
