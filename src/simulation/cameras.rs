//! Camera directory
//!
//! Fixed list of feeds and the keys that select them. The keys follow the
//! keyboard row (1 2 3 ... 0 -) but jump around the building on purpose.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Camera {
    pub id: &'static str,
    pub room: &'static str,
}

pub const CAMERAS: [Camera; 11] = [
    Camera { id: "CAM 1A", room: "Show Stage" },
    Camera { id: "CAM 1B", room: "Dining Area" },
    Camera { id: "CAM 1C", room: "Pirate Cove" },
    Camera { id: "CAM 2A", room: "Left Hall" },
    Camera { id: "CAM 2B", room: "Left Hall Corner" },
    Camera { id: "CAM 3", room: "Supply Closet" },
    Camera { id: "CAM 4A", room: "Right Hall" },
    Camera { id: "CAM 4B", room: "Right Hall Corner" },
    Camera { id: "CAM 5", room: "Backstage" },
    Camera { id: "CAM 6", room: "Kitchen" },
    Camera { id: "CAM 7", room: "Restrooms" },
];

/// Key → camera slot, in keyboard order
pub const CAMERA_KEYS: [(char, usize); 11] = [
    ('1', 0),
    ('2', 8),
    ('3', 1),
    ('4', 10),
    ('5', 2),
    ('6', 5),
    ('7', 6),
    ('8', 3),
    ('9', 7),
    ('0', 4),
    ('-', 9),
];

pub fn slot_for_key(key: char) -> Option<usize> {
    CAMERA_KEYS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, slot)| *slot)
}

pub fn camera(slot: usize) -> Option<&'static Camera> {
    CAMERAS.get(slot)
}

pub fn is_camera_key(key: char) -> bool {
    slot_for_key(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_slot_has_exactly_one_key() {
        let slots: HashSet<usize> = CAMERA_KEYS.iter().map(|(_, slot)| *slot).collect();
        assert_eq!(slots.len(), CAMERAS.len());
        assert!(slots.iter().all(|slot| *slot < CAMERAS.len()));
    }

    #[test]
    fn test_key_two_is_backstage() {
        let slot = slot_for_key('2').unwrap();
        assert_eq!(slot, 8);
        assert_eq!(camera(slot).unwrap().room, "Backstage");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(slot_for_key('a'), None);
        assert!(camera(11).is_none());
    }
}
