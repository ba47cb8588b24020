use clap::ValueEnum;

/// Logical movement direction, independent of the physical key layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    const fn index(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Keyboard layout selecting which keys drive movement.
///
/// Parsed from `azerty` / `qwerty` on the command line (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KeyboardLayout {
    #[default]
    Azerty,
    Qwerty,
}

impl KeyboardLayout {
    /// Map a typed key character to a movement direction
    pub fn direction(self, key: char) -> Option<Direction> {
        let key = key.to_ascii_lowercase();
        match self {
            KeyboardLayout::Azerty => match key {
                'z' => Some(Direction::Forward),
                's' => Some(Direction::Backward),
                'q' => Some(Direction::Left),
                'd' => Some(Direction::Right),
                _ => None,
            },
            KeyboardLayout::Qwerty => match key {
                'w' => Some(Direction::Forward),
                's' => Some(Direction::Backward),
                'a' => Some(Direction::Left),
                'd' => Some(Direction::Right),
                _ => None,
            },
        }
    }

    /// Movement keys in forward, backward, left, right order
    pub const fn keys(self) -> [char; 4] {
        match self {
            KeyboardLayout::Azerty => ['z', 's', 'q', 'd'],
            KeyboardLayout::Qwerty => ['w', 's', 'a', 'd'],
        }
    }
}

/// Held state of the four movement directions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    held: [bool; 4],
}

impl MovementState {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        self.held[direction.index()] = pressed;
    }

    pub const fn is_held(&self, direction: Direction) -> bool {
        self.held[direction.index()]
    }

    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_held(*d))
    }

    pub fn is_idle(&self) -> bool {
        !self.held.iter().any(|&h| h)
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azerty_mapping() {
        let layout = KeyboardLayout::Azerty;
        assert_eq!(layout.direction('z'), Some(Direction::Forward));
        assert_eq!(layout.direction('s'), Some(Direction::Backward));
        assert_eq!(layout.direction('q'), Some(Direction::Left));
        assert_eq!(layout.direction('d'), Some(Direction::Right));
        assert_eq!(layout.direction('w'), None);
        assert_eq!(layout.direction('a'), None);
    }

    #[test]
    fn test_qwerty_mapping() {
        let layout = KeyboardLayout::Qwerty;
        assert_eq!(layout.direction('w'), Some(Direction::Forward));
        assert_eq!(layout.direction('s'), Some(Direction::Backward));
        assert_eq!(layout.direction('a'), Some(Direction::Left));
        assert_eq!(layout.direction('d'), Some(Direction::Right));
        assert_eq!(layout.direction('z'), None);
        assert_eq!(layout.direction('q'), None);
    }

    #[test]
    fn test_mapping_ignores_case() {
        assert_eq!(KeyboardLayout::Azerty.direction('Z'), Some(Direction::Forward));
        assert_eq!(KeyboardLayout::Qwerty.direction('A'), Some(Direction::Left));
    }

    #[test]
    fn test_keys_agree_with_direction() {
        for layout in [KeyboardLayout::Azerty, KeyboardLayout::Qwerty] {
            for (key, direction) in layout.keys().into_iter().zip(Direction::ALL) {
                assert_eq!(layout.direction(key), Some(direction));
            }
        }
    }

    #[test]
    fn test_layout_parse_is_case_sensitive() {
        assert_eq!(
            KeyboardLayout::from_str("azerty", false),
            Ok(KeyboardLayout::Azerty)
        );
        assert_eq!(
            KeyboardLayout::from_str("qwerty", false),
            Ok(KeyboardLayout::Qwerty)
        );
        assert!(KeyboardLayout::from_str("QWERTY", false).is_err());
        assert!(KeyboardLayout::from_str("dvorak", false).is_err());
    }

    #[test]
    fn test_movement_state_set_and_clear() {
        let mut movement = MovementState::default();
        assert!(movement.is_idle());

        movement.set(Direction::Forward, true);
        movement.set(Direction::Forward, true);
        assert!(movement.is_held(Direction::Forward));
        assert_eq!(movement.held().count(), 1);

        movement.set(Direction::Left, false);
        assert!(!movement.is_held(Direction::Left));

        movement.clear();
        assert!(movement.is_idle());
    }
}
