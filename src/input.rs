//! Keyboard state shared between host events and the tick
//!
//! One-writer/one-reader split: the host's keydown/keyup handlers write into
//! `KeysHeld`, and each tick reads an immutable `InputSnapshot`. Both run on
//! the same single-threaded event loop, so no locking is involved.

/// Game actions a key can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a host key code to a game action. Unbound codes return `None` and
    /// are ignored by the handlers.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Keys held right now, written only by the host event handlers
#[derive(Debug, Default)]
pub struct KeysHeld {
    left: bool,
    right: bool,
}

/// Immutable per-tick view of the held keys
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
}

impl KeysHeld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
        }
    }

    /// Release everything (window blur, restart)
    pub fn clear(&mut self) {
        self.left = false;
        self.right = false;
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("KeyD"), Some(Key::Right));
        assert_eq!(Key::from_code("Space"), None);
    }

    #[test]
    fn test_press_release_cycle() {
        let mut keys = KeysHeld::new();
        keys.key_down(Key::Left);
        keys.key_down(Key::Right);
        let snap = keys.snapshot();
        assert!(snap.left && snap.right);

        keys.key_up(Key::Left);
        let snap = keys.snapshot();
        assert!(!snap.left && snap.right);

        keys.clear();
        let snap = keys.snapshot();
        assert!(!snap.left && !snap.right);
    }
}
