/// Held-key tracking and per-player intent derivation.
///
/// Terminals report key presses, not key state.  `KeyTracker` records the
/// frame each key was last seen (press or repeat) and treats it as held while
/// that is recent enough.  Terminals with keyboard-enhancement support also
/// send release events, which drop the key immediately.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

use crate::entities::{Intent, PlayerId};

/// A key counts as held if seen within this many frames.  At 60 fps this is
/// ≈133 ms, longer than the gap between OS key-repeat events.
pub const HOLD_WINDOW: u64 = 8;

/// The four direction keys of one control scheme.
struct Scheme {
    left: &'static [KeyCode],
    right: &'static [KeyCode],
    up: &'static [KeyCode],
    down: &'static [KeyCode],
}

static ARROWS: Scheme = Scheme {
    left: &[KeyCode::Left],
    right: &[KeyCode::Right],
    up: &[KeyCode::Up],
    down: &[KeyCode::Down],
};

static WASD: Scheme = Scheme {
    left: &[KeyCode::Char('a'), KeyCode::Char('A')],
    right: &[KeyCode::Char('d'), KeyCode::Char('D')],
    up: &[KeyCode::Char('w'), KeyCode::Char('W')],
    down: &[KeyCode::Char('s'), KeyCode::Char('S')],
};

fn scheme_for(id: PlayerId) -> &'static Scheme {
    match id {
        PlayerId::One => &ARROWS,
        PlayerId::Two => &WASD,
    }
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
    }

    pub fn is_held(&self, code: &KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, codes: &[KeyCode], frame: u64) -> bool {
        codes.iter().any(|c| self.is_held(c, frame))
    }

    /// Direction for one player.  When opposite keys are both held, right and
    /// down win.
    pub fn intent(&self, id: PlayerId, frame: u64) -> Intent {
        let scheme = scheme_for(id);
        let mut dx = 0;
        let mut dy = 0;
        if self.any_held(scheme.left, frame) {
            dx = -1;
        }
        if self.any_held(scheme.right, frame) {
            dx = 1;
        }
        if self.any_held(scheme.up, frame) {
            dy = -1;
        }
        if self.any_held(scheme.down, frame) {
            dy = 1;
        }
        Intent::new(dx, dy)
    }

    pub fn intents(&self, frame: u64) -> [Intent; 2] {
        PlayerId::ALL.map(|id| self.intent(id, frame))
    }
}
