//! Pending redraw flags

use std::ops::{BitOr, BitOrAssign};

/// Which layers of the control need repainting
///
/// Requests accumulate with `|=` until the render collaborator takes them, so
/// any number of requests between two paints collapse into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Redraw {
    pub track: bool,
    pub thumb: bool,
}

impl Redraw {
    pub const NONE: Redraw = Redraw {
        track: false,
        thumb: false,
    };
    pub const TRACK: Redraw = Redraw {
        track: true,
        thumb: false,
    };
    pub const THUMB: Redraw = Redraw {
        track: false,
        thumb: true,
    };
    pub const ALL: Redraw = Redraw {
        track: true,
        thumb: true,
    };

    pub fn is_empty(&self) -> bool {
        !self.track && !self.thumb
    }
}

impl BitOr for Redraw {
    type Output = Redraw;

    fn bitor(self, rhs: Redraw) -> Redraw {
        Redraw {
            track: self.track || rhs.track,
            thumb: self.thumb || rhs.thumb,
        }
    }
}

impl BitOrAssign for Redraw {
    fn bitor_assign(&mut self, rhs: Redraw) {
        *self = *self | rhs;
    }
}
