//! Touch-tracking state machine
//!
//! `Idle → Tracking(session) → Idle`, driven by the host's pointer events.
//! The tracker decides when the host gets a value-changed notification:
//!
//! | step      | Continue             | End                         |
//! |-----------|----------------------|-----------------------------|
//! | none      | one per move event   | nothing                     |
//! | `Some(s)` | nothing              | snap, then exactly one      |
//!
//! Notifications are returned as `Some(value)` rather than pushed through a
//! callback, so the caller decides where they go.

use super::engine::{TrackGeometry, ValueEngine};
use crate::geometry::{Point, Rect};

/// Per-gesture state, alive between Begin and End
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSession {
    /// Pointer location at the previous event
    pub previous_location: Point,
    /// Whether the gesture grabbed the thumb
    pub highlighted: bool,
}

/// Tracker state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackingState {
    #[default]
    Idle,
    Tracking(TouchSession),
}

/// Gesture state machine over a [`ValueEngine`]
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    state: TrackingState,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Whether a gesture currently holds the thumb
    pub fn is_highlighted(&self) -> bool {
        matches!(
            self.state,
            TrackingState::Tracking(TouchSession {
                highlighted: true,
                ..
            })
        )
    }

    /// Pointer down at `location`
    ///
    /// Opens a session only when `location` hits `thumb_frame`. Returns
    /// whether the host should keep tracking this gesture; touches elsewhere
    /// on the track are ignored entirely.
    pub fn begin(&mut self, location: Point, thumb_frame: Rect) -> bool {
        if thumb_frame.contains(location) {
            log::trace!("tracking: begin at ({:.1}, {:.1})", location.x, location.y);
            self.state = TrackingState::Tracking(TouchSession {
                previous_location: location,
                highlighted: true,
            });
            true
        } else {
            log::trace!(
                "tracking: ignoring press at ({:.1}, {:.1}) outside thumb",
                location.x,
                location.y
            );
            self.state = TrackingState::Idle;
            false
        }
    }

    /// Pointer moved to `location`
    ///
    /// Applies the horizontal delta since the previous event to the engine's
    /// value (clamped). Without a step, returns the current value on every
    /// call, even when clamping left it unchanged.
    pub fn continue_tracking(
        &mut self,
        location: Point,
        engine: &mut ValueEngine,
        geometry: TrackGeometry,
    ) -> Option<f64> {
        let TrackingState::Tracking(session) = &mut self.state else {
            return None;
        };

        let delta_x = location.x - session.previous_location.x;
        let delta_value = engine.value_for_delta(delta_x, geometry);
        session.previous_location = location;

        if session.highlighted {
            engine.set_value(engine.value() + delta_value);
        }

        if engine.step().is_none() {
            Some(engine.value())
        } else {
            None
        }
    }

    /// Pointer released or cancelled
    ///
    /// With a step configured, snaps the value to the nearest multiple and
    /// returns it as the single notification for the gesture.
    pub fn end(&mut self, engine: &mut ValueEngine) -> Option<f64> {
        // back to Idle, which also clears the highlight
        let TrackingState::Tracking(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        log::trace!(
            "tracking: end at ({:.1}, {:.1})",
            session.previous_location.x,
            session.previous_location.y
        );

        let step = engine.step()?;
        let snapped = engine.snap_to_step(engine.value());
        engine.set_value(snapped);
        log::debug!(
            "tracking: snapped to {} (step {})",
            engine.value(),
            step
        );
        Some(engine.value())
    }
}
