use crate::constants::{RELAX_FACTOR, RELAX_SNAP_EPSILON};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AtRest,
    Dragging,
    Relaxing,
}

/// Knob position plus the drag/relax state machine.
///
/// Positions are in canvas pixels. Each relaxation step closes a fixed
/// fraction of the remaining gap to center and snaps once both axes are
/// within a pixel; a fresh drag cancels relaxation via the phase check.
pub struct KnobMotion {
    center: Vec2,
    pos: Vec2,
    phase: Phase,
}

impl KnobMotion {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            pos: center,
            phase: Phase::AtRest,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn begin_drag(&mut self) {
        self.phase = Phase::Dragging;
    }

    /// Move the knob while dragging; ignored in other phases.
    pub fn drag_to(&mut self, pos: Vec2) {
        if self.phase == Phase::Dragging {
            self.pos = pos;
        }
    }

    pub fn release(&mut self) {
        if self.phase == Phase::Dragging {
            self.phase = Phase::Relaxing;
        }
    }

    /// One relaxation tick. Returns true while another tick is needed.
    pub fn step(&mut self) -> bool {
        if self.phase != Phase::Relaxing {
            return false;
        }
        let gap = self.center - self.pos;
        if gap.x.abs() < RELAX_SNAP_EPSILON && gap.y.abs() < RELAX_SNAP_EPSILON {
            self.pos = self.center;
            self.phase = Phase::AtRest;
            return false;
        }
        self.pos += gap * RELAX_FACTOR;
        true
    }
}
