use egui::Pos2;

use crate::path::PathEncoding;
use crate::pen::PenSettings;
use crate::stroke::Stroke;

/// Whether an operation changed state or was absorbed as a no-op.
///
/// Pointer event ordering isn't under our control, so out-of-order events
/// are ignored rather than reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Applied,
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording {
        path: PathEncoding,
    },
}

/// Turns a pointer gesture into a path.
///
/// `Idle --begin--> Recording --extend--> Recording --commit--> Idle`
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    state: RecorderState,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `point`.
    ///
    /// A `begin` while already recording restarts the stroke: the previous
    /// in-progress path is dropped without being committed.
    pub fn begin(&mut self, point: Pos2) -> Outcome {
        if self.is_recording() {
            log::debug!("Stroke restarted at {:?} before release", point);
        }
        self.state = RecorderState::Recording {
            path: PathEncoding::start(point),
        };
        Outcome::Applied
    }

    /// Add a line segment to the in-progress stroke. No-op while idle.
    pub fn extend(&mut self, point: Pos2) -> Outcome {
        match &mut self.state {
            RecorderState::Recording { path } => {
                path.line_to(point);
                Outcome::Applied
            }
            RecorderState::Idle => Outcome::Ignored,
        }
    }

    /// Finish the in-progress stroke using the pen settings active right now.
    ///
    /// The recorder is back to idle by the time the stroke is returned.
    pub fn commit(&mut self, pen: &PenSettings) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            RecorderState::Recording { path } => Some(Stroke::with_pen(path, pen)),
            RecorderState::Idle => None,
        }
    }

    /// Drop any in-progress stroke and return to idle
    pub fn abandon(&mut self) -> Outcome {
        match std::mem::take(&mut self.state) {
            RecorderState::Recording { .. } => Outcome::Applied,
            RecorderState::Idle => Outcome::Ignored,
        }
    }

    pub fn current_encoding(&self) -> Option<&PathEncoding> {
        match &self.state {
            RecorderState::Recording { path } => Some(path),
            RecorderState::Idle => None,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }
}
