//! Pure playback state, stepped once per frame against a sample table.

use bevy::prelude::*;

use crate::spline::{Result, SplineError, SplinePoint, SplineTable};

/// Result of a single [`PlaybackCursor::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The cursor is not playing. Nothing was emitted.
    Idle,
    /// The cursor emitted a sample and has more to go.
    Advanced(SplinePoint),
    /// The cursor emitted the final sample and stopped.
    Finished(SplinePoint),
}

impl StepOutcome {
    /// The emitted sample, if any.
    pub fn point(&self) -> Option<SplinePoint> {
        match self {
            Self::Idle => None,
            Self::Advanced(point) | Self::Finished(point) => Some(*point),
        }
    }

    /// The emitted position, if any.
    pub fn position(&self) -> Option<Vec3> {
        self.point().map(|point| point.position)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Per-tick position in a [`SplineTable`].
///
/// The cursor is a plain value: [`Self::step`] returns the next cursor
/// together with whatever it emitted, and the caller stores it for the next
/// tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub struct PlaybackCursor {
    /// Index of the next sample to emit.
    pub index: usize,
    /// Whether [`Self::step`] advances.
    pub playing: bool,
}

impl PlaybackCursor {
    /// Arm playback without moving the cursor.
    pub fn start(self) -> Self {
        Self {
            playing: true,
            ..self
        }
    }

    /// Disarm playback without moving the cursor.
    pub fn stop(self) -> Self {
        Self {
            playing: false,
            ..self
        }
    }

    /// Move back to the first sample, keeping the playing flag.
    pub fn rewind(self) -> Self {
        Self { index: 0, ..self }
    }

    /// Emit the sample under the cursor and advance by one.
    ///
    /// Does nothing while not playing. Emitting the last sample of the table
    /// stops playback and leaves the cursor on that sample; there is no
    /// wraparound, even for closed loops.
    pub fn step(self, table: &SplineTable) -> Result<(Self, StepOutcome)> {
        if !self.playing {
            return Ok((self, StepOutcome::Idle));
        }

        let Some(last) = table.len().checked_sub(1) else {
            return Err(SplineError::NotInitialized);
        };

        // A rebuild may have shrunk the table under the cursor.
        let index = self.index.min(last);
        let point = table.points()[index];

        if index == last {
            Ok((
                Self {
                    index,
                    playing: false,
                },
                StepOutcome::Finished(point),
            ))
        } else {
            Ok((
                Self {
                    index: index + 1,
                    playing: true,
                },
                StepOutcome::Advanced(point),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::{SplineEngine, SplineErrorKind};

    fn table() -> SplineTable {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        SplineEngine::build(&points, 4, true)
            .unwrap()
            .table()
            .unwrap()
            .clone()
    }

    #[test]
    fn test_idle_step_is_noop() {
        let cursor = PlaybackCursor::default();
        let (next, outcome) = cursor.step(&table()).unwrap();
        assert_eq!(next, cursor);
        assert_eq!(outcome, StepOutcome::Idle);
        assert_eq!(outcome.position(), None);
    }

    #[test]
    fn test_full_playback_emits_table_in_order() {
        let table = table();
        let mut cursor = PlaybackCursor::default().start();
        let mut emitted = Vec::new();

        for step in 0..table.len() {
            assert!(cursor.playing);
            let (next, outcome) = cursor.step(&table).unwrap();
            assert_eq!(outcome.is_finished(), step == table.len() - 1);
            emitted.push(outcome.point().unwrap());
            cursor = next;
        }

        assert!(!cursor.playing);
        assert_eq!(cursor.index, table.len() - 1);
        assert_eq!(emitted.as_slice(), table.points());

        // Finished cursors stay put.
        let (after, outcome) = cursor.step(&table).unwrap();
        assert_eq!(after, cursor);
        assert_eq!(outcome, StepOutcome::Idle);
    }

    #[test]
    fn test_start_resumes_without_rewinding() {
        let table = table();
        let mut cursor = PlaybackCursor::default().start();
        for _ in 0..5 {
            cursor = cursor.step(&table).unwrap().0;
        }
        cursor = cursor.stop();
        assert_eq!(cursor.step(&table).unwrap().1, StepOutcome::Idle);

        let cursor = cursor.start().start();
        let (next, outcome) = cursor.step(&table).unwrap();
        assert_eq!(outcome.point(), Some(table.points()[5]));
        assert_eq!(next.index, 6);
    }

    #[test]
    fn test_restart_after_finish_replays_last_sample() {
        let table = table();
        let finished = PlaybackCursor {
            index: table.len() - 1,
            playing: false,
        };
        let (next, outcome) = finished.start().step(&table).unwrap();
        assert_eq!(outcome, StepOutcome::Finished(*table.last().unwrap()));
        assert!(!next.playing);

        let (next, outcome) = finished.rewind().start().step(&table).unwrap();
        assert_eq!(outcome, StepOutcome::Advanced(*table.first().unwrap()));
        assert_eq!(next.index, 1);
    }

    #[test]
    fn test_cursor_clamps_to_shrunk_table() {
        let table = table();
        let cursor = PlaybackCursor {
            index: 100,
            playing: true,
        };
        let (next, outcome) = cursor.step(&table).unwrap();
        assert_eq!(outcome, StepOutcome::Finished(*table.last().unwrap()));
        assert_eq!(next.index, table.len() - 1);
    }

    #[test]
    fn test_empty_table_is_not_initialized() {
        let cursor = PlaybackCursor::default().start();
        let err = cursor.step(&SplineTable::default()).unwrap_err();
        assert_eq!(err.kind(), SplineErrorKind::NotInitialized);
    }
}
