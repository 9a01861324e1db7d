//! Configuration and sample types shared by the engine and playback.

use bevy::prelude::*;

use super::error::{Result, SplineError};

/// Smallest resolution that still reaches the end point of the final segment.
pub const MIN_RESOLUTION: usize = 2;

/// Largest table a `Vec<SplinePoint>` can address.
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<SplinePoint>();

/// Sampling configuration for a Catmull-Rom path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub struct SplineConfig {
    /// Number of samples generated per segment. Must be at least 2.
    pub resolution: usize,
    /// Whether the last control point connects back to the first.
    pub closed_loop: bool,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            resolution: 16,
            closed_loop: false,
        }
    }
}

impl SplineConfig {
    /// Create a validated configuration.
    pub fn new(resolution: usize, closed_loop: bool) -> Result<Self> {
        let config = Self {
            resolution,
            closed_loop,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create an open-path configuration.
    pub fn open(resolution: usize) -> Result<Self> {
        Self::new(resolution, false)
    }

    /// Create a closed-loop configuration.
    pub fn closed(resolution: usize) -> Result<Self> {
        Self::new(resolution, true)
    }

    /// Check the resolution alone. Table size is checked against the control
    /// points by [`Self::sample_count`].
    pub fn validate(&self) -> Result<()> {
        if self.resolution < MIN_RESOLUTION {
            return Err(SplineError::InvalidResolution(self.resolution));
        }
        Ok(())
    }

    /// Number of segments for `control_points` points under this configuration.
    pub fn segment_count(&self, control_points: usize) -> usize {
        if self.closed_loop {
            control_points
        } else {
            control_points.saturating_sub(1)
        }
    }

    /// Number of samples a table built from `control_points` points will hold.
    ///
    /// Fails when the table could not be allocated at all.
    pub fn sample_count(&self, control_points: usize) -> Result<usize> {
        self.segment_count(control_points)
            .checked_mul(self.resolution)
            .filter(|&count| count <= MAX_SAMPLES)
            .ok_or(SplineError::TooManySamples {
                control_points,
                resolution: self.resolution,
            })
    }
}

/// A single sample of a generated path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct SplinePoint {
    pub position: Vec3,
    /// Unit direction of travel, or zero where the curve is degenerate.
    pub tangent: Vec3,
    /// Sideways vector `normalize(tangent × Y) / 2`. Half length.
    pub normal: Vec3,
}

impl SplinePoint {
    pub const fn new(position: Vec3, tangent: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            tangent,
            normal,
        }
    }
}

/// The dense, ordered sample table generated from a set of control points.
///
/// Tables are never edited in place. Any change to the control points or the
/// configuration produces a fresh table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplineTable {
    points: Vec<SplinePoint>,
    closed_loop: bool,
}

impl SplineTable {
    pub(crate) fn new(points: Vec<SplinePoint>, closed_loop: bool) -> Self {
        Self {
            points,
            closed_loop,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether this table was generated from a closed loop.
    pub fn is_closed_loop(&self) -> bool {
        self.closed_loop
    }

    pub fn get(&self, index: usize) -> Option<&SplinePoint> {
        self.points.get(index)
    }

    pub fn first(&self) -> Option<&SplinePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SplinePoint> {
        self.points.last()
    }

    pub fn points(&self) -> &[SplinePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SplinePoint> {
        self.points.iter()
    }

    /// Sum of the straight-line distances between consecutive samples.
    pub fn total_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].position.distance(pair[1].position))
            .sum()
    }
}

impl<'a> IntoIterator for &'a SplineTable {
    type Item = &'a SplinePoint;
    type IntoIter = std::slice::Iter<'a, SplinePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
