//! The path engine: owns control points and rebuilds the sample table.

use bevy::log::debug;
use bevy::prelude::*;

use super::error::{Result, SplineError};
use super::hermite::build_table;
use super::types::{SplineConfig, SplineTable};

/// Fewest control points accepted by [`SplineEngine::build`].
pub const MIN_CONTROL_POINTS: usize = 3;

/// Owns a copy of the control points, the sampling configuration, and the
/// table generated from them.
///
/// Every update validates its input, samples a complete new table, and only
/// then replaces the stored state. A failed update leaves the previous
/// control points, configuration and table untouched.
#[derive(Debug, Clone, Default)]
pub struct SplineEngine {
    control_points: Vec<Vec3>,
    config: SplineConfig,
    table: Option<SplineTable>,
}

impl SplineEngine {
    /// Build a table from at least three control points.
    pub fn build(control_points: &[Vec3], resolution: usize, closed_loop: bool) -> Result<Self> {
        Self::build_with_config(control_points, SplineConfig { resolution, closed_loop })
    }

    /// Build a table from at least three control points with an existing configuration.
    pub fn build_with_config(control_points: &[Vec3], config: SplineConfig) -> Result<Self> {
        if control_points.len() < MIN_CONTROL_POINTS {
            return Err(SplineError::TooFewControlPoints {
                count: control_points.len(),
                min: MIN_CONTROL_POINTS,
            });
        }
        config.validate()?;

        let table = build_table(control_points, &config)?;
        debug!(
            "built spline table: {} control points, {} samples",
            control_points.len(),
            table.len()
        );

        Ok(Self {
            control_points: control_points.to_vec(),
            config,
            table: Some(table),
        })
    }

    /// An engine with a configuration but no control points yet.
    ///
    /// Queries fail with [`SplineError::NotInitialized`] until control points
    /// are supplied through [`Self::update_control_points`].
    pub fn unbuilt(config: SplineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            control_points: Vec::new(),
            config,
            table: None,
        })
    }

    /// Replace the control points and rebuild with the current configuration.
    pub fn update_control_points(&mut self, control_points: &[Vec3]) -> Result<()> {
        if control_points.is_empty() {
            return Err(SplineError::TooFewControlPoints { count: 0, min: 1 });
        }

        let table = build_table(control_points, &self.config)?;
        debug!(
            "rebuilt spline table for {} control points: {} samples",
            control_points.len(),
            table.len()
        );

        self.control_points = control_points.to_vec();
        self.table = Some(table);
        Ok(())
    }

    /// Replace the configuration and rebuild with the current control points.
    pub fn update_config(&mut self, resolution: usize, closed_loop: bool) -> Result<()> {
        let config = SplineConfig::new(resolution, closed_loop)?;

        if self.control_points.is_empty() {
            self.config = config;
            return Ok(());
        }

        let table = build_table(&self.control_points, &config)?;
        debug!(
            "rebuilt spline table for resolution {} (closed: {}): {} samples",
            resolution,
            closed_loop,
            table.len()
        );

        self.config = config;
        self.table = Some(table);
        Ok(())
    }

    /// The generated table.
    pub fn table(&self) -> Result<&SplineTable> {
        self.table.as_ref().ok_or(SplineError::NotInitialized)
    }

    /// Whether a table has been built.
    pub fn is_built(&self) -> bool {
        self.table.is_some()
    }

    /// The engine's own copy of the control points.
    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    /// The configuration the current table was built with.
    pub fn config(&self) -> SplineConfig {
        self.config
    }
}
