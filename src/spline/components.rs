//! ECS components for attaching paths and their control points to entities.

use bevy::prelude::*;

use super::engine::SplineEngine;
use super::error::Result;
use super::types::SplineConfig;

/// A sampled camera path attached to an entity.
///
/// Dereferences to its [`SplineEngine`], so updates go through
/// [`SplineEngine::update_control_points`] and [`SplineEngine::update_config`].
#[derive(Component, Debug, Clone, Default, Deref, DerefMut)]
pub struct CameraPath(SplineEngine);

impl CameraPath {
    /// Create a path from at least three control points.
    pub fn new(control_points: &[Vec3], config: SplineConfig) -> Result<Self> {
        SplineEngine::build_with_config(control_points, config).map(Self)
    }

    /// Create an open path.
    pub fn open(control_points: &[Vec3], resolution: usize) -> Result<Self> {
        Self::new(control_points, SplineConfig::open(resolution)?)
    }

    /// Create a closed loop.
    pub fn closed(control_points: &[Vec3], resolution: usize) -> Result<Self> {
        Self::new(control_points, SplineConfig::closed(resolution)?)
    }

    /// Create a path whose control points come from [`ControlPointMarker`] entities.
    ///
    /// The path has no table until the markers are synced.
    pub fn from_markers(config: SplineConfig) -> Result<Self> {
        SplineEngine::unbuilt(config).map(Self)
    }

    /// The underlying engine.
    pub fn engine(&self) -> &SplineEngine {
        &self.0
    }
}

/// Marks an entity whose position is a control point of a [`CameraPath`].
///
/// Positions are copied into the path whenever a marker or its `Transform`
/// changes, ordered by `index`. Despawning a marker, removing this component
/// or pointing `path` elsewhere drops the point from the path it fed.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ControlPointMarker {
    /// The entity that owns the [`CameraPath`].
    pub path: Entity,
    /// Position of this control point in the path.
    pub index: usize,
}

impl ControlPointMarker {
    pub fn new(path: Entity, index: usize) -> Self {
        Self { path, index }
    }
}
