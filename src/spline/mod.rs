//! Catmull-Rom path sampling and the components that attach paths to entities.

mod components;
mod engine;
mod error;
mod hermite;
mod systems;
mod types;

pub use components::*;
pub use engine::*;
pub use error::{Result, SplineError, SplineErrorKind};
pub use hermite::*;
pub use systems::sync_control_points;
pub use types::*;

use bevy::prelude::*;

use crate::CameraPathSystems;

/// Plugin that registers path types and keeps marker-driven paths in sync.
pub struct SplinePlugin;

impl Plugin for SplinePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SplineConfig>()
            .register_type::<SplinePoint>()
            .register_type::<ControlPointMarker>()
            .add_systems(
                Update,
                systems::sync_control_points.in_set(CameraPathSystems::SyncControlPoints),
            );
    }
}
