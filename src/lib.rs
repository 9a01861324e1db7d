//! # bevy_camera_path
//!
//! A Bevy plugin that turns a handful of control points into a dense
//! Catmull-Rom camera path and plays a camera along it, one sample per frame.
//!
//! ## Features
//!
//! - Open paths and closed loops
//! - Position, unit tangent and sideways normal for every sample
//! - Control points given directly or taken from marker entities
//! - Frame-stepped playback with start, stop and rewind
//! - Debug gizmos for the path, its normals and its tangents
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_camera_path::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(CameraPathPlugin)
//!         .add_plugins(PathGizmosPlugin)  // Optional: draws the paths
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     let path = commands
//!         .spawn(
//!             CameraPath::closed(
//!                 &[
//!                     Vec3::new(-4.0, 2.0, 0.0),
//!                     Vec3::new(0.0, 3.0, -4.0),
//!                     Vec3::new(4.0, 2.0, 0.0),
//!                     Vec3::new(0.0, 1.0, 4.0),
//!                 ],
//!                 60,
//!             )
//!             .unwrap(),
//!         )
//!         .id();
//!
//!     commands.spawn((
//!         Camera3d::default(),
//!         Transform::default(),
//!         PathPlayer::new(path).playing(),
//!     ));
//! }
//! ```
//!
//! The sampling itself does not need an `App`:
//!
//! ```
//! use bevy::math::Vec3;
//! use bevy_camera_path::spline::SplineEngine;
//!
//! let points = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 1.0), Vec3::Z];
//! let engine = SplineEngine::build(&points, 4, true).unwrap();
//! assert_eq!(engine.table().unwrap().len(), 16);
//! ```
//!
//! ## Plugins
//!
//! - [`CameraPathPlugin`]: Path types, marker sync and playback (required)
//! - [`SplinePlugin`]: Path types and marker sync only
//! - [`PathPlaybackPlugin`]: Playback only
//! - [`PathGizmosPlugin`]: Debug drawing (optional, `gizmos` feature)

pub mod geometry;
pub mod playback;
pub mod spline;

#[cfg(feature = "gizmos")]
pub mod gizmos;

pub use playback::PathPlaybackPlugin;
pub use spline::SplinePlugin;

#[cfg(feature = "gizmos")]
pub use gizmos::PathGizmosPlugin;

use bevy::prelude::*;

/// System sets run by [`CameraPathPlugin`], in order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPathSystems {
    /// Copy marker translations into their paths.
    SyncControlPoints,
    /// Step path players.
    Advance,
}

/// Plugin bundling [`SplinePlugin`] and [`PathPlaybackPlugin`].
///
/// Control points are synced before players advance, so a moved marker is
/// visible to playback in the same frame.
pub struct CameraPathPlugin;

impl Plugin for CameraPathPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                CameraPathSystems::SyncControlPoints,
                CameraPathSystems::Advance,
            )
                .chain(),
        )
        .add_plugins((SplinePlugin, PathPlaybackPlugin));
    }
}

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::playback::{
        PathPlaybackEvent, PathPlaybackEventKind, PathPlaybackPlugin, PathPlayer,
        PlaybackCursor, StepOutcome,
    };
    pub use crate::spline::{
        CameraPath, ControlPointMarker, SplineConfig, SplineEngine, SplineError,
        SplineErrorKind, SplinePlugin, SplinePoint, SplineTable,
    };
    pub use crate::{CameraPathPlugin, CameraPathSystems};

    #[cfg(feature = "gizmos")]
    pub use crate::gizmos::{PathGizmoSettings, PathGizmosPlugin};
}
