//! Per-frame playback of entities along camera paths.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_camera_path::prelude::*;
//!
//! fn setup(mut commands: Commands) {
//!     let path = commands
//!         .spawn(
//!             CameraPath::closed(
//!                 &[
//!                     Vec3::new(0.0, 2.0, 0.0),
//!                     Vec3::new(5.0, 3.0, -4.0),
//!                     Vec3::new(10.0, 2.0, 0.0),
//!                 ],
//!                 120,
//!             )
//!             .expect("three points and resolution >= 2"),
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

mod components;
mod cursor;
mod systems;

pub use components::*;
pub use cursor::*;
pub use systems::advance_path_players;

use bevy::prelude::*;

use crate::CameraPathSystems;

/// Plugin that moves [`PathPlayer`] entities one sample per frame.
pub struct PathPlaybackPlugin;

impl Plugin for PathPlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PathPlayer>()
            .register_type::<PlaybackCursor>()
            .add_message::<PathPlaybackEvent>()
            .add_systems(
                Update,
                systems::advance_path_players.in_set(CameraPathSystems::Advance),
            );
    }
}
