//! Components and messages for playing entities along camera paths.

use bevy::prelude::*;

use super::cursor::PlaybackCursor;

/// Component that plays an entity (usually a camera) along a [`CameraPath`].
///
/// Each frame a playing player moves one sample further and its entity's
/// [`Transform`] is set to that sample.
///
/// [`CameraPath`]: crate::spline::CameraPath
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component, Default)]
pub struct PathPlayer {
    /// The entity carrying the [`CameraPath`](crate::spline::CameraPath).
    pub path: Entity,

    /// Playback position and state.
    pub cursor: PlaybackCursor,

    /// Whether to rotate the entity so its forward (-Z) follows the path tangent.
    pub align_to_tangent: bool,

    /// Up vector used for orientation when `align_to_tangent` is true.
    pub up_vector: Vec3,

    /// Offset applied in local space relative to the path position.
    pub offset: Vec3,
}

impl Default for PathPlayer {
    fn default() -> Self {
        Self {
            path: Entity::PLACEHOLDER,
            cursor: PlaybackCursor::default(),
            align_to_tangent: true,
            up_vector: Vec3::Y,
            offset: Vec3::ZERO,
        }
    }
}

impl PathPlayer {
    /// Create a stopped player for the given path.
    pub fn new(path: Entity) -> Self {
        Self {
            path,
            ..default()
        }
    }

    /// Enable or disable tangent alignment.
    pub fn with_align_to_tangent(mut self, align: bool) -> Self {
        self.align_to_tangent = align;
        self
    }

    /// Set the up vector for orientation.
    pub fn with_up_vector(mut self, up: Vec3) -> Self {
        self.up_vector = up;
        self
    }

    /// Set a local-space offset from the path position.
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Start playing immediately once spawned.
    pub fn playing(mut self) -> Self {
        self.start();
        self
    }

    /// Start or resume playback from the current sample.
    pub fn start(&mut self) {
        self.cursor = self.cursor.start();
    }

    /// Pause playback.
    pub fn stop(&mut self) {
        self.cursor = self.cursor.stop();
    }

    /// Move back to the first sample without changing the playing state.
    pub fn rewind(&mut self) {
        self.cursor = self.cursor.rewind();
    }

    pub fn is_playing(&self) -> bool {
        self.cursor.playing
    }

    /// Index of the next sample to be emitted.
    pub fn index(&self) -> usize {
        self.cursor.index
    }
}

/// Message emitted when a player stops on its own.
#[derive(Message, Debug, Clone)]
pub struct PathPlaybackEvent {
    /// The entity with the [`PathPlayer`] component.
    pub entity: Entity,
    /// The type of event.
    pub kind: PathPlaybackEventKind,
}

/// Types of playback events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPlaybackEventKind {
    /// The player emitted the last sample of its path.
    Finished,
    /// The player's path is missing or has no samples, so playback was stopped.
    Halted,
}
