//! Debug drawing of sampled camera paths.

mod draw;

pub use draw::draw_camera_paths;

use bevy::prelude::*;

/// Settings for debug drawing of camera paths.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct PathGizmoSettings {
    /// Whether anything is drawn at all.
    pub enabled: bool,
    /// Draw a line through every sample.
    pub show_path: bool,
    /// Draw a sphere at every control point.
    pub show_control_points: bool,
    /// Draw each sample's normal.
    pub show_normals: bool,
    /// Draw each sample's tangent.
    pub show_tangents: bool,
    /// Length multiplier for normal and tangent lines.
    pub extrusion: f32,
    /// Radius of control point spheres.
    pub point_radius: f32,
    pub path_color: Color,
    pub control_point_color: Color,
    pub normal_color: Color,
    pub tangent_color: Color,
}

impl Default for PathGizmoSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_path: true,
            show_control_points: true,
            show_normals: false,
            show_tangents: false,
            extrusion: 1.0,
            point_radius: 0.1,
            path_color: Color::srgb(1.0, 0.8, 0.2),
            control_point_color: Color::srgb(0.3, 0.3, 0.8),
            normal_color: Color::srgb(0.2, 0.9, 0.2),
            tangent_color: Color::srgb(0.9, 0.2, 0.2),
        }
    }
}

impl PathGizmoSettings {
    /// Toggle all drawing on/off.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Toggle normal lines.
    pub fn toggle_normals(&mut self) {
        self.show_normals = !self.show_normals;
    }

    /// Toggle tangent lines.
    pub fn toggle_tangents(&mut self) {
        self.show_tangents = !self.show_tangents;
    }
}

/// Plugin that draws camera paths with gizmos.
///
/// Only draws; it does not build or play paths. Add
/// [`CameraPathPlugin`](crate::CameraPathPlugin) for that.
pub struct PathGizmosPlugin;

impl Plugin for PathGizmosPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PathGizmoSettings>()
            .register_type::<PathGizmoSettings>()
            .add_systems(Update, draw::draw_camera_paths);
    }
}
