//! Gizmo drawing systems.

use bevy::prelude::*;

use crate::spline::{CameraPath, SplineTable};

use super::PathGizmoSettings;

/// System to draw every built camera path.
pub fn draw_camera_paths(
    settings: Res<PathGizmoSettings>,
    paths: Query<&CameraPath>,
    mut gizmos: Gizmos,
) {
    if !settings.enabled {
        return;
    }

    for path in &paths {
        if settings.show_control_points {
            for &point in path.control_points() {
                gizmos.sphere(
                    Isometry3d::from_translation(point),
                    settings.point_radius,
                    settings.control_point_color,
                );
            }
        }

        // Paths waiting for their control points have nothing else to draw.
        let Ok(table) = path.table() else {
            continue;
        };

        if settings.show_path {
            for (start, end) in path_segments(table) {
                gizmos.line(start, end, settings.path_color);
            }
        }

        for point in table {
            if settings.show_normals {
                gizmos.line(
                    point.position,
                    point.position + point.normal * settings.extrusion,
                    settings.normal_color,
                );
            }
            if settings.show_tangents {
                gizmos.line(
                    point.position,
                    point.position + point.tangent * settings.extrusion,
                    settings.tangent_color,
                );
            }
        }
    }
}

/// Line segments joining consecutive samples, plus the closing segment from the
/// last sample back to the first for closed loops.
pub(crate) fn path_segments(table: &SplineTable) -> Vec<(Vec3, Vec3)> {
    let points = table.points();
    let mut segments: Vec<(Vec3, Vec3)> = points
        .windows(2)
        .map(|pair| (pair[0].position, pair[1].position))
        .collect();

    if table.is_closed_loop() && points.len() >= 2 {
        segments.push((points[points.len() - 1].position, points[0].position));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::gizmos::gizmos::GizmoStorage;

    use crate::spline::{SplineConfig, SplineEngine};

    fn points() -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 1.0), Vec3::new(4.0, 1.0, 0.0)]
    }

    #[test]
    fn test_open_path_segments() {
        let engine = SplineEngine::build(&points(), 4, false).unwrap();
        let table = engine.table().unwrap();
        let segments = path_segments(table);
        assert_eq!(segments.len(), table.len() - 1);
        assert_eq!(segments[0].0, Vec3::ZERO);
        assert_eq!(segments.last().unwrap().1, points()[2]);
    }

    #[test]
    fn test_closed_path_connects_back_to_start() {
        let engine = SplineEngine::build(&points(), 4, true).unwrap();
        let table = engine.table().unwrap();
        let segments = path_segments(table);
        assert_eq!(segments.len(), table.len());
        assert_eq!(
            *segments.last().unwrap(),
            (table.last().unwrap().position, table.first().unwrap().position)
        );
    }

    fn app() -> App {
        let mut store = GizmoConfigStore::default();
        store.insert(GizmoConfig::default(), DefaultGizmoConfigGroup);

        let mut app = App::new();
        app.insert_resource(store)
            .init_resource::<GizmoStorage<DefaultGizmoConfigGroup, ()>>()
            .insert_resource(PathGizmoSettings {
                show_normals: true,
                show_tangents: true,
                ..default()
            })
            .add_systems(Update, draw_camera_paths);
        app
    }

    #[test]
    fn test_draw_skips_paths_without_table() {
        let mut app = app();
        let unbuilt = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let built = app
            .world_mut()
            .spawn(CameraPath::closed(&points(), 4).unwrap())
            .id();

        app.update();
        app.update();

        let world = app.world();
        assert!(!world.get::<CameraPath>(unbuilt).unwrap().is_built());
        assert_eq!(world.get::<CameraPath>(built).unwrap().table().unwrap().len(), 12);
    }
}
