//! Keeps marker-driven paths in step with their [`ControlPointMarker`] entities.

use bevy::ecs::entity::EntityHashMap;
use bevy::log::warn;
use bevy::prelude::*;

use super::components::{CameraPath, ControlPointMarker};

/// Markers whose contribution to their path may have changed this frame.
type ChangedMarkers = Or<(
    Changed<ControlPointMarker>,
    Changed<Transform>,
    Changed<ChildOf>,
    (With<ChildOf>, Changed<GlobalTransform>),
)>;

/// System that copies marker positions into the paths they belong to.
///
/// A path is rebuilt when one of its markers is added, edited, moved,
/// removed, or handed to another path. Markers are remembered by the path
/// they last fed, so the path a marker left is rebuilt too.
///
/// A parented marker contributes its world position, taken from the
/// parent's `GlobalTransform` as of the last propagation. A rejected update
/// (such as a path whose last marker went away) is logged and leaves the
/// path as it was.
pub fn sync_control_points(
    changed: Query<(Entity, &ControlPointMarker), ChangedMarkers>,
    mut removed: RemovedComponents<ControlPointMarker>,
    markers: Query<(&ControlPointMarker, &Transform, Option<&ChildOf>)>,
    parents: Query<&GlobalTransform>,
    mut paths: Query<&mut CameraPath>,
    mut owners: Local<EntityHashMap<Entity>>,
) {
    let mut dirty: Vec<Entity> = Vec::new();

    for entity in removed.read() {
        if let Some(path) = owners.remove(&entity) {
            dirty.push(path);
        }
    }

    for (entity, marker) in &changed {
        if let Some(previous) = owners.insert(entity, marker.path) {
            if previous != marker.path {
                dirty.push(previous);
            }
        }
        dirty.push(marker.path);
    }

    if dirty.is_empty() {
        return;
    }
    dirty.sort();
    dirty.dedup();

    for path_entity in dirty {
        let mut points: Vec<(usize, Vec3)> = markers
            .iter()
            .filter(|(marker, ..)| marker.path == path_entity)
            .map(|(marker, transform, parent)| {
                (marker.index, marker_position(transform, parent, &parents))
            })
            .collect();
        points.sort_by_key(|(index, _)| *index);

        let Ok(mut path) = paths.get_mut(path_entity) else {
            // A path despawned together with its markers leaves nothing to report.
            if !points.is_empty() {
                warn!("control point marker references missing path {:?}", path_entity);
            }
            continue;
        };

        let positions: Vec<Vec3> = points.into_iter().map(|(_, position)| position).collect();
        if let Err(err) = path.update_control_points(&positions) {
            warn!("rejected control points for path {:?}: {}", path_entity, err);
        }
    }
}

fn marker_position(
    transform: &Transform,
    parent: Option<&ChildOf>,
    parents: &Query<&GlobalTransform>,
) -> Vec3 {
    parent
        .and_then(|child_of| parents.get(child_of.parent()).ok())
        .map_or(transform.translation, |global| {
            global.transform_point(transform.translation)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::{SplineConfig, SplineError};

    fn app() -> App {
        let mut app = App::new();
        app.add_systems(Update, sync_control_points);
        app
    }

    fn spawn_markers(app: &mut App, path: Entity, positions: &[Vec3]) -> Vec<Entity> {
        positions
            .iter()
            .enumerate()
            .map(|(index, position)| {
                app.world_mut()
                    .spawn((
                        Transform::from_translation(*position),
                        ControlPointMarker::new(path, index),
                    ))
                    .id()
            })
            .collect()
    }

    #[test]
    fn test_markers_build_path() {
        let mut app = app();
        let config = SplineConfig::open(4).unwrap();
        let path = app
            .world_mut()
            .spawn(CameraPath::from_markers(config).unwrap())
            .id();

        // Spawn out of order to check index ordering.
        let positions = [Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 1.0)];
        app.world_mut()
            .spawn((Transform::from_translation(positions[2]), ControlPointMarker::new(path, 2)));
        app.world_mut()
            .spawn((Transform::from_translation(positions[0]), ControlPointMarker::new(path, 0)));
        app.world_mut()
            .spawn((Transform::from_translation(positions[1]), ControlPointMarker::new(path, 1)));

        assert_eq!(
            app.world().get::<CameraPath>(path).unwrap().table().unwrap_err(),
            SplineError::NotInitialized
        );

        app.update();

        let camera_path = app.world().get::<CameraPath>(path).unwrap();
        assert_eq!(camera_path.control_points(), positions.as_slice());
        let table = camera_path.table().unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.last().unwrap().position, positions[2]);
    }

    #[test]
    fn test_moving_marker_rebuilds_path() {
        let mut app = app();
        let path = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let markers = spawn_markers(&mut app, path, &[Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE]);
        app.update();

        let moved = Vec3::new(5.0, 1.0, 5.0);
        app.world_mut()
            .get_mut::<Transform>(markers[3])
            .unwrap()
            .translation = moved;
        app.update();

        let camera_path = app.world().get::<CameraPath>(path).unwrap();
        assert_eq!(camera_path.control_points()[3], moved);
        assert_eq!(camera_path.table().unwrap().last().unwrap().position, moved);
    }

    #[test]
    fn test_markers_for_other_paths_are_ignored() {
        let mut app = app();
        let path_a = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let path_b = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        spawn_markers(&mut app, path_a, &[Vec3::ZERO, Vec3::X, Vec3::Y]);
        spawn_markers(&mut app, path_b, &[Vec3::Z, Vec3::NEG_X]);
        app.update();

        let world = app.world();
        assert_eq!(world.get::<CameraPath>(path_a).unwrap().control_points().len(), 3);
        assert_eq!(world.get::<CameraPath>(path_b).unwrap().control_points().len(), 2);
    }

    #[test]
    fn test_despawned_marker_leaves_path() {
        let mut app = app();
        let path = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let markers = spawn_markers(&mut app, path, &[Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE]);
        app.update();

        app.world_mut().despawn(markers[3]);
        app.update();

        let camera_path = app.world().get::<CameraPath>(path).unwrap();
        assert_eq!(camera_path.control_points(), &[Vec3::ZERO, Vec3::X, Vec3::Z]);
        assert_eq!(camera_path.table().unwrap().last().unwrap().position, Vec3::Z);
    }

    #[test]
    fn test_removed_marker_component_leaves_path() {
        let mut app = app();
        let path = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let markers = spawn_markers(&mut app, path, &[Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE]);
        app.update();

        app.world_mut()
            .entity_mut(markers[1])
            .remove::<ControlPointMarker>();
        app.update();

        let camera_path = app.world().get::<CameraPath>(path).unwrap();
        assert_eq!(camera_path.control_points(), &[Vec3::ZERO, Vec3::Z, Vec3::ONE]);
    }

    #[test]
    fn test_reassigned_marker_moves_between_paths() {
        let mut app = app();
        let path_a = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let path_b = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let markers = spawn_markers(&mut app, path_a, &[Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE]);
        app.update();

        app.world_mut()
            .get_mut::<ControlPointMarker>(markers[3])
            .unwrap()
            .path = path_b;
        app.update();

        let world = app.world();
        assert_eq!(
            world.get::<CameraPath>(path_a).unwrap().control_points(),
            &[Vec3::ZERO, Vec3::X, Vec3::Z]
        );
        assert_eq!(
            world.get::<CameraPath>(path_b).unwrap().control_points(),
            &[Vec3::ONE]
        );
    }

    #[test]
    fn test_parented_marker_uses_world_position() {
        let mut app = app();
        let path = app
            .world_mut()
            .spawn(CameraPath::from_markers(SplineConfig::default()).unwrap())
            .id();
        let parent = app
            .world_mut()
            .spawn((
                Transform::from_xyz(10.0, 0.0, 0.0),
                GlobalTransform::from_xyz(10.0, 0.0, 0.0),
            ))
            .id();
        spawn_markers(&mut app, path, &[Vec3::ZERO, Vec3::X]);
        app.world_mut().spawn((
            Transform::from_translation(Vec3::Z),
            ControlPointMarker::new(path, 2),
            ChildOf(parent),
        ));
        app.update();

        let camera_path = app.world().get::<CameraPath>(path).unwrap();
        assert_eq!(camera_path.control_points()[2], Vec3::new(10.0, 0.0, 1.0));
    }
}
