//! Systems that advance path players.

use bevy::log::{info, warn};
use bevy::prelude::*;

use crate::geometry::CoordinateFrame;
use crate::spline::{CameraPath, SplineError, SplinePoint};

use super::{PathPlaybackEvent, PathPlaybackEventKind, PathPlayer};

/// System that steps every playing [`PathPlayer`] by one sample.
pub fn advance_path_players(
    mut players: Query<(Entity, &mut PathPlayer, &mut Transform)>,
    paths: Query<&CameraPath>,
    mut events: MessageWriter<PathPlaybackEvent>,
) {
    for (entity, mut player, mut transform) in &mut players {
        if !player.is_playing() {
            continue;
        }

        let stepped = paths
            .get(player.path)
            .map_err(|_| SplineError::NotInitialized)
            .and_then(|path| path.table())
            .and_then(|table| player.cursor.step(table));

        let (cursor, outcome) = match stepped {
            Ok(stepped) => stepped,
            Err(err) => {
                warn!("stopping path player {:?}: {}", entity, err);
                player.stop();
                events.write(PathPlaybackEvent {
                    entity,
                    kind: PathPlaybackEventKind::Halted,
                });
                continue;
            }
        };

        player.cursor = cursor;

        let Some(point) = outcome.point() else {
            continue;
        };
        apply_point(&player, &point, &mut transform);

        if outcome.is_finished() {
            info!("path player {:?} finished", entity);
            events.write(PathPlaybackEvent {
                entity,
                kind: PathPlaybackEventKind::Finished,
            });
        }
    }
}

/// Move `transform` onto `point`, keeping the current rotation when the
/// tangent is degenerate.
fn apply_point(player: &PathPlayer, point: &SplinePoint, transform: &mut Transform) {
    if player.align_to_tangent {
        let frame = CoordinateFrame::from_tangent_with_up(point.tangent, player.up_vector);
        if frame.is_valid() {
            transform.rotation = frame.to_rotation();
        }
    }

    transform.translation = point.position + transform.rotation * player.offset;
}
