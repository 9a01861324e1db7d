//! Camera path demo.
//!
//! Run with: `cargo run`

use bevy::prelude::*;
use bevy_camera_path::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(CameraPathPlugin)
        .add_plugins(PathGizmosPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (handle_input, log_playback_events))
        .run();
}

/// Marker for the entity carrying the demo path.
#[derive(Component)]
struct DemoPath;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = SplineConfig {
        resolution: 90,
        closed_loop: true,
    };
    let path = commands
        .spawn((
            CameraPath::from_markers(config).unwrap_or_default(),
            DemoPath,
        ))
        .id();

    // Control points as movable marker entities
    let marker_mesh = meshes.add(Sphere::new(0.2));
    let marker_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.3, 0.8),
        ..default()
    });
    let control_points = [
        Vec3::new(-8.0, 2.0, 0.0),
        Vec3::new(-4.0, 3.0, -6.0),
        Vec3::new(4.0, 4.0, -6.0),
        Vec3::new(8.0, 2.0, 0.0),
        Vec3::new(4.0, 1.5, 6.0),
        Vec3::new(-4.0, 3.0, 6.0),
    ];
    for (index, position) in control_points.into_iter().enumerate() {
        commands.spawn((
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(marker_material.clone()),
            Transform::from_translation(position),
            ControlPointMarker::new(path, index),
        ));
    }

    // Camera riding the path
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 15.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
        PathPlayer::new(path),
    ));

    // Lighting
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Scenery to look at
    let pillar = meshes.add(Cuboid::new(1.0, 4.0, 1.0));
    let pillar_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.2, 0.2),
        ..default()
    });
    for x in [-3.0, 0.0, 3.0] {
        commands.spawn((
            Mesh3d(pillar.clone()),
            MeshMaterial3d(pillar_material.clone()),
            Transform::from_xyz(x, 0.0, 0.0),
        ));
    }

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(20.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.3, 0.3),
            ..default()
        })),
        Transform::from_xyz(0.0, -2.0, 0.0),
    ));

    println!("\n=== Camera Path Demo ===");
    println!("Controls:");
    println!("  Space  - Start/Stop playback");
    println!("  R      - Rewind to the first sample");
    println!("  L      - Toggle closed/open loop");
    println!("  N      - Toggle normal gizmos");
    println!("  T      - Toggle tangent gizmos");
    println!("  G      - Toggle all gizmos");
    println!("========================\n");
}

fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut players: Query<&mut PathPlayer>,
    mut paths: Query<&mut CameraPath, With<DemoPath>>,
    mut gizmo_settings: ResMut<PathGizmoSettings>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        for mut player in &mut players {
            if player.is_playing() {
                player.stop();
                println!("Stopped at sample {}", player.index());
            } else {
                player.start();
                println!("Playing from sample {}", player.index());
            }
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        for mut player in &mut players {
            player.rewind();
        }
        println!("Rewound");
    }

    if keyboard.just_pressed(KeyCode::KeyL) {
        for mut path in &mut paths {
            let config = path.config();
            match path.update_config(config.resolution, !config.closed_loop) {
                Ok(()) => println!("Closed loop: {}", !config.closed_loop),
                Err(err) => println!("Could not change loop mode: {err}"),
            }
        }
    }

    if keyboard.just_pressed(KeyCode::KeyN) {
        gizmo_settings.toggle_normals();
    }
    if keyboard.just_pressed(KeyCode::KeyT) {
        gizmo_settings.toggle_tangents();
    }
    if keyboard.just_pressed(KeyCode::KeyG) {
        gizmo_settings.toggle();
    }
}

fn log_playback_events(mut events: MessageReader<PathPlaybackEvent>) {
    for event in events.read() {
        match event.kind {
            PathPlaybackEventKind::Finished => {
                println!("[{:?}] Finished", event.entity);
            }
            PathPlaybackEventKind::Halted => {
                println!("[{:?}] Halted: path has no samples", event.entity);
            }
        }
    }
}
