//! Mouse and keyboard input.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`track_cursor_system`]: window cursor → [`CursorPosition`] in box space.
//! 2. [`read_input_system`]: button/key presses → [`SimCommand`] messages.
//! 3. [`apply_commands_system`]: drains the messages and mutates the world.
//!
//! The **command layer** (`SimCommand`) keeps world mutation testable: tests
//! write commands directly and run only `apply_commands_system`.
//!
//! | Input                   | Command          |
//! |-------------------------|------------------|
//! | Middle click            | `Spawn`          |
//! | Left click              | `Select`         |
//! | Space                   | `Launch`         |
//! | Right click             | `Deselect`       |
//! | Delete / Backspace      | `RemoveSelected` |
//! | Escape                  | `Quit`           |

use crate::config::SimConfig;
use crate::graphics::BoxSpace;
use crate::particle::{spawn_particle, Particle, ParticleIdCounter};
use crate::presentation::Selected;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Last known cursor position in box space.
///
/// `None` only until the cursor first enters the window.  Leaving the window
/// keeps the last position, so a launch still aims somewhere sensible.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorPosition(pub Option<Vec2>);

impl CursorPosition {
    /// Record a fresh reading; a missing reading keeps the previous position.
    pub fn track(&mut self, latest: Option<Vec2>) {
        if latest.is_some() {
            self.0 = latest;
        }
    }
}

/// A discrete user request, applied to the world in arrival order.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    /// New resting particle of spawn radius at this point.
    Spawn(Vec2),
    /// Select every particle whose hit region contains this point.
    Select(Vec2),
    /// Launch every selected particle away from this point, then deselect it.
    Launch(Vec2),
    /// Clear every selection.
    Deselect,
    /// Despawn every selected particle.  Ids are not recycled.
    RemoveSelected,
    /// Exit the application.
    Quit,
}

/// Convert the window cursor to box space through the 2-D camera.
pub fn track_cursor_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    config: Res<SimConfig>,
    mut cursor: ResMut<CursorPosition>,
) {
    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), cameras.single()) else {
        return;
    };
    let space = BoxSpace::from_config(&config);
    let latest = window
        .cursor_position()
        .and_then(|pos| camera.viewport_to_world_2d(camera_transform, pos).ok())
        .map(|world| space.to_box(world));
    cursor.track(latest);
}

/// Translate this frame's presses into [`SimCommand`]s.
///
/// Pointer commands are dropped until the cursor has entered the window once.
pub fn read_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    cursor: Res<CursorPosition>,
    mut requests: MessageWriter<SimCommand>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        requests.write(SimCommand::Quit);
    }
    if buttons.just_pressed(MouseButton::Right) {
        requests.write(SimCommand::Deselect);
    }
    if keys.any_just_pressed([KeyCode::Delete, KeyCode::Backspace]) {
        requests.write(SimCommand::RemoveSelected);
    }

    let Some(at) = cursor.0 else {
        return;
    };
    if buttons.just_pressed(MouseButton::Middle) {
        requests.write(SimCommand::Spawn(at));
    }
    if buttons.just_pressed(MouseButton::Left) {
        requests.write(SimCommand::Select(at));
    }
    if keys.just_pressed(KeyCode::Space) {
        requests.write(SimCommand::Launch(at));
    }
}

/// Apply queued [`SimCommand`]s to the particle set.
///
/// Spawns become visible to queries after this system's command buffer is
/// applied, so a `Select` in the same frame does not see a fresh spawn.
pub fn apply_commands_system(
    mut commands: Commands,
    mut requests: MessageReader<SimCommand>,
    mut particles: Query<(Entity, &mut Particle, &mut Selected)>,
    mut counter: ResMut<ParticleIdCounter>,
    config: Res<SimConfig>,
    mut exit: MessageWriter<AppExit>,
) {
    for request in requests.read() {
        match *request {
            SimCommand::Spawn(at) => {
                let id = counter.next_id();
                match Particle::new(id, at, Vec2::ZERO, config.spawn_radius, config.friction) {
                    Ok(particle) => {
                        spawn_particle(&mut commands, particle, config.colour_speed_scale);
                        debug!("Spawned particle {id} at {at}");
                    }
                    Err(e) => error!("Spawn rejected: {e}"),
                }
            }
            SimCommand::Select(at) => {
                for (_, particle, mut selected) in particles.iter_mut() {
                    if particle.hit_region().contains(at) {
                        selected.0 = true;
                        debug!("Selected particle {}", particle.id());
                    }
                }
            }
            SimCommand::Launch(toward) => {
                for (_, mut particle, mut selected) in particles.iter_mut() {
                    if selected.0 {
                        particle.launch(toward, config.launch_divisor);
                        selected.0 = false;
                        debug!("Launched particle {} with {}", particle.id(), particle.velocity);
                    }
                }
            }
            SimCommand::Deselect => {
                for (_, _, mut selected) in particles.iter_mut() {
                    selected.0 = false;
                }
            }
            SimCommand::RemoveSelected => {
                for (entity, particle, selected) in particles.iter() {
                    if selected.0 {
                        commands.entity(entity).despawn();
                        info!("Removed particle {}", particle.id());
                    }
                }
            }
            SimCommand::Quit => {
                info!("Quit requested");
                exit.write(AppExit::Success);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_keeps_last_position_when_reading_is_missing() {
        let mut cursor = CursorPosition::default();
        cursor.track(None);
        assert_eq!(cursor.0, None);

        cursor.track(Some(Vec2::new(120.0, 80.0)));
        cursor.track(None);
        assert_eq!(cursor.0, Some(Vec2::new(120.0, 80.0)));

        cursor.track(Some(Vec2::new(5.0, 6.0)));
        assert_eq!(cursor.0, Some(Vec2::new(5.0, 6.0)));
    }
}
