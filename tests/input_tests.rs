//! Headless tests for input mapping and startup configuration.
//!
//! These tests use [`MinimalPlugins`]: no window and no `InputPlugin`, so
//! button state is driven by hand with `ButtonInput::press`.
//!
//! Covered scenarios:
//! 1. Every mouse button and key maps to its `SimCommand`.
//! 2. Pointer commands carry the cursor position and wait for a cursor.
//! 3. `load_sim_config` refreshes `Boundary` and the fixed timestep.

use std::time::Duration;

use bevy::prelude::*;
use bouncebox::boundary::Boundary;
use bouncebox::config::{load_sim_config, SimConfig};
use bouncebox::input::{read_input_system, CursorPosition, SimCommand};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Commands written by `read_input_system`, in order.
#[derive(Resource, Default)]
struct Written(Vec<SimCommand>);

fn record_commands(mut requests: MessageReader<SimCommand>, mut written: ResMut<Written>) {
    written.0.extend(requests.read().copied());
}

/// Build a minimal headless app running `read_input_system` followed by a
/// recorder, with the cursor placed at `cursor`.
fn input_app(cursor: Option<Vec2>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(CursorPosition(cursor));
    app.init_resource::<Written>();
    app.add_message::<SimCommand>();
    app.add_systems(Update, (read_input_system, record_commands).chain());
    app
}

fn click(app: &mut App, button: MouseButton) -> Vec<SimCommand> {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(button);
    app.update();
    std::mem::take(&mut app.world_mut().resource_mut::<Written>().0)
}

fn key(app: &mut App, code: KeyCode) -> Vec<SimCommand> {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(code);
    app.update();
    std::mem::take(&mut app.world_mut().resource_mut::<Written>().0)
}

const AT: Vec2 = Vec2::new(250.0, 180.0);

// ── Mouse ─────────────────────────────────────────────────────────────────────

#[test]
fn middle_click_spawns_at_cursor() {
    let mut app = input_app(Some(AT));
    assert_eq!(click(&mut app, MouseButton::Middle), vec![SimCommand::Spawn(AT)]);
}

#[test]
fn left_click_selects_at_cursor() {
    let mut app = input_app(Some(AT));
    assert_eq!(click(&mut app, MouseButton::Left), vec![SimCommand::Select(AT)]);
}

#[test]
fn right_click_deselects() {
    let mut app = input_app(Some(AT));
    assert_eq!(click(&mut app, MouseButton::Right), vec![SimCommand::Deselect]);
}

#[test]
fn pointer_commands_wait_for_a_cursor() {
    let mut app = input_app(None);
    assert!(click(&mut app, MouseButton::Middle).is_empty());
    assert!(click(&mut app, MouseButton::Left).is_empty());
    assert!(key(&mut app, KeyCode::Space).is_empty());
}

#[test]
fn right_click_deselects_without_a_cursor() {
    let mut app = input_app(None);
    assert_eq!(click(&mut app, MouseButton::Right), vec![SimCommand::Deselect]);
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

#[test]
fn space_launches_toward_cursor() {
    let mut app = input_app(Some(AT));
    assert_eq!(key(&mut app, KeyCode::Space), vec![SimCommand::Launch(AT)]);
}

#[test]
fn delete_and_backspace_remove_selected() {
    let mut app = input_app(None);
    assert_eq!(key(&mut app, KeyCode::Delete), vec![SimCommand::RemoveSelected]);

    let mut app = input_app(None);
    assert_eq!(key(&mut app, KeyCode::Backspace), vec![SimCommand::RemoveSelected]);
}

#[test]
fn escape_quits() {
    let mut app = input_app(Some(AT));
    assert_eq!(key(&mut app, KeyCode::Escape), vec![SimCommand::Quit]);
}

#[test]
fn no_presses_write_nothing() {
    let mut app = input_app(Some(AT));
    app.update();
    assert!(app.world().resource::<Written>().0.is_empty());
}

// ── Startup config ────────────────────────────────────────────────────────────

#[test]
fn config_load_refreshes_boundary_and_timestep() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<SimConfig>();
    let stale = SimConfig {
        border_margin: 100.0,
        gravity: 0.0,
        ..Default::default()
    };
    app.insert_resource(Boundary::from_config(&stale));
    app.insert_resource(Time::<Fixed>::from_hz(10.0));
    app.add_systems(Startup, load_sim_config);

    app.update();

    // Whether or not assets/physics.toml is found, the derived state must
    // match the final config.
    let config = app.world().resource::<SimConfig>().clone();
    assert_eq!(
        *app.world().resource::<Boundary>(),
        Boundary::from_config(&config)
    );
    assert_eq!(
        app.world().resource::<Time<Fixed>>().timestep(),
        Duration::from_secs_f64(1.0 / config.target_fps)
    );
}
