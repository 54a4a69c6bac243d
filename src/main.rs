use bevy::prelude::*;
use bevy::window::WindowResolution;

use bouncebox::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use bouncebox::graphics;
use bouncebox::simulation::SimulationPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Simulation".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(SimulationPlugin)
        .add_systems(Startup, graphics::setup_camera)
        .run();
}
