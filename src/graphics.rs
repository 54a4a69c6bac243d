use crate::boundary::Boundary;
use crate::config::SimConfig;
use bevy::prelude::*;

/// Mapping between box space (origin top-left, y down, window-sized) and Bevy
/// world space (origin at the window centre, y up) as seen by the default
/// `Camera2d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpace {
    pub size: Vec2,
}

impl BoxSpace {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            size: config.box_size(),
        }
    }

    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.size.x / 2.0, self.size.y / 2.0 - p.y)
    }

    pub fn to_box(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x + self.size.x / 2.0, self.size.y / 2.0 - p.y)
    }
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d maps one world unit to one window pixel, centred.
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}

/// Draw gizmo lines with the configured box wall thickness.
pub fn configure_gizmos(mut store: ResMut<GizmoConfigStore>, boundary: Res<Boundary>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = boundary.line_width;
}
