//! Built-in producers that exercise every formatter

use dbug_core::{Color, Overlay, Producer, Vec2, Vec3};
use std::time::Duration;

pub struct DemoProducers {
    clock: Producer,
    orbit: Producer,
    blinker: Producer,
}

impl DemoProducers {
    /// Register all demo producers with the overlay
    pub fn register(overlay: &Overlay) -> Self {
        Self {
            clock: overlay.register("Clock"),
            orbit: overlay.register("Orbit"),
            blinker: overlay.register("Blinker"),
        }
    }

    /// Write this frame's lines
    pub fn update(&self, frame: u64, elapsed: Duration) {
        let seconds = elapsed.as_secs_f32();

        self.clock.log_value("frame", &frame);
        self.clock.log_value("elapsed", &seconds);

        let angle = seconds * std::f32::consts::FRAC_PI_2;
        self.orbit
            .log_value("pos", &Vec2::new(angle.cos() * 3.0, angle.sin() * 3.0));
        self.orbit.newline();
        self.orbit.log_value(
            "vel",
            &Vec3::new(-angle.sin(), angle.cos(), (seconds * 0.5).sin()),
        );

        let on = (frame / 30) % 2 == 0;
        self.blinker.log_value("on", &on);
        self.blinker.log_value("state", if on { "lit" } else { "dark" });
        self.blinker.log_colored("warn", Color::Float(1.0, 0.5, 0.0));
    }
}
