//! Toy projectile motion under constant gravity and wind.
//!
//! One tick moves the projectile by its velocity and then changes the
//! velocity by the environment's forces. [`simulate`] runs a launch until the
//! projectile falls to `y <= 0` and paints the path into a canvas, with
//! canvas y growing downward.

pub mod config;

use crate::canvas::{Canvas, CanvasError};
use crate::color::Color;
use crate::numerics::types::point::Point3;
use crate::numerics::types::vector::Vector3;

pub use config::{CanvasConfig, ConfigError, SimulationConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub position: Point3,
    pub velocity: Vector3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub gravity: Vector3,
    pub wind: Vector3,
}

impl Projectile {
    pub fn new(position: Point3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }
}

impl Environment {
    pub fn new(gravity: Vector3, wind: Vector3) -> Self {
        Self { gravity, wind }
    }
}

/// Advance `proj` by one time step in `env`.
pub fn tick(env: &Environment, proj: &Projectile) -> Projectile {
    Projectile {
        position: proj.position + proj.velocity,
        velocity: proj.velocity + env.gravity + env.wind,
    }
}

/// Result of a finished [`simulate`] run.
#[derive(Clone, Debug)]
pub struct SimulationRun {
    pub canvas: Canvas,
    /// Number of ticks taken.
    pub ticks: usize,
    /// Number of positions that landed on the canvas.
    pub plotted: usize,
    /// State after the last tick.
    pub last: Projectile,
}

impl SimulationRun {
    /// Whether the projectile reached the ground before the tick limit.
    pub fn landed(&self) -> bool {
        self.last.position.y <= 0.0
    }
}

/// Launch a projectile as described by `config` and paint its path.
///
/// Positions are truncated toward zero to pick a pixel; those falling outside
/// the canvas are skipped. The run stops when the projectile reaches `y <= 0`
/// or after `config.max_ticks` ticks.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationRun, CanvasError> {
    let mut canvas = Canvas::new(config.canvas.width, config.canvas.height)?;
    let env = Environment::new(config.gravity, config.wind);
    let mut proj = Projectile::new(config.start, config.velocity.normalize() * config.speed);

    let mut ticks = 0;
    let mut plotted = 0;
    while proj.position.y > 0.0 && ticks < config.max_ticks {
        if plot(&mut canvas, &proj.position, config.color) {
            plotted += 1;
        }
        proj = tick(&env, &proj);
        ticks += 1;
        tracing::trace!(tick = ticks, x = proj.position.x, y = proj.position.y, "projectile moved");
    }

    let run = SimulationRun {
        canvas,
        ticks,
        plotted,
        last: proj,
    };
    if !run.landed() {
        tracing::warn!(max_ticks = config.max_ticks, "projectile still airborne at tick limit");
    }
    tracing::debug!(ticks, plotted, "simulation finished");

    Ok(run)
}

/// Paint `position` if it maps onto the canvas; returns whether it did.
fn plot(canvas: &mut Canvas, position: &Point3, color: Color) -> bool {
    let x = position.x.trunc() as i64;
    let y = canvas.height() as i64 - position.y.trunc() as i64;
    match (usize::try_from(x), usize::try_from(y)) {
        (Ok(x), Ok(y)) if canvas.contains(x, y) => canvas.write_pixel(x, y, color).is_ok(),
        _ => false,
    }
}
