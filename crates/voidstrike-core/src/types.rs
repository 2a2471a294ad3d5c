//! Fundamental geometric and simulation types.
//!
//! Positions and sizes are `glam::DVec2` in screen pixels. Headings are
//! degrees normalized to [0, 360), with 0° pointing along +x.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::errors::SpawnError;

/// Angle in degrees, always normalized to [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(f64);

impl Heading {
    pub fn new(degrees: f64) -> Self {
        Self(degrees.rem_euclid(360.0))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Unit direction vector (cos, sin) for this heading.
    pub fn unit_vector(self) -> DVec2 {
        let r = self.radians();
        DVec2::new(r.cos(), r.sin())
    }

    /// Heading of a (non-zero) direction vector.
    pub fn of_vector(v: DVec2) -> Self {
        Self::new(v.y.atan2(v.x).to_degrees())
    }

    /// Bearing from `from` toward `to`.
    pub fn between(from: DVec2, to: DVec2) -> Self {
        Self::of_vector(to - from)
    }

    /// Angular offset `self - other`, normalized to [0, 360).
    pub fn delta_to(self, other: Heading) -> f64 {
        (self.0 - other.0).rem_euclid(360.0)
    }

    /// Smallest absolute angular difference to `other`, in [0, 180].
    pub fn separation(self, other: Heading) -> f64 {
        let d = self.delta_to(other);
        if d > 180.0 {
            360.0 - d
        } else {
            d
        }
    }

    /// One rotation step toward `target`, picking the shorter direction
    /// (delta ≥ 180° means clockwise is the short way around).
    pub fn turn_step(self, target: Heading, step_deg: f64) -> Heading {
        if self.delta_to(target) >= 180.0 {
            self + step_deg
        } else {
            self - step_deg
        }
    }
}

impl Add<f64> for Heading {
    type Output = Heading;

    fn add(self, rhs: f64) -> Heading {
        Heading::new(self.0 + rhs)
    }
}

impl AddAssign<f64> for Heading {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl Sub<f64> for Heading {
    type Output = Heading;

    fn sub(self, rhs: f64) -> Heading {
        Heading::new(self.0 - rhs)
    }
}

impl SubAssign<f64> for Heading {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

/// Heading plus clamped linear speed (pixels per second).
///
/// Invariant: `0 ≤ speed ≤ max_speed`, enforced by the constructor and setter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub heading: Heading,
    speed: f64,
    max_speed: f64,
}

impl Velocity {
    pub fn new(heading: Heading, speed: f64, max_speed: f64) -> Self {
        let max_speed = max_speed.max(0.0);
        Self {
            heading,
            speed: speed.clamp(0.0, max_speed),
            max_speed,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(0.0, self.max_speed);
    }

    /// Displacement over `dt` seconds.
    pub fn displacement(&self, dt: f64) -> DVec2 {
        self.heading.unit_vector() * self.speed * dt
    }
}

/// Axis-aligned rectangle, `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Rectangle centered on `center` with the given full `size`.
    pub fn centered(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn expanded(&self, margin: DVec2) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Overlap on both axes.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Validated viewport geometry, supplied at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, SpawnError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(SpawnError::InvalidConfiguration {
                reason: format!("viewport dimensions must be positive, got {width}x{height}"),
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// The visible bounds as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(DVec2::ZERO, DVec2::new(self.width, self.height))
    }

    pub fn contains(&self, point: DVec2) -> bool {
        self.bounds().contains(point)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
