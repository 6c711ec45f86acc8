//! Core state types for the N-body simulation.
//!
//! - `Body`   one point mass with position, velocity and display metadata
//! - `System` the ordered bodies plus the simulation clock
//!
//! Body order is the index used by the integrators and by the recorded
//! trajectories, so it never changes once a body is registered.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// RGB display color, components in [0, 1]. Opaque to the integrator.
pub type Color = [f64; 3];

pub const BLACK: Color = [0.0, 0.0, 0.0];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub m: f64,           // mass, kg
    pub x: NVec3,         // position, m
    pub v: NVec3,         // velocity, m/s
    pub color: Color,     // plot color
    pub area: Option<f64>, // cross-section area for plot sizing, m^2
}

impl Body {
    pub fn new(name: impl Into<String>, m: f64, x: NVec3, v: NVec3) -> Self {
        Self {
            name: name.into(),
            m,
            x,
            v,
            color: BLACK,
            area: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, in registration order
    pub t: f64,            // time, s
    pub steps: u64,        // completed steps
}

impl System {
    /// Frozen copy of every position, taken before a step mutates anything
    pub fn positions(&self) -> Vec<NVec3> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    /// Advance the clock by one step of `dt`.
    /// The clock is derived from the step count so `n` steps land exactly on `n * dt`.
    pub fn advance_clock(&mut self, dt: f64) {
        self.steps += 1;
        self.t = self.steps as f64 * dt;
    }
}
