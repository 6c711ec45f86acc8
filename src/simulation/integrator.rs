//! Fixed-step time integrators for the N-body system
//!
//! Four schemes share one contract: advance every body by one `dt` and move
//! the clock forward by exactly `dt`. Each reads accelerations from a frozen
//! snapshot of the step-start positions, so updating body `i` never changes
//! what body `i + 1` feels within the same step.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::simulation::forces::Acceleration;
use crate::simulation::states::{NVec3, System};

/// Integration scheme, fixed when the simulation is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Method {
    Euler,       // explicit Euler, not symplectic
    EulerCromer, // semi-implicit Euler, symplectic
    Verlet,      // velocity Verlet, symplectic
    RungeKutta,  // classical 4th-order Runge-Kutta per body
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Euler,
        Method::EulerCromer,
        Method::Verlet,
        Method::RungeKutta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::EulerCromer => "euler-cromer",
            Method::Verlet => "verlet",
            Method::RungeKutta => "runge-kutta",
        }
    }

    pub fn is_symplectic(self) -> bool {
        matches!(self, Method::EulerCromer | Method::Verlet)
    }

    /// Advance `sys` by one step of `dt` with this scheme
    pub fn step<F>(self, sys: &mut System, forces: &F, dt: f64) -> Result<()>
    where
        F: Acceleration + ?Sized,
    {
        match self {
            Method::Euler => euler_step(sys, forces, dt),
            Method::EulerCromer => euler_cromer_step(sys, forces, dt),
            Method::Verlet => verlet_step(sys, forces, dt),
            Method::RungeKutta => runge_kutta_step(sys, forces, dt),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::Configuration(format!("unknown integration method `{s}`")))
    }
}

impl TryFrom<String> for Method {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Explicit Euler: both updates use step-start state.
/// x_n+1 = x_n + dt v_n, v_n+1 = v_n + dt a(x_n)
pub fn euler_step<F>(sys: &mut System, forces: &F, dt: f64) -> Result<()>
where
    F: Acceleration + ?Sized,
{
    let positions = sys.positions();
    let masses = sys.masses();

    for (i, b) in sys.bodies.iter_mut().enumerate() {
        let a = forces.acceleration_on(i, &positions[i], &positions, &masses)?;
        let v_old = b.v;
        b.x += dt * v_old;
        b.v += dt * a;
    }

    sys.advance_clock(dt);
    Ok(())
}

/// Euler-Cromer: kick first, then drift with the new velocity.
/// v_n+1 = v_n + dt a(x_n), x_n+1 = x_n + dt v_n+1
pub fn euler_cromer_step<F>(sys: &mut System, forces: &F, dt: f64) -> Result<()>
where
    F: Acceleration + ?Sized,
{
    let positions = sys.positions();
    let masses = sys.masses();

    for (i, b) in sys.bodies.iter_mut().enumerate() {
        let a = forces.acceleration_on(i, &positions[i], &positions, &masses)?;
        b.v += dt * a;
        b.x += dt * b.v;
    }

    sys.advance_clock(dt);
    Ok(())
}

/// Velocity Verlet with the second force evaluation taken at the body's new
/// position against the other bodies' step-start positions.
/// x_n+1 = x_n + dt v_n + dt^2/2 a1, v_n+1 = v_n + dt/2 (a1 + a2)
pub fn verlet_step<F>(sys: &mut System, forces: &F, dt: f64) -> Result<()>
where
    F: Acceleration + ?Sized,
{
    let half_dt = 0.5 * dt;
    let positions = sys.positions();
    let masses = sys.masses();

    for (i, b) in sys.bodies.iter_mut().enumerate() {
        // a1 from x_n
        let a1 = forces.acceleration_on(i, &positions[i], &positions, &masses)?;

        // full-step position
        b.x += dt * b.v + half_dt * dt * a1;

        // a2 at x_n+1, others still frozen
        let a2 = forces.acceleration_on(i, &b.x, &positions, &masses)?;

        b.v += half_dt * (a1 + a2);
    }

    sys.advance_clock(dt);
    Ok(())
}

/// Classical RK4 for each body on its own, with every other body held at its
/// step-start position through all four stages.
///
/// `a_k` are velocity increments (acceleration times dt) and `b_k` position
/// increments (stage velocity times dt).
pub fn runge_kutta_step<F>(sys: &mut System, forces: &F, dt: f64) -> Result<()>
where
    F: Acceleration + ?Sized,
{
    let positions = sys.positions();
    let masses = sys.masses();

    for (i, b) in sys.bodies.iter_mut().enumerate() {
        let r = positions[i];
        let v = b.v;
        let accel = |at: &NVec3| forces.acceleration_on(i, at, &positions, &masses);

        let a1 = dt * accel(&r)?;
        let b1 = dt * v;

        let a2 = dt * accel(&(r + 0.5 * b1))?;
        let b2 = dt * (v + 0.5 * a1);

        let a3 = dt * accel(&(r + 0.5 * b2))?;
        let b3 = dt * (v + 0.5 * a2);

        let a4 = dt * accel(&(r + b3))?;
        let b4 = dt * (v + a3);

        b.v += (a1 + 2.0 * a2 + 2.0 * a3 + a4) / 6.0;
        b.x += (b1 + 2.0 * b2 + 2.0 * b3 + b4) / 6.0;
    }

    sys.advance_clock(dt);
    Ok(())
}
