//! Energy accounting
//!
//! Pure functions of the current state, recomputed from scratch for every
//! recorded step. They are diagnostics only and never feed the dynamics.

use crate::error::Result;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::states::System;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl Energy {
    pub fn of(sys: &System, gravity: &NewtonianGravity) -> Result<Self> {
        let kinetic = kinetic_energy(sys);
        let potential = potential_energy(sys, gravity)?;
        Ok(Self {
            kinetic,
            potential,
            total: kinetic + potential,
        })
    }
}

/// Sum of 1/2 m |v|^2 over all bodies
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies
        .iter()
        .map(|b| 0.5 * b.m * b.v.norm_squared())
        .sum()
}

/// Sum of -G m_i m_j / |r_i - r_j| over each unordered pair, 0 for fewer than two bodies
pub fn potential_energy(sys: &System, gravity: &NewtonianGravity) -> Result<f64> {
    let n = sys.bodies.len();
    let mut potential = 0.0;
    for i in 0..n {
        let bi = &sys.bodies[i];
        for bj in &sys.bodies[(i + 1)..] {
            potential += gravity.pair_potential(bi.m, bj.m, &bi.x, &bj.x)?;
        }
    }
    Ok(potential)
}

pub fn total_energy(sys: &System, gravity: &NewtonianGravity) -> Result<f64> {
    Ok(kinetic_energy(sys) + potential_energy(sys, gravity)?)
}
