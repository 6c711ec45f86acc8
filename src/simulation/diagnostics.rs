//! Post-run diagnostics over a recorded [`History`]
//!
//! - relative total-energy drift, normalized by |E0|
//! - separation between two bodies across the run, and its minimum
//! - apsides of a two-body relative orbit from an initial state

use crate::error::{Error, Result};
use crate::simulation::history::History;
use crate::simulation::states::{Body, NVec3};
use crate::simulation::vector;

/// |E_k - E_0| / |E_0| for every recorded step
pub fn relative_energy_drift(history: &History) -> Option<Vec<f64>> {
    let e0 = *history.total.first()?;
    if e0 == 0.0 {
        return None;
    }
    Some(history.total.iter().map(|e| ((e - e0) / e0).abs()).collect())
}

/// Drift at the last recorded step
pub fn final_energy_drift(history: &History) -> Option<f64> {
    relative_energy_drift(history)?.last().copied()
}

/// Largest drift over the whole run
pub fn max_energy_drift(history: &History) -> Option<f64> {
    relative_energy_drift(history)?
        .into_iter()
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |m| m.max(d))))
}

/// Distance between bodies `i` and `j` at every recorded step
pub fn separations(history: &History, i: usize, j: usize) -> Result<Vec<f64>> {
    let n = history.trajectories.len();
    let (ti, tj) = match (history.trajectories.get(i), history.trajectories.get(j)) {
        (Some(ti), Some(tj)) => (ti, tj),
        _ => {
            return Err(Error::Configuration(format!(
                "body index out of range: ({i}, {j}) with {n} bodies"
            )))
        }
    };
    ti.iter()
        .zip(tj.iter())
        .map(|(a, b)| {
            let neg_b = vector::scale(b.as_slice(), -1.0);
            let d = vector::add(&[a.as_slice(), neg_b.as_slice()])?;
            vector::norm(&d)
        })
        .collect()
}

/// Step index and distance of the closest recorded approach of `i` and `j`
pub fn closest_approach(history: &History, i: usize, j: usize) -> Result<Option<(usize, f64)>> {
    let seps = separations(history, i, j)?;
    Ok(seps
        .into_iter()
        .enumerate()
        .fold(None, |best, (k, d)| match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((k, d)),
        }))
}

/// Closest and farthest separation of a bound two-body relative orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apsides {
    pub perihelion: f64,
    pub aphelion: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

impl Apsides {
    /// Apsides of `light` around `heavy` from their current state, using
    /// vis-viva for the semi-major axis and the specific angular momentum
    /// for the eccentricity. Unbound orbits have no aphelion and are rejected.
    pub fn of_pair(heavy: &Body, light: &Body, g: f64) -> Result<Self> {
        let mu = g * (heavy.m + light.m);
        let r: NVec3 = light.x - heavy.x;
        let v: NVec3 = light.v - heavy.v;
        let r_len = r.norm();
        if r_len == 0.0 {
            return Err(Error::DivisionByZero("apsides of coincident bodies".to_string()));
        }

        let specific_energy = 0.5 * v.norm_squared() - mu / r_len;
        if specific_energy >= 0.0 {
            return Err(Error::Configuration(format!(
                "orbit of `{}` around `{}` is not bound",
                light.name, heavy.name
            )));
        }
        let h = r.cross(&v).norm();
        let a = -mu / (2.0 * specific_energy);
        let e = (1.0 + 2.0 * specific_energy * h * h / (mu * mu)).max(0.0).sqrt();

        Ok(Self {
            perihelion: a * (1.0 - e),
            aphelion: a * (1.0 + e),
            semi_major_axis: a,
            eccentricity: e,
        })
    }

    /// Whether `d` lies in [perihelion, aphelion], widened by `rel_tol` on each side
    pub fn contains(&self, d: f64, rel_tol: f64) -> bool {
        d >= self.perihelion * (1.0 - rel_tol) && d <= self.aphelion * (1.0 + rel_tol)
    }
}
