//! Acceleration sources for the integrators
//!
//! Every scheme evaluates accelerations against a frozen snapshot of
//! positions, sometimes with the advanced body moved to a trial position.
//! [`Acceleration`] is that contract; [`NewtonianGravity`] is the direct
//! pairwise sum used by the simulation.

use crate::error::{Error, Result};
use crate::simulation::states::NVec3;

/// Acceleration felt by body `target` if it sat at `at`, with every other
/// body `j` at `positions[j]`. `positions[target]` is ignored.
pub trait Acceleration {
    fn acceleration_on(
        &self,
        target: usize,
        at: &NVec3,
        positions: &[NVec3],
        masses: &[f64],
    ) -> Result<NVec3>;
}

/// Direct n^2 Newtonian gravity, no softening
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Acceleration exerted on a point at `r_target` by mass `m2` at `r_source`.
    ///
    /// With R = r_source - r_target the result is G m2 R / |R|^3, pointing from
    /// the target toward the source. Coincident points are a `DivisionByZero`.
    pub fn acceleration_from(&self, m2: f64, r_source: &NVec3, r_target: &NVec3) -> Result<NVec3> {
        let r = r_source - r_target;
        let dist = r.norm();
        if dist == 0.0 {
            return Err(Error::DivisionByZero(format!(
                "source and target coincide at {:?}",
                r_target.as_slice()
            )));
        }
        let k = self.g * m2 / dist.powi(3);
        Ok(k * r)
    }

    /// Gravitational potential energy of the pair, -G m1 m2 / |r1 - r2|
    pub fn pair_potential(&self, m1: f64, m2: f64, r1: &NVec3, r2: &NVec3) -> Result<f64> {
        let dist = (r1 - r2).norm();
        if dist == 0.0 {
            return Err(Error::DivisionByZero(
                "potential of two coincident bodies".to_string(),
            ));
        }
        Ok(-self.g * m1 * m2 / dist)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration_on(
        &self,
        target: usize,
        at: &NVec3,
        positions: &[NVec3],
        masses: &[f64],
    ) -> Result<NVec3> {
        let mut a = NVec3::zeros();
        for (j, (xj, mj)) in positions.iter().zip(masses.iter()).enumerate() {
            if j == target {
                continue;
            }
            a += self
                .acceleration_from(*mj, xj, at)
                .map_err(|_| Error::DivisionByZero(format!("body {target} coincides with body {j}")))?;
        }
        Ok(a)
    }
}
