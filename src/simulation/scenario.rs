//! Build ready-to-run simulations
//!
//! Two sources of initial conditions:
//! - a [`ScenarioConfig`] loaded from YAML, mapped through [`Scenario::build`]
//! - the built-in bodies below (Sun + Earth, the eight planets, a test asteroid)
//!
//! The built-ins only register bodies; method, step and end time stay with
//! whoever constructed the `Simulation`.

use std::f64::consts::PI;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::engine::Simulation;
use crate::simulation::params::{Constants, Parameters};
use crate::simulation::states::{Body, NVec3, BLACK};
use crate::simulation::vector;

pub const SUN_MASS: f64 = 1.9885e30;      // kg
pub const EARTH_MASS: f64 = 5.97237e24;   // kg
pub const CERES_MASS: f64 = 9.393e20;     // kg, default asteroid
pub const EARTH_SPEED: f64 = 29_780.0;    // mean orbital speed, m/s
pub const EARTH_APHELION: f64 = 147_095_000.0e3; // m

/// Cross-section area of a sphere of `radius` m
fn disc(radius: f64) -> f64 {
    PI * radius * radius
}

pub struct Scenario;

impl Scenario {
    /// Map a YAML scenario into a `Simulation` with every body registered
    pub fn build(cfg: ScenarioConfig) -> Result<Simulation> {
        let mut constants = Constants::SI;
        if let Some(g) = cfg.constants.g {
            constants.g = g;
        }
        let parameters = Parameters {
            time_step: cfg.simulation.time_step,
            end_time: cfg.simulation.end_time,
            adaptive_time_step: cfg.simulation.adaptive_time_step,
            constants,
        };

        let mut sim = Simulation::new(cfg.simulation.method, parameters);
        for bc in &cfg.bodies {
            sim.add_body(Self::body_from_config(bc)?)?;
        }
        Ok(sim)
    }

    fn body_from_config(bc: &BodyConfig) -> Result<Body> {
        let x = vector::to_nvec3(&bc.position)?;
        let v = vector::to_nvec3(&bc.velocity)?;
        let mut body = Body::new(bc.name.clone(), bc.mass, x, v).with_color(bc.color.unwrap_or(BLACK));
        body.area = bc.area;
        Ok(body)
    }
}

/// Sun at rest at the origin and Earth at aphelion distance on the -x axis
pub fn sun_earth(sim: &mut Simulation) -> Result<()> {
    sim.add_body(sun())?;
    sim.add_body(
        Body::new(
            "Earth",
            EARTH_MASS,
            NVec3::new(-EARTH_APHELION, 0.0, 0.0),
            NVec3::new(0.0, -EARTH_SPEED, 0.0),
        )
        .with_color([0.125, 0.400, 0.850])
        .with_area(disc(6_371_000.0)),
    )?;
    Ok(())
}

fn sun() -> Body {
    Body::new("Sun", SUN_MASS, NVec3::zeros(), NVec3::zeros())
        .with_color([0.9, 0.9, 0.0])
        .with_area(disc(696_392_000.0))
}

/// Sun and the eight planets, each placed on one axis with its mean orbital
/// speed perpendicular to it, all rotating counter-clockwise
pub fn solar_system(sim: &mut Simulation) -> Result<()> {
    sim.add_body(sun())?;

    let planets: [(&str, f64, [f64; 3], [f64; 3], [f64; 3], f64); 8] = [
        ("Mercury", 3.3011e23, [57_909_050.0e3, 0.0, 0.0], [0.0, 47_362.0, 0.0], [0.625, 0.625, 0.625], 2_440_000.0),
        ("Venus", 4.8675e24, [0.0, 108_208_000.0e3, 0.0], [-35_020.0, 0.0, 0.0], [0.625, 0.625, 0.3125], 6_051_800.0),
        ("Earth", EARTH_MASS, [-149_598_023.0e3, 0.0, 0.0], [0.0, -EARTH_SPEED, 0.0], [0.125, 0.400, 0.850], 6_371_000.0),
        ("Mars", 6.4171e23, [0.0, -227_939_200.0e3, 0.0], [24_007.0, 0.0, 0.0], [0.639, 0.332, 0.293], 3_389_999.0),
        ("Jupiter", 1.8982e27, [778_570_000.0e3, 0.0, 0.0], [0.0, 13_070.0, 0.0], [0.820, 0.645, 0.332], 69_911_000.0),
        ("Saturn", 5.6834e26, [0.0, 1_433_530_000.0e3, 0.0], [-9_680.0, 0.0, 0.0], [0.820, 0.781, 0.137], 58_232_000.0),
        ("Uranus", 8.6810e25, [-2_875.04e9, 0.0, 0.0], [0.0, -6_800.0, 0.0], [0.430, 0.625, 0.867], 25_362_000.0),
        ("Neptune", 1.02413e26, [0.0, -4.50e12, 0.0], [5_430.0, 0.0, 0.0], [0.184, 0.207, 0.867], 24_622_000.0),
    ];

    for (name, m, x, v, color, radius) in planets {
        sim.add_body(
            Body::new(name, m, NVec3::from(x), NVec3::from(v))
                .with_color(color)
                .with_area(disc(radius)),
        )?;
    }
    Ok(())
}

/// Asteroid of mass `m` launched inward from just inside Jupiter's orbit,
/// with out-of-plane speed `vz`
pub fn add_asteroid(sim: &mut Simulation, m: f64, vz: f64) -> Result<usize> {
    sim.add_body(
        Body::new(
            "Asteroid",
            m,
            NVec3::new(414_010_000.0e3, 0.0, 0.0),
            NVec3::new(-5_000.0, 5_000.0, vz),
        )
        .with_color([0.195, 0.234, 0.234])
        .with_area(disc(473_000.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::integrator::Method;

    #[test]
    fn solar_system_registers_sun_and_planets_in_order() {
        let mut sim = Simulation::new(Method::Verlet, Parameters::default());
        solar_system(&mut sim).unwrap();
        let names: Vec<&str> = sim.bodies().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            ["Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(add_asteroid(&mut sim, CERES_MASS, 0.0).unwrap(), 9);
    }

    #[test]
    fn config_vectors_must_have_three_components() {
        let cfg = ScenarioConfig::from_yaml_str(
            r#"
simulation: { method: euler, time_step: 1.0, end_time: 2.0 }
bodies:
  - { mass: 1.0, position: [0.0, 0.0], velocity: [0.0, 0.0, 0.0] }
"#,
        )
        .unwrap();
        assert!(matches!(
            Scenario::build(cfg),
            Err(crate::error::Error::ShapeMismatch { expected: 3, found: 2 })
        ));
    }
}
