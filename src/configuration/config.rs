//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`SimulationConfig`] – method, step size, end time, adaptive flag
//! - [`ConstantsConfig`]  – optional override of the gravitational constant
//! - [`BodyConfig`]       – initial state and display data for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A Sun + Earth scenario matching these types:
//!
//! ```yaml
//! simulation:
//!   method: verlet          # euler | euler-cromer | verlet | runge-kutta
//!   time_step: 86400.0      # s
//!   end_time: 31536000.0    # s
//!   adaptive_time_step: false
//!
//! constants:
//!   g: 6.674e-11
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.9885e30
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!     color: [0.9, 0.9, 0.0]
//!     area: 1.5235e18
//!   - name: Earth
//!     mass: 5.97237e24
//!     position: [-147095000000.0, 0.0, 0.0]
//!     velocity: [0.0, -29780.0, 0.0]
//! ```
//!
//! Vectors stay plain lists here; their shape is checked when the scenario
//! is turned into a runtime `Simulation`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::integrator::Method;

/// Run-level settings
#[derive(Deserialize, Debug, Clone)]
pub struct SimulationConfig {
    pub method: Method,  // integration scheme, parsed by name
    pub time_step: f64,  // fixed step, s
    pub end_time: f64,   // run stops once the clock reaches this, s
    #[serde(default)]
    pub adaptive_time_step: bool, // accepted but ignored
}

/// Physical constants that may be overridden per scenario
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ConstantsConfig {
    pub g: Option<f64>, // gravitational constant, SI default when absent
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,       // display name, defaults to the registration number
    pub mass: f64,          // kg
    pub position: Vec<f64>, // m
    pub velocity: Vec<f64>, // m/s
    pub color: Option<[f64; 3]>, // RGB in [0, 1], black when absent
    pub area: Option<f64>,  // cross-section area for plot sizing, m^2
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub constants: ConstantsConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BODY: &str = r#"
simulation:
  method: euler-cromer
  time_step: 86400.0
  end_time: 864000.0
bodies:
  - name: Sun
    mass: 1.9885e30
    position: [0.0, 0.0, 0.0]
    velocity: [0.0, 0.0, 0.0]
    color: [0.9, 0.9, 0.0]
  - mass: 5.97237e24
    position: [1.0e11, 0.0, 0.0]
    velocity: [0.0, 30000.0, 0.0]
"#;

    #[test]
    fn parses_two_body_scenario() {
        let cfg = ScenarioConfig::from_yaml_str(TWO_BODY).unwrap();
        assert_eq!(cfg.simulation.method, Method::EulerCromer);
        assert!(!cfg.simulation.adaptive_time_step);
        assert!(cfg.constants.g.is_none());
        assert_eq!(cfg.bodies.len(), 2);
        assert_eq!(cfg.bodies[0].color, Some([0.9, 0.9, 0.0]));
        assert!(cfg.bodies[1].name.is_empty());
        assert!(cfg.bodies[1].area.is_none());
    }

    #[test]
    fn unknown_method_is_rejected() {
        let yaml = TWO_BODY.replace("euler-cromer", "leapfrog");
        let err = ScenarioConfig::from_yaml_str(&yaml).unwrap_err();
        assert!(format!("{err}").contains("leapfrog"));
    }
}
