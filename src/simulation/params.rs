//! Numerical and physical parameters for the simulation
//!
//! `Constants` holds the physical constants and unit sizes shared by the
//! force law, the energy accounting and the driver's unit conversion.
//! `Parameters` holds runtime settings:
//! - fixed step size and end time,
//! - the adaptive stepping flag (accepted, never acted on),
//! - the constants used by this run

/// Physical constants and unit sizes, SI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub g: f64,    // gravitational constant, N (m/kg)^2
    pub au: f64,   // astronomical unit, m
    pub day: f64,  // s
    pub year: f64, // 365 days, s
}

impl Constants {
    pub const SI: Constants = Constants {
        g: 6.674e-11,
        au: 149_597_871.0e3,
        day: 86_400.0,
        year: 365.0 * 86_400.0,
    };
}

impl Default for Constants {
    fn default() -> Self {
        Self::SI
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub time_step: f64,           // step size, s
    pub end_time: f64,            // time end, s
    pub adaptive_time_step: bool, // not implemented, logged and ignored
    pub constants: Constants,
}

impl Parameters {
    pub fn new(time_step: f64, end_time: f64) -> Self {
        Self {
            time_step,
            end_time,
            ..Self::default()
        }
    }

    /// Approximate number of steps in a run, 0 for a degenerate configuration.
    /// Saturates at `u64::MAX` for absurdly small steps.
    pub fn expected_steps(&self) -> u64 {
        let (dt, end) = (self.time_step, self.end_time);
        if dt.is_nan() || dt <= 0.0 || end.is_nan() || end <= 0.0 {
            return 0;
        }
        (end / dt).ceil() as u64
    }
}

impl Default for Parameters {
    /// One day steps over one year
    fn default() -> Self {
        Self {
            time_step: Constants::SI.day,
            end_time: Constants::SI.year,
            adaptive_time_step: false,
            constants: Constants::SI,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_steps_for_default_year() {
        assert_eq!(Parameters::default().expected_steps(), 365);
    }

    #[test]
    fn expected_steps_is_zero_when_degenerate() {
        for (dt, end) in [(0.0, 1.0), (-1.0, 1.0), (1.0, 0.0), (f64::NAN, 1.0), (1.0, f64::NAN)] {
            assert_eq!(Parameters::new(dt, end).expected_steps(), 0, "dt = {dt}, end = {end}");
        }
    }

    #[test]
    fn expected_steps_saturates_for_tiny_step() {
        assert_eq!(Parameters::new(1e-300, 1.0).expected_steps(), u64::MAX);
    }
}
