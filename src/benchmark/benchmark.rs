use std::time::Instant;

use crate::error::Result;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::Method;
use crate::simulation::params::Constants;
use crate::simulation::scenario::{SUN_MASS, EARTH_MASS};
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a manual System of size `n`: one Sun and `n - 1` light
/// bodies on deterministic, non-overlapping positions
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(Body::new("Sun", SUN_MASS, NVec3::zeros(), NVec3::zeros()));

    let au = Constants::SI.au;
    for i in 1..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0 * au + i_f * 1.0e6,
            (i_f * 0.13).cos() * 5.0 * au,
            (i_f * 0.07).sin() * 0.1 * au,
        );
        let v = NVec3::new(-(i_f * 0.13).cos(), (i_f * 0.37).sin(), 0.0) * 13_000.0;
        bodies.push(Body::new(format!("b{i}"), EARTH_MASS, x, v));
    }

    System { bodies, t: 0.0, steps: 0 }
}

/// Time `steps` steps of `method` on a fresh `n`-body system, ms per step
fn time_method(method: Method, n: usize, steps: usize) -> Result<f64> {
    let c = Constants::SI;
    let gravity = NewtonianGravity::new(c.g);
    let mut sys = make_system(n);

    // Warm-up
    method.step(&mut sys, &gravity, c.day)?;

    let t0 = Instant::now();
    for _ in 0..steps {
        method.step(&mut sys, &gravity, c.day)?;
    }
    Ok(t0.elapsed().as_secs_f64() * 1000.0 / steps as f64)
}

/// Header of the timing tables: `N` then one `<method>_ms` column per method
fn csv_header() -> String {
    let cols: Vec<String> = Method::ALL
        .iter()
        .map(|m| format!("{}_ms", m.name().replace('-', "_")))
        .collect();
    format!("N,{}", cols.join(","))
}

/// One timing row for size `n`
fn csv_row(n: usize, steps: usize) -> Result<String> {
    let mut cols = Vec::with_capacity(Method::ALL.len());
    for method in Method::ALL {
        cols.push(format!("{:.6}", time_method(method, n, steps)?));
    }
    Ok(format!("{},{}", n, cols.join(",")))
}

/// Per-method step cost for a few system sizes, as CSV
pub fn bench_methods() -> Result<()> {
    println!("{}", csv_header());
    for n in [10, 50, 100, 200, 400] {
        println!("{}", csv_row(n, 20)?);
    }
    Ok(())
}

/// Same measurement on a finer grid of sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_methods_curve() -> Result<()> {
    println!("{}", csv_header());
    for n in (10..=400).step_by(10) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 100 { 50 } else { 10 };
        println!("{}", csv_row(n, steps)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_system_has_no_coincident_bodies() {
        let sys = make_system(64);
        let gravity = NewtonianGravity::new(Constants::SI.g);
        assert!(crate::simulation::energy::potential_energy(&sys, &gravity).is_ok());
    }

    #[test]
    fn timing_rows_match_the_header() {
        assert_eq!(csv_header(), "N,euler_ms,euler_cromer_ms,verlet_ms,runge_kutta_ms");
        let row = csv_row(4, 1).unwrap();
        assert!(row.starts_with("4,"));
        assert_eq!(row.split(',').count(), 1 + Method::ALL.len());
    }
}
