//! CSV export of a finished run for plotting outside the crate
//!
//! Positions go out in AU and time in days, using the run's own
//! [`Constants`]. Energies stay in joules, with an extra column normalized
//! by |E0| to match the usual energy-conservation plots.

use std::io::Write;

use crate::error::{Error, Result};
use crate::simulation::engine::Simulation;
use crate::simulation::params::Constants;
use crate::simulation::vector;

/// One row per body per recorded step:
/// `step,time_days,body,x_au,y_au,z_au`
pub fn write_trajectories_csv<W: Write>(w: W, sim: &Simulation) -> Result<()> {
    let Constants { au, day, .. } = sim.parameters().constants;
    let history = sim.history();

    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["step", "time_days", "body", "x_au", "y_au", "z_au"])?;
    for (b, body) in sim.bodies().iter().enumerate() {
        let traj = &history.trajectories[b];
        for (step, x) in traj.iter().enumerate() {
            let t = history.times.get(step).copied().unwrap_or(0.0);
            let x_au = vector::scale(x.as_slice(), 1.0 / au);
            wtr.write_record([
                step.to_string(),
                (t / day).to_string(),
                body.name.clone(),
                format!("{:.9}", x_au[0]),
                format!("{:.9}", x_au[1]),
                format!("{:.9}", x_au[2]),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// One row per recorded step:
/// `step,time_days,kinetic,potential,total,total_over_abs_e0`
pub fn write_energy_csv<W: Write>(w: W, sim: &Simulation) -> Result<()> {
    let day = sim.parameters().constants.day;
    let history = sim.history();
    let e0 = history
        .total
        .first()
        .map(|e| e.abs())
        .ok_or_else(|| Error::InvalidState("no energies recorded, run the simulation first".to_string()))?;

    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["step", "time_days", "kinetic", "potential", "total", "total_over_abs_e0"])?;
    for step in 0..history.len() {
        let normalized = if e0 > 0.0 { history.total[step] / e0 } else { 0.0 };
        wtr.write_record([
            step.to_string(),
            (history.times[step] / day).to_string(),
            format!("{:e}", history.kinetic[step]),
            format!("{:e}", history.potential[step]),
            format!("{:e}", history.total[step]),
            format!("{normalized:.12}"),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
