//! The simulation owner and its run loop
//!
//! A `Simulation` is built empty with a fixed [`Method`] and [`Parameters`],
//! takes its bodies, runs once to `end_time`, and then exposes the recorded
//! history read-only.

use log::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::simulation::energy::{self, Energy};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::history::{History, StepRecord, StepSink};
use crate::simulation::integrator::Method;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Configuring,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    method: Method,
    parameters: Parameters,
    gravity: NewtonianGravity,
    system: System,
    history: History,
    phase: Phase,
}

impl Simulation {
    pub fn new(method: Method, parameters: Parameters) -> Self {
        let gravity = NewtonianGravity::new(parameters.constants.g);
        Self {
            method,
            parameters,
            gravity,
            system: System::default(),
            history: History::default(),
            phase: Phase::Configuring,
        }
    }

    /// Register a body and return its index.
    /// An empty name becomes the 1-based registration number.
    pub fn add_body(&mut self, mut body: Body) -> Result<usize> {
        if self.phase != Phase::Configuring {
            return Err(Error::InvalidState(format!(
                "cannot add body `{}` after the run has started",
                body.name
            )));
        }
        if !body.m.is_finite() || body.m <= 0.0 {
            return Err(Error::InvalidBody(format!(
                "mass of `{}` must be positive and finite, got {}",
                body.name, body.m
            )));
        }
        if !body.x.iter().chain(body.v.iter()).all(|c| c.is_finite()) {
            return Err(Error::InvalidBody(format!(
                "position and velocity of `{}` must be finite",
                body.name
            )));
        }

        let index = self.system.bodies.len();
        if body.name.is_empty() {
            body.name = (index + 1).to_string();
        }
        debug!("add_body: #{index} `{}` m = {:e} kg", body.name, body.m);

        self.history.seed_body(body.x);
        self.system.bodies.push(body);
        Ok(index)
    }

    /// Run to `end_time`, keeping the full history in memory
    pub fn run(&mut self) -> Result<&History> {
        let steps = usize::try_from(self.parameters.expected_steps()).unwrap_or(usize::MAX);
        self.history.reserve(steps);
        self.drive(None)?;
        Ok(&self.history)
    }

    /// Run to `end_time`, handing each recorded step to `sink` instead of
    /// retaining energies and positions. Only the initial positions seeded at
    /// registration stay in [`Simulation::history`].
    pub fn run_streaming(&mut self, sink: &mut dyn StepSink) -> Result<()> {
        self.drive(Some(sink))
    }

    fn drive(&mut self, mut sink: Option<&mut dyn StepSink>) -> Result<()> {
        if self.phase != Phase::Configuring {
            return Err(Error::InvalidState("simulation has already been run".to_string()));
        }
        self.phase = Phase::Finished;

        let dt = self.parameters.time_step;
        let t_end = self.parameters.end_time;

        if self.parameters.adaptive_time_step {
            warn!("adaptive time stepping is not implemented, using fixed dt = {dt} s");
        }
        info!(
            "run: {} bodies, method = {}, dt = {dt} s, t_end = {t_end} s",
            self.system.bodies.len(),
            self.method
        );

        let initial = self.record(&mut sink)?;

        // guard against a loop that never reaches t_end
        if dt.is_nan() || dt <= 0.0 || t_end.is_nan() || t_end <= 0.0 {
            warn!("degenerate run (dt = {dt}, t_end = {t_end}), recording initial state only");
            return Ok(());
        }

        while self.system.t < t_end {
            self.method.step(&mut self.system, &self.gravity, dt)?;
            trace!("step {} t = {} s", self.system.steps, self.system.t);
            self.record(&mut sink)?;
        }

        let final_total = self.total_energy()?;
        info!(
            "run finished: {} steps, t = {} s, E0 = {:e} J, E = {:e} J",
            self.system.steps, self.system.t, initial.total, final_total
        );
        Ok(())
    }

    /// Compute energies for the current state and hand them to the sink or history
    fn record(&mut self, sink: &mut Option<&mut dyn StepSink>) -> Result<Energy> {
        let energy = Energy::of(&self.system, &self.gravity)?;
        let positions: Vec<NVec3> = self.system.positions();
        let record = StepRecord {
            step: self.system.steps,
            time: self.system.t,
            energy,
            positions: &positions,
        };
        match sink {
            Some(s) => s.record(&record),
            None => self.history.record(&record),
        }
        Ok(energy)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Current simulation time, s
    pub fn clock(&self) -> f64 {
        self.system.t
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn trajectory(&self, index: usize) -> Option<&[NVec3]> {
        self.history.trajectories.get(index).map(Vec::as_slice)
    }

    pub fn kinetic_energy(&self) -> f64 {
        energy::kinetic_energy(&self.system)
    }

    pub fn potential_energy(&self) -> Result<f64> {
        energy::potential_energy(&self.system, &self.gravity)
    }

    pub fn total_energy(&self) -> Result<f64> {
        energy::total_energy(&self.system, &self.gravity)
    }
}
