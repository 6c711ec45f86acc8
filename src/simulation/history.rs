//! Recorded per-step state
//!
//! A run produces one [`StepRecord`] for the initial state and one per
//! completed step. [`History`] keeps all of them for the rendering side;
//! a [`StepSink`] receives them one at a time instead, for runs too long
//! to hold in memory.

use crate::simulation::energy::Energy;
use crate::simulation::states::NVec3;

/// One recorded step, borrowed from the simulation while it runs
#[derive(Debug, Clone, Copy)]
pub struct StepRecord<'a> {
    pub step: u64,              // 0 for the initial state
    pub time: f64,              // clock after the step, s
    pub energy: Energy,         // energies after the step
    pub positions: &'a [NVec3], // body positions after the step, registration order
}

/// Consumer of recorded steps
pub trait StepSink {
    fn record(&mut self, record: &StepRecord<'_>);
}

impl<F> StepSink for F
where
    F: FnMut(&StepRecord<'_>),
{
    fn record(&mut self, record: &StepRecord<'_>) {
        self(record)
    }
}

/// Upper bound on records preallocated ahead of a run
pub const MAX_RESERVE: usize = 1 << 20;

/// Full in-memory history of a run
#[derive(Debug, Clone, Default)]
pub struct History {
    pub times: Vec<f64>,
    pub kinetic: Vec<f64>,
    pub potential: Vec<f64>,
    pub total: Vec<f64>,
    pub trajectories: Vec<Vec<NVec3>>, // one position sequence per body
}

impl History {
    /// Start a trajectory for a newly registered body at its initial position
    pub fn seed_body(&mut self, x: NVec3) {
        self.trajectories.push(vec![x]);
    }

    /// Preallocate for a run of `steps` steps, capped at [`MAX_RESERVE`];
    /// longer runs grow the buffers as they go.
    pub fn reserve(&mut self, steps: usize) {
        let steps = steps.min(MAX_RESERVE);
        let records = steps.saturating_add(1);
        self.times.reserve(records);
        self.kinetic.reserve(records);
        self.potential.reserve(records);
        self.total.reserve(records);
        for t in &mut self.trajectories {
            t.reserve(steps);
        }
    }

    /// Number of recorded steps (initial state included)
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn energy_at(&self, idx: usize) -> Option<Energy> {
        Some(Energy {
            kinetic: *self.kinetic.get(idx)?,
            potential: *self.potential.get(idx)?,
            total: *self.total.get(idx)?,
        })
    }
}

impl StepSink for History {
    /// Initial positions are already seeded at registration, so step 0 only
    /// adds the clock and energies.
    fn record(&mut self, record: &StepRecord<'_>) {
        self.times.push(record.time);
        self.kinetic.push(record.energy.kinetic);
        self.potential.push(record.energy.potential);
        self.total.push(record.energy.total);
        if record.step > 0 {
            for (traj, x) in self.trajectories.iter_mut().zip(record.positions.iter()) {
                traj.push(*x);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_is_capped_for_huge_runs() {
        let mut h = History::default();
        h.seed_body(NVec3::zeros());
        h.reserve(usize::MAX);

        assert!(h.times.capacity() > MAX_RESERVE);
        assert!(h.trajectories[0].capacity() >= MAX_RESERVE);
        assert!(h.is_empty());
    }

    #[test]
    fn energy_at_reads_one_recorded_step() {
        let mut h = History::default();
        let positions = [NVec3::zeros()];
        for (step, e) in [(0_u64, -2.0), (1, -1.5)] {
            h.record(&StepRecord {
                step,
                time: step as f64,
                energy: Energy { kinetic: 1.0, potential: e - 1.0, total: e },
                positions: &positions,
            });
        }

        let e1 = h.energy_at(1).unwrap();
        assert_eq!(e1.total, -1.5);
        assert_eq!(e1.potential, -2.5);
        assert!(h.energy_at(2).is_none());
    }
}
