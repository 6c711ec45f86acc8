pub mod error;
pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use error::{Error, Result};

pub use simulation::states::{Body, System, NVec3, Color};
pub use simulation::params::{Constants, Parameters};
pub use simulation::forces::{Acceleration, NewtonianGravity};
pub use simulation::energy::Energy;
pub use simulation::integrator::Method;
pub use simulation::history::{History, StepRecord, StepSink};
pub use simulation::engine::Simulation;
pub use simulation::diagnostics::Apsides;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, SimulationConfig, ConstantsConfig, BodyConfig};

pub use output::export::{write_energy_csv, write_trajectories_csv};

pub use benchmark::benchmark::{bench_methods, bench_methods_curve};
