pub mod vector;
pub mod states;
pub mod params;
pub mod forces;
pub mod energy;
pub mod integrator;
pub mod history;
pub mod engine;
pub mod diagnostics;
pub mod scenario;
