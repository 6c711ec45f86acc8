use solsim::simulation::diagnostics::{final_energy_drift, max_energy_drift};
use solsim::simulation::scenario::{add_asteroid, solar_system, sun_earth, CERES_MASS};
use solsim::{bench_methods, bench_methods_curve, write_energy_csv, write_trajectories_csv};
use solsim::{Constants, Method, Parameters, Scenario, ScenarioConfig, Simulation};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Builtin {
    SunEarth,
    SolarSystem,
    Asteroid,
}

#[derive(Parser, Debug)]
#[command(about = "Integrate a small solar system and report energy drift")]
struct Args {
    /// Scenario YAML, looked up as given and then under `scenarios/`
    #[arg(short, long)]
    file: Option<String>,

    /// Built-in scenario, used when no file is given
    #[arg(long, value_enum, default_value = "sun-earth")]
    scenario: Builtin,

    /// Integration method override
    #[arg(short, long)]
    method: Option<String>,

    /// Step size override, days
    #[arg(long)]
    dt_days: Option<f64>,

    /// End time override, years
    #[arg(long)]
    years: Option<f64>,

    /// Write trajectories.csv and energy.csv here
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Run the scenario once per method and compare energy drift
    #[arg(long)]
    energy_study: bool,

    /// Print per-method step timings instead of simulating
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV curve over many system sizes
    #[arg(long, requires = "bench")]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

/// Build a ready-to-run simulation from the arguments, with `method` forced when given
fn build_simulation(args: &Args, method: Option<Method>) -> Result<Simulation> {
    let c = Constants::SI;
    let override_method = match &args.method {
        Some(name) => Some(name.parse::<Method>()?),
        None => None,
    };

    let mut sim = match &args.file {
        Some(file_name) => {
            let mut cfg = load_scenario_from_yaml(file_name)?;
            if let Some(m) = method.or(override_method) {
                cfg.simulation.method = m;
            }
            if let Some(d) = args.dt_days {
                cfg.simulation.time_step = d * c.day;
            }
            if let Some(y) = args.years {
                cfg.simulation.end_time = y * c.year;
            }
            return Ok(Scenario::build(cfg)?);
        }
        None => {
            let mut params = Parameters::default();
            if let Some(d) = args.dt_days {
                params.time_step = d * c.day;
            }
            if let Some(y) = args.years {
                params.end_time = y * c.year;
            }
            let m = method.or(override_method).unwrap_or(Method::Verlet);
            Simulation::new(m, params)
        }
    };

    match args.scenario {
        Builtin::SunEarth => sun_earth(&mut sim)?,
        Builtin::SolarSystem => solar_system(&mut sim)?,
        Builtin::Asteroid => {
            solar_system(&mut sim)?;
            add_asteroid(&mut sim, CERES_MASS, 0.0)?;
        }
    }
    Ok(sim)
}

fn export(sim: &Simulation, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let traj_path = dir.join("trajectories.csv");
    let file = File::create(&traj_path).with_context(|| format!("failed to create {}", traj_path.display()))?;
    write_trajectories_csv(BufWriter::new(file), sim)?;

    let energy_path = dir.join("energy.csv");
    let file = File::create(&energy_path).with_context(|| format!("failed to create {}", energy_path.display()))?;
    write_energy_csv(BufWriter::new(file), sim)?;

    log::info!("wrote {} and {}", traj_path.display(), energy_path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_methods_curve()?;
        } else {
            bench_methods()?;
        }
        return Ok(());
    }

    if args.energy_study {
        println!("method,final_drift,max_drift");
        for method in Method::ALL {
            let mut sim = build_simulation(&args, Some(method))?;
            let history = sim.run()?;
            println!(
                "{},{:.6e},{:.6e}",
                method,
                final_energy_drift(history).unwrap_or(f64::NAN),
                max_energy_drift(history).unwrap_or(f64::NAN)
            );
        }
        return Ok(());
    }

    let mut sim = build_simulation(&args, None)?;
    sim.run()?;

    let years = sim.clock() / sim.parameters().constants.year;
    println!(
        "{}: {} bodies, {} steps, {:.3} years, final energy drift {:.3e}",
        sim.method(),
        sim.bodies().len(),
        sim.history().len().saturating_sub(1),
        years,
        final_energy_drift(sim.history()).unwrap_or(f64::NAN)
    );

    if let Some(dir) = &args.out_dir {
        export(&sim, dir)?;
    }

    Ok(())
}
