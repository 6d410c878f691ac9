//! Example: Misinformation Reactivity Sweep
//!
//! Sweeps the reactivity parameter D of the effective vaccination rate
//! p_eff = γ·(p0 + (pmax − p0)·D·M/(1 + D·M)) and compares the resulting
//! vaccination uptake and epidemic size.
//!
//! ## Structure
//!
//! **Phase 1 — Sweep** (`solve_batch`, one scenario per D value)
//! **Phase 2 — Analysis** (final V and cumulative peak I per run)
//! **Phase 3 — Output** (overlay plot of the infected trajectories)
//!
//! With the `parallel` feature enabled the batch runs on a rayon pool:
//! `cargo run --example misinformation_sweep --features parallel`

use vaxsim_rs::{
    dynamics::Compartment,
    models::{InitialConditions, ModelParameters, VaccinationModel},
    output::export::export_series_csv,
    output::{plot_series, PlotConfig},
    solver::{solve_batch, RK4Solver, Scenario, SolverConfiguration, TimeGrid},
};

use std::error::Error;
use std::time::Instant;

const HORIZON_DAYS: usize = 730;
const REACTIVITIES: [f64; 4] = [0.0, 500.0, 5000.0, 50000.0];

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Misinformation Reactivity Sweep ===\n");

    // ============================= Phase 1: Sweep =============================

    let scenarios: Vec<Scenario> = REACTIVITIES
        .iter()
        .map(|&reactivity| {
            let params = ModelParameters {
                reactivity,
                ..Default::default()
            };
            Scenario::new(Box::new(VaccinationModel::new(
                params,
                InitialConditions::default(),
            )))
        })
        .collect();

    let grid = TimeGrid::uniform(0.0, HORIZON_DAYS as f64, HORIZON_DAYS + 1);
    let config = SolverConfiguration::fixed_step(grid, 4);

    let start = Instant::now();
    let outcomes = solve_batch(&RK4Solver::new(), &scenarios, &config);
    println!(
        "{} runs of {} days in {:.3} s\n",
        outcomes.len(),
        HORIZON_DAYS,
        start.elapsed().as_secs_f64()
    );

    // ============================= Phase 2: Analysis =============================

    println!(
        "{:>10} {:>18} {:>16} {:>10}",
        "D", "final vaccinated", "peak infected", "peak day"
    );

    let mut results = Vec::with_capacity(outcomes.len());
    for (reactivity, outcome) in REACTIVITIES.iter().zip(outcomes) {
        let result = outcome?;

        let infected = result.series(Compartment::Infected);
        let (peak_day, peak) = infected.iter().enumerate().fold(
            (0, f64::NEG_INFINITY),
            |(bd, bv), (d, &v)| if v > bv { (d, v) } else { (bd, bv) },
        );

        println!(
            "{:>10.0} {:>18.0} {:>16.0} {:>10}",
            reactivity,
            result.final_state[Compartment::Vaccinated],
            peak,
            peak_day
        );

        results.push(result);
    }

    // ============================= Phase 3: Output =============================

    for (reactivity, result) in REACTIVITIES.iter().zip(results.iter()) {
        let title = format!("Infected, D = {:.0}", reactivity);
        let config = PlotConfig::time_series(title.as_str());
        plot_series(
            result,
            Compartment::Infected,
            &format!("sweep_infected_d{:.0}.png", reactivity),
            Some(&config),
        )?;

        export_series_csv(
            result,
            Compartment::Vaccinated,
            &format!("sweep_vaccinated_d{:.0}.csv", reactivity),
            None,
        )?;
    }

    println!("\nWrote one plot and one CSV per reactivity value");
    Ok(())
}
