//! Example: Baseline Vaccination Scenario
//!
//! Runs the reference scenario for one year with both fixed-step solvers and
//! the adaptive solver, then writes plots and a CSV export.
//!
//! ## Structure
//!
//! **Phase 1 — Simulation** (3 solvers on the same scenario)
//! - RK4 with 4 sub-steps per day is the production default
//! - Euler at the same sub-stepping serves as an accuracy baseline
//! - Dormand-Prince 4(5) cross-checks both at default tolerances
//!
//! **Phase 2 — Analysis**
//! - Peak infection day and size, final compartment sizes
//! - Euler vs RK4 discrepancy at the final state
//!
//! **Phase 3 — Output**
//! - `baseline_populations.png`, `baseline_social.png`
//! - `baseline_run.csv` with a metadata header
//!
//! Run with: `cargo run --example baseline`

use vaxsim_rs::{
    dynamics::Compartment,
    models::VaccinationModel,
    output::export::{export_trajectory_csv, CsvConfig, CsvMetadata},
    output::{plot_populations, plot_social_indices},
    solver::{
        DormandPrince45Solver, EulerSolver, RK4Solver, Scenario, SimulationResult, Solver,
        SolverConfiguration, TimeGrid,
    },
};

use std::error::Error;
use std::time::Instant;

const HORIZON_DAYS: usize = 365;
const SUBSTEPS: usize = 4;

fn run_solver(
    solver: &dyn Solver,
    config: &SolverConfiguration,
) -> Result<(SimulationResult, f64), String> {
    let scenario = Scenario::new(Box::new(VaccinationModel::reference()));
    let start = Instant::now();
    let result = solver.solve(&scenario, config)?;
    Ok((result, start.elapsed().as_secs_f64()))
}

fn peak_infection(result: &SimulationResult) -> (f64, f64) {
    let infected = result.series(Compartment::Infected);
    let (day, peak) = infected
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(bd, bv), (d, &v)| {
            if v > bv {
                (d, v)
            } else {
                (bd, bv)
            }
        });
    (result.time_points[day], peak)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Baseline Vaccination Scenario ===\n");

    let grid = TimeGrid::uniform(0.0, HORIZON_DAYS as f64, HORIZON_DAYS + 1);
    let fixed = SolverConfiguration::fixed_step(grid.clone(), SUBSTEPS);
    let adaptive = SolverConfiguration::adaptive(grid);

    // ============================= Phase 1: Simulation =============================

    let (rk4_result, rk4_secs) = run_solver(&RK4Solver::new(), &fixed)?;
    let (euler_result, euler_secs) = run_solver(&EulerSolver::new(), &fixed)?;
    let (dp_result, dp_secs) = run_solver(&DormandPrince45Solver::new(), &adaptive)?;

    println!("Solver timings over {} days:", HORIZON_DAYS);
    println!("  RK4 ({} substeps/day): {:.3} s", SUBSTEPS, rk4_secs);
    println!("  Euler ({} substeps/day): {:.3} s", SUBSTEPS, euler_secs);
    println!(
        "  DP45 (rtol 1e-6, {} accepted steps): {:.3} s\n",
        dp_result
            .metadata
            .get("accepted steps")
            .map(String::as_str)
            .unwrap_or("?"),
        dp_secs
    );

    // ============================= Phase 2: Analysis =============================

    let (peak_day, peak_size) = peak_infection(&rk4_result);
    println!("Peak infection: {:.0} infected on day {:.0}", peak_size, peak_day);

    println!("Final state (RK4):");
    for compartment in Compartment::ALL {
        println!(
            "  {:>6}: {:>16.2}",
            compartment.symbol(),
            rk4_result.final_state[compartment]
        );
    }

    let euler_drift = (euler_result.final_state[Compartment::Infected]
        - rk4_result.final_state[Compartment::Infected])
        .abs();
    let dp_drift = (dp_result.final_state[Compartment::Infected]
        - rk4_result.final_state[Compartment::Infected])
        .abs();
    println!("\nFinal infected, |Euler - RK4|: {:.2}", euler_drift);
    println!("Final infected, |DP45  - RK4|: {:.4}", dp_drift);

    // ============================= Phase 3: Output =============================

    plot_populations(&rk4_result, "baseline_populations.png", None)?;
    plot_social_indices(&rk4_result, "baseline_social.png", None)?;

    let csv_config = CsvConfig::default().with_metadata(CsvMetadata::from_result(&rk4_result));
    export_trajectory_csv(&rk4_result, "baseline_run.csv", Some(&csv_config))?;

    println!("\nWrote baseline_populations.png, baseline_social.png, baseline_run.csv");
    Ok(())
}
