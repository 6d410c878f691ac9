//! Model parameters and initial conditions
//!
//! One immutable [`ModelParameters`] struct per run. Every rate is a named
//! field rather than a positional tuple, so scenarios read like the model
//! write-up. `Default` carries the reference parameter set (a large
//! population with daily rates, one-year perception time scales).

/// The 22 scalar parameters of the vaccination-dynamics model
///
/// All rates are per day unless noted. The struct is plain data: no bounds
/// are enforced here, callers pick meaningful values. In particular Λ
/// (`lambda`) is an **absolute** inflow in persons per day, not a per-capita
/// birth rate, so the total population is not conserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    /// Λ — recruitment inflow into S (persons / day)
    pub lambda: f64,
    /// μ — natural death rate
    pub mu: f64,
    /// β — transmission rate
    pub beta: f64,
    /// ε — relative infectiousness of carriers
    pub epsilon: f64,
    /// p0 — baseline vaccination rate
    pub p0: f64,
    /// pmax — maximum vaccination rate under full misinformation response
    pub pmax: f64,
    /// D — misinformation reactivity (saturation steepness of the
    /// vaccination-rate feedback)
    pub reactivity: f64,
    /// ψ — vaccine efficacy (fraction of transmission blocked)
    pub psi: f64,
    /// θ — waning rate of vaccine protection
    pub theta: f64,
    /// σ — progression rate from carrier to symptomatic
    pub sigma: f64,
    /// δ — recovery rate of carriers
    pub delta: f64,
    /// ρ — recovery rate of the infected
    pub rho: f64,
    /// d — disease-induced death rate
    pub mortality: f64,
    /// φ — waning rate of natural immunity
    pub phi: f64,
    /// k — coupling from infection prevalence into misinformation
    pub k: f64,
    /// a — relaxation rate of the misinformation index
    pub a: f64,
    /// α_γ — growth of healthcare-access perception with S/N
    pub alpha_gamma: f64,
    /// β_γ — erosion of healthcare-access perception with I/N
    pub beta_gamma: f64,
    /// α_η — growth of social influence with V/N
    pub alpha_eta: f64,
    /// β_η — damping of social influence with M/N
    pub beta_eta: f64,
    /// α_ξ — growth of misinformation modulation with M
    pub alpha_xi: f64,
    /// β_ξ — damping of misinformation modulation with V/N
    pub beta_xi: f64,
}

impl Default for ModelParameters {
    /// Reference parameter set
    fn default() -> Self {
        Self {
            lambda: 186_121_000.0,
            mu: 1.0 / 70.0,
            beta: 0.3,
            epsilon: 1.0,
            p0: 0.01,
            pmax: 0.05,
            reactivity: 5000.0,
            psi: 0.9,
            theta: 1.0 / 365.0,
            sigma: 0.01,
            delta: 1.0 / 14.0,
            rho: 1.0 / 10.0,
            mortality: 1.0 / 1000.0,
            phi: 1.0 / 365.0,
            k: 0.5,
            a: 1.0 / 30.0,
            alpha_gamma: 0.01,
            beta_gamma: 0.005,
            alpha_eta: 0.02,
            beta_eta: 0.01,
            alpha_xi: 0.005,
            beta_xi: 0.002,
        }
    }
}

/// Starting values for a simulation run
///
/// Only the seeded compartments are free: I0, V0, C0 plus the three social
/// starting points. The remaining components are derived when the model
/// builds its initial state:
///
/// - S0 = Λ − I0 − V0 − C0 (may be negative; not validated)
/// - R0 = 0
/// - M0 = k·I0/Λ
#[derive(Debug, Clone, PartialEq)]
pub struct InitialConditions {
    /// I0 — initially infected (persons)
    pub infected: f64,
    /// V0 — initially vaccinated (persons)
    pub vaccinated: f64,
    /// C0 — initial carriers (persons)
    pub carriers: f64,
    /// γ0 — initial healthcare-access perception
    pub healthcare_access: f64,
    /// η0 — initial social influence
    pub social_influence: f64,
    /// ξ0 — initial misinformation modulation
    pub misinfo_modulation: f64,
}

impl InitialConditions {
    /// Seed the population compartments, keeping the social defaults
    pub fn new(infected: f64, vaccinated: f64, carriers: f64) -> Self {
        Self {
            infected,
            vaccinated,
            carriers,
            ..Self::default()
        }
    }
}

impl Default for InitialConditions {
    /// Reference seeding: 1 000 infected, 10 million vaccinated,
    /// 5 000 carriers
    fn default() -> Self {
        Self {
            infected: 1_000.0,
            vaccinated: 10_000_000.0,
            carriers: 5_000.0,
            healthcare_access: 0.8,
            social_influence: 0.2,
            misinfo_modulation: 0.05,
        }
    }
}
