//! Nine-compartment vaccination-dynamics model
//!
//! Extended SIR-type model with vaccination, asymptomatic carriers, a
//! misinformation index and three social feedback states. The distinctive
//! feature is the effective vaccination rate: a saturating function of the
//! misinformation index, scaled by the healthcare-access perception, so the
//! social layer feeds back into the epidemiological layer.
//!
//! # Equations
//!
//! With N = S+V+C+I+R, force of infection λ = β(εC + I)/N and effective
//! vaccination rate p_eff = γ·(p0 + (pmax − p0)·D·M/(1 + D·M)):
//!
//! ```text
//! dS/dt = Λ − λS − p_eff·S + θV + φR − μS
//! dV/dt = p_eff·S − (1−ψ)λV − (θ+μ)V
//! dC/dt = λ(S + (1−ψ)V) − (σ+δ+μ)C
//! dI/dt = σC − (ρ+μ+d)I
//! dR/dt = δC + ρI − (φ+μ)R
//! dM/dt = a(kI/Λ − M) + ηM − ξM
//! dγ/dt = α_γ·(S/N) − β_γ·(I/N)
//! dη/dt = α_η·(V/N) − β_η·(M/N)
//! dξ/dt = α_ξ·M − β_ξ·(V/N)
//! ```
//!
//! The system is autonomous; `t` is unused inside the right-hand side.
//!
//! Some social-layer terms mix dimensionless indices with per-day rates
//! (dM/dt couples ηM and ξM directly, dξ/dt couples M without a rate).
//! That is a property of the source formulation and is reproduced exactly,
//! never rescaled.

use crate::dynamics::{Compartment, EpidemicModel, StateVector};

use super::parameters::{InitialConditions, ModelParameters};

/// The vaccination-dynamics model: parameters plus initial seeding
///
/// Construct with [`VaccinationModel::new`] for custom values or
/// [`VaccinationModel::reference`] for the reference scenario, then hand it
/// to a solver via [`Scenario`](crate::solver::Scenario).
///
/// # Example
///
/// ```rust
/// use vaxsim_rs::models::{InitialConditions, ModelParameters, VaccinationModel};
/// use vaxsim_rs::dynamics::{Compartment, EpidemicModel};
///
/// let params = ModelParameters { beta: 0.4, ..Default::default() };
/// let model = VaccinationModel::new(params, InitialConditions::default());
///
/// let y0 = model.initial_state();
/// assert_eq!(y0[Compartment::Recovered], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct VaccinationModel {
    params: ModelParameters,
    initial: InitialConditions,
}

impl VaccinationModel {
    /// Create a model from parameters and initial conditions
    pub fn new(params: ModelParameters, initial: InitialConditions) -> Self {
        Self { params, initial }
    }

    /// The reference scenario (default parameters and seeding)
    pub fn reference() -> Self {
        Self::new(ModelParameters::default(), InitialConditions::default())
    }

    /// Model parameters
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Initial conditions
    pub fn initial_conditions(&self) -> &InitialConditions {
        &self.initial
    }

    /// Effective vaccination rate p_eff(γ, M)
    ///
    /// Saturating response to the misinformation index, scaled by the
    /// healthcare-access perception:
    ///
    /// p_eff = γ·(p0 + (pmax − p0)·D·M/(1 + D·M))
    ///
    /// Edge cases: M = 0 or D = 0 gives γ·p0; D·M → ∞ saturates at γ·pmax.
    pub fn effective_vaccination_rate(&self, healthcare_access: f64, misinformation: f64) -> f64 {
        let p = &self.params;
        let dm = p.reactivity * misinformation;
        healthcare_access * (p.p0 + (p.pmax - p.p0) * dm / (1.0 + dm))
    }

    /// Force of infection λ = β(εC + I)/N
    fn force_of_infection(&self, state: &StateVector, n: f64) -> f64 {
        let c = state[Compartment::Carrier];
        let i = state[Compartment::Infected];
        self.params.beta * (self.params.epsilon * c + i) / n
    }
}

impl EpidemicModel for VaccinationModel {
    fn derivatives(&self, _t: f64, state: &StateVector) -> StateVector {
        let p = &self.params;

        let s = state[Compartment::Susceptible];
        let v = state[Compartment::Vaccinated];
        let c = state[Compartment::Carrier];
        let i = state[Compartment::Infected];
        let r = state[Compartment::Recovered];
        let m = state[Compartment::Misinformation];
        let gamma = state[Compartment::HealthcareAccess];
        let eta = state[Compartment::SocialInfluence];
        let xi = state[Compartment::MisinfoModulation];

        let n = state.total_population();
        let lam = self.force_of_infection(state, n);
        let p_eff = self.effective_vaccination_rate(gamma, m);

        let mut d = StateVector::zeros();

        d[Compartment::Susceptible] = p.lambda - lam * s - p_eff * s + p.theta * v + p.phi * r - p.mu * s;
        d[Compartment::Vaccinated] = p_eff * s - (1.0 - p.psi) * lam * v - (p.theta + p.mu) * v;
        d[Compartment::Carrier] = lam * (s + (1.0 - p.psi) * v) - (p.sigma + p.delta + p.mu) * c;
        d[Compartment::Infected] = p.sigma * c - (p.rho + p.mu + p.mortality) * i;
        d[Compartment::Recovered] = p.delta * c + p.rho * i - (p.phi + p.mu) * r;
        d[Compartment::Misinformation] = p.a * (p.k * i / p.lambda - m) + eta * m - xi * m;
        d[Compartment::HealthcareAccess] = p.alpha_gamma * (s / n) - p.beta_gamma * (i / n);
        d[Compartment::SocialInfluence] = p.alpha_eta * (v / n) - p.beta_eta * (m / n);
        d[Compartment::MisinfoModulation] = p.alpha_xi * m - p.beta_xi * (v / n);

        d
    }

    fn initial_state(&self) -> StateVector {
        let ic = &self.initial;
        let p = &self.params;

        let s0 = p.lambda - ic.infected - ic.vaccinated - ic.carriers;
        let m0 = p.k * ic.infected / p.lambda;

        let mut y0 = StateVector::zeros();
        y0[Compartment::Susceptible] = s0;
        y0[Compartment::Vaccinated] = ic.vaccinated;
        y0[Compartment::Carrier] = ic.carriers;
        y0[Compartment::Infected] = ic.infected;
        y0[Compartment::Recovered] = 0.0;
        y0[Compartment::Misinformation] = m0;
        y0[Compartment::HealthcareAccess] = ic.healthcare_access;
        y0[Compartment::SocialInfluence] = ic.social_influence;
        y0[Compartment::MisinfoModulation] = ic.misinfo_modulation;
        y0
    }

    fn name(&self) -> &str {
        "Vaccination dynamics with misinformation feedback"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Nine-compartment SVCIR model with a misinformation index and \
             social states modulating the effective vaccination rate",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
