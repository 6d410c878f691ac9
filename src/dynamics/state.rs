//! Compartment identifiers and the simulation state vector
//!
//! This module provides the two core data types shared by every model and
//! solver in the crate:
//!
//! - [`Compartment`]: type-safe identifier for the nine state variables
//! - [`StateVector`]: fixed-order container for one snapshot of the system
//!
//! # Column Order
//!
//! The compartment order is fixed and is the column order of every exported
//! trajectory: S, V, C, I, R, M, γ, η, ξ. Use [`Compartment::ALL`] to iterate
//! in that order and [`Compartment::index`] to map a compartment to its
//! column.

use nalgebra::DVector;
use std::fmt;

// =================================================================================================
// Compartments (Type-safe Identifiers)
// =================================================================================================

/// The nine state variables of the vaccination-dynamics system
///
/// The first five are population compartments (persons); the last four are
/// the misinformation index and the social feedback states (dimensionless,
/// unbounded in this formulation).
///
/// # Example
/// ```
/// use vaxsim_rs::dynamics::Compartment;
///
/// assert_eq!(Compartment::Infected.index(), 3);
/// assert_eq!(Compartment::HealthcareAccess.symbol(), "gamma");
/// assert_eq!(Compartment::ALL.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compartment {
    /// Susceptible population (S)
    Susceptible,

    /// Vaccinated population (V)
    Vaccinated,

    /// Asymptomatic infectious carriers (C)
    Carrier,

    /// Symptomatic infectious population (I)
    Infected,

    /// Recovered population (R)
    Recovered,

    /// Misinformation index (M)
    Misinformation,

    /// Healthcare-access perception state (γ)
    HealthcareAccess,

    /// Social-influence state (η)
    SocialInfluence,

    /// Misinformation-growth modulation state (ξ)
    MisinfoModulation,
}

/// Number of state variables in the system
pub const COMPARTMENT_COUNT: usize = 9;

impl Compartment {
    /// All compartments in column order
    pub const ALL: [Compartment; COMPARTMENT_COUNT] = [
        Compartment::Susceptible,
        Compartment::Vaccinated,
        Compartment::Carrier,
        Compartment::Infected,
        Compartment::Recovered,
        Compartment::Misinformation,
        Compartment::HealthcareAccess,
        Compartment::SocialInfluence,
        Compartment::MisinfoModulation,
    ];

    /// The population compartments S, V, C, I, R (persons)
    pub const POPULATIONS: [Compartment; 5] = [
        Compartment::Susceptible,
        Compartment::Vaccinated,
        Compartment::Carrier,
        Compartment::Infected,
        Compartment::Recovered,
    ];

    /// The misinformation index and social states M, γ, η, ξ (dimensionless)
    pub const SOCIAL: [Compartment; 4] = [
        Compartment::Misinformation,
        Compartment::HealthcareAccess,
        Compartment::SocialInfluence,
        Compartment::MisinfoModulation,
    ];

    /// Column index in the state vector / output matrix
    pub fn index(self) -> usize {
        match self {
            Compartment::Susceptible => 0,
            Compartment::Vaccinated => 1,
            Compartment::Carrier => 2,
            Compartment::Infected => 3,
            Compartment::Recovered => 4,
            Compartment::Misinformation => 5,
            Compartment::HealthcareAccess => 6,
            Compartment::SocialInfluence => 7,
            Compartment::MisinfoModulation => 8,
        }
    }

    /// Short symbol used in CSV headers and error messages
    pub fn symbol(self) -> &'static str {
        match self {
            Compartment::Susceptible => "S",
            Compartment::Vaccinated => "V",
            Compartment::Carrier => "C",
            Compartment::Infected => "I",
            Compartment::Recovered => "R",
            Compartment::Misinformation => "M",
            Compartment::HealthcareAccess => "gamma",
            Compartment::SocialInfluence => "eta",
            Compartment::MisinfoModulation => "xi",
        }
    }

    /// Human-readable label used in plot legends
    pub fn label(self) -> &'static str {
        match self {
            Compartment::Susceptible => "Susceptible",
            Compartment::Vaccinated => "Vaccinated",
            Compartment::Carrier => "Carriers",
            Compartment::Infected => "Infected",
            Compartment::Recovered => "Recovered",
            Compartment::Misinformation => "Misinformation index",
            Compartment::HealthcareAccess => "Healthcare access",
            Compartment::SocialInfluence => "Social influence",
            Compartment::MisinfoModulation => "Misinformation modulation",
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =================================================================================================
// State Vector
// =================================================================================================

/// One snapshot of the full system state (or a derivative vector)
///
/// Wraps a nalgebra [`DVector`] of length [`COMPARTMENT_COUNT`] and is used
/// both for states Y and for right-hand-side values dY/dt. Supports the
/// arithmetic the solvers need (`Add`, `Mul<f64>`) and indexing by
/// [`Compartment`].
///
/// # No clamping
///
/// The container never enforces non-negativity or population conservation.
/// The model has an absolute (not per-capita) inflow Λ, so the total
/// population N(t) drifts and compartments can go negative under extreme
/// parameters; that behavior is surfaced as-is.
///
/// # Example
/// ```
/// use vaxsim_rs::dynamics::{Compartment, StateVector};
///
/// let mut state = StateVector::zeros();
/// state[Compartment::Infected] = 1000.0;
/// assert_eq!(state.total_population(), 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector(DVector<f64>);

impl StateVector {
    /// Create from a nalgebra vector
    ///
    /// # Panics
    ///
    /// Panics if the vector length is not [`COMPARTMENT_COUNT`].
    pub fn new(values: DVector<f64>) -> Self {
        assert_eq!(
            values.len(),
            COMPARTMENT_COUNT,
            "State vector must have {} components, got {}",
            COMPARTMENT_COUNT,
            values.len()
        );
        Self(values)
    }

    /// Create from a slice of 9 values in column order
    pub fn from_slice(values: &[f64]) -> Self {
        Self::new(DVector::from_row_slice(values))
    }

    /// All-zero state (useful as a derivative accumulator)
    pub fn zeros() -> Self {
        Self(DVector::zeros(COMPARTMENT_COUNT))
    }

    /// Value of one compartment
    pub fn get(&self, compartment: Compartment) -> f64 {
        self.0[compartment.index()]
    }

    /// Set one compartment
    pub fn set(&mut self, compartment: Compartment, value: f64) {
        self.0[compartment.index()] = value;
    }

    /// Total alive population N = S + V + C + I + R
    ///
    /// Excludes the dimensionless indices. N is the mixing denominator of
    /// the force of infection and is *not* conserved by the model.
    pub fn total_population(&self) -> f64 {
        Compartment::POPULATIONS.iter().map(|&c| self.get(c)).sum()
    }

    /// First compartment holding a NaN or infinite value, if any
    pub fn first_non_finite(&self) -> Option<Compartment> {
        Compartment::ALL
            .into_iter()
            .find(|&c| !self.get(c).is_finite())
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// Borrow the underlying nalgebra vector
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.0
    }

    /// Borrow the components as a slice in column order
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }
}

// Operator overloading for the solvers: y + f(y) * dt

impl std::ops::Add for StateVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Mul<f64> for StateVector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

impl std::ops::Index<Compartment> for StateVector {
    type Output = f64;

    fn index(&self, compartment: Compartment) -> &f64 {
        &self.0[compartment.index()]
    }
}

impl std::ops::IndexMut<Compartment> for StateVector {
    fn index_mut(&mut self, compartment: Compartment) -> &mut f64 {
        &mut self.0[compartment.index()]
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = Compartment::ALL
            .iter()
            .map(|&c| format!("{}={:.6e}", c.symbol(), self.get(c)))
            .collect();
        write!(f, "[{}]", fields.join(", "))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
