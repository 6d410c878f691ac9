//! Simulation scenario definition
//!
//! A scenario combines an epidemic model with the initial state to
//! integrate from.

use crate::dynamics::{EpidemicModel, StateVector};

/// Simulation scenario
///
/// Defines WHAT to solve:
/// - Epidemic model (equations)
/// - Initial state Y0
///
/// # Design
///
/// The same scenario can be solved with different numerical methods. By
/// default the initial state comes from the model itself
/// ([`EpidemicModel::initial_state`]); [`Scenario::with_initial`] overrides
/// it, which is how parameter sweeps restart from a perturbed state.
///
/// # Example
///
/// ```rust
/// use vaxsim_rs::models::VaccinationModel;
/// use vaxsim_rs::solver::Scenario;
///
/// let scenario = Scenario::new(Box::new(VaccinationModel::reference()));
/// scenario.validate().unwrap();
/// ```
pub struct Scenario {
    /// The model providing the equations
    pub model: Box<dyn EpidemicModel>,

    /// State to integrate from
    pub initial: StateVector,
}

impl Scenario {
    /// Scenario starting from the model's own initial state
    pub fn new(model: Box<dyn EpidemicModel>) -> Self {
        let initial = model.initial_state();
        Self { model, initial }
    }

    /// Scenario starting from an explicit state
    pub fn with_initial(model: Box<dyn EpidemicModel>, initial: StateVector) -> Self {
        Self { model, initial }
    }

    /// Check model and initial state for consistency
    ///
    /// The initial state must match the model dimension and be finite.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial.as_slice().len() != self.model.dim() {
            return Err(format!(
                "Initial state has {} components but model '{}' expects {}",
                self.initial.as_slice().len(),
                self.model.name(),
                self.model.dim()
            ));
        }

        if let Some(compartment) = self.initial.first_non_finite() {
            return Err(format!(
                "Initial state has a non-finite value in {}",
                compartment
            ));
        }

        Ok(())
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::Compartment;
    use crate::models::VaccinationModel;

    #[test]
    fn test_scenario_uses_model_initial_state() {
        let model = VaccinationModel::reference();
        let expected = model.initial_state();

        let scenario = Scenario::new(Box::new(model));
        assert_eq!(scenario.initial, expected);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_scenario_with_custom_initial() {
        let mut initial = VaccinationModel::reference().initial_state();
        initial[Compartment::Infected] = 99.0;

        let scenario =
            Scenario::with_initial(Box::new(VaccinationModel::reference()), initial.clone());
        assert_eq!(scenario.initial[Compartment::Infected], 99.0);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_initial() {
        let mut initial = VaccinationModel::reference().initial_state();
        initial[Compartment::Misinformation] = f64::NAN;

        let scenario = Scenario::with_initial(Box::new(VaccinationModel::reference()), initial);
        let err = scenario.validate().unwrap_err();
        assert!(err.contains("non-finite"));
        assert!(err.contains("M"));
    }

    #[test]
    fn test_model_name_passthrough() {
        let scenario = Scenario::new(Box::new(VaccinationModel::reference()));
        assert!(scenario.model_name().contains("Vaccination"));
    }
}
