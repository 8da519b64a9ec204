use thiserror::Error;

use crate::types::itinerary::{MAX_DAYS, MIN_DAYS};
use crate::types::{BudgetTier, ItineraryPlan, ItineraryRequest};

/// User-facing reasons a submission is refused before any request is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in your name and select at least one interest.")]
    MissingNameOrInterests,

    #[error("Days must be between {MIN_DAYS} and {MAX_DAYS}.")]
    DaysOutOfRange,

    #[error("An itinerary request is already in progress.")]
    RequestInFlight,

    #[error("Failed to generate itinerary. Please try again.")]
    GenerationFailed,
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    /// A plan is displayed alongside the still-editable form.
    Displaying,
}

/// Trip-preference form state machine: `Editing → Submitting →
/// {Displaying | Editing}`.
///
/// The submit gate is client-side: no request is issued unless the name is
/// non-empty and at least one interest is selected. While a request is in
/// flight further submissions are refused.
#[derive(Debug, Clone)]
pub struct ItineraryForm {
    pub user_name: String,
    days: u8,
    interests: Vec<String>,
    pub budget: BudgetTier,
    pub special_requirements: String,
    phase: FormPhase,
    plan: Option<ItineraryPlan>,
}

impl Default for ItineraryForm {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            days: 3,
            interests: Vec::new(),
            budget: BudgetTier::default(),
            special_requirements: String::new(),
            phase: FormPhase::Editing,
            plan: None,
        }
    }
}

impl ItineraryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(&self) -> u8 {
        self.days
    }

    pub fn set_days(&mut self, days: u8) -> Result<(), FormError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(FormError::DaysOutOfRange);
        }
        self.days = days;
        Ok(())
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Toggle set membership: add the interest if absent, remove if present.
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(position) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(position);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// The last generated plan, kept until a newer one replaces it.
    pub fn plan(&self) -> Option<&ItineraryPlan> {
        self.plan.as_ref()
    }

    /// Gate and build the request. On success the form enters `Submitting`
    /// and the caller owns exactly one in-flight request.
    pub fn try_submit(&mut self) -> Result<ItineraryRequest, FormError> {
        if self.is_submitting() {
            return Err(FormError::RequestInFlight);
        }
        if self.user_name.trim().is_empty() || self.interests.is_empty() {
            return Err(FormError::MissingNameOrInterests);
        }

        self.phase = FormPhase::Submitting;

        let special_requirements = match self.special_requirements.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        Ok(ItineraryRequest {
            user_name: self.user_name.clone(),
            days: self.days,
            interests: self.interests.clone(),
            budget: self.budget,
            special_requirements,
        })
    }

    /// Success transition: display the plan; inputs are retained, not
    /// cleared.
    pub fn submit_succeeded(&mut self, plan: ItineraryPlan) {
        self.plan = Some(plan);
        self.phase = FormPhase::Displaying;
    }

    /// Failure transition: back to editing. A previously displayed plan is
    /// kept; nothing from the failed attempt is.
    pub fn submit_failed(&mut self) {
        self.phase = FormPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> ItineraryPlan {
        ItineraryPlan {
            days: 3,
            destinations: vec!["Hundru Falls".to_string()],
            activities: vec!["Waterfall trek".to_string()],
            accommodation_suggestions: vec!["Eco lodge".to_string()],
            transport_suggestions: vec!["Local taxi".to_string()],
            total_cost_estimate: "₹15,000".to_string(),
        }
    }

    #[test]
    fn submit_blocked_without_name() {
        let mut form = ItineraryForm::new();
        form.toggle_interest("Waterfalls");
        assert_eq!(form.try_submit(), Err(FormError::MissingNameOrInterests));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn submit_blocked_without_interests() {
        let mut form = ItineraryForm::new();
        form.user_name = "Asha".to_string();
        assert_eq!(form.try_submit(), Err(FormError::MissingNameOrInterests));
    }

    #[test]
    fn whitespace_name_does_not_pass_the_gate() {
        let mut form = ItineraryForm::new();
        form.user_name = "   ".to_string();
        form.toggle_interest("Wildlife");
        assert_eq!(form.try_submit(), Err(FormError::MissingNameOrInterests));
    }

    #[test]
    fn toggle_interest_adds_then_removes() {
        let mut form = ItineraryForm::new();
        form.toggle_interest("Wildlife");
        assert_eq!(form.interests(), ["Wildlife"]);
        form.toggle_interest("Wildlife");
        assert!(form.interests().is_empty());
    }

    #[test]
    fn days_setter_enforces_bounds() {
        let mut form = ItineraryForm::new();
        assert_eq!(form.set_days(0), Err(FormError::DaysOutOfRange));
        assert_eq!(form.set_days(11), Err(FormError::DaysOutOfRange));
        assert!(form.set_days(10).is_ok());
        assert_eq!(form.days(), 10);
    }

    #[test]
    fn submit_builds_request_and_enters_submitting() {
        let mut form = ItineraryForm::new();
        form.user_name = "Asha".to_string();
        form.toggle_interest("Eco-tourism");
        form.toggle_interest("Waterfalls");
        form.special_requirements = "  ".to_string();

        let request = form.try_submit().unwrap();
        assert_eq!(request.user_name, "Asha");
        assert_eq!(request.days, 3);
        assert_eq!(request.interests, ["Eco-tourism", "Waterfalls"]);
        assert_eq!(request.special_requirements, None);
        assert!(form.is_submitting());

        // Duplicate submission while pending is refused.
        assert_eq!(form.try_submit(), Err(FormError::RequestInFlight));
    }

    #[test]
    fn success_keeps_form_inputs_and_displays_plan() {
        let mut form = ItineraryForm::new();
        form.user_name = "Asha".to_string();
        form.toggle_interest("Wildlife");
        form.try_submit().unwrap();

        form.submit_succeeded(plan());
        assert_eq!(form.phase(), FormPhase::Displaying);
        assert_eq!(form.user_name, "Asha");
        assert_eq!(form.interests(), ["Wildlife"]);
        assert_eq!(form.plan().unwrap().destinations, ["Hundru Falls"]);
    }

    #[test]
    fn failure_returns_to_editing_and_keeps_previous_plan() {
        let mut form = ItineraryForm::new();
        form.user_name = "Asha".to_string();
        form.toggle_interest("Wildlife");
        form.try_submit().unwrap();
        form.submit_succeeded(plan());

        form.try_submit().unwrap();
        form.submit_failed();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.plan().is_some());
    }
}
