use std::collections::BTreeMap;

use chrono::{Datelike, Utc};

use crate::models::review::WorthTheCost;

/// Everything the submission form collects before it is sent to the backend.
/// Numeric fields arrive from free-text inputs, so unparseable input has
/// already been coerced to zero by the time a draft is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub rider_name: String,
    pub bike_name: String,
    pub model_name: String,
    pub purchase_year: i32,
    pub total_km: f64,
    pub bike_cost: f64,
    pub cost_per_service: f64,
    pub minor_repair_cost: f64,
    pub major_repair_cost: f64,
    pub review: String,
    pub rating: u8,
    pub worth_the_cost: WorthTheCost,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            rider_name: String::new(),
            bike_name: String::new(),
            model_name: String::new(),
            purchase_year: Utc::now().year(),
            total_km: 0.0,
            bike_cost: 0.0,
            cost_per_service: 0.0,
            minor_repair_cost: 0.0,
            major_repair_cost: 0.0,
            review: String::new(),
            rating: 0,
            worth_the_cost: WorthTheCost::Yes,
        }
    }
}

impl ReviewDraft {
    /// Client-side validation. A non-empty result blocks submission; nothing
    /// reaches the network until this comes back clean.
    pub fn validate(&self, image_count: usize) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.bike_name.is_empty() {
            errors.insert("bike_name", "Please select a bike brand");
        }
        if self.model_name.is_empty() {
            errors.insert("model_name", "Please select a model");
        }
        if self.rating == 0 {
            errors.insert("rating", "Please rate your bike");
        }
        if self.review.trim().is_empty() {
            errors.insert("review", "Please share your experience");
        }

        let current_year = Utc::now().year();
        if self.purchase_year < 1900 || self.purchase_year > current_year {
            errors.insert("purchase_year", "Please enter a valid year");
        }

        if self.total_km < 0.0 {
            errors.insert("total_km", "Cannot be negative");
        }
        if self.bike_cost <= 0.0 {
            errors.insert("bike_cost", "Please enter the bike cost");
        }
        if self.cost_per_service < 0.0 {
            errors.insert("cost_per_service", "Cannot be negative");
        }
        if self.minor_repair_cost < 0.0 {
            errors.insert("minor_repair_cost", "Cannot be negative");
        }
        if self.major_repair_cost < 0.0 {
            errors.insert("major_repair_cost", "Cannot be negative");
        }

        if image_count < 3 {
            errors.insert("images", "Please upload at least 3 images");
        }

        errors
    }
}

/// Per-field validation messages, keyed by draft field name. The `submit` key
/// carries the submission-level message when the backend rejects a create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ReviewDraft {
        ReviewDraft {
            rider_name: "Ravi".into(),
            bike_name: "KTM".into(),
            model_name: "Duke 390".into(),
            purchase_year: 2022,
            total_km: 12000.0,
            bike_cost: 310000.0,
            cost_per_service: 2500.0,
            minor_repair_cost: 0.0,
            major_repair_cost: 0.0,
            review: "Sharp handling, firm seat.".into(),
            rating: 4,
            worth_the_cost: WorthTheCost::Yes,
        }
    }

    #[test]
    fn complete_draft_with_three_images_passes() {
        let errors = complete_draft().validate(3);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn two_images_are_rejected() {
        let errors = complete_draft().validate(2);
        assert_eq!(
            errors.get("images").as_deref(),
            Some("Please upload at least 3 images")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unrated_draft_is_rejected_even_with_enough_images() {
        let draft = ReviewDraft {
            rating: 0,
            ..complete_draft()
        };
        let errors = draft.validate(4);
        assert_eq!(errors.get("rating").as_deref(), Some("Please rate your bike"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn missing_required_fields_each_get_a_message() {
        let errors = ReviewDraft::default().validate(0);
        for field in ["bike_name", "model_name", "rating", "review", "bike_cost", "images"] {
            assert!(errors.get(field).is_some(), "expected message for {field}");
        }
    }

    #[test]
    fn purchase_year_must_be_plausible() {
        let too_old = ReviewDraft {
            purchase_year: 1899,
            ..complete_draft()
        };
        assert!(too_old.validate(3).get("purchase_year").is_some());

        let future = ReviewDraft {
            purchase_year: Utc::now().year() + 1,
            ..complete_draft()
        };
        assert!(future.validate(3).get("purchase_year").is_some());
    }

    #[test]
    fn negative_measures_are_rejected() {
        let draft = ReviewDraft {
            total_km: -1.0,
            cost_per_service: -20.0,
            ..complete_draft()
        };
        let errors = draft.validate(3);
        assert_eq!(errors.get("total_km").as_deref(), Some("Cannot be negative"));
        assert_eq!(
            errors.get("cost_per_service").as_deref(),
            Some("Cannot be negative")
        );
    }
}
