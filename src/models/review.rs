use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single ownership review as the backend serves it. Reviews are immutable
/// once created; the client only ever holds read-only copies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default = "default_rider_name")]
    pub rider_name: String,
    pub bike_name: String,
    pub model_name: String,
    pub purchase_year: i32,
    #[serde(rename = "totalKM")]
    pub total_km: f64,
    pub bike_cost: f64,
    pub cost_per_service: f64,
    #[serde(default)]
    pub minor_repair_cost: f64,
    #[serde(default)]
    pub major_repair_cost: f64,
    pub review: String,
    pub rating: f64,
    pub worth_the_cost: WorthTheCost,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// Old records predate the rider name field.
fn default_rider_name() -> String {
    "Anonymous".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorthTheCost {
    #[default]
    Yes,
    #[serde(rename = "Definitely Yes")]
    DefinitelyYes,
    No,
}

impl WorthTheCost {
    /// The wire value, also used as the radio input value on the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorthTheCost::Yes => "Yes",
            WorthTheCost::DefinitelyYes => "Definitely Yes",
            WorthTheCost::No => "No",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "Definitely Yes" => WorthTheCost::DefinitelyYes,
            "No" => WorthTheCost::No,
            _ => WorthTheCost::Yes,
        }
    }

    /// Short badge label shown on review cards.
    pub fn badge_label(&self) -> &'static str {
        match self {
            WorthTheCost::Yes => "Worth It",
            WorthTheCost::DefinitelyYes => "Highly Worth It",
            WorthTheCost::No => "Not Worth It",
        }
    }

    /// Headline shown in the value assessment section of the detail page.
    pub fn verdict(&self) -> &'static str {
        match self {
            WorthTheCost::Yes => "Worth the Cost",
            WorthTheCost::DefinitelyYes => "Definitely Worth the Cost",
            WorthTheCost::No => "Not Worth the Cost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let payload = r#"{
            "_id": "66f2a1b3c4d5e6f7a8b9c0d1",
            "riderName": "Asha",
            "bikeName": "Royal Enfield",
            "modelName": "Classic 350",
            "purchaseYear": 2021,
            "totalKM": 18250,
            "bikeCost": 195000,
            "costPerService": 1200,
            "minorRepairCost": 800,
            "majorRepairCost": 4500,
            "review": "Smooth highway cruiser.",
            "rating": 4,
            "worthTheCost": "Definitely Yes",
            "images": ["/uploads/re-classic-1.jpg", "https://cdn.example.com/re-2.jpg"],
            "createdAt": "2024-09-24T08:15:30.000Z"
        }"#;

        let review: Review = serde_json::from_str(payload).unwrap();
        assert_eq!(review.id, "66f2a1b3c4d5e6f7a8b9c0d1");
        assert_eq!(review.rider_name, "Asha");
        assert_eq!(review.model_name, "Classic 350");
        assert_eq!(review.total_km, 18250.0);
        assert_eq!(review.worth_the_cost, WorthTheCost::DefinitelyYes);
        assert_eq!(review.images.len(), 2);
        assert_eq!(
            review.created_at,
            "2024-09-24T08:15:30Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn missing_rider_and_repair_costs_get_defaults() {
        let payload = r#"{
            "_id": "abc",
            "bikeName": "Honda",
            "modelName": "CB350",
            "purchaseYear": 2019,
            "totalKM": 4000,
            "bikeCost": 210000,
            "costPerService": 900,
            "review": "ok",
            "rating": 3.5,
            "worthTheCost": "Yes",
            "images": ["a.jpg", "b.jpg", "c.jpg"],
            "createdAt": "2023-01-02T00:00:00Z"
        }"#;

        let review: Review = serde_json::from_str(payload).unwrap();
        assert_eq!(review.rider_name, "Anonymous");
        assert_eq!(review.minor_repair_cost, 0.0);
        assert_eq!(review.major_repair_cost, 0.0);
    }

    #[test]
    fn worth_the_cost_round_trips_its_wire_values() {
        for worth in [
            WorthTheCost::Yes,
            WorthTheCost::DefinitelyYes,
            WorthTheCost::No,
        ] {
            let json = serde_json::to_string(&worth).unwrap();
            assert_eq!(json, format!("\"{}\"", worth.as_str()));
            assert_eq!(WorthTheCost::from_str(worth.as_str()), worth);
        }
    }
}
