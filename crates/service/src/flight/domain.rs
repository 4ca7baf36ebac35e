use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flight as seen by callers and carried over the wire.
///
/// `id` is `None` until the record has been saved once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
}

impl Flight {
    pub fn new(source: &str, destination: &str, departure_date: NaiveDate) -> Self {
        Self {
            id: None,
            source: Some(source.to_string()),
            destination: Some(destination.to_string()),
            departure_date: Some(departure_date),
        }
    }
}

impl From<models::flight::Model> for Flight {
    fn from(m: models::flight::Model) -> Self {
        Self { id: Some(m.id), source: m.source, destination: m.destination, departure_date: m.departure_date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_without_id_deserializes() {
        let f: Flight = serde_json::from_value(json!({"source": "BOS", "destination": "JFK", "departureDate": "2024-01-01"})).expect("deserialize");
        assert_eq!(f, Flight::new("BOS", "JFK", NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")));
    }

    #[test]
    fn empty_body_is_all_none() {
        let f: Flight = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(f, Flight::default());
    }

    #[test]
    fn serializes_wire_shape() {
        let f = Flight { id: Some(3), ..Flight::new("BOS", "JFK", NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")) };
        let v = serde_json::to_value(&f).expect("serialize");
        assert_eq!(v, json!({"id": 3, "source": "BOS", "destination": "JFK", "departureDate": "2024-01-01"}));
    }

    #[test]
    fn from_model_carries_id() {
        let m = models::flight::Model { id: 9, source: None, destination: Some("JFK".into()), departure_date: None };
        let f = Flight::from(m);
        assert_eq!(f.id, Some(9));
        assert_eq!(f.destination.as_deref(), Some("JFK"));
    }
}
