//! Shared plumbing for the flight records workspace: logging setup and
//! small response types used by more than one crate.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health::ok();
        let v = serde_json::to_value(&h).expect("serialize");
        assert_eq!(v, serde_json::json!({"status": "ok"}));
    }
}
