use serde::{Serialize, de::DeserializeOwned};

/// Decode a JSON list column. A corrupted value is logged and read back as an
/// empty list so a single bad row never hides the rest of a collection.
pub fn decode_json_list<T: DeserializeOwned>(column: &str, raw: &str) -> Vec<T> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(column, error = %e, "Corrupted JSON list, reading as empty");
            Vec::new()
        }
    }
}

pub fn encode_json_list<T: Serialize>(values: &[T]) -> crate::Result<String> {
    Ok(serde_json::to_string(values)?)
}
