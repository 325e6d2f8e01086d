//! Typed wrappers for the backend endpoints.
//!
//! One function per endpoint. List endpoints answer with an envelope object
//! (`{"events": [...]}`); a missing or `null` list is empty.

pub mod auth;
pub mod events;
pub mod friends;
pub mod groups;
pub mod notifications;
pub mod profile;
pub mod users;

use serde::de::DeserializeOwned;
use serde_json::Value;
use vms_core::HttpError;

/// Extract `body[key]` as a list.
pub(crate) fn list_field<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<Vec<T>, HttpError> {
    match body.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list)
            .map_err(|e| HttpError::decode(format!("Invalid `{key}` list: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_field() {
        let events: Vec<u32> = list_field(json!({"events": [1, 2]}), "events").unwrap();
        assert_eq!(events, vec![1, 2]);

        let empty: Vec<u32> = list_field(json!({"events": null}), "events").unwrap();
        assert!(empty.is_empty());

        let missing: Vec<u32> = list_field(json!({}), "events").unwrap();
        assert!(missing.is_empty());

        let err = list_field::<u32>(json!({"events": "nope"}), "events").unwrap_err();
        assert!(matches!(err, HttpError::Decode { .. }));
    }
}
