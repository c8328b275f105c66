use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// CLI-facing lookup result. Field order is the JSON contract: downstream
/// notification tooling parses exactly `email_exists`, `warning`, `channels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub email_exists: bool,
    pub warning: String,
    pub channels: Vec<String>,
}

/// Project a single email onto the resolved mapping. `sheet_url` names the
/// roster document in the warning so a missing entry can be fixed at the
/// source.
pub fn lookup_email(
    map: &HashMap<String, Vec<String>>,
    email: &str,
    sheet_url: &str,
) -> LookupResult {
    match map.get(email) {
        Some(channels) => LookupResult {
            email_exists: true,
            warning: String::new(),
            channels: channels.clone(),
        },
        None => LookupResult {
            email_exists: false,
            warning: format!("Missing email {email} from team sheet {sheet_url}"),
            channels: Vec::new(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/abc123";

    fn sample_map() -> HashMap<String, Vec<String>> {
        let mut map = HashMap::new();
        map.insert(
            "a@x.com".to_string(),
            vec!["@alice".to_string(), "#core-team".to_string()],
        );
        map.insert("quiet@x.com".to_string(), Vec::new());
        map
    }

    #[test]
    fn found_email_has_no_warning() {
        let result = lookup_email(&sample_map(), "a@x.com", SHEET_URL);
        assert!(result.email_exists);
        assert!(result.warning.is_empty());
        assert_eq!(result.channels, vec!["@alice", "#core-team"]);
    }

    #[test]
    fn found_email_with_empty_targets() {
        let result = lookup_email(&sample_map(), "quiet@x.com", SHEET_URL);
        assert!(result.email_exists);
        assert!(result.warning.is_empty());
        assert!(result.channels.is_empty());
    }

    #[test]
    fn missing_email_yields_warning_and_empty_channels() {
        let result = lookup_email(&sample_map(), "missing@x.com", SHEET_URL);
        assert!(!result.email_exists);
        assert!(result.warning.contains("missing@x.com"));
        assert!(result.warning.contains(SHEET_URL));
        assert!(result.channels.is_empty());
    }

    #[test]
    fn json_shape_matches_contract() {
        let result = lookup_email(&sample_map(), "a@x.com", SHEET_URL);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r##"{"email_exists":true,"warning":"","channels":["@alice","#core-team"]}"##
        );
    }

    #[test]
    fn json_roundtrip_unchanged() {
        let result = lookup_email(&sample_map(), "missing@x.com", SHEET_URL);
        let json = serde_json::to_string(&result).unwrap();
        let parsed: LookupResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
