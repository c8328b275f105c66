use crate::error::{Result, RosterError};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One block of cells as returned by the values service. A range with no
/// data at all comes back without a `values` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchGetResponse {
    #[serde(default)]
    value_ranges: Vec<ValueRange>,
}

// ---------------------------------------------------------------------------
// SheetsClient
// ---------------------------------------------------------------------------

/// Minimal read-only client for the spreadsheet values service: a single
/// batch fetch, no retries, no pagination.
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl SheetsClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch several ranges in one round trip. The service returns value
    /// ranges in the same order as the requested ranges.
    pub fn batch_get(&self, spreadsheet_id: &str, ranges: &[&str]) -> Result<Vec<ValueRange>> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values:batchGet",
            self.endpoint.trim_end_matches('/'),
            spreadsheet_id
        );
        let mut query: Vec<(&str, &str)> = ranges.iter().map(|r| ("ranges", *r)).collect();
        query.push(("key", self.api_key.as_str()));

        let response = self.http.get(&url).query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RosterError::Fetch {
                status: status.as_u16(),
                body,
            });
        }
        let parsed: BatchGetResponse = response.json()?;
        Ok(parsed.value_ranges)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn batch_get_parses_value_ranges_in_order() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v4/spreadsheets/sheet123/values:batchGet")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ranges".into(), "People!A2:H".into()),
                Matcher::UrlEncoded("ranges".into(), "Teams!A2:B".into()),
                Matcher::UrlEncoded("key".into(), "test-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                  "valueRanges": [
                    {"range": "People!A2:H3", "values": [["Alice", "a@x.com", "core"]]},
                    {"range": "Teams!A2:B2", "values": [["core", "core-team"]]}
                  ]
                }"#,
            )
            .create();

        let client = SheetsClient::new(server.url(), "test-key");
        let ranges = client
            .batch_get("sheet123", &["People!A2:H", "Teams!A2:B"])
            .unwrap();

        mock.assert();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].values[0][0], "Alice");
        assert_eq!(ranges[1].values[0][1], "core-team");
    }

    #[test]
    fn missing_values_key_is_empty_table() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/v4/spreadsheets/sheet123/values:batchGet")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"valueRanges": [{"range": "People!A2:H"}]}"#)
            .create();

        let client = SheetsClient::new(server.url(), "test-key");
        let ranges = client.batch_get("sheet123", &["People!A2:H"]).unwrap();
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].values.is_empty());
    }

    #[test]
    fn non_success_status_is_fetch_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/v4/spreadsheets/sheet123/values:batchGet")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body("PERMISSION_DENIED")
            .create();

        let client = SheetsClient::new(server.url(), "bad-key");
        let err = client.batch_get("sheet123", &["People!A2:H"]).unwrap_err();
        match err {
            RosterError::Fetch { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("PERMISSION_DENIED"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn endpoint_trailing_slash_tolerated() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v4/spreadsheets/sheet123/values:batchGet")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"valueRanges": []}"#)
            .create();

        let client = SheetsClient::new(format!("{}/", server.url()), "test-key");
        client.batch_get("sheet123", &["People!A2:H"]).unwrap();
        mock.assert();
    }
}
