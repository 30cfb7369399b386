//! OCR usage query shapes (`POST v3/usage`).
//!
//! The filter rides as query parameters; `group_by` and `timespan` are
//! required and fail the call before any network traffic when left empty.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::encode::{require, Encode, WirePayload};
use crate::Result;

/// Usage query filter.
#[derive(Debug, Clone, Default)]
pub struct UsageRequest {
    /// Starting datetime (inclusive).
    pub from_date: Option<DateTime<Utc>>,
    /// Ending datetime (exclusive).
    pub to_date: Option<DateTime<Utc>>,
    /// Grouping key, e.g. `"usage_type"`. Required.
    pub group_by: String,
    /// Aggregation window, e.g. `"month"`. Required.
    pub timespan: String,
}

impl Encode for UsageRequest {
    fn encode(&self) -> Result<WirePayload> {
        let mut query: Vec<(&'static str, String)> = Vec::new();
        if let Some(from_date) = self.from_date {
            query.push((
                "from_date",
                from_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(to_date) = self.to_date {
            query.push((
                "to_date",
                to_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        query.push(require("group_by", &self.group_by)?);
        query.push(require("timespan", &self.timespan)?);
        Ok(WirePayload { query, body: None })
    }
}

/// Response from the usage endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub ocr_usage: Vec<UsageEntry>,
}

/// One aggregated usage row.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageEntry {
    pub from_date: DateTime<Utc>,
    #[serde(default)]
    pub app_id: Vec<String>,
    #[serde(default)]
    pub usage_type: String,
    #[serde(default)]
    pub request_args_hash: Vec<String>,
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::TimeZone;

    #[test]
    fn missing_required_parameter_is_a_caller_error() {
        let err = UsageRequest {
            group_by: String::new(),
            timespan: "month".into(),
            ..Default::default()
        }
        .encode()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));

        let err = UsageRequest {
            group_by: "usage_type".into(),
            timespan: String::new(),
            ..Default::default()
        }
        .encode()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn complete_filter_encodes_as_query() {
        let payload = UsageRequest {
            from_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            to_date: None,
            group_by: "usage_type".into(),
            timespan: "month".into(),
        }
        .encode()
        .unwrap();
        assert!(payload.body.is_none());
        assert_eq!(
            payload.query,
            vec![
                ("from_date", "2024-01-01T00:00:00Z".to_string()),
                ("group_by", "usage_type".to_string()),
                ("timespan", "month".to_string()),
            ]
        );
    }

    #[test]
    fn response_decodes_usage_rows() {
        let raw = serde_json::json!({
            "ocr_usage": [{
                "from_date": "2024-01-01T00:00:00Z",
                "app_id": ["my-app"],
                "usage_type": "image",
                "request_args_hash": ["abc"],
                "count": 128
            }]
        });
        let resp: UsageResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.ocr_usage[0].count, 128);
        assert_eq!(resp.ocr_usage[0].usage_type, "image");
    }
}
