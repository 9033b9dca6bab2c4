//! Validation of caller-supplied `search` arguments
//!
//! Arguments arrive as untrusted JSON. Every field is checked and every
//! problem is reported, so the caller can fix all of them in one round trip.

use std::fmt;

use serde_json::{Map, Number, Value};

use crate::types::{SearchRequest, DEFAULT_NUM_RESULTS, MAX_NUM_RESULTS, MIN_NUM_RESULTS};

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// All problems found in one set of arguments, displayed as
/// `path: message` pairs joined with `, `
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .issues.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl SearchRequest {
    /// Validate a raw arguments object
    ///
    /// - `query`: required, non-empty string
    /// - `numResults`: optional integer in `1..=10`, defaults to 5; out of range is rejected
    /// - `country`: optional string, kept as sent (downstream only uses 2-letter values)
    ///
    /// Unknown keys are ignored.
    pub fn from_arguments(arguments: &Value) -> Result<Self, ValidationError> {
        let Some(object) = arguments.as_object() else {
            return Err(ValidationError {
                issues: vec![FieldIssue::new(
                    "arguments",
                    format!("Expected object, received {}", type_name(arguments)),
                )],
            });
        };

        let mut issues = Vec::new();
        let query = check_query(object, &mut issues);
        let num_results = check_num_results(object, &mut issues);
        let region = check_country(object, &mut issues);

        match (query, num_results) {
            (Some(query), Some(num_results)) if issues.is_empty() => Ok(SearchRequest {
                query,
                num_results,
                region,
            }),
            _ => Err(ValidationError { issues }),
        }
    }
}

fn check_query(object: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match object.get("query") {
        None => {
            issues.push(FieldIssue::new("query", "Required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            issues.push(FieldIssue::new(
                "query",
                "String must contain at least 1 character(s)",
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::new(
                "query",
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

fn check_num_results(object: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<u8> {
    match object.get("numResults") {
        None => Some(DEFAULT_NUM_RESULTS),
        Some(Value::Number(n)) => check_count(n, issues),
        Some(other) => {
            issues.push(FieldIssue::new(
                "numResults",
                format!("Expected number, received {}", type_name(other)),
            ));
            None
        }
    }
}

fn check_count(n: &Number, issues: &mut Vec<FieldIssue>) -> Option<u8> {
    let Some(value) = n.as_f64() else {
        issues.push(FieldIssue::new(
            "numResults",
            format!("Expected number, received {}", n),
        ));
        return None;
    };

    let before = issues.len();
    if value.fract() != 0.0 {
        issues.push(FieldIssue::new(
            "numResults",
            "Expected integer, received float",
        ));
    }
    if value < f64::from(MIN_NUM_RESULTS) {
        issues.push(FieldIssue::new(
            "numResults",
            format!("Number must be greater than or equal to {}", MIN_NUM_RESULTS),
        ));
    }
    if value > f64::from(MAX_NUM_RESULTS) {
        issues.push(FieldIssue::new(
            "numResults",
            format!("Number must be less than or equal to {}", MAX_NUM_RESULTS),
        ));
    }

    // In range and integral, so the cast is exact
    (issues.len() == before).then_some(value as u8)
}

fn check_country(object: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match object.get("country") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::new(
                "country",
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(err: &ValidationError) -> Vec<&str> {
        err.issues().iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_query_only_uses_defaults() {
        let request = SearchRequest::from_arguments(&json!({ "query": "test" })).unwrap();
        assert_eq!(request.query(), "test");
        assert_eq!(request.num_results(), 5);
        assert_eq!(request.region(), None);
    }

    #[test]
    fn test_country_is_kept() {
        let request =
            SearchRequest::from_arguments(&json!({ "query": "test", "country": "us" })).unwrap();
        assert_eq!(request.region(), Some("us"));
    }

    #[test]
    fn test_common_country_codes_unchanged() {
        for code in ["us", "gb", "au", "de", "fr", "jp"] {
            let request =
                SearchRequest::from_arguments(&json!({ "query": "test", "country": code }))
                    .unwrap();
            assert_eq!(request.region(), Some(code));
            assert_eq!(request.region_code(), Some(code));
        }
    }

    #[test]
    fn test_odd_length_country_accepted_but_unused() {
        let request =
            SearchRequest::from_arguments(&json!({ "query": "test", "country": "usa" })).unwrap();
        assert_eq!(request.region(), Some("usa"));
        assert_eq!(request.region_code(), None);
    }

    #[test]
    fn test_num_results_boundaries() {
        for n in [1, 10] {
            let request =
                SearchRequest::from_arguments(&json!({ "query": "q", "numResults": n })).unwrap();
            assert_eq!(request.num_results(), n);
        }

        let err = SearchRequest::from_arguments(&json!({ "query": "q", "numResults": 0 }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "numResults: Number must be greater than or equal to 1"
        );

        let err = SearchRequest::from_arguments(&json!({ "query": "q", "numResults": 11 }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "numResults: Number must be less than or equal to 10"
        );
    }

    #[test]
    fn test_num_results_integral_float_accepted() {
        let request =
            SearchRequest::from_arguments(&json!({ "query": "q", "numResults": 3.0 })).unwrap();
        assert_eq!(request.num_results(), 3);
    }

    #[test]
    fn test_num_results_fraction_rejected() {
        let err = SearchRequest::from_arguments(&json!({ "query": "q", "numResults": 2.5 }))
            .unwrap_err();
        assert_eq!(err.to_string(), "numResults: Expected integer, received float");
    }

    #[test]
    fn test_num_results_wrong_type() {
        let err = SearchRequest::from_arguments(&json!({ "query": "q", "numResults": "5" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "numResults: Expected number, received string");

        let err = SearchRequest::from_arguments(&json!({ "query": "q", "numResults": null }))
            .unwrap_err();
        assert_eq!(err.to_string(), "numResults: Expected number, received null");
    }

    #[test]
    fn test_missing_query() {
        let err = SearchRequest::from_arguments(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "query: Required");
    }

    #[test]
    fn test_empty_query() {
        let err = SearchRequest::from_arguments(&json!({ "query": "" })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "query: String must contain at least 1 character(s)"
        );
    }

    #[test]
    fn test_every_invalid_field_reported() {
        let err = SearchRequest::from_arguments(&json!({
            "query": 42,
            "numResults": 50,
            "country": true
        }))
        .unwrap_err();

        assert_eq!(paths(&err), vec!["query", "numResults", "country"]);
        assert_eq!(
            err.to_string(),
            "query: Expected string, received number, \
             numResults: Number must be less than or equal to 10, \
             country: Expected string, received boolean"
        );
    }

    #[test]
    fn test_non_object_arguments() {
        let err = SearchRequest::from_arguments(&json!(["cats"])).unwrap_err();
        assert_eq!(err.to_string(), "arguments: Expected object, received array");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let request =
            SearchRequest::from_arguments(&json!({ "query": "q", "safe": "active" })).unwrap();
        assert_eq!(request.query(), "q");
    }
}
