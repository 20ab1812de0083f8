//! Alert value types shared across the dashboard core.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Value above which a record counts as an anomaly.
pub const ANOMALY_THRESHOLD: f64 = 80.0;

/// Time format the backend's search route parses for its bounds.
const SEARCH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One observation of a metric value for a host at a point in time.
///
/// Immutable once received; the whole collection is replaced on every
/// fetch or search, records are never merged or updated in place.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    #[serde(default)]
    pub id: i64,
    pub hostname: String,
    pub metric: String,
    pub value: f64,
    #[serde(default)]
    pub message: String,
    /// `YYYY-MM-DD HH:MM:SS`; lexical order equals temporal order.
    pub created_at: String,
}

impl AlertRecord {
    /// Whether this record's value exceeds the anomaly threshold.
    pub fn is_anomalous(&self) -> bool {
        self.value > ANOMALY_THRESHOLD
    }

    /// Time-of-day portion of `created_at`, used as a chart label.
    ///
    /// Falls back to the raw string if the timestamp has no space.
    pub fn time_of_day(&self) -> &str {
        match self.created_at.split_once(' ') {
            Some((_, time)) => time,
            None => &self.created_at,
        }
    }
}

/// Search filter sent to the backend. Absent or blank-after-trim fields
/// are omitted from the outgoing query entirely.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub hostname: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl SearchCriteria {
    /// Query parameters for the present, trimmed fields.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(h) = present(&self.hostname) {
            params.push(("hostname", h));
        }
        if let Some(s) = present(&self.start_time) {
            params.push(("start_time", s));
        }
        if let Some(e) = present(&self.end_time) {
            params.push(("end_time", e));
        }
        params
    }

    /// Check present time bounds against the format the backend's
    /// search route parses. Returns the first offending value, so a
    /// bad bound can be rejected before the request goes out.
    pub fn validate_time_bounds(&self) -> Result<(), String> {
        for field in [&self.start_time, &self.end_time] {
            if let Some(t) = present(field) {
                if NaiveDateTime::parse_from_str(&t, SEARCH_TIME_FORMAT).is_err() {
                    return Err(t);
                }
            }
        }
        Ok(())
    }
}

fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A new alert as entered in the submission form.
#[derive(Debug, Clone)]
pub struct NewAlert {
    pub hostname: String,
    pub metric: String,
    pub value: f64,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(created_at: &str) -> AlertRecord {
        AlertRecord {
            id: 1,
            hostname: "h1".to_string(),
            metric: "cpu_usage".to_string(),
            value: 42.0,
            message: String::new(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(record("2024-01-01 10:00:00").time_of_day(), "10:00:00");
    }

    #[test]
    fn test_time_of_day_without_space_falls_back() {
        assert_eq!(record("2024-01-01T10:00:00").time_of_day(), "2024-01-01T10:00:00");
    }

    #[test]
    fn test_anomaly_threshold_is_exclusive() {
        let mut r = record("2024-01-01 10:00:00");
        r.value = 80.0;
        assert!(!r.is_anomalous());
        r.value = 80.1;
        assert!(r.is_anomalous());
    }

    #[test]
    fn test_query_params_skip_blank_fields() {
        let criteria = SearchCriteria {
            hostname: Some("  web-01  ".to_string()),
            start_time: Some("   ".to_string()),
            end_time: None,
        };
        assert_eq!(
            criteria.query_params(),
            vec![("hostname", "web-01".to_string())]
        );
    }

    #[test]
    fn test_empty_criteria_yields_no_params() {
        assert!(SearchCriteria::default().query_params().is_empty());
    }

    #[test]
    fn test_time_bounds_accept_backend_format() {
        let criteria = SearchCriteria {
            hostname: None,
            start_time: Some("2024-01-01T10:00".to_string()),
            end_time: Some(" 2024-01-02T23:59 ".to_string()),
        };
        assert!(criteria.validate_time_bounds().is_ok());
    }

    #[test]
    fn test_time_bounds_reject_other_formats() {
        let criteria = SearchCriteria {
            hostname: None,
            start_time: Some("2024-01-01 10:00:00".to_string()),
            end_time: None,
        };
        assert_eq!(
            criteria.validate_time_bounds(),
            Err("2024-01-01 10:00:00".to_string())
        );
    }

    #[test]
    fn test_time_bounds_ignore_absent_and_blank_fields() {
        let criteria = SearchCriteria {
            hostname: Some("web-01".to_string()),
            start_time: Some("   ".to_string()),
            end_time: None,
        };
        assert!(criteria.validate_time_bounds().is_ok());
    }
}
