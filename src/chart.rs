//! Chart series derived from the current alert collection.

use crate::format::metric_label;
use crate::model::AlertRecord;

/// Most recent CPU samples kept in the trend line.
const CPU_TREND_POINTS: usize = 10;

/// Time-ordered CPU usage values for the trend line chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuTrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Count-per-category breakdown for the alert-type chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertTypeSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// Build the CPU trend from `cpu_usage` records: sort ascending by
/// timestamp (stable, so equal timestamps keep their relative order)
/// and keep the most recent ten samples.
pub fn build_cpu_trend(alerts: &[AlertRecord]) -> CpuTrendSeries {
    let mut cpu: Vec<&AlertRecord> = alerts
        .iter()
        .filter(|a| a.metric == "cpu_usage")
        .collect();
    // Lexical order is temporal order for `YYYY-MM-DD HH:MM:SS`.
    cpu.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let start = cpu.len().saturating_sub(CPU_TREND_POINTS);
    let recent = &cpu[start..];

    CpuTrendSeries {
        labels: recent.iter().map(|a| a.time_of_day().to_string()).collect(),
        values: recent.iter().map(|a| a.value).collect(),
    }
}

/// Group records by formatted metric label, categories ordered by first
/// appearance in the collection.
pub fn build_alert_type_distribution(alerts: &[AlertRecord]) -> AlertTypeSeries {
    let mut series = AlertTypeSeries::default();

    for alert in alerts {
        let label = metric_label(&alert.metric);
        match series.labels.iter().position(|l| l == label) {
            Some(i) => series.values[i] += 1,
            None => {
                series.labels.push(label.to_string());
                series.values.push(1);
            }
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(metric: &str, value: f64, created_at: &str) -> AlertRecord {
        AlertRecord {
            id: 0,
            hostname: "h1".to_string(),
            metric: metric.to_string(),
            value,
            message: String::new(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_cpu_trend_empty_input() {
        let series = build_cpu_trend(&[]);
        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn test_cpu_trend_filters_and_sorts() {
        // Backend returns newest-first; the trend must come out ascending.
        let alerts = vec![
            record("cpu_usage", 30.0, "2024-01-01 10:00:02"),
            record("mem_usage", 99.0, "2024-01-01 10:00:01"),
            record("cpu_usage", 20.0, "2024-01-01 10:00:00"),
        ];
        let series = build_cpu_trend(&alerts);
        assert_eq!(series.labels, vec!["10:00:00", "10:00:02"]);
        assert_eq!(series.values, vec![20.0, 30.0]);
    }

    #[test]
    fn test_cpu_trend_keeps_last_ten() {
        let alerts: Vec<AlertRecord> = (0..15)
            .map(|i| record("cpu_usage", i as f64, &format!("2024-01-01 10:00:{:02}", i)))
            .collect();
        let series = build_cpu_trend(&alerts);
        assert_eq!(series.values.len(), 10);
        // Most recent ten, still ascending.
        assert_eq!(series.values[0], 5.0);
        assert_eq!(series.values[9], 14.0);
        assert!(series.labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_cpu_trend_stable_on_equal_timestamps() {
        let alerts = vec![
            record("cpu_usage", 1.0, "2024-01-01 10:00:00"),
            record("cpu_usage", 2.0, "2024-01-01 10:00:00"),
        ];
        let series = build_cpu_trend(&alerts);
        assert_eq!(series.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_distribution_counts_by_first_appearance() {
        let alerts = vec![
            record("mem_usage", 1.0, "2024-01-01 10:00:00"),
            record("cpu_usage", 2.0, "2024-01-01 10:00:01"),
            record("mem_usage", 3.0, "2024-01-01 10:00:02"),
            record("custom_metric", 4.0, "2024-01-01 10:00:03"),
        ];
        let series = build_alert_type_distribution(&alerts);
        assert_eq!(series.labels, vec!["内存使用率", "CPU使用率", "custom_metric"]);
        assert_eq!(series.values, vec![2, 1, 1]);
        assert_eq!(series.values.iter().sum::<u64>(), alerts.len() as u64);
    }

    #[test]
    fn test_distribution_empty_input() {
        let series = build_alert_type_distribution(&[]);
        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
    }
}
