//! Summary metrics derived from the current alert collection.

use crate::model::AlertRecord;

use std::collections::HashSet;

/// Overall system status shown in the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Warning,
    Normal,
}

/// Summary counters recomputed on every render, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedMetrics {
    /// Size of the current collection.
    pub total: usize,
    /// Distinct hostnames with at least one anomalous record.
    pub error_host_count: usize,
    /// Records at or below the anomaly threshold.
    pub normal_count: usize,
    pub system_status: SystemStatus,
}

/// Derive summary counters from a collection in one O(n) pass.
///
/// `error_host_count` counts distinct hosts while `normal_count` counts
/// records, so the two do not partition the total.
pub fn aggregate(alerts: &[AlertRecord]) -> DerivedMetrics {
    let mut error_hosts: HashSet<&str> = HashSet::new();
    let mut normal_count = 0;

    for alert in alerts {
        if alert.is_anomalous() {
            error_hosts.insert(alert.hostname.as_str());
        } else {
            normal_count += 1;
        }
    }

    let error_host_count = error_hosts.len();
    DerivedMetrics {
        total: alerts.len(),
        error_host_count,
        normal_count,
        system_status: if error_host_count > 0 {
            SystemStatus::Warning
        } else {
            SystemStatus::Normal
        },
    }
}
