//! In-memory working set of alert records.

use crate::model::AlertRecord;

/// Holds the current alert collection, the single source of truth for
/// the table, summary metrics, and chart series.
///
/// There is no partial-update API: the collection is swapped wholesale
/// on every fetch or search so every derived view always reflects one
/// consistent snapshot.
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: Vec<AlertRecord>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the current collection.
    pub fn replace(&mut self, alerts: Vec<AlertRecord>) {
        self.alerts = alerts;
    }

    /// The live snapshot; empty before the first load.
    pub fn current(&self) -> &[AlertRecord] {
        &self.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hostname: &str) -> AlertRecord {
        AlertRecord {
            id: 0,
            hostname: hostname.to_string(),
            metric: "cpu_usage".to_string(),
            value: 50.0,
            message: String::new(),
            created_at: "2024-01-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_before_first_load() {
        assert!(AlertStore::new().current().is_empty());
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let mut store = AlertStore::new();
        store.replace(vec![record("h1"), record("h2")]);
        assert_eq!(store.current().len(), 2);

        store.replace(vec![record("h3")]);
        assert_eq!(store.current().len(), 1);
        assert_eq!(store.current()[0].hostname, "h3");
    }
}
