//! Render orchestration for the dashboard.
//!
//! The coordinator owns the dashboard state and drives the fixed render
//! sequence on every data change: table rows, summary metrics, then
//! both charts, each chart slot destroyed before it is repainted.

mod console;

pub use console::ConsolePresenter;

use crate::chart::{build_alert_type_distribution, build_cpu_trend};
use crate::client::{AlertClient, ClientError};
use crate::format::metric_label;
use crate::metrics::{aggregate, DerivedMetrics, SystemStatus};
use crate::model::{AlertRecord, NewAlert, SearchCriteria};
use crate::store::AlertStore;

/// Render lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Error,
}

/// The two chart canvas slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    CpuTrend,
    AlertTypes,
}

/// Handle to a live chart instance created by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle {
    pub slot: ChartSlot,
    pub id: u64,
}

/// One table row derived from an alert record.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub id: i64,
    pub created_at: String,
    pub hostname: String,
    pub metric_label: String,
    pub value: f64,
    pub message: String,
    /// "警告" for anomalous records, "提示" otherwise.
    pub status_badge: &'static str,
}

/// Styling for the summary status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Warning,
    Success,
}

/// The four summary fields plus status text and styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub total: usize,
    pub error_host_count: usize,
    pub normal_count: usize,
    pub status_text: &'static str,
    pub status_style: StatusStyle,
}

/// Presentation collaborator interface.
///
/// The core populates these surfaces and never assumes prior content;
/// chart instances are created and destroyed only through the handles
/// returned here.
pub trait Presenter {
    fn render_table(&mut self, rows: &[AlertRow]);
    fn render_summary(&mut self, summary: &SummaryView);
    fn create_chart(&mut self, slot: ChartSlot, labels: &[String], values: &[f64]) -> ChartHandle;
    fn destroy_chart(&mut self, chart: ChartHandle);
    fn clear_search_form(&mut self);
    fn notify_error(&mut self, message: &str);
    fn notify_info(&mut self, message: &str);
}

/// Dashboard state owned by the coordinator: the alert snapshot and the
/// two chart-instance slots. No ambient globals.
#[derive(Debug, Default)]
struct DashboardState {
    store: AlertStore,
    cpu_chart: Option<ChartHandle>,
    type_chart: Option<ChartHandle>,
    phase: RenderPhase,
}

/// Orchestrates the fetch → replace → render cycle.
///
/// Handlers take `&mut self`, so triggers run strictly one at a time;
/// the last-write-wins race between overlapping requests in the
/// original browser dashboard cannot occur here.
pub struct RenderCoordinator<P: Presenter> {
    client: AlertClient,
    presenter: P,
    state: DashboardState,
}

impl<P: Presenter> RenderCoordinator<P> {
    pub fn new(client: AlertClient, presenter: P) -> Self {
        Self {
            client,
            presenter,
            state: DashboardState::default(),
        }
    }

    pub fn phase(&self) -> RenderPhase {
        self.state.phase
    }

    /// The current alert snapshot.
    pub fn alerts(&self) -> &[AlertRecord] {
        self.state.store.current()
    }

    #[cfg(test)]
    fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Initial load: fetch the full collection and render it.
    pub async fn on_initial_load(&mut self) {
        self.state.phase = RenderPhase::Loading;
        tracing::info!("Loading alerts");

        match self.client.fetch_all().await {
            Ok(alerts) => self.apply_snapshot(alerts),
            Err(e) => self.fail("加载告警失败", e),
        }
    }

    /// Search submit: fetch the filtered collection and render it.
    pub async fn on_search_submit(&mut self, criteria: SearchCriteria) {
        self.state.phase = RenderPhase::Loading;
        tracing::info!("Searching alerts");

        match self.client.search(&criteria).await {
            Ok(alerts) => self.apply_snapshot(alerts),
            Err(e) => self.fail("搜索告警失败", e),
        }
    }

    /// Reset: clear the search form, then run a full initial load.
    pub async fn on_reset(&mut self) {
        self.presenter.clear_search_form();
        self.on_initial_load().await;
    }

    /// Submit a new alert, then refresh the full collection.
    ///
    /// A failed submit performs no refresh and leaves every rendered
    /// surface at its last good state.
    pub async fn on_alert_submit(&mut self, alert: NewAlert) {
        self.state.phase = RenderPhase::Loading;
        tracing::info!("Submitting alert for host {}", alert.hostname.trim());

        match self.client.submit(&alert).await {
            Ok(confirmation) => {
                self.presenter.notify_info(&confirmation);
                match self.client.fetch_all().await {
                    Ok(alerts) => self.apply_snapshot(alerts),
                    Err(e) => self.fail("加载告警失败", e),
                }
            }
            Err(e) => self.fail("提交告警失败", e),
        }
    }

    /// Replace the snapshot and re-render every derived surface.
    fn apply_snapshot(&mut self, alerts: Vec<AlertRecord>) {
        self.state.store.replace(alerts);

        let rows: Vec<AlertRow> = self.state.store.current().iter().map(row_view).collect();
        let summary = summary_view(&aggregate(self.state.store.current()));
        let cpu = build_cpu_trend(self.state.store.current());
        let types = build_alert_type_distribution(self.state.store.current());
        let type_values: Vec<f64> = types.values.iter().map(|&v| v as f64).collect();

        self.presenter.render_table(&rows);
        self.presenter.render_summary(&summary);
        self.repaint(ChartSlot::CpuTrend, &cpu.labels, &cpu.values);
        self.repaint(ChartSlot::AlertTypes, &types.labels, &type_values);

        self.state.phase = RenderPhase::Rendered;
        tracing::info!("Rendered {} alert(s)", rows.len());
    }

    /// Destroy the slot's prior chart instance, if any, then create the
    /// replacement. One canvas never holds two live instances.
    fn repaint(&mut self, slot: ChartSlot, labels: &[String], values: &[f64]) {
        let slot_ref = match slot {
            ChartSlot::CpuTrend => &mut self.state.cpu_chart,
            ChartSlot::AlertTypes => &mut self.state.type_chart,
        };
        if let Some(old) = slot_ref.take() {
            self.presenter.destroy_chart(old);
        }

        let handle = self.presenter.create_chart(slot, labels, values);
        match slot {
            ChartSlot::CpuTrend => self.state.cpu_chart = Some(handle),
            ChartSlot::AlertTypes => self.state.type_chart = Some(handle),
        }
    }

    /// Surface one operation-prefixed notification and keep the last
    /// good snapshot untouched.
    fn fail(&mut self, prefix: &str, err: ClientError) {
        tracing::error!("{}: {}", prefix, err);
        self.presenter.notify_error(&format!("{}: {}", prefix, err));
        self.state.phase = RenderPhase::Error;
    }
}

fn row_view(alert: &AlertRecord) -> AlertRow {
    AlertRow {
        id: alert.id,
        created_at: alert.created_at.clone(),
        hostname: alert.hostname.clone(),
        metric_label: metric_label(&alert.metric).to_string(),
        value: alert.value,
        message: alert.message.clone(),
        status_badge: if alert.is_anomalous() { "警告" } else { "提示" },
    }
}

fn summary_view(metrics: &DerivedMetrics) -> SummaryView {
    let (status_text, status_style) = match metrics.system_status {
        SystemStatus::Warning => ("警告", StatusStyle::Warning),
        SystemStatus::Normal => ("正常", StatusStyle::Success),
    };

    SummaryView {
        total: metrics.total,
        error_host_count: metrics.error_host_count,
        normal_count: metrics.normal_count,
        status_text,
        status_style,
    }
}
