//! Console presenter used by the alertdeck binary.

use super::{AlertRow, ChartHandle, ChartSlot, Presenter, StatusStyle, SummaryView};

/// Renders the dashboard surfaces as plain text on stdout.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    next_chart_id: u64,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for ConsolePresenter {
    fn render_table(&mut self, rows: &[AlertRow]) {
        println!();
        println!(
            "{:<20} {:<16} {:<12} {:>7} {:<4} {}",
            "时间", "主机", "指标", "数值", "状态", "消息"
        );
        for row in rows {
            println!(
                "{:<20} {:<16} {:<12} {:>7.1} {:<4} {}",
                row.created_at, row.hostname, row.metric_label, row.value, row.status_badge, row.message
            );
        }
        if rows.is_empty() {
            println!("(无告警记录)");
        }
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        let style = match summary.status_style {
            StatusStyle::Warning => "warning",
            StatusStyle::Success => "success",
        };
        println!();
        println!(
            "告警总数: {}  异常主机: {}  正常记录: {}  系统状态: {} [{}]",
            summary.total, summary.error_host_count, summary.normal_count, summary.status_text, style
        );
    }

    fn create_chart(&mut self, slot: ChartSlot, labels: &[String], values: &[f64]) -> ChartHandle {
        self.next_chart_id += 1;

        let title = match slot {
            ChartSlot::CpuTrend => "CPU趋势",
            ChartSlot::AlertTypes => "告警类型分布",
        };
        println!();
        println!("-- {} --", title);
        for (label, value) in labels.iter().zip(values) {
            println!("  {:<12} {:.1}", label, value);
        }
        if labels.is_empty() {
            println!("  (无数据)");
        }

        ChartHandle {
            slot,
            id: self.next_chart_id,
        }
    }

    fn destroy_chart(&mut self, _chart: ChartHandle) {
        // Console output has no live instances to tear down.
    }

    fn clear_search_form(&mut self) {}

    fn notify_error(&mut self, message: &str) {
        eprintln!("[错误] {}", message);
    }

    fn notify_info(&mut self, message: &str) {
        println!("[提示] {}", message);
    }
}
