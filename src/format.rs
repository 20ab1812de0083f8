//! Display labels for metric identifiers.

/// Map a raw metric identifier to its display label.
///
/// Unknown identifiers pass through unchanged so new backend metrics
/// render verbatim instead of being rejected.
pub fn metric_label(metric: &str) -> &str {
    match metric {
        "cpu_usage" => "CPU使用率",
        "mem_usage" => "内存使用率",
        "disk_usage" => "磁盘使用率",
        "network_in" => "入站流量",
        "network_out" => "出站流量",
        other => other,
    }
}
