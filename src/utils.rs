use std::time::Duration;

/// Rates above this many Kbps are shown in Mbps.
const MBPS_THRESHOLD_KBPS: f64 = 1000.0;

/// Convert a one-second byte delta into Kbps (`bytes * 8 / 1024`).
pub fn bytes_to_kbps(bytes: u64) -> f64 {
    (bytes as f64 * 8.0) / 1024.0
}

/// Convert a byte count into MB (`bytes / 1024 / 1024`).
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

/// Format a rate as `"{label} Speed: x.xx Kbps"`, switching to Mbps strictly above 1000 Kbps.
pub fn format_speed(rate_kbps: f64, label: &str) -> String {
    if rate_kbps > MBPS_THRESHOLD_KBPS {
        format!("{} Speed: {:.2} Mbps", label, rate_kbps / MBPS_THRESHOLD_KBPS)
    } else {
        format!("{} Speed: {:.2} Kbps", label, rate_kbps)
    }
}

pub fn format_total(total_mb: f64) -> String {
    format!("Total Downloaded: {:.2} MB", total_mb)
}

/// `h:mm:ss` session uptime.
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
