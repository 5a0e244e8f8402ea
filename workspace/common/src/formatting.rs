//! Pure display-formatting helpers shared by the backend and the frontend.

use crate::HistoryItem;
use chrono::DateTime;

const SIZE_UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

/// Humanize a byte count with 1024-based units and at most two decimals.
///
/// Trailing zeros are trimmed, so 1536 renders as "1.5 KB" and 1024 as
/// "1 KB".
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", trim_decimals(rounded), SIZE_UNITS[exponent])
}

/// Render a confidence in [0, 1] as a percentage with one decimal.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Render an RFC3339 timestamp as "DD/MM/YYYY, HH:MM".
///
/// Timestamps that fail to parse are shown as-is rather than dropped.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%d/%m/%Y, %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Serialize history items to CSV. Fields are quoted only when they contain
/// a comma.
pub fn history_to_csv(items: &[HistoryItem]) -> String {
    let header = "timestamp,crop,disease,confidence,severity,filename,size";
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(header.to_string());
    for item in items {
        let fields = [
            item.timestamp.clone(),
            item.crop.clone(),
            item.disease.clone(),
            format!("{}", item.confidence),
            item.severity.clone(),
            item.image_filename.clone(),
            format!("{}", item.image_size),
        ];
        lines.push(
            fields
                .iter()
                .map(|f| csv_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

fn csv_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

fn trim_decimals(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1048576), "1 MB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 245000 / 1024 = 239.2578... -> 239.26 KB
        assert_eq!(format_file_size(245_000), "239.26 KB");
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.8234), "82.3%");
        assert_eq!(format_confidence(0.95), "95.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2025-03-09T14:05:00Z"),
            "09/03/2025, 14:05"
        );
    }

    #[test]
    fn test_format_timestamp_passthrough_on_garbage() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_history_to_csv_quotes_only_commas() {
        let items = vec![HistoryItem {
            id: 1,
            timestamp: "2025-03-09T14:05:00Z".to_string(),
            crop: "Tomato".to_string(),
            disease: "Early Blight, advanced".to_string(),
            confidence: 0.92,
            severity: "Severe".to_string(),
            image_filename: "leaf.jpg".to_string(),
            image_size: 245_000,
        }];
        let csv = history_to_csv(&items);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,crop,disease,confidence,severity,filename,size"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2025-03-09T14:05:00Z,Tomato,\"Early Blight, advanced\",0.92,Severe,leaf.jpg,245000"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_history_to_csv_empty() {
        assert_eq!(
            history_to_csv(&[]),
            "timestamp,crop,disease,confidence,severity,filename,size"
        );
    }
}
