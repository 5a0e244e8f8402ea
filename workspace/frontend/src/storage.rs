//! Browser-local prediction history. There is no server-side persistence;
//! everything lives under one localStorage key.

use web_sys::window;

use ::common::{HistoryItem, PredictionReport};

const HISTORY_KEY: &str = "leafscan_history";

/// Most recent entries kept; older ones are dropped on insert.
const HISTORY_CAP: usize = 100;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

/// Load the stored history, most recent first. Corrupt or missing data
/// yields an empty history rather than an error.
pub fn load_history() -> Vec<HistoryItem> {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, history disabled");
        return Vec::new();
    };
    match storage.get_item(HISTORY_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::error!("Failed to parse stored history, resetting: {}", e);
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

fn save_history(items: &[HistoryItem]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(items) {
        Ok(raw) => {
            if let Err(e) = storage.set_item(HISTORY_KEY, &raw) {
                log::error!("Failed to persist history: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to serialize history: {}", e),
    }
}

/// Prepend a prediction to the history and return the updated list.
pub fn add_to_history(report: &PredictionReport) -> Vec<HistoryItem> {
    let mut items = load_history();
    let next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
    items.insert(0, HistoryItem::from_report(next_id, report));
    items.truncate(HISTORY_CAP);
    save_history(&items);
    log::debug!("History now holds {} entries", items.len());
    items
}

/// Remove all stored history.
pub fn clear_history() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(HISTORY_KEY) {
            log::error!("Failed to clear history: {:?}", e);
        }
    }
    log::info!("Prediction history cleared");
}
