use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::components::prediction::SeverityBadge;
use crate::storage;
use ::common::formatting::{format_confidence, format_file_size, format_timestamp, history_to_csv};
use ::common::HistoryItem;

#[function_component(History)]
pub fn history() -> Html {
    let items = use_state(storage::load_history);
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider missing");

    let on_export = {
        let items = items.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_| {
            let csv = history_to_csv(&items);
            match download_csv(&csv) {
                Ok(()) => log::info!("Exported {} history entries", items.len()),
                Err(e) => {
                    log::error!("CSV export failed: {:?}", e);
                    toast_ctx.show_error("Failed to export history".to_string());
                }
            }
        })
    };

    let on_clear = {
        let items = items.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_| {
            storage::clear_history();
            items.set(Vec::new());
            toast_ctx.show_info("History cleared".to_string());
        })
    };

    html! {
        <div class="max-w-5xl mx-auto flex flex-col gap-4">
            <div class="flex justify-end gap-2">
                <button class="btn btn-outline btn-sm" onclick={on_export} disabled={items.is_empty()}>
                    <i class="fas fa-file-csv"></i>{" Export CSV"}
                </button>
                <button class="btn btn-outline btn-error btn-sm" onclick={on_clear} disabled={items.is_empty()}>
                    <i class="fas fa-trash"></i>{" Clear"}
                </button>
            </div>
            {if items.is_empty() {
                html! {
                    <div class="alert alert-info">
                        <i class="fas fa-info-circle"></i>
                        <span>{"No predictions yet. Scan a leaf to start your history."}</span>
                    </div>
                }
            } else {
                html! {
                    <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Crop"}</th>
                                    <th>{"Disease"}</th>
                                    <th>{"Confidence"}</th>
                                    <th>{"Severity"}</th>
                                    <th>{"Image"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for items.iter().map(history_row) }
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </div>
    }
}

fn history_row(item: &HistoryItem) -> Html {
    html! {
        <tr key={item.id.to_string()}>
            <td>{format_timestamp(&item.timestamp)}</td>
            <td>{&item.crop}</td>
            <td>{&item.disease}</td>
            <td>{format_confidence(item.confidence)}</td>
            <td><SeverityBadge severity={item.severity.clone()} /></td>
            <td class="text-sm text-gray-500">
                {format!("{} ({})", item.image_filename, format_file_size(item.image_size))}
            </td>
        </tr>
    }
}

/// Trigger a client-side download of the CSV through a temporary object URL.
fn download_csv(csv: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download("leafscan-history.csv");
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
