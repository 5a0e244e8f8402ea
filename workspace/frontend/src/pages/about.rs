use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::components::guide::DiseaseGuide;
use crate::settings;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"About LeafScan"}</h2>
                    <p>
                        {"LeafScan analyzes photos of plant leaves and reports the most \
                          likely disease, how confident the model is, and a severity \
                          grade with treatment pointers."}
                    </p>
                    <p>
                        {"Predictions are kept only in your browser's local storage. \
                          Nothing is persisted on the server, and you can export or \
                          clear your history at any time."}
                    </p>
                    <p class="text-sm text-gray-500">
                        {format!("Version {}", env!("CARGO_PKG_VERSION"))}
                    </p>
                </div>
            </div>
            <ConnectionSettings />
            <DiseaseGuide />
        </div>
    }
}

#[function_component(ConnectionSettings)]
fn connection_settings() -> Html {
    let current = settings::get_settings();
    let host_ref = use_node_ref();
    let port_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider missing");

    let on_save = {
        let host_ref = host_ref.clone();
        let port_ref = port_ref.clone();
        Callback::from(move |_| {
            let host = host_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let port = port_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<u16>().ok());

            settings::update_settings(|s| {
                if !host.trim().is_empty() {
                    s.api_host = host.trim().to_string();
                }
                if let Some(port) = port {
                    s.api_port = port;
                }
            });

            let updated = settings::get_settings();
            match updated.save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved, API base now {}", updated.api_base_url());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }
                Err(e) => {
                    log::error!("Failed to save settings: {:?}", e);
                    toast_ctx.show_error("Failed to save settings".to_string());
                }
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Connection Settings"}</h2>
                <div class="form-control w-full">
                    <label class="label"><span class="label-text">{"API Host"}</span></label>
                    <input
                        type="text"
                        ref={host_ref}
                        value={current.api_host.clone()}
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control w-full">
                    <label class="label"><span class="label-text">{"API Port"}</span></label>
                    <input
                        type="number"
                        ref={port_ref}
                        value={current.api_port.to_string()}
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" onclick={on_save}>{"Save & Reload"}</button>
                </div>
            </div>
        </div>
    }
}
