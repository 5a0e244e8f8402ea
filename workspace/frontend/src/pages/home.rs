use yew::prelude::*;

use crate::api_client;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::prediction::PredictionView;
use crate::components::uploader::ImageUploader;
use crate::hooks::FetchState;
use crate::storage;
use ::common::PredictionReport;

#[function_component(Home)]
pub fn home() -> Html {
    let state = use_state(FetchState::<PredictionReport>::default);
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider missing");

    let on_predict = {
        let state = state.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |file: web_sys::File| {
            log::info!("Submitting '{}' for prediction", file.name());
            state.set(FetchState::Loading);

            let state = state.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client::predict(file).await {
                    Ok(report) => {
                        storage::add_to_history(&report);
                        toast_ctx.show_success(format!(
                            "Diagnosis: {}",
                            report.prediction.prediction
                        ));
                        state.set(FetchState::Success(report));
                    }
                    Err(e) => {
                        toast_ctx.show_error(e.clone());
                        state.set(FetchState::Error(e));
                    }
                }
            });
        })
    };

    let render_report = Callback::from(|report: PredictionReport| {
        html! { <PredictionView report={Some(report)} /> }
    });

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
            <ImageUploader on_predict={on_predict} busy={state.is_loading()} />
            {if matches!(*state, FetchState::NotStarted) {
                html! { <PredictionView /> }
            } else {
                html! {
                    <FetchRender<PredictionReport>
                        state={(*state).clone()}
                        render={render_report}
                        loading_text={Some("Analyzing your leaf photo...".to_string())}
                    />
                }
            }}
        </div>
    }
}
