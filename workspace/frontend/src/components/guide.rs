use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client;
use crate::common::fetch_render::FetchRender;
use crate::components::prediction::SeverityBadge;
use crate::hooks::FetchState;
use ::common::DiseaseEntry;

/// Searchable disease reference backed by the `/api/diseases` endpoints.
#[function_component(DiseaseGuide)]
pub fn disease_guide() -> Html {
    let state = use_state(FetchState::<Vec<DiseaseEntry>>::default);
    let query = use_state(String::new);

    let load = {
        let state = state.clone();
        let query = query.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            let query = (*query).clone();
            state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let result = if query.trim().is_empty() {
                    api_client::fetch_diseases().await
                } else {
                    api_client::search_diseases(&query).await
                };
                match result {
                    Ok(entries) => state.set(FetchState::Success(entries)),
                    Err(e) => state.set(FetchState::Error(e)),
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let on_search = {
        let query = query.clone();
        let load = load.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            load.emit(());
        })
    };

    let render = Callback::from(|entries: Vec<DiseaseEntry>| {
        if entries.is_empty() {
            return html! {
                <div class="alert alert-info">
                    <i class="fas fa-info-circle"></i>
                    <span>{"No diseases match your search."}</span>
                </div>
            };
        }
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { for entries.iter().map(guide_card) }
            </div>
        }
    });

    html! {
        <div class="card bg-base-100 shadow md:col-span-2">
            <div class="card-body">
                <h2 class="card-title">{"Disease Guide"}</h2>
                <input
                    type="search"
                    placeholder="Search by disease or crop..."
                    class="input input-bordered w-full"
                    onchange={on_search}
                />
                <FetchRender<Vec<DiseaseEntry>>
                    state={(*state).clone()}
                    render={render}
                    on_retry={Some(load.reform(|_| ()))}
                />
            </div>
        </div>
    }
}

fn guide_card(entry: &DiseaseEntry) -> Html {
    html! {
        <div class="border rounded-lg p-4 flex flex-col gap-2" key={entry.name.clone()}>
            <div class="flex items-center justify-between">
                <span class="font-semibold">{&entry.name}</span>
                <SeverityBadge severity={entry.typical_severity.as_str().to_string()} />
            </div>
            <span class="text-sm text-gray-500">{format!("Crop: {}", entry.crop)}</span>
            <p class="text-sm">{&entry.description}</p>
            <p class="text-sm"><span class="font-semibold">{"Treatment: "}</span>{&entry.treatment}</p>
        </div>
    }
}
