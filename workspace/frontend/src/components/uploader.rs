use web_sys::HtmlInputElement;
use yew::prelude::*;

use ::common::formatting::format_file_size;

#[derive(Properties, PartialEq)]
pub struct ImageUploaderProps {
    /// Called with the chosen file when the user hits Analyze.
    pub on_predict: Callback<web_sys::File>,
    /// Disables the controls while a prediction is in flight.
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(ImageUploader)]
pub fn image_uploader(props: &ImageUploaderProps) -> Html {
    let selected = use_state(|| Option::<web_sys::File>::None);

    let on_file_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            if let Some(file) = &file {
                log::debug!("File selected: {} ({} bytes)", file.name(), file.size());
            }
            selected.set(file);
        })
    };

    let on_analyze = {
        let selected = selected.clone();
        let on_predict = props.on_predict.clone();
        Callback::from(move |_| {
            if let Some(file) = (*selected).clone() {
                on_predict.emit(file);
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Upload a leaf photo"}</h2>
                <input
                    type="file"
                    accept="image/*"
                    class="file-input file-input-bordered w-full"
                    disabled={props.busy}
                    onchange={on_file_change}
                />
                {if let Some(file) = &*selected {
                    html! {
                        <p class="text-sm text-gray-500">
                            {format!("{} ({})", file.name(), format_file_size(file.size() as u64))}
                        </p>
                    }
                } else {
                    html! {}
                }}
                <div class="card-actions justify-end mt-2">
                    <button
                        class="btn btn-primary"
                        disabled={props.busy || selected.is_none()}
                        onclick={on_analyze}
                    >
                        {if props.busy {
                            html! { <><span class="loading loading-spinner loading-sm"></span>{" Analyzing..."}</> }
                        } else {
                            html! { <><i class="fas fa-microscope"></i>{" Analyze"}</> }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
