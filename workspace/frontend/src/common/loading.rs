use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Optional status line shown under the spinner.
    #[prop_or_default]
    pub text: Option<String>,
}

/// Centered spinner shown while an upload or catalogue fetch is in flight.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg text-success"></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-500">{text}</p> }
            } else {
                html! { <p class="text-sm text-gray-400">{"Working..."}</p> }
            }}
        </div>
    }
}
