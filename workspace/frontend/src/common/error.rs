use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Error panel for failed uploads and catalogue fetches. The message comes
/// straight from the API client, so it is already user-readable.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    let retry = props.on_retry.as_ref().map(|on_retry| {
        let on_retry = on_retry.clone();
        html! {
            <button
                class="btn btn-success btn-sm"
                onclick={Callback::from(move |_| {
                    log::debug!("User clicked retry button");
                    on_retry.emit(());
                })}
            >
                <i class="fas fa-rotate-right"></i>
                {" Retry"}
            </button>
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-triangle-exclamation text-2xl"></i>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold">{"Analysis failed"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {retry.unwrap_or_default()}
        </div>
    }
}
