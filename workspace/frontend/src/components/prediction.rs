use yew::prelude::*;

use ::common::{formatting::format_file_size, severity_color, severity_label, PredictionReport};

#[derive(Properties, PartialEq)]
pub struct PredictionViewProps {
    /// The latest prediction, if one exists.
    #[prop_or_default]
    pub report: Option<PredictionReport>,
}

/// Renders a prediction result, or a placeholder when nothing has been
/// uploaded yet. Confidence is shown with two decimals here; summary views
/// use the one-decimal `format_confidence` instead.
#[function_component(PredictionView)]
pub fn prediction_view(props: &PredictionViewProps) -> Html {
    let Some(report) = &props.report else {
        return html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center text-gray-500">
                    <i class="fas fa-seedling text-4xl"></i>
                    <p>{"No prediction available. Please upload an image."}</p>
                </div>
            </div>
        };
    };

    let outcome = &report.prediction;
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&outcome.prediction}</h2>
                {if let Some(crop) = &outcome.crop {
                    html! { <p class="text-sm text-gray-500">{format!("Crop: {}", crop)}</p> }
                } else {
                    html! {}
                }}
                <p class="text-2xl font-bold">
                    {format!("{:.2}%", outcome.confidence * 100.0)}
                </p>
                <SeverityBadge severity={outcome.severity.as_str().to_string()} />
                <div class="text-xs text-gray-400 mt-2">
                    <p>{format!(
                        "{} ({})",
                        report.image_info.filename,
                        format_file_size(report.image_info.size)
                    )}</p>
                    <p>{format!(
                        "Source: {} · {} ms",
                        outcome.source, outcome.processing_time_ms
                    )}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SeverityBadgeProps {
    /// Severity as a string so stored history entries render the same way.
    pub severity: String,
}

#[function_component(SeverityBadge)]
pub fn severity_badge(props: &SeverityBadgeProps) -> Html {
    let color = severity_color(&props.severity);
    html! {
        <span
            class="badge badge-lg text-white"
            style={format!("background-color: {}", color)}
        >
            {severity_label(&props.severity)}
        </span>
    }
}
