use super::utils::{format_confidence, meter_width};
use shared::{DiseaseResult, Severity};
use yew::prelude::*;

pub fn severity_badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "severity-badge severity-high",
        Severity::Medium => "severity-badge severity-medium",
        Severity::Low => "severity-badge severity-low",
    }
}

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "fa-solid fa-triangle-exclamation",
        Severity::Medium => "fa-solid fa-circle-info",
        Severity::Low => "fa-solid fa-circle-check",
    }
}

/// Pure mapping from `(result, busy)` to the results card. Holds no state of
/// its own, so identical inputs always render identically.
pub fn render_results(result: Option<&DiseaseResult>, busy: bool) -> Html {
    if busy {
        return render_analyzing_card();
    }

    match result {
        Some(result) => render_detail_card(result),
        None => render_placeholder_card(),
    }
}

fn render_analyzing_card() -> Html {
    html! {
        <div class="card results-card">
            <div class="card-header">
                <h3>{"Analyzing..."}</h3>
                <p class="card-description">{"Processing image with neural network"}</p>
            </div>
            <div class="results-placeholder analyzing">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Running CNN inference..."}</p>
            </div>
        </div>
    }
}

fn render_placeholder_card() -> Html {
    html! {
        <div class="card results-card">
            <div class="card-header">
                <h3>{"Detection Results"}</h3>
                <p class="card-description">{"Upload an image to begin analysis"}</p>
            </div>
            <div class="results-placeholder">
                <i class="fa-solid fa-circle-check fa-2x"></i>
                <p>{"Results will appear here"}</p>
            </div>
        </div>
    }
}

fn render_detail_card(result: &DiseaseResult) -> Html {
    html! {
        <div class="card results-card settled">
            <div class="card-header result-header">
                <h3>{"Detection Results"}</h3>
                <span class={severity_badge_class(result.severity)}>
                    <i class={severity_icon(result.severity)}></i>
                    {" "}{ result.severity.to_string().to_uppercase() }
                </span>
            </div>
            <p class="card-description">{"Analysis based on ResNet50 + ViT ensemble model"}</p>

            <h2 class="disease-name">{ &result.disease }</h2>
            <div class="confidence-meter">
                <div class="meter-label">{"Confidence Score"}</div>
                <div class="meter">
                    <div class="meter-fill" style={meter_width(result.confidence)}></div>
                </div>
                <div class="meter-value">{ format_confidence(result.confidence) }</div>
            </div>

            <div class="disease-description">
                <h4><i class="fa-solid fa-circle-info"></i> {" About this disease"}</h4>
                <p>{ &result.description }</p>
            </div>

            <div class="treatment">
                <h4><i class="fa-solid fa-prescription-bottle-medical"></i> {" Recommended Treatment"}</h4>
                <p>{ &result.treatment }</p>
            </div>

            <div class="model-info">
                <div>
                    <p class="model-info-label">{"Model Architecture"}</p>
                    <p class="model-info-value">{"ResNet50 + ViT"}</p>
                </div>
                <div>
                    <p class="model-info-label">{"Dataset"}</p>
                    <p class="model-info-value">{"PlantVillage"}</p>
                </div>
                <div>
                    <p class="model-info-label">{"Classes"}</p>
                    <p class="model-info-value">{"38 Diseases"}</p>
                </div>
                <div>
                    <p class="model-info-label">{"Inference Time"}</p>
                    <p class="model-info-value">{"~32ms (GPU)"}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_severity_maps_to_the_alarming_badge() {
        assert_eq!(severity_badge_class(Severity::High), "severity-badge severity-high");
        assert_eq!(severity_icon(Severity::High), "fa-solid fa-triangle-exclamation");
    }

    #[test]
    fn medium_and_low_map_to_cautionary_and_affirming_badges() {
        assert_eq!(
            severity_badge_class(Severity::Medium),
            "severity-badge severity-medium"
        );
        assert_eq!(severity_badge_class(Severity::Low), "severity-badge severity-low");
        assert_eq!(severity_icon(Severity::Low), "fa-solid fa-circle-check");
    }
}
