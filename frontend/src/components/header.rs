use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <div class="header-title">
                <h1><i class="fa-solid fa-leaf"></i> {" AgriVision"}</h1>
                <p class="subtitle">{"ML-Powered Crop Disease Detection"}</p>
            </div>
            <span class="accuracy-badge">
                <i class="fa-solid fa-brain"></i> {" 99.2% Accuracy"}
            </span>
        </header>
    }
}
