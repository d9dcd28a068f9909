use yew::prelude::*;

const KEY_FINDINGS: [(&str, &str); 4] = [
    (
        "Ensemble Methods:",
        " Combining CNNs with Vision Transformers achieves best accuracy (99.2-99.5%) on \
         PlantVillage dataset",
    ),
    (
        "Transfer Learning:",
        " Pre-trained models show 5-15% performance gain over training from scratch",
    ),
    (
        "Mobile Deployment:",
        " MobileNet achieves 95.8-97.3% accuracy with only 4.2M parameters, suitable for edge \
         devices",
    ),
    (
        "Architecture Performance:",
        " ResNet50 (97.8-98.9%), InceptionV3 (98.1-98.6%), DenseNet121 (98.3-99.1%)",
    ),
];

const CNN_BADGES: [&str; 5] = [
    "VGG16 (96.5-98.2%)",
    "ResNet50 (97.8-98.9%)",
    "InceptionV3 (98.1-98.6%)",
    "DenseNet121 (98.3-99.1%)",
    "MobileNet (95.8-97.3%)",
];

const VIT_BADGES: [&str; 2] = ["ViT (98.5-99.2%)", "MobileViT (97.8%, 5.6M params)"];

const ENSEMBLE_BADGES: [&str; 3] = ["Voting (99.2%)", "Stacking", "Boosting"];

const DATASETS: [&str; 4] = [
    "PlantVillage: 54,306 images, 38 classes, 14 crops",
    "PlantDoc: 2,598 field images (real conditions)",
    "Rice Pest Dataset (98.86% accuracy)",
    "Tomato Disease Dataset (99.74% accuracy)",
];

fn render_badges(badges: &'static [&'static str]) -> Html {
    html! {
        <div class="badge-row">
            { for badges.iter().map(|badge| html! { <span class="ref-badge">{ *badge }</span> })}
        </div>
    }
}

pub fn render_research() -> Html {
    html! {
        <div class="reference-tab">
            <div class="card">
                <div class="card-header">
                    <h3><i class="fa-solid fa-book-open"></i> {" Research Paper Analysis"}</h3>
                    <p class="card-description">
                        {"Crop Disease Prediction Using Machine Learning: A Comprehensive Review \
                          and Analysis"}
                    </p>
                </div>

                <h4>{"Main Research Question"}</h4>
                <p class="card-body-text">
                    {"How can machine learning and computer vision techniques be effectively \
                      applied to automate the prediction and classification of crop diseases, \
                      addressing the global challenge of 20-40% annual yield losses due to plant \
                      diseases?"}
                </p>

                <h4>{"Key Findings"}</h4>
                <ul class="findings-list">
                    { for KEY_FINDINGS.iter().map(|(label, text)| html! {
                        <li><strong>{ *label }</strong>{ *text }</li>
                    })}
                </ul>

                <h4>{"Novel Contributions"}</h4>
                <p class="card-body-text">
                    {"This comprehensive review synthesizes current ML-based approaches, \
                      identifies critical challenges (dataset bias, computational constraints, \
                      limited crop coverage), and proposes emerging solutions including federated \
                      learning, explainable AI, and domain adaptation for real-world agricultural \
                      deployment."}
                </p>
            </div>

            <div class="reference-grid">
                <div class="card">
                    <div class="card-header">
                        <h3><i class="fa-solid fa-bullseye"></i> {" Core Algorithms"}</h3>
                    </div>
                    <h4>{"Convolutional Neural Networks"}</h4>
                    { render_badges(&CNN_BADGES) }
                    <h4>{"Vision Transformers"}</h4>
                    { render_badges(&VIT_BADGES) }
                    <h4>{"Ensemble Methods"}</h4>
                    { render_badges(&ENSEMBLE_BADGES) }
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3><i class="fa-solid fa-database"></i> {" Datasets & Preprocessing"}</h3>
                    </div>
                    <h4>{"Benchmark Datasets"}</h4>
                    <ul class="findings-list">
                        { for DATASETS.iter().map(|dataset| html! { <li>{ *dataset }</li> })}
                    </ul>
                    <h4>{"Preprocessing Pipeline"}</h4>
                    <ul class="findings-list">
                        <li>{"Resize to 224x224 or 256x256 pixels"}</li>
                        <li>{"Normalization and color-space conversion"}</li>
                        <li>{"Augmentation: rotation, flipping, color jitter"}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
