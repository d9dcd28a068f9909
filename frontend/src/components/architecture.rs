use super::utils::meter_width;
use yew::prelude::*;

struct ModelSpec {
    name: &'static str,
    accuracy: f32,
    params: &'static str,
    inference: &'static str,
    deployment: &'static str,
    description: &'static str,
}

const MODELS: [ModelSpec; 6] = [
    ModelSpec {
        name: "Ensemble (CNN + ViT)",
        accuracy: 99.2,
        params: "~110M",
        inference: "160ms",
        deployment: "Cloud",
        description: "Best accuracy through combining complementary architectures",
    },
    ModelSpec {
        name: "Vision Transformer",
        accuracy: 98.5,
        params: "86M",
        inference: "95ms",
        deployment: "GPU",
        description: "Captures long-range dependencies with self-attention",
    },
    ModelSpec {
        name: "DenseNet121",
        accuracy: 98.3,
        params: "8.0M",
        inference: "42ms",
        deployment: "GPU",
        description: "Dense connections enhance gradient flow",
    },
    ModelSpec {
        name: "ResNet50",
        accuracy: 97.8,
        params: "25.6M",
        inference: "32ms",
        deployment: "GPU",
        description: "Residual connections enable very deep networks",
    },
    ModelSpec {
        name: "InceptionV3",
        accuracy: 98.1,
        params: "23.8M",
        inference: "38ms",
        deployment: "GPU",
        description: "Multi-scale feature extraction via inception modules",
    },
    ModelSpec {
        name: "MobileNet",
        accuracy: 95.8,
        params: "4.2M",
        inference: "56ms (CPU)",
        deployment: "Mobile/Edge",
        description: "Lightweight architecture for mobile deployment",
    },
];

struct PipelineStage {
    step: &'static str,
    description: &'static str,
    icon: &'static str,
}

const PIPELINE: [PipelineStage; 6] = [
    PipelineStage {
        step: "1. Image Acquisition",
        description: "Camera, smartphone, or UAV capture of crop leaves",
        icon: "fa-solid fa-camera",
    },
    PipelineStage {
        step: "2. Preprocessing",
        description: "Resize (224x224), normalize, augmentation (rotation, flip, color adjustments)",
        icon: "fa-solid fa-gears",
    },
    PipelineStage {
        step: "3. Feature Extraction",
        description: "CNN layers extract hierarchical visual features automatically",
        icon: "fa-solid fa-magnifying-glass",
    },
    PipelineStage {
        step: "4. Transfer Learning",
        description: "Fine-tune pre-trained ImageNet weights with reduced learning rate (1e-4 to 1e-5)",
        icon: "fa-solid fa-bullseye",
    },
    PipelineStage {
        step: "5. Classification",
        description: "Softmax layer predicts disease class with confidence scores",
        icon: "fa-solid fa-wand-magic-sparkles",
    },
    PipelineStage {
        step: "6. Post-processing",
        description: "Ensemble voting, attention visualization, treatment recommendations",
        icon: "fa-solid fa-chart-column",
    },
];

struct CropAccuracy {
    crop: &'static str,
    accuracy: f32,
    classes: u32,
    note: &'static str,
}

const CROPS: [CropAccuracy; 4] = [
    CropAccuracy {
        crop: "Tomato",
        accuracy: 99.74,
        classes: 10,
        note: "Clear disease symptoms, large training sample",
    },
    CropAccuracy {
        crop: "Rice",
        accuracy: 98.86,
        classes: 3,
        note: "Bacterial blight, blast, brown spots",
    },
    CropAccuracy {
        crop: "Potato",
        accuracy: 97.4,
        classes: 2,
        note: "Early and late blight classification",
    },
    CropAccuracy {
        crop: "Corn/Maize",
        accuracy: 93.1,
        classes: 4,
        note: "Less distinctive visual symptoms",
    },
];

pub fn render_architecture() -> Html {
    html! {
        <div class="reference-tab">
            <div class="card">
                <div class="card-header">
                    <h3><i class="fa-solid fa-brain"></i> {" Model Architecture Comparison"}</h3>
                    <p class="card-description">
                        {"Performance analysis of different CNN and transformer architectures for \
                          crop disease detection"}
                    </p>
                </div>
                <p class="card-body-text">
                    {"All models are pre-trained on ImageNet and fine-tuned on the PlantVillage \
                      dataset (54,306 images across 38 disease classes). Transfer learning \
                      provides a 5-15% accuracy improvement over training from scratch."}
                </p>
            </div>

            <div class="model-grid">
                { for MODELS.iter().map(render_model_card) }
            </div>

            <div class="card">
                <div class="card-header">
                    <h3><i class="fa-solid fa-layer-group"></i> {" Training Pipeline"}</h3>
                </div>
                <div class="pipeline">
                    { for PIPELINE.iter().map(|stage| html! {
                        <div class="pipeline-stage">
                            <i class={stage.icon}></i>
                            <div>
                                <h4>{ stage.step }</h4>
                                <p>{ stage.description }</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>{"Crop-Specific Performance"}</h3>
                    <p class="card-description">
                        {"Model accuracy varies based on dataset characteristics and disease \
                          symptoms"}
                    </p>
                </div>
                <div class="crop-accuracy-list">
                    { for CROPS.iter().map(|crop| html! {
                        <div class="crop-accuracy">
                            <div class="crop-accuracy-row">
                                <span class="crop-name">
                                    { crop.crop }
                                    <span class="crop-classes">
                                        { format!(" ({} disease classes)", crop.classes) }
                                    </span>
                                </span>
                                <span class="crop-score">{ format!("{}%", crop.accuracy) }</span>
                            </div>
                            <div class="meter">
                                <div class="meter-fill" style={meter_width(crop.accuracy)}></div>
                            </div>
                            <p class="crop-note">{ crop.note }</p>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

fn render_model_card(model: &ModelSpec) -> Html {
    html! {
        <div class="card model-card">
            <div class="card-header model-card-header">
                <h4>{ model.name }</h4>
                <span class="deployment-badge">{ model.deployment }</span>
            </div>
            <p class="card-description">{ model.description }</p>

            <div class="model-accuracy">
                <div class="model-accuracy-row">
                    <span>{"Accuracy"}</span>
                    <span class="model-accuracy-value">{ format!("{}%", model.accuracy) }</span>
                </div>
                <div class="meter">
                    <div class="meter-fill" style={meter_width(model.accuracy)}></div>
                </div>
            </div>

            <div class="model-specs">
                <div>
                    <p class="model-info-label"><i class="fa-solid fa-hard-drive"></i> {" Params"}</p>
                    <p class="model-info-value">{ model.params }</p>
                </div>
                <div>
                    <p class="model-info-label"><i class="fa-solid fa-clock"></i> {" Inference"}</p>
                    <p class="model-info-value">{ model.inference }</p>
                </div>
                <div>
                    <p class="model-info-label"><i class="fa-solid fa-microchip"></i> {" Deploy"}</p>
                    <p class="model-info-value">{ model.deployment }</p>
                </div>
            </div>
        </div>
    }
}
