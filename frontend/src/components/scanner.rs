use super::super::Model;
use super::{results, upload_section};
use yew::prelude::*;

struct InfoCard {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        icon: "fa-solid fa-circle-check",
        title: "High Accuracy",
        text: "Ensemble methods achieve 99.2% accuracy on benchmark datasets using CNN + Vision \
               Transformers",
    },
    InfoCard {
        icon: "fa-solid fa-brain",
        title: "Transfer Learning",
        text: "Pre-trained on ImageNet with fine-tuning on PlantVillage dataset (54,306 images, \
               38 disease classes)",
    },
    InfoCard {
        icon: "fa-solid fa-circle-exclamation",
        title: "Early Detection",
        text: "Identify diseases before they spread, preventing 20-40% yield losses and ensuring \
               food security",
    },
];

pub fn render_scanner_tab(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="scanner-tab">
            <div class="hero">
                <h2>{"Detect Crop Diseases Instantly"}</h2>
                <p>
                    {"Upload an image of your crop leaves and our advanced CNN models will \
                      identify diseases with 99%+ accuracy"}
                </p>
            </div>

            <div class="scanner-grid">
                { upload_section::render_upload_section(model, ctx) }
                { results::render_results(model.session.result(), model.session.is_busy()) }
            </div>

            <div class="info-cards">
                { for INFO_CARDS.iter().map(|card| html! {
                    <div class="card info-card">
                        <h4><i class={card.icon}></i> {" "} { card.title }</h4>
                        <p>{ card.text }</p>
                    </div>
                })}
            </div>
        </div>
    }
}
