use super::super::{Model, Msg, Tab};
use yew::prelude::*;

const TABS: [(Tab, &str, &str); 3] = [
    (Tab::Scanner, "fa-solid fa-camera", "Scanner"),
    (Tab::Research, "fa-solid fa-arrow-trend-up", "Research"),
    (Tab::Models, "fa-solid fa-brain", "Models"),
];

pub fn render_tab_bar(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <nav class="tab-bar">
            { for TABS.iter().map(|&(tab, icon, label)| {
                let is_active = model.active_tab == tab;
                html! {
                    <button
                        class={classes!("tab-btn", is_active.then_some("active"))}
                        onclick={link.callback(move |_| Msg::SelectTab(tab))}
                    >
                        <i class={icon}></i> {" "} { label }
                    </button>
                }
            })}
        </nav>
    }
}
