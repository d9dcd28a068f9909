use super::super::{Model, Msg};
use super::utils::{debounce, truncate_label};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="card upload-card">
            <div class="card-header">
                <h3><i class="fa-solid fa-upload"></i> {" Upload Plant Image"}</h3>
                <p class="card-description">
                    {"Take or upload a clear photo of crop leaves showing symptoms"}
                </p>
            </div>
            { render_intake_zone(model, ctx) }
            { render_analyze_button(model, ctx) }
            { render_progress_strip(model) }
        </div>
    }
}

fn trigger_file_input() -> Callback<()> {
    Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    })
}

fn render_intake_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files();
        input.set_value("");
        files.map(Msg::FilesSelected)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger = trigger_file_input();

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            { if let Some(image) = model.session.image() {
                let trigger = trigger.clone();
                html! {
                    <div class="image-preview">
                        <img src={image.as_src().to_string()} alt={image.name().to_string()} />
                        <button
                            class="change-image-btn"
                            onclick={debounce(300, move || trigger.emit(()))}
                        >
                            <i class="fa-solid fa-upload"></i> {" Change Image"}
                        </button>
                    </div>
                }
            } else {
                html! {
                    <div
                        id="drop-zone"
                        class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                        ondragover={handle_drag_over}
                        ondragleave={handle_drag_leave}
                        ondrop={handle_drop}
                        onclick={debounce(300, move || trigger.emit(()))}
                    >
                        <div class="upload-placeholder">
                            <i class="fa-solid fa-image"></i>
                            <p>{"Click to upload, drag & drop, or paste"}</p>
                            <p class="file-types">{"PNG, JPG up to 10MB"}</p>
                        </div>
                    </div>
                }
            }}
        </>
    }
}

fn render_analyze_button(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let busy = model.session.is_busy();

    html! {
        <button
            class="analyze-btn"
            disabled={busy || model.session.image().is_none()}
            onclick={debounce(300, move || link.send_message(Msg::Analyze))}
        >
            { if busy {
                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing with CNN Model..."}</> }
            } else if let Some(image) = model.session.image() {
                html! {
                    <>
                        <i class="fa-solid fa-magnifying-glass"></i>
                        { format!(" Analyze \"{}\"", truncate_label(image.name(), 20)) }
                    </>
                }
            } else {
                html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Plant Health"}</> }
            }}
        </button>
    }
}

fn render_progress_strip(model: &Model) -> Html {
    if !model.session.is_busy() {
        return html! {};
    }

    html! {
        <div class="progress-strip">
            <div class="progress-track">
                <div class="progress-fill progress-indeterminate"></div>
            </div>
            <p class="progress-note">{"Running ResNet50 + Vision Transformer ensemble..."}</p>
        </div>
    }
}
