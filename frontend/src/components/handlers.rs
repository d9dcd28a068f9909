use super::super::{Model, Msg, Theme, THEME_STORAGE_KEY};
use super::toast::Toast;
use super::utils::first_image_file;
use gloo_file::callbacks::read_as_data_url;
use gloo_file::File as GlooFile;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use shared::{
    check_upload_size, AnalysisTicket, AnalyzeError, Classifier, Completion, IntakeError,
    UploadedImage, ANALYSIS_DELAY_MS,
};
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

const TOAST_DURATION_MS: u32 = 4_000;

pub fn handle_files_selected(
    model: &mut Model,
    ctx: &Context<Model>,
    file_list: &web_sys::FileList,
) -> bool {
    intake_from_list(model, ctx, file_list);
    true
}

fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    if let Err(err) = check_upload_size(file.size()) {
        log::warn!("rejected {} ({} bytes)", file.name(), file.size());
        let _ = web_sys::window()
            .expect("no global `window` exists")
            .alert_with_message(&err.to_string());
        return false;
    }

    let name = file.name();
    let size = file.size();
    let link = ctx.link().clone();
    let reader = read_as_data_url(&file, move |result| match result {
        Ok(data_url) => link.send_message(Msg::ImageDecoded {
            name,
            size,
            data_url,
        }),
        Err(e) => link.send_message(Msg::ImageDecodeFailed(e.to_string())),
    });
    model.pending_read = Some(reader);

    false
}

pub fn handle_image_decoded(model: &mut Model, name: String, size: u64, data_url: String) -> bool {
    model.pending_read = None;

    // A replaced image invalidates any run still on the clock.
    if let Some(timeout) = model.analysis_timeout.take() {
        timeout.cancel();
    }

    log::info!("image published: {} ({} bytes)", name, size);
    model.session.publish_image(UploadedImage::new(name, size, data_url));
    true
}

pub fn handle_decode_failed(model: &mut Model, ctx: &Context<Model>, reason: String) -> bool {
    model.pending_read = None;
    log::warn!("image decode failed: {}", reason);
    show_toast(model, ctx, Toast::error(IntakeError::Decode(reason).to_string()));
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        intake_from_list(model, ctx, &file_list);
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        event.prevent_default();
        intake_from_list(model, ctx, &file_list);
        return true;
    }
    false
}

fn intake_from_list(model: &mut Model, ctx: &Context<Model>, file_list: &web_sys::FileList) {
    match first_image_file(file_list) {
        Some(file) => {
            handle_file_chosen(model, ctx, file);
        }
        None => {
            log::warn!("no image file in dropped/pasted selection");
            show_toast(model, ctx, Toast::error("No valid image file selected."));
        }
    }
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.session.begin_analysis() {
        Ok(ticket) => {
            let link = ctx.link().clone();
            model.analysis_timeout = Some(Timeout::new(ANALYSIS_DELAY_MS, move || {
                link.send_message(Msg::AnalysisComplete(ticket));
            }));
            true
        }
        Err(err @ AnalyzeError::ImageRequired) => {
            show_toast(model, ctx, Toast::error(err.to_string()));
            true
        }
        // The button is disabled while busy; a second invocation must not
        // reset the running timer.
        Err(AnalyzeError::AlreadyRunning) => false,
    }
}

pub fn handle_analysis_complete(
    model: &mut Model,
    ctx: &Context<Model>,
    ticket: AnalysisTicket,
) -> bool {
    model.analysis_timeout = None;

    let Some(result) = model.session.image().map(|image| model.classifier.classify(image)) else {
        return false;
    };

    match model.session.complete_analysis(ticket, result) {
        Completion::Settled => {
            let disease = model
                .session
                .result()
                .map(|r| r.disease.clone())
                .unwrap_or_default();
            log::info!("analysis settled: {}", disease);
            show_toast(model, ctx, Toast::success("Analysis complete!"));
            true
        }
        Completion::Discarded => {
            log::debug!("discarded stale analysis completion");
            false
        }
    }
}

pub fn show_toast(model: &mut Model, ctx: &Context<Model>, toast: Toast) {
    if let Some(old_timeout) = model.toast_timeout.take() {
        old_timeout.cancel();
    }
    model.toast = Some(toast);

    let link = ctx.link().clone();
    model.toast_timeout = Some(Timeout::new(TOAST_DURATION_MS, move || {
        link.send_message(Msg::DismissToast);
    }));
}

pub fn handle_dismiss_toast(model: &mut Model) -> bool {
    model.toast = None;
    model.toast_timeout = None;
    true
}

pub fn apply_theme(theme: Theme) {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    match theme {
        Theme::Dark => body.class_list().add_1("dark-mode").unwrap(),
        Theme::Light => body.class_list().remove_1("dark-mode").unwrap(),
    }
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();
    apply_theme(model.theme);

    if let Err(e) = LocalStorage::set(THEME_STORAGE_KEY, model.theme) {
        log::warn!("failed to persist theme preference: {:?}", e);
    }

    true
}
