use gloo_events::EventListener;
use gloo_file::callbacks::FileReader;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use shared::{AnalysisSession, AnalysisTicket, Classifier, MockClassifier};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

mod components;

use components::toast::Toast;
use components::{architecture, handlers, header, research, scanner, tabs, theme_toggle, toast};

pub const THEME_STORAGE_KEY: &str = "agrivision.theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Scanner,
    Research,
    Models,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// Yew msg components
pub enum Msg {
    // Image intake
    FilesSelected(FileList),
    ImageDecoded {
        name: String,
        size: u64,
        data_url: String,
    },
    ImageDecodeFailed(String),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
    SetDragging(bool),

    // Analysis operations
    Analyze,
    AnalysisComplete(AnalysisTicket),

    // UI states
    SelectTab(Tab),
    DismissToast,
    ToggleTheme,
}

// Main component
pub struct Model {
    pub session: AnalysisSession,
    pub classifier: Box<dyn Classifier>,
    pub active_tab: Tab,
    pub theme: Theme,
    pub is_dragging: bool,
    pub toast: Option<Toast>,
    pub toast_timeout: Option<Timeout>,
    pub analysis_timeout: Option<Timeout>,
    pub pending_read: Option<FileReader>,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let theme = LocalStorage::get(THEME_STORAGE_KEY).unwrap_or(Theme::Light);
        handlers::apply_theme(theme);

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let paste_listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });

        Self {
            session: AnalysisSession::new(),
            classifier: Box::new(MockClassifier::new(js_sys::Math::random)),
            active_tab: Tab::Scanner,
            theme,
            is_dragging: false,
            toast: None,
            toast_timeout: None,
            analysis_timeout: None,
            pending_read: None,
            paste_listener: Some(paste_listener),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image intake
            Msg::FilesSelected(file_list) => handlers::handle_files_selected(self, ctx, &file_list),
            Msg::ImageDecoded {
                name,
                size,
                data_url,
            } => handlers::handle_image_decoded(self, name, size, data_url),
            Msg::ImageDecodeFailed(reason) => handlers::handle_decode_failed(self, ctx, reason),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Analysis operations
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisComplete(ticket) => handlers::handle_analysis_complete(self, ctx, ticket),

            // UI states
            Msg::SelectTab(tab) => {
                self.active_tab = tab;
                true
            }
            Msg::DismissToast => handlers::handle_dismiss_toast(self),
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(self.theme, ctx.link()) }

                <main class="main-content">
                    { tabs::render_tab_bar(self, ctx) }
                    { match self.active_tab {
                        Tab::Scanner => scanner::render_scanner_tab(self, ctx),
                        Tab::Research => research::render_research(),
                        Tab::Models => architecture::render_architecture(),
                    }}
                </main>

                { toast::render_toast(self.toast.as_ref()) }

                <footer class="app-footer">
                    <p>{"AgriVision | ML-Powered Crop Disease Detection"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
