use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notice shown in a corner overlay and auto-dismissed.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    }
}

fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "fa-solid fa-circle-check",
        ToastKind::Error => "fa-solid fa-circle-exclamation",
    }
}

pub fn render_toast(toast: Option<&Toast>) -> Html {
    if let Some(toast) = toast {
        html! {
            <div class={toast_class(toast.kind)}>
                <i class={toast_icon(toast.kind)}></i>
                <p>{ &toast.message }</p>
            </div>
        }
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_classes() {
        assert_eq!(toast_class(ToastKind::Success), "toast toast-success");
        assert_eq!(toast_class(ToastKind::Error), "toast toast-error");
    }

    #[test]
    fn constructors_tag_the_kind() {
        assert_eq!(Toast::success("Analysis complete!").kind, ToastKind::Success);
        assert_eq!(
            Toast::error("Please upload an image first").kind,
            ToastKind::Error
        );
    }
}
