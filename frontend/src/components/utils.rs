use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// The picker is single-image; anything past the first image file is ignored.
pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| file.type_().starts_with("image/"))
        .map(GlooFile::from)
}

pub fn format_confidence(confidence: f32) -> String {
    format!("{:.1}%", confidence)
}

pub fn meter_width(confidence: f32) -> String {
    format!("width: {:.1}%", confidence.clamp(0.0, 100.0))
}

pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let head: String = label.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_renders_with_one_decimal() {
        assert_eq!(format_confidence(98.7), "98.7%");
        assert_eq!(format_confidence(100.0), "100.0%");
    }

    #[test]
    fn meter_width_is_clamped_to_the_percentage_domain() {
        assert_eq!(meter_width(94.8), "width: 94.8%");
        assert_eq!(meter_width(120.0), "width: 100.0%");
        assert_eq!(meter_width(-3.0), "width: 0.0%");
    }

    #[test]
    fn long_labels_are_shortened_with_an_ellipsis() {
        assert_eq!(truncate_label("leaf.jpg", 20), "leaf.jpg");
        assert_eq!(
            truncate_label("a-very-long-photo-filename.jpeg", 20),
            "a-very-long-photo..."
        );
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let name = "übergroße-blätter-foto.png";
        let shortened = truncate_label(name, 10);
        assert_eq!(shortened, "übergro...");
    }
}
