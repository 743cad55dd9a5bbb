//! Input Field Components
//!
//! Single-line text input used for the promo code field.
//! Enter submits, the same as clicking the paired action button.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when Enter is pressed
    #[props(default)]
    pub onsubmit: Option<EventHandler<()>>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut code = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: code(),
///         oninput: move |s| code.set(s),
///         onsubmit: move |_| apply(),
///         placeholder: "Promo code".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            input {
                class: "input-field",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if submits(&e.key()) {
                        if let Some(handler) = &props.onsubmit {
                            handler.call(());
                        }
                    }
                },
            }
        }
    }
}

/// Whether a key press submits the field
fn submits(key: &Key) -> bool {
    *key == Key::Enter
}
