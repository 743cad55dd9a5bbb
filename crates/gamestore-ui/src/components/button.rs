//! Button Components
//!
//! Button styles used across the storefront:
//! - Primary: Main actions (add to cart, pay)
//! - Secondary: Supporting actions (apply promo)
//! - Outline: Header and hero actions
//! - Ghost: Compact in-list actions (remove line)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled with the primary accent
    #[default]
    Primary,
    /// Filled with the secondary accent
    Secondary,
    /// Transparent with a border
    Outline,
    /// No border or fill until hovered
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, glyphs, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Join a base class with optional extra classes
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| add_to_cart(item.id),
///         "Add to cart"
///     }
///
///     Button {
///         variant: ButtonVariant::Primary,
///         size: ButtonSize::Lg,
///         disabled: true,
///         "Pay"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = format!("btn {} {}", props.variant.class(), props.size.class());
    let full_class = class_list(&base, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (remove, close, ...)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
