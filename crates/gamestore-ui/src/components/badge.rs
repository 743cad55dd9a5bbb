//! Badge Component
//!
//! Small pill for counts and labels: the cart counter, "-20%" discount
//! markers, the active-promo banner.

use dioxus::prelude::*;

use super::button::class_list;

/// Badge color variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    /// Attention-grabbing accent, used for discounts
    Accent,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Accent => "badge-accent",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let base = format!("badge {}", props.variant.class());
    let full_class = class_list(&base, props.class.as_deref());

    rsx! {
        span { class: "{full_class}", {props.children} }
    }
}
