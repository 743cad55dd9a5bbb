//! Static page copy: hero, FAQ, promo showcase and support blurbs.
//!
//! Shared by the desktop page and the CLI so both say the same thing.

use crate::promo::PromoTable;

pub const HERO_BADGE: &str = "🔥 Special offer";
pub const HERO_TITLE: &str = "Donation Shop";
pub const HERO_TAGLINE: &str =
    "Get exclusive privileges, currency and items. Use promo codes for extra discounts!";

pub const SUPPORT_TITLE: &str = "Need help?";
pub const SUPPORT_TAGLINE: &str = "Our support team is ready to help you 24/7";

/// A question/answer pair in the FAQ accordion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "How do I activate a promo code?",
        answer: "Add items to the cart, enter the promo code in the field and press \"Apply\". \
                 The discount is calculated automatically.",
    },
    FaqEntry {
        question: "Can I use several promo codes?",
        answer: "Only one promo code can be active at a time. The promo discount stacks with \
                 item discounts.",
    },
    FaqEntry {
        question: "How long does VIP status last?",
        answer: "VIP status lasts 30 days from activation. You can extend it at any time.",
    },
    FaqEntry {
        question: "Which payment methods are available?",
        answer: "We accept bank cards, e-wallets and cryptocurrency. All payments are protected.",
    },
];

/// A contact channel in the support section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportChannel {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SUPPORT_CHANNELS: [SupportChannel; 2] = [
    SupportChannel {
        label: "Chat with us",
        icon: "💬",
    },
    SupportChannel {
        label: "Email support",
        icon: "✉",
    },
];

/// One card in the "Active promo codes" section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoShowcase {
    pub code: String,
    pub glyph: &'static str,
    pub blurb: String,
    /// Highlighted card
    pub featured: bool,
}

/// Showcase cards for every code in `promos`, in code order
///
/// Known codes get hand-written copy; any other configured code gets a
/// generic "N% off" card.
pub fn promo_showcase(promos: &PromoTable) -> Vec<PromoShowcase> {
    promos
        .iter()
        .map(|(code, percent)| {
            let (glyph, blurb, featured) = match code {
                "GAME2024" => ("🎮", format!("{}% off", percent), false),
                "NEWBIE" => ("🌟", format!("{}% off for newcomers", percent), false),
                "VIP50" => ("👑", format!("{}% off VIP", percent), true),
                _ => ("🏷", format!("{}% off", percent), false),
            };
            PromoShowcase {
                code: code.to_string(),
                glyph,
                blurb,
                featured,
            }
        })
        .collect()
}
