//! FAQ accordion. At most one answer is open at a time.

use dioxus::prelude::*;
use gamestore_core::content::FAQ;

/// Next open entry after clicking `clicked`.
fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn FaqSection() -> Element {
    let mut open = use_signal(|| None::<usize>);
    let current = open();

    rsx! {
        section { id: "faq", class: "faq-section",
            div { class: "container narrow",
                h2 { class: "section-title centered", "Frequently asked questions" }

                div { class: "faq-list",
                    for (index, entry) in FAQ.iter().enumerate() {
                        {
                            let is_open = current == Some(index);
                            rsx! {
                                div { key: "{index}", class: if is_open { "faq-item open" } else { "faq-item" },
                                    button {
                                        class: "faq-question",
                                        "aria-expanded": if is_open { "true" } else { "false" },
                                        onclick: move |_| {
                                            let next = toggle(open(), index);
                                            open.set(next);
                                        },
                                        span { {entry.question} }
                                        span { class: "faq-chevron", if is_open { "▴" } else { "▾" } }
                                    }
                                    if is_open {
                                        p { class: "faq-answer", {entry.answer} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_entry_closes_the_first() {
        assert_eq!(toggle(None, 1), Some(1));
        assert_eq!(toggle(Some(1), 2), Some(2));
    }

    #[test]
    fn clicking_open_entry_closes_it() {
        assert_eq!(toggle(Some(0), 0), None);
    }
}
