//! Category Pills Component
//!
//! Horizontal row of catalog filter tabs: All, VIP, Currency, Items, Deals.

use dioxus::prelude::*;
use gamestore_core::CategoryFilter;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Tabs to show, in order
    #[props(default = CategoryFilter::tabs())]
    pub categories: Vec<CategoryFilter>,
    /// Currently selected tab
    pub selected: CategoryFilter,
    /// Handler called when a tab is selected
    pub on_select: EventHandler<CategoryFilter>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(CategoryFilter::default);
///
/// rsx! {
///     CategoryPills {
///         selected: selected(),
///         on_select: move |filter| selected.set(filter)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected;

    rsx! {
        div {
            class: "category-pills",
            role: "tablist",
            "aria-label": "Catalog categories",
            for filter in props.categories.iter().copied() {
                {
                    let is_selected = selected == filter;
                    let label = filter.label();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(filter),
                            "{label}"
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
    fn default_tabs_start_with_all() {
        let tabs = CategoryFilter::tabs();
        assert_eq!(tabs.first(), Some(&CategoryFilter::All));
        assert_eq!(tabs.len(), 5);
    }
}
