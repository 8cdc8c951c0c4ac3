//! Card chrome shared by every chart: title, description, selector slot.

use dioxus::prelude::*;

#[component]
pub fn ChartCard(
    title: String,
    description: String,
    selectors: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                div {
                    h2 { class: "chart-card__title", "{title}" }
                    p { class: "chart-card__description", "{description}" }
                }
                if let Some(controls) = selectors {
                    div { class: "chart-card__selectors", {controls} }
                }
            }
            div { class: "chart-card__body", {children} }
        }
    }
}
