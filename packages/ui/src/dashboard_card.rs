use dioxus::prelude::*;

#[component]
pub fn DashboardCard(
    title: String,
    value: String,
    #[props(default)] subtitle: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "dashboard-card",
            div { class: "dashboard-card-title", "{title}" }
            div { class: "dashboard-card-value", "{value}" }
            if let Some(subtitle) = subtitle {
                div { class: "dashboard-card-subtitle", "{subtitle}" }
            }
        }
    }
}
