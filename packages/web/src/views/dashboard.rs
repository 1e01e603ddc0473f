//! Dashboard page: weekly summary cards, weekday statistics and the offers
//! list.

use api::{
    DashboardStat, DashboardSummary, OffersSource, StatFilter, SummaryFilter, SummaryRecord,
    WEEKDAYS,
};
use dioxus::prelude::*;
use store::DashboardConfig;
use ui::{use_api, use_paginated_list, DashboardCard, FilterOption, ListOptions, OffersGrid};

use super::use_page_loading;

/// Share of `value` in `max`, as a whole percentage for bar widths.
fn percent_of(value: u64, max: u64) -> u64 {
    if max == 0 {
        0
    } else {
        value.saturating_mul(100) / max
    }
}

/// `"monday"` → `"Monday"`.
fn day_label(day: &str) -> String {
    let mut chars = day.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn offer_filter_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("", "All"),
        FilterOption::new(StatFilter::Yearly.as_str(), StatFilter::Yearly.label()),
        FilterOption::new(StatFilter::Monthly.as_str(), StatFilter::Monthly.label()),
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let client = use_api();
    let config = use_context::<DashboardConfig>();
    let mut page_loading = use_page_loading();

    let mut summary_filter = use_signal(SummaryFilter::default);
    let mut stat_filter = use_signal(StatFilter::default);
    let mut summary = use_signal(DashboardSummary::default);
    let mut stat = use_signal(DashboardStat::default);

    let list = use_paginated_list(
        OffersSource::new(client.clone()),
        ListOptions::from(&config.list),
    );

    let summary_client = client.clone();
    use_effect(move || {
        let filter = summary_filter();
        let client = summary_client.clone();
        page_loading.set(true);
        spawn(async move {
            match client.dashboard_summary(filter).await {
                Ok(data) => summary.set(data),
                Err(e) => tracing::error!("Failed to load dashboard summary: {}", e),
            }
            page_loading.set(false);
        });
    });

    let stat_client = client.clone();
    use_effect(move || {
        let filter = stat_filter();
        let client = stat_client.clone();
        spawn(async move {
            match client.dashboard_stat(filter).await {
                Ok(data) => stat.set(data),
                Err(e) => tracing::error!("Failed to load dashboard stats: {}", e),
            }
        });
    });

    let record = summary.read().for_filter(summary_filter()).clone();

    rsx! {
        div {
            class: "page-header",
            h1 { "Dashboard" }
            select {
                value: "{summary_filter().as_str()}",
                onchange: move |evt: FormEvent| match SummaryFilter::parse(&evt.value()) {
                    Some(filter) => summary_filter.set(filter),
                    None => tracing::warn!("Unknown summary filter {:?}", evt.value()),
                },
                for filter in SummaryFilter::ALL {
                    option {
                        value: filter.as_str(),
                        selected: filter == summary_filter(),
                        "{filter.label()}"
                    }
                }
            }
        }

        SummaryCards { record: record }

        div {
            class: "page-header",
            h2 { "Statistics" }
            select {
                value: "{stat_filter().as_str()}",
                onchange: move |evt: FormEvent| match StatFilter::parse(&evt.value()) {
                    Some(filter) => stat_filter.set(filter),
                    None => tracing::warn!("Unknown stat filter {:?}", evt.value()),
                },
                for filter in StatFilter::ALL {
                    option {
                        value: filter.as_str(),
                        selected: filter == stat_filter(),
                        "{filter.label()}"
                    }
                }
            }
        }

        div {
            class: "dashboard-charts",
            WebsiteVisits { stat: stat() }
            OffersSent { stat: stat() }
        }

        div {
            class: "card",
            h2 { "Offers List" }
            OffersGrid { list: list, filter_options: offer_filter_options() }
        }
    }
}

#[component]
fn SummaryCards(record: SummaryRecord) -> Element {
    rsx! {
        div {
            class: "dashboard-cards",
            DashboardCard {
                title: "Total active users",
                value: SummaryRecord::in_thousands(&record.active_users),
                subtitle: "Last month".to_string(),
            }
            DashboardCard {
                title: "Total clicks",
                value: SummaryRecord::in_thousands(&record.clicks),
                subtitle: "Last month".to_string(),
            }
            DashboardCard {
                title: "Total appearance",
                value: SummaryRecord::in_thousands(&record.appearance),
                subtitle: "Last month".to_string(),
            }
        }
    }
}

#[component]
fn WebsiteVisits(stat: DashboardStat) -> Element {
    let max = WEEKDAYS
        .iter()
        .map(|day| {
            let visits = stat.visits_on(day);
            visits.desktop.max(visits.mobile)
        })
        .max()
        .unwrap_or(0);

    rsx! {
        div {
            class: "card chart",
            h3 { "Website Visits" }
            div {
                class: "chart-legend",
                span { class: "legend desktop", "Desktop" }
                span { class: "legend mobile", "Mobile" }
            }
            for day in WEEKDAYS {
                div {
                    key: "{day}",
                    class: "chart-row",
                    span { class: "chart-label", "{day_label(day)}" }
                    div {
                        class: "chart-bars",
                        div {
                            class: "bar desktop",
                            style: "width: {percent_of(stat.visits_on(day).desktop, max)}%",
                            title: "{stat.visits_on(day).desktop}",
                        }
                        div {
                            class: "bar mobile",
                            style: "width: {percent_of(stat.visits_on(day).mobile, max)}%",
                            title: "{stat.visits_on(day).mobile}",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OffersSent(stat: DashboardStat) -> Element {
    let max = WEEKDAYS
        .iter()
        .map(|day| stat.offers_on(day))
        .max()
        .unwrap_or(0);

    rsx! {
        div {
            class: "card chart",
            h3 { "Offers Sent" }
            for day in WEEKDAYS {
                div {
                    key: "{day}",
                    class: "chart-row",
                    span { class: "chart-label", "{day_label(day)}" }
                    div {
                        class: "chart-bars",
                        div {
                            class: "bar offers",
                            style: "width: {percent_of(stat.offers_on(day), max)}%",
                        }
                    }
                    span { class: "chart-value", "{stat.offers_on(day)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(5, 10), 50);
        assert_eq!(percent_of(10, 10), 100);
        assert_eq!(percent_of(3, 0), 0);
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label("monday"), "Monday");
        assert_eq!(day_label(""), "");
    }

    #[test]
    fn test_offer_filter_options() {
        let values: Vec<String> = offer_filter_options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["", "yearly", "monthly"]);
    }
}
