//! Server-paginated table pieces: toolbar, pagination footer and the offers
//! grid built from them.

use api::{OfferRow, OfferStatus, OffersSource};
use dioxus::prelude::*;

use crate::icons::{FaPen, FaTrash};
use crate::list::PaginatedList;
use crate::Icon;

/// `"1–5 of 12"` style label of the rows shown on a page. A page past the
/// end shows no rows.
pub fn range_label(page_index: u32, page_size: u32, total_count: u64) -> String {
    let size = u64::from(page_size);
    let from = u64::from(page_index) * size + 1;
    if size == 0 || from > total_count {
        return format!("0–0 of {total_count}");
    }
    let to = (from + size - 1).min(total_count);
    format!("{from}–{to} of {total_count}")
}

/// CSS class of the chip showing an offer status.
pub fn status_class(status: &OfferStatus) -> &'static str {
    match status {
        OfferStatus::Accepted => "chip chip-success",
        OfferStatus::Rejected => "chip chip-error",
        OfferStatus::Pending => "chip chip-warning",
        OfferStatus::Other(_) => "chip",
    }
}

/// A value/label pair of a select box.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn GridToolbar(
    search_text: String,
    filter_value: String,
    filter_options: Vec<FilterOption>,
    on_search: EventHandler<String>,
    on_filter: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "grid-toolbar",
            input {
                class: "grid-search",
                r#type: "search",
                placeholder: "Search...",
                value: "{search_text}",
                oninput: move |evt: FormEvent| on_search.call(evt.value()),
            }
            select {
                class: "grid-filter",
                value: "{filter_value}",
                onchange: move |evt: FormEvent| on_filter.call(evt.value()),
                for choice in filter_options {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == filter_value,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn GridPagination(
    page_index: u32,
    page_size: u32,
    page_sizes: Vec<u32>,
    total_count: u64,
    page_count: u64,
    on_page: EventHandler<u32>,
    on_page_size: EventHandler<u32>,
) -> Element {
    let has_prev = page_index > 0;
    let has_next = u64::from(page_index) + 1 < page_count;

    rsx! {
        div {
            class: "grid-pagination",
            span { class: "grid-pagination-label", "Rows per page:" }
            select {
                value: "{page_size}",
                onchange: move |evt: FormEvent| match evt.value().parse::<u32>() {
                    Ok(size) => on_page_size.call(size),
                    Err(_) => tracing::warn!("Ignoring page size {:?}", evt.value()),
                },
                for size in page_sizes {
                    option {
                        key: "{size}",
                        value: "{size}",
                        selected: size == page_size,
                        "{size}"
                    }
                }
            }
            span {
                class: "grid-pagination-range",
                "{range_label(page_index, page_size, total_count)}"
            }
            button {
                class: "grid-page-button",
                disabled: !has_prev,
                onclick: move |_| on_page.call(page_index.saturating_sub(1)),
                "‹"
            }
            button {
                class: "grid-page-button",
                disabled: !has_next,
                onclick: move |_| on_page.call(page_index + 1),
                "›"
            }
        }
    }
}

/// The offers table with search, type filter and pagination.
#[component]
pub fn OffersGrid(list: PaginatedList<OffersSource>, filter_options: Vec<FilterOption>) -> Element {
    let state = list.state();
    let controller = state.read();
    let query = controller.query().clone();

    rsx! {
        div {
            class: "grid",
            GridToolbar {
                search_text: query.search_text.clone(),
                filter_value: query.filter_value.clone(),
                filter_options: filter_options,
                on_search: move |text: String| {
                    let mut list = list;
                    list.set_search_text(text);
                },
                on_filter: move |value: String| {
                    let mut list = list;
                    list.set_filter_value(value);
                },
            }

            div {
                class: if controller.is_loading() { "grid-body loading" } else { "grid-body" },
                table {
                    thead {
                        tr {
                            th { "ID" }
                            th { "Name" }
                            th { "Phone number" }
                            th { "Company" }
                            th { "Job Title" }
                            th { "Type" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        if controller.rows().is_empty() && !controller.is_loading() {
                            tr {
                                td { class: "grid-empty", colspan: "8", "No rows" }
                            }
                        }
                        for row in controller.rows().iter().cloned() {
                            OfferGridRow { key: "{row.id}", row: row }
                        }
                    }
                }
            }

            GridPagination {
                page_index: query.page_index,
                page_size: query.page_size,
                page_sizes: controller.page_sizes().to_vec(),
                total_count: controller.total_count(),
                page_count: controller.page_count(),
                on_page: move |index: u32| {
                    let mut list = list;
                    list.set_page(index);
                },
                on_page_size: move |size: u32| {
                    let mut list = list;
                    list.set_page_size(size);
                },
            }
        }
    }
}

#[component]
fn OfferGridRow(row: OfferRow) -> Element {
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    rsx! {
        tr {
            td { "{row.id}" }
            td {
                div { class: "grid-name", "{row.user_name}" }
                div { class: "grid-email", "{row.email}" }
            }
            td { "{row.phone}" }
            td { "{row.company}" }
            td { "{row.job_title}" }
            td { "{row.r#type}" }
            td {
                span { class: status_class(&row.status), "{row.status}" }
            }
            td {
                class: "grid-actions",
                button {
                    title: "Edit",
                    onclick: move |_| tracing::info!("Edit offer {}", edit_id),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                button {
                    title: "Delete",
                    onclick: move |_| tracing::info!("Delete offer {}", delete_id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}
