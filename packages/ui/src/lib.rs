//! This crate contains all shared UI for the dashboard.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    evaluate_gate, sign_in, sign_out, use_api, use_auth, use_session, AuthGuard, AuthProvider,
    AuthState, GateState,
};

pub mod list;
pub use list::{use_paginated_list, ListController, ListDriver, ListOptions, PaginatedList};

mod timer;
pub use timer::sleep;

mod data_grid;
pub use data_grid::{range_label, status_class, FilterOption, GridPagination, GridToolbar, OffersGrid};

mod dashboard_card;
pub use dashboard_card::DashboardCard;

mod shell;
pub use shell::{AppShell, NavIcon, NavItem};
