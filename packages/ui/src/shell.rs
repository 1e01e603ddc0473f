//! Application frame: collapsible side navigation, top bar with the account
//! menu, and a loading backdrop over the content.

use api::Identity;
use dioxus::prelude::*;
use store::models::initials;

use crate::icons::{FaBars, FaGauge, FaRightFromBracket, FaUser, FaUserPlus};
use crate::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Onboarding,
}

/// One entry of the side navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub icon: NavIcon,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon,
        }
    }

    /// Whether this entry is the one for `path` (or a page below it).
    pub fn is_active(&self, path: &str) -> bool {
        path == self.path || path.starts_with(&format!("{}/", self.path))
    }
}

#[component]
pub fn AppShell(
    title: String,
    nav_items: Vec<NavItem>,
    active_path: String,
    user: Option<Identity>,
    #[props(default)] loading: bool,
    on_navigate: EventHandler<String>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let mut collapsed = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let avatar = initials(&name);

    rsx! {
        div {
            class: if collapsed() { "shell collapsed" } else { "shell" },

            nav {
                class: "shell-drawer",
                div { class: "shell-title", "{title}" }
                for item in nav_items {
                    button {
                        key: "{item.path}",
                        class: if item.is_active(&active_path) { "shell-nav-item active" } else { "shell-nav-item" },
                        title: "{item.label}",
                        onclick: {
                            let path = item.path.clone();
                            move |_| on_navigate.call(path.clone())
                        },
                        match item.icon {
                            NavIcon::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
                            NavIcon::Onboarding => rsx! { Icon { icon: FaUserPlus, width: 16, height: 16 } },
                        }
                        if !collapsed() {
                            span { class: "shell-nav-label", "{item.label}" }
                        }
                    }
                }
            }

            div {
                class: "shell-main",
                header {
                    class: "shell-header",
                    button {
                        class: "shell-toggle",
                        title: "Toggle navigation",
                        onclick: move |_| collapsed.set(!collapsed()),
                        Icon { icon: FaBars, width: 16, height: 16 }
                    }
                    div {
                        class: "shell-account",
                        button {
                            class: "shell-avatar",
                            title: "Account",
                            onclick: move |_| menu_open.set(!menu_open()),
                            "{avatar}"
                        }
                        if menu_open() {
                            div {
                                class: "shell-menu",
                                div { class: "shell-menu-greeting", "Hello, {name}" }
                                button {
                                    class: "shell-menu-item",
                                    onclick: move |_| {
                                        menu_open.set(false);
                                        tracing::info!("Profile requested");
                                    },
                                    Icon { icon: FaUser, width: 14, height: 14 }
                                    span { "Profile" }
                                }
                                button {
                                    class: "shell-menu-item",
                                    onclick: move |_| {
                                        menu_open.set(false);
                                        on_logout.call(());
                                    },
                                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                    span { "Logout" }
                                }
                            }
                        }
                    }
                }

                main {
                    class: "shell-content",
                    {children}
                }
            }

            if loading {
                div {
                    class: "shell-backdrop",
                    div { class: "spinner" }
                }
            }
        }
    }
}
