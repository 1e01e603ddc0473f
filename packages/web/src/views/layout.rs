use std::time::Duration;

use dioxus::prelude::*;
use ui::{sign_out, sleep, use_auth, use_session, AppShell, AuthGuard, NavIcon, NavItem};

use crate::Route;

/// Page-level loading flag shown as a backdrop over the layout content.
#[derive(Clone, Copy)]
struct PageLoading(Signal<bool>);

/// Loading flag of the surrounding [`MainLayout`]. The flag is cleared when
/// the calling page unmounts, since its in-flight tasks are cancelled with it.
pub fn use_page_loading() -> Signal<bool> {
    let mut loading = use_context::<PageLoading>().0;
    use_drop(move || {
        // The layout may be going away too, taking the signal with it
        if let Ok(mut flag) = loading.try_write() {
            *flag = false;
        }
    });
    loading
}

/// Success message shown on top of the next page.
#[derive(Clone, Copy)]
struct Notice(Signal<Option<String>>);

const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

pub fn use_notice() -> Signal<Option<String>> {
    use_context::<Notice>().0
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", Route::Dashboard {}.to_string(), NavIcon::Dashboard),
        NavItem::new("Onboarding", Route::Offer {}.to_string(), NavIcon::Onboarding),
    ]
}

/// Authenticated frame around the dashboard and offer pages.
#[component]
pub fn MainLayout() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let session = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();
    let loading = use_context_provider(|| PageLoading(Signal::new(false))).0;
    let mut notice = use_context_provider(|| Notice(Signal::new(None))).0;

    // Clear a notice after a while unless a newer one replaced it
    use_effect(move || {
        if let Some(shown) = notice() {
            spawn(async move {
                sleep(NOTICE_TIMEOUT).await;
                if notice.peek().as_deref() == Some(shown.as_str()) {
                    notice.set(None);
                }
            });
        }
    });

    let on_logout = move |_| {
        sign_out(&session, &mut auth);
        nav.replace(Route::Login {});
    };

    rsx! {
        AuthGuard {
            path: path.clone(),
            login_path: Route::Login {}.to_string(),
            AppShell {
                title: "hiu",
                nav_items: nav_items(),
                active_path: path,
                user: auth().user,
                loading: loading(),
                on_navigate: move |target: String| {
                    match target.parse::<Route>() {
                        Ok(route) => {
                            nav.push(route);
                        }
                        Err(e) => tracing::warn!("Unknown navigation target {}: {}", target, e),
                    }
                },
                on_logout: on_logout,
                if let Some(msg) = notice() {
                    div {
                        class: "notice notice-success",
                        onclick: move |_| notice.set(None),
                        "{msg}"
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::*;

    thread_local! {
        static HANDLES: Cell<Option<(Signal<bool>, Signal<bool>)>> = const { Cell::new(None) };
    }

    #[component]
    fn LoadingPage() -> Element {
        use_page_loading();
        rsx! { "page" }
    }

    /// Provides the loading flag as if a page request were in flight, and
    /// mounts [`LoadingPage`] while `show` holds.
    #[component]
    fn Host() -> Element {
        let loading = use_context_provider(|| PageLoading(Signal::new(true))).0;
        let show = use_signal(|| true);
        use_hook(move || HANDLES.with(|handles| handles.set(Some((loading, show)))));
        rsx! {
            if show() {
                LoadingPage {}
            }
        }
    }

    #[tokio::test]
    async fn test_page_loading_cleared_when_page_unmounts() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        let (loading, mut show) = HANDLES.with(|handles| handles.get()).unwrap();
        assert!(dom.in_runtime(|| *loading.peek()));

        dom.in_runtime(|| show.set(false));
        dom.wait_for_work().await;
        dom.render_immediate(&mut NoOpMutations);

        assert!(!dom.in_runtime(|| *loading.peek()));
    }
}
