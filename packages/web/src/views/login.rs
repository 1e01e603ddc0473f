//! Login page view with an email/password form.

use api::ApiError;
use dioxus::prelude::*;
use ui::{sign_in, use_api, use_auth, use_session};

use crate::Route;

/// Text shown under the form for a failed login.
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Server { message, .. } => message.clone(),
        ApiError::Transport(_) => "Could not reach the server".to_string(),
        ApiError::Decode(_) => "Unexpected response from the server".to_string(),
    }
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_api();
    let session = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in (or just signed in): go to the dashboard
    use_effect(move || {
        if auth().authenticated {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let client = client.clone();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match client.login(&e, &p).await {
                Ok(response) => {
                    tracing::info!("Signed in as {}", response.user.email);
                    sign_in(&session, &mut auth, response.user, response.token);
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    error.set(Some(login_error_message(&err)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: handle_login,

                h1 { class: "login-title", "hiu" }
                p { class: "login-subtitle", "Sign in to your dashboard" }

                if let Some(msg) = error() {
                    div { class: "form-error", "{msg}" }
                }

                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(login_error_message(&err), "Invalid credentials");
        assert_eq!(
            login_error_message(&ApiError::Transport("refused".into())),
            "Could not reach the server"
        );
    }
}
