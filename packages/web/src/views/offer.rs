//! Offer creation form.

use api::{Addition, OfferDraft, PlanType, User, ValidationErrors};
use dioxus::prelude::*;
use ui::use_api;

use super::{use_notice, use_page_loading};
use crate::Route;

#[component]
pub fn Offer() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut page_loading = use_page_loading();
    let mut notice = use_notice();

    let mut draft = use_signal(OfferDraft::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut users = use_signal(Vec::<User>::new);
    let mut submitting = use_signal(|| false);

    let users_client = client.clone();
    use_effect(move || {
        let client = users_client.clone();
        page_loading.set(true);
        spawn(async move {
            match client.list_users().await {
                Ok(list) => users.set(list),
                Err(e) => tracing::error!("Failed to load users: {}", e),
            }
            page_loading.set(false);
        });
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            tracing::warn!("Offer submission already in flight");
            return;
        }
        let offer = match draft.read().validate() {
            Ok(offer) => offer,
            Err(invalid) => {
                tracing::warn!("Offer form rejected: {:?}", invalid);
                errors.set(invalid);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        submitting.set(true);
        page_loading.set(true);

        let client = client.clone();
        spawn(async move {
            match client.create_offer(&offer).await {
                Ok(_) => {
                    tracing::info!("Offer created for user {}", offer.user_id);
                    draft.set(OfferDraft::default());
                    notice.set(Some("Offer created successfully".to_string()));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => tracing::error!("Failed to create offer: {}", e),
            }
            submitting.set(false);
            page_loading.set(false);
        });
    };

    let current = draft();
    let field_errors = errors();

    rsx! {
        div {
            class: "card offer-card",
            div {
                class: "offer-header",
                h1 { "Create Offer" }
                p { class: "caption", "Send onboarding offer to new client" }
            }

            form {
                class: "offer-form",
                onsubmit: handle_submit,

                fieldset {
                    legend { "Plan Type" }
                    for plan in PlanType::ALL {
                        label {
                            class: "radio",
                            input {
                                r#type: "radio",
                                name: "plan_type",
                                value: plan.as_str(),
                                checked: current.plan_type == Some(plan),
                                onchange: move |_| draft.write().plan_type = Some(plan),
                            }
                            "{plan.label()}"
                        }
                    }
                    if let Some(msg) = field_errors.plan_type.clone() {
                        div { class: "field-error", "{msg}" }
                    }
                }

                fieldset {
                    legend { "Additions" }
                    for addition in Addition::ALL {
                        label {
                            class: "checkbox",
                            input {
                                r#type: "checkbox",
                                value: addition.as_str(),
                                checked: current.additions.contains(&addition),
                                onchange: move |evt: FormEvent| {
                                    draft.write().set_addition(addition, evt.checked());
                                },
                            }
                            "{addition.label()}"
                        }
                    }
                }

                label { r#for: "offer-user", "User" }
                select {
                    id: "offer-user",
                    value: "{current.user}",
                    onchange: move |evt: FormEvent| draft.write().user = evt.value(),
                    option { value: "", disabled: true, selected: current.user.is_empty(), "Select a user" }
                    for user in users() {
                        option {
                            key: "{user.id}",
                            value: "{user.id}",
                            selected: user.id == current.user,
                            "{user.display_name()}"
                        }
                    }
                }
                if let Some(msg) = field_errors.user.clone() {
                    div { class: "field-error", "{msg}" }
                }

                label { r#for: "offer-expired", "Expired" }
                input {
                    id: "offer-expired",
                    r#type: "date",
                    value: "{current.expired}",
                    oninput: move |evt: FormEvent| draft.write().expired = evt.value(),
                }
                if let Some(msg) = field_errors.expired.clone() {
                    div { class: "field-error", "{msg}" }
                }

                label { r#for: "offer-price", "Price" }
                div {
                    class: "input-adornment",
                    span { "$" }
                    input {
                        id: "offer-price",
                        inputmode: "decimal",
                        value: "{current.price}",
                        oninput: move |evt: FormEvent| draft.write().price = evt.value(),
                    }
                }
                if let Some(msg) = field_errors.price.clone() {
                    div { class: "field-error", "{msg}" }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "button-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
