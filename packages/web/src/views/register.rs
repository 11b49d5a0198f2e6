//! Registration page view.

use api::RegisterForm;
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Register page component.
///
/// A successful registration signs the user in and shows the server's
/// confirmation; the user stays on this page.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let client = use_api();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);

            let mut submitted = form();
            submitted.email = submitted.email.trim().to_string();
            match api::sign_up(&client, &submitted).await {
                Ok(registration) => {
                    session.write().register(registration.session);
                    success.set(Some(registration.message));
                    form.set(RegisterForm::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    let current = form();

    rsx! {
        div { class: "card auth-card",
            h2 { "Create Account" }

            form { onsubmit: handle_register,
                if let Some(err) = error() {
                    div { class: "alert alert-danger", "{err}" }
                }
                if let Some(message) = success() {
                    div { class: "alert alert-success", "{message}" }
                }

                div { class: "form-group",
                    label { r#for: "first-name", "First name" }
                    input {
                        id: "first-name",
                        class: "form-control",
                        r#type: "text",
                        value: current.first_name,
                        oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { r#for: "last-name", "Last name" }
                    input {
                        id: "last-name",
                        class: "form-control",
                        r#type: "text",
                        value: current.last_name,
                        oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        class: "form-control",
                        r#type: "email",
                        value: current.email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "form-control",
                        r#type: "password",
                        placeholder: "At least 6 characters",
                        value: current.password,
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p { class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
