//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let client = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let e = email().trim().to_string();
            let p = password();
            match api::sign_in(&client, &e, &p).await {
                Ok(signed_in) => {
                    session.write().login(signed_in);
                    loading.set(false);
                    nav.push(Route::Upload {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "card auth-card",
            h2 { "Sign in" }

            form { onsubmit: handle_login,
                if let Some(err) = error() {
                    div { class: "alert alert-danger", "{err}" }
                }

                div { class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        class: "form-control",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "form-control",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p { class: "muted",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
