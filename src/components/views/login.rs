use dioxus::prelude::*;

use crate::components::{use_auth, AppView};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_sign_up = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        error.set(None);
        notice.set(None);

        let email_value = email.peek().clone();
        let password_value = password.peek().clone();
        let sign_up = *is_sign_up.peek();

        spawn(async move {
            if sign_up {
                match auth.sign_up(email_value, password_value).await {
                    Ok(true) => notice.set(Some(
                        "Check your email for a confirmation link".to_string(),
                    )),
                    Ok(false) => {
                        navigator.push(AppView::Dashboard {});
                    }
                    Err(message) => error.set(Some(message)),
                }
            } else {
                match auth.sign_in(email_value, password_value).await {
                    Ok(()) => {
                        navigator.push(AppView::Dashboard {});
                    }
                    Err(message) => error.set(Some(message)),
                }
            }
        });
    };

    // OAuth redirects externally; no local navigation needed.
    let on_google = move |_| auth.sign_in_with_google();

    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 1rem;",
            h1 { style: "font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem;",
                "onlyvibes 🎵"
            }

            form { class: "auth-form", onsubmit: on_submit,
                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button { r#type: "submit", class: "btn-primary",
                    if is_sign_up() { "Sign Up" } else { "Sign In" }
                }
            }

            button {
                class: "btn-primary",
                style: "margin-top: 1.5rem; width: 100%; max-width: 24rem; background: #dc2626;",
                onclick: on_google,
                "Continue with Google"
            }

            button {
                class: "link",
                style: "margin-top: 1rem;",
                onclick: move |_| is_sign_up.toggle(),
                if is_sign_up() {
                    "Already have an account? Sign In"
                } else {
                    "Don't have an account? Sign Up"
                }
            }

            if let Some(message) = notice() {
                p { style: "margin-top: 1rem;", "{message}" }
            }
            if let Some(message) = error() {
                p { class: "text-danger", style: "margin-top: 1rem;", "{message}" }
            }
        }
    }
}
