use dioxus::prelude::*;

use crate::auth::{self, use_auth};
use crate::routes::Route;

#[component]
pub fn Login() -> Element {
    let auth_context = use_auth();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut is_submitting = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let username_value = username().trim().to_string();
        let password_value = password();
        if username_value.is_empty() || password_value.is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }

        is_submitting.set(true);
        error.set(None);
        spawn(async move {
            match auth::login(username_value, password_value).await {
                Ok(true) => {
                    auth_context.refresh().await;
                    navigator.push(Route::FacilityList {});
                }
                Ok(false) => {
                    error.set(Some("Invalid username or password".to_string()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login request failed");
                    error.set(Some("Something went wrong. Please try again.".to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 px-4",
            div {
                class: "max-w-md w-full bg-white rounded-xl shadow-sm border border-gray-200 p-8",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Sign In" }
                p { class: "text-sm text-gray-500 mb-6", "Sign in to manage facilities" }

                if let Some(message) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 text-sm rounded-lg",
                        "{message}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            r#for: "username",
                            "Username"
                        }
                        input {
                            id: "username",
                            r#type: "text",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                            autocomplete: "username",
                            class: "w-full px-4 py-3 border border-gray-200 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500"
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            r#for: "password",
                            "Password"
                        }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            autocomplete: "current-password",
                            class: "w-full px-4 py-3 border border-gray-200 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500"
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: is_submitting(),
                        class: "w-full py-3 bg-emerald-600 text-white font-medium rounded-lg hover:bg-emerald-700 disabled:opacity-50",
                        if is_submitting() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
