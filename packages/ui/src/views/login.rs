use dioxus::prelude::*;

use crate::icons::{FaArrowRight, FaCircleExclamation, FaEnvelope, FaLock, FaSpinner, FaUsers};
use crate::{platform, use_auth, use_config, Icon};

/// Sign-in card. Credentials are checked after the configured delay; on success
/// `on_success` fires and the launcher routes to the dashboard.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let auth = use_auth();
    let config = use_config();
    let delay = config.auth.login_delay_ms;

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let demo = use_signal(|| (config.auth.email.clone(), config.auth.password.clone()));

    let mut attempt = move |email_value: String, password_value: String| {
        if submitting() {
            return;
        }
        error.set(None);
        submitting.set(true);
        spawn(async move {
            platform::sleep_ms(delay).await;
            match auth.login(&email_value, &password_value) {
                Ok(_) => on_success.call(()),
                Err(err) => {
                    let (demo_email, demo_password) = demo();
                    error.set(Some(format!("{err}. Hint: {demo_email} / {demo_password}")));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",

                div {
                    class: "login-brand",
                    div {
                        class: "login-brand-mark",
                        Icon { icon: FaUsers, width: 28, height: 28 }
                    }
                    h1 { "Employee Management System" }
                    p { "Secure Enterprise Portal" }
                }

                form {
                    class: "login-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        attempt(email(), password());
                    },

                    if let Some(message) = error() {
                        div {
                            class: "login-error",
                            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                            span { "{message}" }
                        }
                    }

                    div {
                        class: "field",
                        label { "Work Email" }
                        div {
                            class: "input-with-icon",
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            input {
                                r#type: "email",
                                placeholder: "admin@ems.com",
                                required: true,
                                value: "{email}",
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "field",
                        label { "Password" }
                        div {
                            class: "input-with-icon",
                            Icon { icon: FaLock, width: 14, height: 14 }
                            input {
                                r#type: "password",
                                placeholder: "••••••••",
                                required: true,
                                value: "{password}",
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                    }

                    button {
                        class: "button primary wide",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            Icon { icon: FaSpinner, width: 16, height: 16, class: "spin" }
                            span { "Verifying..." }
                        } else {
                            span { "Enter System" }
                            Icon { icon: FaArrowRight, width: 16, height: 16 }
                        }
                    }
                }

                div {
                    class: "login-divider",
                    span { "Quick Access" }
                }
                button {
                    class: "button secondary wide",
                    r#type: "button",
                    disabled: submitting(),
                    onclick: move |_| {
                        let (demo_email, demo_password) = demo();
                        email.set(demo_email.clone());
                        password.set(demo_password.clone());
                        attempt(demo_email, demo_password);
                    },
                    "Skip to Dashboard"
                }
            }
        }
    }
}
