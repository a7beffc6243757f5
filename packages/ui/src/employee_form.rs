//! Add/edit dialog for a single employee.

use dioxus::prelude::*;
use store::{
    validate_draft, Employee, EmployeePatch, FormErrors, FormField, Gender, ImageError,
    NewEmployee, Region, Status,
};

use crate::icons::{FaUpload, FaUser, FaXmark};
use crate::views::ModalOverlay;
use crate::{use_config, use_directory, Icon};

/// Modal form. With `employee` set it edits that record, otherwise it adds a new one.
///
/// Validation runs on submit; a field's message clears as soon as it is edited.
/// Photo problems are shown under the picker but never block saving.
#[component]
pub fn EmployeeForm(employee: Option<Employee>, on_close: EventHandler<()>) -> Element {
    let directory = use_directory();
    let max_bytes = use_config().images.max_bytes;

    let editing = employee.as_ref().map(|e| e.id.clone());
    let (title, submit_label) = if editing.is_some() {
        ("Edit Employee", "Save Changes")
    } else {
        ("Add New Employee", "Create Employee")
    };

    let mut draft = use_signal(|| employee.as_ref().map(NewEmployee::from).unwrap_or_default());
    let mut errors = use_signal(FormErrors::default);

    let on_photo = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let encoded = match engine.read_file(&name).await {
            Some(bytes) => store::image::thumbnail_data_url(&bytes, max_bytes),
            None => Err(ImageError::Unreadable),
        };
        match encoded {
            Ok(url) => {
                draft.write().image = Some(url);
                errors.write().clear(FormField::Image);
            }
            Err(err) => {
                tracing::info!(file = %name, error = %err, "rejected photo upload");
                errors.write().set(FormField::Image, err.to_string());
            }
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = draft();
        if let Err(found) = validate_draft(&current) {
            let image = errors.read().image.clone();
            errors.set(FormErrors { image, ..found });
            return;
        }
        match &editing {
            Some(id) => {
                directory.update(id, EmployeePatch::from(current));
            }
            None => {
                directory.add(current);
            }
        }
        on_close.call(());
    };

    let current = draft();
    let problems = errors();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            class: "modal-card form",

            div {
                class: "form-header",
                div {
                    h2 { class: "modal-title", "{title}" }
                    p { class: "modal-subtitle", "Please fill in the details below" }
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }

            form {
                class: "employee-form",
                onsubmit: on_submit,

                div {
                    class: "photo-field",
                    div {
                        class: "photo-preview",
                        if let Some(src) = current.image.clone() {
                            img { src: "{src}", alt: "Employee photo" }
                        } else {
                            Icon { icon: FaUser, width: 32, height: 32 }
                        }
                    }
                    div {
                        label {
                            class: "button secondary small",
                            Icon { icon: FaUpload, width: 12, height: 12 }
                            span { "Upload Photo" }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                class: "visually-hidden",
                                onchange: on_photo,
                            }
                        }
                        if current.image.is_some() {
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| draft.write().image = None,
                                "Remove"
                            }
                        }
                        if let Some(message) = problems.image.clone() {
                            p { class: "field-error", "{message}" }
                        }
                    }
                }

                div {
                    class: "field",
                    label { "Full Name" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. John Doe",
                        class: if problems.name.is_some() { "invalid" } else { "" },
                        value: "{current.name}",
                        oninput: move |evt: FormEvent| {
                            draft.write().name = evt.value();
                            errors.write().clear(FormField::Name);
                        },
                    }
                    if let Some(message) = problems.name.clone() {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field-row",
                    div {
                        class: "field",
                        label { "Gender" }
                        select {
                            value: "{current.gender}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(gender) = evt.value().parse::<Gender>() {
                                    draft.write().gender = gender;
                                }
                            },
                            for gender in Gender::ALL {
                                option {
                                    key: "{gender}",
                                    value: "{gender}",
                                    selected: gender == current.gender,
                                    "{gender}"
                                }
                            }
                        }
                    }
                    div {
                        class: "field",
                        label { "Date of Birth" }
                        input {
                            r#type: "date",
                            class: if problems.dob.is_some() { "invalid" } else { "" },
                            value: "{current.dob}",
                            oninput: move |evt: FormEvent| {
                                draft.write().dob = evt.value();
                                errors.write().clear(FormField::Dob);
                            },
                        }
                        if let Some(message) = problems.dob.clone() {
                            p { class: "field-error", "{message}" }
                        }
                    }
                }

                div {
                    class: "field-row",
                    div {
                        class: "field",
                        label { "State" }
                        select {
                            value: "{current.state}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(state) = evt.value().parse::<Region>() {
                                    draft.write().state = state;
                                }
                            },
                            for state in Region::ALL {
                                option {
                                    key: "{state}",
                                    value: "{state}",
                                    selected: state == current.state,
                                    "{state}"
                                }
                            }
                        }
                    }
                    div {
                        class: "field",
                        label { "Status" }
                        select {
                            value: "{current.status}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(status) = evt.value().parse::<Status>() {
                                    draft.write().status = status;
                                }
                            },
                            for status in Status::ALL {
                                option {
                                    key: "{status}",
                                    value: "{status}",
                                    selected: status == current.status,
                                    "{status}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "button secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "button primary",
                        r#type: "submit",
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
