//! Employee directory: filter bar, table, add/edit/delete and printing.

use chrono::NaiveDate;
use dioxus::prelude::*;
use store::filter::{parse_select, select_value};
use store::{DirectoryReport, Employee, EmployeeFilter, EmployeeId, Gender, Status};

use crate::icons::{
    FaCalendar, FaLocationDot, FaMagnifyingGlass, FaPenToSquare, FaPlus, FaPrint, FaTrash,
    FaUser,
};
use crate::{platform, use_directory, ConfirmationModal, EmployeeForm, Icon};

const EMPLOYEES_CSS: Asset = asset!("/assets/styling/employees.css");

/// Which record the form dialog is open for.
#[derive(Debug, Clone, PartialEq)]
enum FormTarget {
    New,
    Edit(Employee),
}

#[component]
pub fn EmployeeListView() -> Element {
    let directory = use_directory();

    let mut query = use_signal(String::new);
    let mut gender = use_signal(|| Option::<Gender>::None);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut form_target = use_signal(|| Option::<FormTarget>::None);
    let mut pending_delete = use_signal(|| Option::<EmployeeId>::None);

    let filter = EmployeeFilter {
        query: query(),
        gender: gender(),
        status: status(),
    };
    let shown = filter.apply(&directory.records().read());
    let now = platform::now();
    let report = DirectoryReport::new(&filter, &shown, now);
    let today = now.date();

    rsx! {
        document::Stylesheet { href: EMPLOYEES_CSS }

        div {
            class: "page employees",

            div {
                class: "print-only print-header",
                h1 { "{report.title}" }
                p { "Generated on {report.generated_on} at {report.generated_at}" }
                div {
                    class: "print-meta",
                    div { "Total Employees: {report.total}" }
                    div { "Filters: {report.filters}" }
                }
            }

            div {
                class: "page-header no-print",
                div {
                    h1 { class: "page-title", "Employee Directory" }
                    p { class: "page-subtitle", "Manage and track your organization's talent." }
                }
                div {
                    class: "page-actions",
                    button {
                        class: "button secondary",
                        onclick: move |_| platform::print_page(),
                        Icon { icon: FaPrint, width: 14, height: 14 }
                        span { "Print" }
                    }
                    button {
                        class: "button primary",
                        onclick: move |_| form_target.set(Some(FormTarget::New)),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Add Employee" }
                    }
                }
            }

            div {
                class: "filter-bar no-print",
                label {
                    class: "filter-search",
                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                    input {
                        r#type: "text",
                        placeholder: "Search by name...",
                        value: "{filter.query}",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }
                div {
                    class: "filter-select",
                    span { "Gender" }
                    select {
                        value: select_value(filter.gender),
                        onchange: move |evt: FormEvent| gender.set(parse_select(&evt.value())),
                        option { value: "All", "All Genders" }
                        for g in Gender::ALL {
                            option { key: "{g}", value: "{g}", "{g}" }
                        }
                    }
                }
                div {
                    class: "filter-select",
                    span { "Status" }
                    select {
                        value: select_value(filter.status),
                        onchange: move |evt: FormEvent| status.set(parse_select(&evt.value())),
                        option { value: "All", "All Status" }
                        for s in Status::ALL {
                            option { key: "{s}", value: "{s}", "{s}" }
                        }
                    }
                }
            }

            div {
                class: "card table-card",
                table {
                    class: "employee-table",
                    thead {
                        tr {
                            th { "Employee" }
                            th { "Info" }
                            th { "Joined / Age" }
                            th { "Status" }
                            th { class: "actions no-print", "Actions" }
                        }
                    }
                    tbody {
                        if shown.is_empty() {
                            tr {
                                td {
                                    colspan: "5",
                                    class: "empty-state",
                                    Icon { icon: FaMagnifyingGlass, width: 48, height: 48 }
                                    p { class: "empty-title", "No employees found" }
                                    p { "Try adjusting your filters or search query" }
                                }
                            }
                        }
                        for employee in shown {
                            EmployeeRow {
                                key: "{employee.id}",
                                employee: employee.clone(),
                                today,
                                on_toggle: move |id: EmployeeId| {
                                    directory.toggle_status(&id);
                                },
                                on_edit: move |employee: Employee| form_target.set(Some(FormTarget::Edit(employee))),
                                on_delete: move |id: EmployeeId| pending_delete.set(Some(id)),
                            }
                        }
                    }
                }
            }

            if let Some(target) = form_target() {
                EmployeeForm {
                    employee: match target {
                        FormTarget::New => None,
                        FormTarget::Edit(employee) => Some(employee),
                    },
                    on_close: move |_| form_target.set(None),
                }
            }

            if pending_delete().is_some() {
                ConfirmationModal {
                    title: "Delete Employee",
                    message: "Are you sure you want to delete this employee? This action will permanently remove the record from the directory.",
                    confirm_text: "Delete Record",
                    on_confirm: move |_| {
                        if let Some(id) = pending_delete.take() {
                            directory.delete(&id);
                        }
                    },
                    on_close: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(
    employee: Employee,
    today: NaiveDate,
    on_toggle: EventHandler<EmployeeId>,
    on_edit: EventHandler<Employee>,
    on_delete: EventHandler<EmployeeId>,
) -> Element {
    let code = employee.id.display_code();
    let age = employee
        .age_on(today)
        .map_or_else(String::new, |years| format!("{years} yrs"));
    let switch = if employee.is_active() {
        "status-switch on"
    } else {
        "status-switch off"
    };

    let toggle_id = employee.id.clone();
    let delete_id = employee.id.clone();
    let edit_record = employee.clone();

    rsx! {
        tr {
            td {
                div {
                    class: "employee-cell",
                    div {
                        class: "employee-avatar",
                        if let Some(src) = employee.image.clone() {
                            img { src: "{src}", alt: "{employee.name}" }
                        } else {
                            Icon { icon: FaUser, width: 18, height: 18 }
                        }
                    }
                    div {
                        p { class: "employee-name", "{employee.name}" }
                        p { class: "employee-code", "{code}" }
                    }
                }
            }
            td {
                div {
                    class: "employee-info",
                    span {
                        Icon { icon: FaLocationDot, width: 10, height: 10 }
                        "{employee.state}"
                    }
                    span {
                        Icon { icon: FaUser, width: 10, height: 10 }
                        "{employee.gender}"
                    }
                }
            }
            td {
                div {
                    class: "employee-info",
                    span {
                        Icon { icon: FaCalendar, width: 10, height: 10 }
                        "{employee.dob}"
                    }
                    if !age.is_empty() {
                        span { class: "muted", "{age}" }
                    }
                }
            }
            td {
                button {
                    class: "{switch}",
                    title: "Toggle status",
                    onclick: move |_| on_toggle.call(toggle_id.clone()),
                    span { class: "status-knob" }
                    span { class: "status-on", "ON" }
                    span { class: "status-off", "OFF" }
                }
            }
            td {
                class: "actions no-print",
                button {
                    class: "icon-button",
                    title: "Print",
                    onclick: move |_| platform::print_page(),
                    Icon { icon: FaPrint, width: 16, height: 16 }
                }
                button {
                    class: "icon-button",
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_record.clone()),
                    Icon { icon: FaPenToSquare, width: 16, height: 16 }
                }
                button {
                    class: "icon-button danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrash, width: 16, height: 16 }
                }
            }
        }
    }
}
