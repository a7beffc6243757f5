use dioxus::prelude::*;
use ui::views::EmployeeListView;

#[component]
pub fn Employees() -> Element {
    rsx! {
        EmployeeListView {}
    }
}
