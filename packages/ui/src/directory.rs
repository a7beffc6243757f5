//! Reactive access to the employee directory.

use dioxus::prelude::*;
use store::{EmployeeDirectory, Employee, EmployeeId, EmployeePatch, EmsConfig, NewEmployee};

use crate::backend::{make_backend, Backend};

/// Copyable handle over the shared [`EmployeeDirectory`].
///
/// `records` mirrors the directory through a subscription, so every component that
/// reads it re-renders after any mutation.
#[derive(Clone, Copy)]
pub struct Directory {
    store: CopyValue<EmployeeDirectory<Backend>>,
    records: Signal<Vec<Employee>>,
}

impl Directory {
    pub fn records(&self) -> Signal<Vec<Employee>> {
        self.records
    }

    pub fn get(&self, id: &EmployeeId) -> Option<Employee> {
        self.store.read().get(id)
    }

    pub fn add(&self, draft: NewEmployee) -> EmployeeId {
        self.store.read().add(draft)
    }

    pub fn update(&self, id: &EmployeeId, patch: EmployeePatch) -> bool {
        self.store.read().update(id, patch)
    }

    pub fn toggle_status(&self, id: &EmployeeId) -> bool {
        self.store.read().toggle_status(id)
    }

    pub fn delete(&self, id: &EmployeeId) -> bool {
        self.store.read().delete(id)
    }
}

pub fn use_directory() -> Directory {
    use_context::<Directory>()
}

/// Opens the directory once and keeps the `records` signal in sync with it.
#[component]
pub fn DirectoryProvider(children: Element) -> Element {
    let config = use_context::<EmsConfig>();

    let store = use_hook(|| {
        CopyValue::new(EmployeeDirectory::open(
            make_backend(),
            config.storage.employees_key.clone(),
        ))
    });
    let mut records = use_signal(|| store.read().list());

    let subscription = use_hook(|| {
        store
            .read()
            .subscribe(move |latest| records.set(latest.to_vec()))
    });
    use_drop(move || {
        if let Ok(store) = store.try_read() {
            store.unsubscribe(subscription);
        }
    });

    use_context_provider(|| Directory { store, records });

    rsx! {
        {children}
    }
}
