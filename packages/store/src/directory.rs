//! # EmployeeDirectory: the employee store
//!
//! [`EmployeeDirectory`] owns the in-memory employee collection and mirrors it to a
//! [`KeyValueStore`] under a single key. It is constructed once at application
//! start, handed to the UI through context, and never torn down.
//!
//! ## Lifecycle
//!
//! [`open`](EmployeeDirectory::open) loads the collection exactly once:
//!
//! | Persisted value | Result |
//! |-----------------|--------|
//! | absent | the two [`seed_records`], written back immediately |
//! | not a JSON array | seed records (logged), written back |
//! | JSON array | every object element, leniently decoded; ids repaired |
//!
//! Repairing ids means records without an id, or sharing one with an earlier record,
//! get a fresh id so the uniqueness invariant holds from the first read on.
//!
//! ## Mutations
//!
//! | Method | Unknown id |
//! |--------|-----------|
//! | [`add`](EmployeeDirectory::add) | n/a (assigns a fresh id) |
//! | [`update`](EmployeeDirectory::update) | no-op |
//! | [`toggle_status`](EmployeeDirectory::toggle_status) | no-op |
//! | [`delete`](EmployeeDirectory::delete) | no-op |
//!
//! Every effective mutation rewrites the full collection synchronously, then calls
//! each subscriber with the new collection. A failed write is logged and the
//! in-memory collection stays authoritative.
//!
//! Handles are cheap `Rc` clones over one shared collection and stay on the UI
//! thread (`!Send`).

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use serde_json::Value;

use crate::kv::KeyValueStore;
use crate::models::{seed_records, Employee, EmployeeId, EmployeePatch, NewEmployee};

/// Handle returned by [`EmployeeDirectory::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<RefCell<dyn FnMut(&[Employee])>>;

struct Inner<S> {
    backend: S,
    key: String,
    records: RefCell<Vec<Employee>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

/// The employee collection plus its persistence binding.
pub struct EmployeeDirectory<S: KeyValueStore> {
    inner: Rc<Inner<S>>,
}

impl<S: KeyValueStore> Clone for EmployeeDirectory<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> EmployeeDirectory<S> {
    /// Load the collection stored under `key`, seeding it when absent or corrupt.
    pub fn open(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (records, write_back) = match backend.get(&key) {
            None => {
                tracing::info!(key = %key, "no stored employees, seeding");
                (seed_records(), true)
            }
            Some(raw) => match decode(&raw) {
                Some(records) => (records, false),
                None => {
                    tracing::warn!(key = %key, "stored employees are unreadable, reseeding");
                    (seed_records(), true)
                }
            },
        };

        let directory = Self {
            inner: Rc::new(Inner {
                backend,
                key,
                records: RefCell::new(records),
                subscribers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
            }),
        };
        if write_back {
            directory.persist();
        }
        directory
    }

    /// The full current collection, in insertion order.
    pub fn list(&self) -> Vec<Employee> {
        self.inner.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.borrow().is_empty()
    }

    pub fn get(&self, id: &EmployeeId) -> Option<Employee> {
        self.inner
            .records
            .borrow()
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    /// Append a new record under a fresh id and return the id.
    pub fn add(&self, draft: NewEmployee) -> EmployeeId {
        let id = {
            let mut records = self.inner.records.borrow_mut();
            let mut id = EmployeeId::generate();
            while records.iter().any(|e| e.id == id) {
                id = EmployeeId::generate();
            }
            records.push(Employee::from_draft(id.clone(), draft));
            id
        };
        tracing::debug!(id = %id, "employee added");
        self.commit();
        id
    }

    /// Merge `patch` into the record with `id`. Returns whether a record matched.
    pub fn update(&self, id: &EmployeeId, patch: EmployeePatch) -> bool {
        let found = {
            let mut records = self.inner.records.borrow_mut();
            match records.iter_mut().find(|e| &e.id == id) {
                Some(employee) => {
                    employee.apply(patch);
                    true
                }
                None => false,
            }
        };
        if found {
            tracing::debug!(id = %id, "employee updated");
            self.commit();
        }
        found
    }

    /// Flip the record between Active and Inactive. Returns whether a record matched.
    pub fn toggle_status(&self, id: &EmployeeId) -> bool {
        match self.get(id) {
            Some(employee) => self.update(id, EmployeePatch::status(employee.status.toggled())),
            None => false,
        }
    }

    /// Remove the record with `id`. Returns whether a record matched.
    pub fn delete(&self, id: &EmployeeId) -> bool {
        let removed = {
            let mut records = self.inner.records.borrow_mut();
            let before = records.len();
            records.retain(|e| &e.id != id);
            records.len() != before
        };
        if removed {
            tracing::debug!(id = %id, "employee deleted");
            self.commit();
        }
        removed
    }

    /// Register `callback` to receive the full collection after every effective mutation.
    ///
    /// Callbacks may subscribe, unsubscribe or mutate through another handle. A
    /// mutation made from inside a callback notifies every other subscriber but not
    /// the callback that made it; changes to the subscriber list apply from the
    /// next notification.
    pub fn subscribe(&self, callback: impl FnMut(&[Employee]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        let callback: Subscriber = Rc::new(RefCell::new(callback));
        self.inner.subscribers.borrow_mut().push((id, callback));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn commit(&self) {
        self.persist();
        let snapshot = self.list();
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            // Already borrowed means this commit came from inside that callback.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (*callback)(&snapshot);
            }
        }
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(&*self.inner.records.borrow()) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode employees");
                return;
            }
        };
        if let Err(err) = self.inner.backend.set(&self.inner.key, &encoded) {
            tracing::warn!(key = %self.inner.key, error = %err, "failed to persist employees");
        }
    }
}

/// Decode a stored collection, skipping elements that are not records.
fn decode(raw: &str) -> Option<Vec<Employee>> {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) else {
        return None;
    };
    let mut records: Vec<Employee> = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(employee) => Some(employee),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable employee record");
                None
            }
        })
        .collect();
    repair_ids(&mut records);
    Some(records)
}

fn repair_ids(records: &mut [Employee]) {
    let mut seen = HashSet::new();
    for employee in records.iter_mut() {
        if employee.id.is_empty() || !seen.insert(employee.id.clone()) {
            let mut id = EmployeeId::generate();
            while !seen.insert(id.clone()) {
                id = EmployeeId::generate();
            }
            tracing::debug!(old = %employee.id, new = %id, "assigned fresh employee id");
            employee.id = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{Gender, Region, Status};

    const KEY: &str = "employees";

    fn draft(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            dob: "1995-07-04".to_string(),
            ..NewEmployee::default()
        }
    }

    fn stored(store: &MemoryStore) -> Vec<Employee> {
        serde_json::from_str(&store.get(KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_open_without_state_seeds_two_records() {
        let store = MemoryStore::new();
        let directory = EmployeeDirectory::open(store.clone(), KEY);

        let records = directory.list();
        assert_eq!(records, seed_records());
        assert_eq!(records[0].name, "John Doe");
        assert_eq!(records[1].name, "Jane Smith");

        // Seeds are persisted straight away
        assert_eq!(stored(&store), seed_records());
    }

    #[test]
    fn test_open_with_corrupt_state_reseeds() {
        let store = MemoryStore::new();
        store.set(KEY, "{not json").unwrap();
        let directory = EmployeeDirectory::open(store.clone(), KEY);
        assert_eq!(directory.list(), seed_records());
        assert_eq!(stored(&store), seed_records());

        store.set(KEY, "null").unwrap();
        assert_eq!(EmployeeDirectory::open(store, KEY).list(), seed_records());
    }

    #[test]
    fn test_open_with_empty_array_stays_empty() {
        let store = MemoryStore::new();
        store.set(KEY, "[]").unwrap();
        let directory = EmployeeDirectory::open(store, KEY);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_open_repairs_legacy_records() {
        let store = MemoryStore::new();
        store
            .set(
                KEY,
                r#"[{"id": 7, "name": "A", "dob": "2000-01-01"},
                    {"id": "7", "name": "B", "dob": "2000-01-02"},
                    {"name": "C", "dob": "2000-01-03"},
                    42]"#,
            )
            .unwrap();
        let records = EmployeeDirectory::open(store, KEY).list();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id.as_str(), "7");
        assert_ne!(records[1].id.as_str(), "7");
        assert!(!records[2].id.is_empty());
        let unique: HashSet<_> = records.iter().map(|e| e.id.clone()).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_add_assigns_id_and_persists() {
        let store = MemoryStore::new();
        let directory = EmployeeDirectory::open(store.clone(), KEY);

        let id = directory.add(NewEmployee {
            gender: Gender::Other,
            state: Region::Ohio,
            status: Status::Inactive,
            ..draft("  Alex Kim  ")
        });

        assert_eq!(directory.len(), 3);
        let added = directory.get(&id).unwrap();
        assert_eq!(added.name, "Alex Kim");
        assert_eq!(added.gender, Gender::Other);
        assert_eq!(added.state, Region::Ohio);
        assert_ne!(id.as_str(), "1");
        assert_ne!(id.as_str(), "2");

        assert_eq!(stored(&store).len(), 3);
    }

    #[test]
    fn test_update_merges_fields() {
        let directory = EmployeeDirectory::open(MemoryStore::new(), KEY);
        let id = EmployeeId::new("1");

        assert!(directory.update(
            &id,
            EmployeePatch {
                state: Some(Region::Texas),
                ..EmployeePatch::default()
            }
        ));

        let updated = directory.get(&id).unwrap();
        assert_eq!(updated.state, Region::Texas);
        assert_eq!(updated.name, "John Doe");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = MemoryStore::new();
        let directory = EmployeeDirectory::open(store.clone(), KEY);
        let before = directory.list();

        assert!(!directory.update(&EmployeeId::new("missing"), EmployeePatch::status(Status::Inactive)));
        assert_eq!(directory.list(), before);
        assert_eq!(stored(&store), before);
    }

    #[test]
    fn test_delete_survives_reload() {
        let store = MemoryStore::new();
        let directory = EmployeeDirectory::open(store.clone(), KEY);
        let id = EmployeeId::new("2");

        assert!(directory.delete(&id));
        assert!(!directory.delete(&id));
        assert!(directory.get(&id).is_none());

        let reloaded = EmployeeDirectory::open(store, KEY);
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.get(&id).is_none());
    }

    #[test]
    fn test_toggle_status() {
        let directory = EmployeeDirectory::open(MemoryStore::new(), KEY);
        let id = EmployeeId::new("1");

        assert!(directory.toggle_status(&id));
        assert_eq!(directory.get(&id).unwrap().status, Status::Inactive);
        assert!(directory.toggle_status(&id));
        assert_eq!(directory.get(&id).unwrap().status, Status::Active);
        assert!(!directory.toggle_status(&EmployeeId::new("nope")));
    }

    #[test]
    fn test_subscribers_see_effective_mutations() {
        let directory = EmployeeDirectory::open(MemoryStore::new(), KEY);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let sub = directory.subscribe(move |records| sink.borrow_mut().push(records.len()));

        directory.add(draft("First"));
        directory.delete(&EmployeeId::new("missing"));
        directory.delete(&EmployeeId::new("1"));
        assert_eq!(*seen.borrow(), vec![3, 2]);

        assert!(directory.unsubscribe(sub));
        assert!(!directory.unsubscribe(sub));
        directory.add(draft("Second"));
        assert_eq!(*seen.borrow(), vec![3, 2]);
    }

    #[test]
    fn test_callbacks_may_change_subscriptions() {
        let directory = EmployeeDirectory::open(MemoryStore::new(), KEY);
        let calls = Rc::new(Cell::new(0));
        let late = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let handle = directory.clone();
        let counter = Rc::clone(&calls);
        let late_counter = Rc::clone(&late);
        let slot = Rc::clone(&own_id);
        let id = directory.subscribe(move |_| {
            counter.set(counter.get() + 1);
            let late_counter = Rc::clone(&late_counter);
            handle.subscribe(move |_| late_counter.set(late_counter.get() + 1));
            if let Some(id) = slot.get() {
                handle.unsubscribe(id);
            }
        });
        own_id.set(Some(id));

        directory.add(draft("First"));
        assert_eq!(calls.get(), 1);
        assert_eq!(late.get(), 0);

        directory.add(draft("Second"));
        assert_eq!(calls.get(), 1);
        assert_eq!(late.get(), 1);
    }

    #[test]
    fn test_callback_may_mutate_directory() {
        let directory = EmployeeDirectory::open(MemoryStore::new(), KEY);
        let handle = directory.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));

        directory.subscribe(move |records| {
            if let Some(inactive) = records.iter().find(|e| e.status == Status::Inactive) {
                handle.toggle_status(&inactive.id);
            }
        });
        let sink = Rc::clone(&seen);
        directory.subscribe(move |records| sink.borrow_mut().push(records.len()));

        directory.add(draft("Leaver"));
        assert!(directory.list().iter().all(|e| e.status == Status::Active));
        assert_eq!(*seen.borrow(), vec![3, 3]);
    }

    #[test]
    fn test_clones_share_collection() {
        let directory = EmployeeDirectory::open(MemoryStore::new(), KEY);
        let other = directory.clone();
        let id = other.add(draft("Shared"));
        assert!(directory.get(&id).is_some());
    }
}
