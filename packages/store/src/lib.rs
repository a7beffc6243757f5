//! Platform-independent core of the employee management dashboard: the record
//! model, the persisted employee directory, filtering, the demo login guard,
//! configuration, and report statistics.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod filter;
pub mod image;
pub mod kv;
pub mod models;
pub mod report;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_store::LocalStore;

pub use auth::{Authenticator, Session};
pub use config::EmsConfig;
pub use directory::{EmployeeDirectory, SubscriptionId};
pub use error::{AuthError, ConfigError, ImageError, StoreError};
pub use filter::EmployeeFilter;
pub use kv::KeyValueStore;
pub use models::{Employee, EmployeeId, EmployeePatch, Gender, NewEmployee, Region, Status};
pub use report::{DirectoryReport, WorkforceStats};
pub use validation::{validate_draft, FormErrors, FormField};
