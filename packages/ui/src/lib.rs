//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_backend, Backend};

pub mod platform;

pub mod views;

pub const EMS_CSS: Asset = asset!("/assets/ems.css");

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

mod directory;
pub use directory::{use_directory, Directory, DirectoryProvider};

mod sidebar;
pub use sidebar::{AppSidebar, NavItem};

mod header;
pub use header::Header;

mod stat_card;
pub use stat_card::{StatCard, StatTone};

mod confirmation_modal;
pub use confirmation_modal::ConfirmationModal;

mod employee_form;
pub use employee_form::EmployeeForm;

/// The parsed `Ems.toml` provided by the launcher.
pub fn use_config() -> store::EmsConfig {
    use_context::<store::EmsConfig>()
}
