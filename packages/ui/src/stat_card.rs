use dioxus::prelude::*;

use crate::icons::{FaUserCheck, FaUserMinus, FaUsers};
use crate::Icon;

/// Colour and icon of a [`StatCard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Total,
    Active,
    Inactive,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Total => "stat-card tone-indigo",
            StatTone::Active => "stat-card tone-emerald",
            StatTone::Inactive => "stat-card tone-rose",
        }
    }
}

#[component]
pub fn StatCard(label: String, value: usize, tone: StatTone) -> Element {
    rsx! {
        div {
            class: tone.class(),
            div {
                class: "stat-card-icon",
                {match tone {
                    StatTone::Total => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
                    StatTone::Active => rsx! { Icon { icon: FaUserCheck, width: 20, height: 20 } },
                    StatTone::Inactive => rsx! { Icon { icon: FaUserMinus, width: 20, height: 20 } },
                }}
            }
            div {
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
            }
        }
    }
}
