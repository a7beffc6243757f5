//! # Domain models for the employee directory
//!
//! [`Employee`] is the record persisted under the employees key. Every field is
//! read leniently so that collections written by older builds keep loading:
//!
//! | Field | Missing / legacy value | Loaded as |
//! |-------|------------------------|-----------|
//! | `id` | number (`1712345678901`) | its decimal string |
//! | `id` | absent or empty | empty, replaced by a fresh id in [`crate::EmployeeDirectory`] |
//! | `name`, `dob` | absent, `null`, number | empty string / decimal string |
//! | `gender`, `state`, `status` | absent, unknown spelling | the enum default |
//! | `image` | absent, `null`, `""` | `None` |
//!
//! [`NewEmployee`] is the draft submitted by the add form and [`EmployeePatch`] the
//! partial update applied by edits and the status switch.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::validation::{dob_present, name_present};

/// Opaque, unique record identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random id (32 lowercase hex characters).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Badge shown next to the name: `EMP-` and the last four characters, uppercased.
    pub fn display_code(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("EMP-{}", tail.to_uppercase())
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        text(deserializer).map(Self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
        }
    }
}

/// The fixed list of states an employee can be based in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    #[default]
    California,
    Texas,
    #[serde(rename = "New York")]
    NewYork,
    Florida,
    Illinois,
    Pennsylvania,
    Ohio,
    Georgia,
    #[serde(rename = "North Carolina")]
    NorthCarolina,
    Michigan,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::California,
        Region::Texas,
        Region::NewYork,
        Region::Florida,
        Region::Illinois,
        Region::Pennsylvania,
        Region::Ohio,
        Region::Georgia,
        Region::NorthCarolina,
        Region::Michigan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::California => "California",
            Region::Texas => "Texas",
            Region::NewYork => "New York",
            Region::Florida => "Florida",
            Region::Illinois => "Illinois",
            Region::Pennsylvania => "Pennsylvania",
            Region::Ohio => "Ohio",
            Region::Georgia => "Georgia",
            Region::NorthCarolina => "North Carolina",
            Region::Michigan => "Michigan",
        }
    }
}

/// Returned when a string names none of an enum's variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value `{}`", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! labelled_enum {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownVariant(s.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Value::deserialize(deserializer)?;
                Ok(raw
                    .as_str()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default())
            }
        }
    };
}

labelled_enum!(Gender);
labelled_enum!(Status);
labelled_enum!(Region);

/// One employee record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    /// Date of birth as entered, normally `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "text")]
    pub dob: String,
    #[serde(default)]
    pub state: Region,
    #[serde(default)]
    pub status: Status,
    /// Thumbnail as a `data:` URL.
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
}

impl Employee {
    pub fn from_draft(id: EmployeeId, draft: NewEmployee) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            gender: draft.gender,
            dob: draft.dob,
            state: draft.state,
            status: draft.status,
            image: draft.image,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    pub fn dob_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d").ok()
    }

    /// Age in whole years on `today`, if the date of birth parses and is not in the future.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let dob = self.dob_date()?;
        let mut years = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    /// Merge `patch` into this record.
    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(dob) = patch.dob {
            self.dob = dob;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(image) = patch.image {
            self.image = image.filter(|i| !i.is_empty());
        }
    }
}

/// Draft of a new record, as filled in by the add form.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct NewEmployee {
    #[validate(custom = "name_present")]
    pub name: String,
    pub gender: Gender,
    #[validate(custom = "dob_present")]
    pub dob: String,
    pub state: Region,
    pub status: Status,
    pub image: Option<String>,
}

impl From<&Employee> for NewEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            gender: employee.gender,
            dob: employee.dob.clone(),
            state: employee.state,
            status: employee.status,
            image: employee.image.clone(),
        }
    }
}

/// Partial update. `None` leaves a field untouched; `image: Some(None)` clears the thumbnail.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<String>,
    pub state: Option<Region>,
    pub status: Option<Status>,
    pub image: Option<Option<String>>,
}

impl EmployeePatch {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<NewEmployee> for EmployeePatch {
    fn from(draft: NewEmployee) -> Self {
        Self {
            name: Some(draft.name),
            gender: Some(draft.gender),
            dob: Some(draft.dob),
            state: Some(draft.state),
            status: Some(draft.status),
            image: Some(draft.image),
        }
    }
}

/// The two records written when no collection has been persisted yet.
pub fn seed_records() -> Vec<Employee> {
    vec![
        Employee {
            id: EmployeeId::new("1"),
            name: "John Doe".to_string(),
            gender: Gender::Male,
            dob: "1990-01-01".to_string(),
            state: Region::California,
            status: Status::Active,
            image: None,
        },
        Employee {
            id: EmployeeId::new("2"),
            name: "Jane Smith".to_string(),
            gender: Gender::Female,
            dob: "1992-05-15".to_string(),
            state: Region::NewYork,
            status: Status::Inactive,
            image: None,
        },
    ]
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_code_uses_last_four_chars() {
        assert_eq!(EmployeeId::new("1712345678abcd").display_code(), "EMP-ABCD");
        assert_eq!(EmployeeId::new("2").display_code(), "EMP-2");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = EmployeeId::generate();
        let b = EmployeeId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_legacy_record_loads() {
        let raw = r#"{"id": 1712345678901, "name": "Ann Lee", "gender": "female",
                      "dob": "1985-03-09", "state": "north carolina", "status": "Inactive", "image": ""}"#;
        let employee: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(employee.id.as_str(), "1712345678901");
        assert_eq!(employee.gender, Gender::Female);
        assert_eq!(employee.state, Region::NorthCarolina);
        assert_eq!(employee.status, Status::Inactive);
        assert!(employee.image.is_none());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let employee: Employee = serde_json::from_str(r#"{"name": "Solo", "gender": "Robot"}"#).unwrap();
        assert!(employee.id.is_empty());
        assert_eq!(employee.gender, Gender::Male);
        assert_eq!(employee.state, Region::California);
        assert_eq!(employee.status, Status::Active);
        assert_eq!(employee.dob, "");
    }

    #[test]
    fn test_region_serializes_with_spaces() {
        let json = serde_json::to_string(&Region::NewYork).unwrap();
        assert_eq!(json, "\"New York\"");
        assert_eq!("new york".parse::<Region>(), Ok(Region::NewYork));
        assert!("Atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn test_age_on() {
        let employee = &seed_records()[1];
        let before_birthday = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert_eq!(employee.age_on(before_birthday), Some(31));
        assert_eq!(employee.age_on(on_birthday), Some(32));

        let unborn = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        assert_eq!(employee.age_on(unborn), None);
    }

    #[test]
    fn test_apply_patch() {
        let mut employee = seed_records().remove(0);
        employee.apply(EmployeePatch {
            name: Some("  Johnny Doe ".to_string()),
            image: Some(Some("data:image/png;base64,AAAA".to_string())),
            ..EmployeePatch::default()
        });
        assert_eq!(employee.name, "Johnny Doe");
        assert_eq!(employee.gender, Gender::Male);
        assert!(employee.image.is_some());

        employee.apply(EmployeePatch {
            image: Some(None),
            ..EmployeePatch::default()
        });
        assert!(employee.image.is_none());
    }
}
