//! Client-side search and filtering of the employee list.

use crate::models::{Employee, Gender, Status};

/// Select value meaning "no restriction".
pub const ALL: &str = "All";

/// Name query plus gender and status filters; `None` matches everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeFilter {
    pub query: String,
    pub gender: Option<Gender>,
    pub status: Option<Status>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        let query = self.query.to_lowercase();
        employee.name.to_lowercase().contains(&query)
            && self.gender.map_or(true, |g| employee.gender == g)
            && self.status.map_or(true, |s| employee.status == s)
    }

    /// The matching records, in collection order.
    pub fn apply(&self, records: &[Employee]) -> Vec<Employee> {
        records
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    /// `"<gender> / <status>"` as printed in the report header.
    pub fn label(&self) -> String {
        format!("{} / {}", select_value(self.gender), select_value(self.status))
    }
}

/// Parse a filter `<select>` value; `"All"` or anything unknown means no restriction.
pub fn parse_select<T: std::str::FromStr>(value: &str) -> Option<T> {
    if value == ALL {
        return None;
    }
    value.parse().ok()
}

/// Render an optional filter as its `<select>` value.
pub fn select_value<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| ALL.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{seed_records, EmployeeId, Region};

    fn sample() -> Vec<Employee> {
        let mut records = seed_records();
        records.push(Employee {
            id: EmployeeId::new("3"),
            name: "Johanna Berg".to_string(),
            gender: Gender::Female,
            dob: "1988-11-30".to_string(),
            state: Region::Michigan,
            status: Status::Active,
            image: None,
        });
        records
    }

    #[test]
    fn test_default_filter_matches_all() {
        let records = sample();
        assert_eq!(EmployeeFilter::default().apply(&records), records);
    }

    #[test]
    fn test_status_filter() {
        let filter = EmployeeFilter {
            status: Some(Status::Active),
            ..EmployeeFilter::default()
        };
        let active = filter.apply(&sample());
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|e| e.status == Status::Active));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let filter = EmployeeFilter {
            query: "JOH".to_string(),
            ..EmployeeFilter::default()
        };
        let names: Vec<_> = filter.apply(&sample()).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["John Doe", "Johanna Berg"]);
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let records = seed_records();
        let trailing = EmployeeFilter {
            query: "doe ".to_string(),
            ..EmployeeFilter::default()
        };
        assert!(trailing.apply(&records).is_empty());

        let blank = EmployeeFilter {
            query: "  ".to_string(),
            ..EmployeeFilter::default()
        };
        assert!(blank.apply(&records).is_empty());

        let inner = EmployeeFilter {
            query: "n d".to_string(),
            ..EmployeeFilter::default()
        };
        let names: Vec<_> = inner.apply(&records).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["John Doe"]);
    }

    #[test]
    fn test_combined_filters_intersect() {
        let filter = EmployeeFilter {
            query: "jo".to_string(),
            gender: Some(Gender::Female),
            status: Some(Status::Active),
        };
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Johanna Berg");

        let none = EmployeeFilter {
            status: Some(Status::Inactive),
            ..filter
        };
        assert!(none.apply(&sample()).is_empty());
    }

    #[test]
    fn test_select_values() {
        assert_eq!(parse_select::<Gender>("All"), None);
        assert_eq!(parse_select::<Gender>("Female"), Some(Gender::Female));
        assert_eq!(select_value(Some(Status::Inactive)), "Inactive");
        assert_eq!(select_value::<Status>(None), "All");

        let filter = EmployeeFilter {
            status: Some(Status::Active),
            ..EmployeeFilter::default()
        };
        assert_eq!(filter.label(), "All / Active");
    }
}
