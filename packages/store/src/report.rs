//! Dashboard statistics and printable report headers.

use chrono::NaiveDateTime;

use crate::filter::EmployeeFilter;
use crate::models::{Employee, Gender, Region, Status};

/// Aggregate counts over the employee collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkforceStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Count per gender, in [`Gender::ALL`] order.
    pub by_gender: Vec<(Gender, usize)>,
    /// Count per region, largest first, regions without employees omitted.
    pub by_region: Vec<(Region, usize)>,
}

impl WorkforceStats {
    pub fn from_records(records: &[Employee]) -> Self {
        let count_status = |status: Status| records.iter().filter(|e| e.status == status).count();

        let by_gender = Gender::ALL
            .into_iter()
            .map(|g| (g, records.iter().filter(|e| e.gender == g).count()))
            .collect();

        let mut by_region: Vec<(Region, usize)> = Region::ALL
            .into_iter()
            .map(|r| (r, records.iter().filter(|e| e.state == r).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        // Stable sort keeps the fixed region order among ties.
        by_region.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            total: records.len(),
            active: count_status(Status::Active),
            inactive: count_status(Status::Inactive),
            by_gender,
            by_region,
        }
    }

    /// `count` as a whole percentage of the total; 0 for an empty collection.
    pub fn percent(&self, count: usize) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((count as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Header block printed above the employee table.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryReport {
    pub title: String,
    pub generated_on: String,
    pub generated_at: String,
    pub total: usize,
    pub filters: String,
}

impl DirectoryReport {
    pub const TITLE: &'static str = "Employee Directory Report";

    pub fn new(filter: &EmployeeFilter, shown: &[Employee], now: NaiveDateTime) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            generated_on: now.format("%m/%d/%Y").to_string(),
            generated_at: now.format("%-I:%M:%S %p").to_string(),
            total: shown.len(),
            filters: filter.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_records;
    use chrono::NaiveDate;

    #[test]
    fn test_seed_stats() {
        let stats = WorkforceStats::from_records(&seed_records());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.percent(stats.active), 50);
        assert_eq!(
            stats.by_gender,
            vec![(Gender::Male, 1), (Gender::Female, 1), (Gender::Other, 0)]
        );
        assert_eq!(
            stats.by_region,
            vec![(Region::California, 1), (Region::NewYork, 1)]
        );
    }

    #[test]
    fn test_empty_stats() {
        let stats = WorkforceStats::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percent(0), 0);
        assert!(stats.by_region.is_empty());
    }

    #[test]
    fn test_percent_rounds() {
        let mut records = seed_records();
        records.push(records[0].clone());
        let stats = WorkforceStats::from_records(&records);
        assert_eq!(stats.percent(stats.active), 67);
        assert_eq!(stats.by_region[0], (Region::California, 2));
    }

    #[test]
    fn test_directory_report_header() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let filter = EmployeeFilter {
            gender: Some(Gender::Female),
            ..EmployeeFilter::default()
        };
        let shown = filter.apply(&seed_records());
        let report = DirectoryReport::new(&filter, &shown, now);
        assert_eq!(report.title, "Employee Directory Report");
        assert_eq!(report.total, 1);
        assert_eq!(report.filters, "Female / All");
        assert_eq!(report.generated_on, "03/07/2025");
        assert_eq!(report.generated_at, "2:05:09 PM");
    }
}
