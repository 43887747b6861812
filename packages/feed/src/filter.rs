//! The filter predicate.
//!
//! Pure functions over the normalized list; filtering never mutates its
//! input and is recomputed in full on every criteria change. At a few
//! hundred records there is nothing to index.

use chrono::{DateTime, Utc};
use sf_reports_report_models::UcrCategory;
use sf_reports_source::parsing::parse_report_datetime;
use sf_reports_source_models::PoliceReport;

/// User-selected filter criteria.
///
/// `Default` is fully unconstrained and matches every report. The date
/// rule only applies when both bounds are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Inclusive lower bound on the occurred timestamp.
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the occurred timestamp.
    pub end: Option<DateTime<Utc>>,
    /// Exact category to match.
    pub category: Option<UcrCategory>,
    /// Case-insensitive substring to find in the address.
    pub location: Option<String>,
}

/// Returns whether a report passes all filter rules.
#[must_use]
pub fn matches(report: &PoliceReport, filters: &Filters) -> bool {
    matches_date_range(report, filters)
        && matches_category(report, filters)
        && matches_location(report, filters)
}

/// Applies the filters to a list, preserving order.
#[must_use]
pub fn apply(reports: &[PoliceReport], filters: &Filters) -> Vec<PoliceReport> {
    reports
        .iter()
        .filter(|report| matches(report, filters))
        .cloned()
        .collect()
}

fn matches_date_range(report: &PoliceReport, filters: &Filters) -> bool {
    let (Some(start), Some(end)) = (filters.start, filters.end) else {
        return true;
    };
    // A timestamp we cannot parse cannot be placed inside the interval.
    parse_report_datetime(&report.date_occurred)
        .is_some_and(|occurred| occurred >= start && occurred <= end)
}

fn matches_category(report: &PoliceReport, filters: &Filters) -> bool {
    filters
        .category
        .is_none_or(|category| category == report.ucr_crime_category)
}

fn matches_location(report: &PoliceReport, filters: &Filters) -> bool {
    filters.location.as_ref().is_none_or(|needle| {
        report
            .address
            .to_lowercase()
            .contains(&needle.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(occurred: &str, category: UcrCategory, address: &str) -> PoliceReport {
        PoliceReport {
            case_number: "21-001".to_string(),
            date_occurred: occurred.to_string(),
            date_reported: occurred.to_string(),
            incident_type: "Unknown".to_string(),
            location_type: "Unknown".to_string(),
            address: address.to_string(),
            lat: "37.7749".to_string(),
            long: "-122.4194".to_string(),
            ucr_crime_category: category,
        }
    }

    fn date(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn empty_filters_keep_the_full_list_in_order() {
        let reports = vec![
            report("2024-03-03T10:00:00", UcrCategory::Assault, "Market St"),
            report("2024-03-01T10:00:00", UcrCategory::Other, "Mission St"),
            report("2024-03-02T10:00:00", UcrCategory::Burglary, "Valencia St"),
        ];

        let filtered = apply(&reports, &Filters::default());
        assert_eq!(filtered, reports);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let filters = Filters {
            start: Some(date("2024-03-01T10:00:00Z")),
            end: Some(date("2024-03-05T10:00:00Z")),
            ..Filters::default()
        };

        let at_start = report("2024-03-01T10:00:00", UcrCategory::Other, "Market St");
        let at_end = report("2024-03-05T10:00:00", UcrCategory::Other, "Market St");
        let before = report("2024-03-01T09:59:59", UcrCategory::Other, "Market St");
        let after = report("2024-03-05T10:00:01", UcrCategory::Other, "Market St");

        assert!(matches(&at_start, &filters));
        assert!(matches(&at_end, &filters));
        assert!(!matches(&before, &filters));
        assert!(!matches(&after, &filters));
    }

    #[test]
    fn date_rule_passes_when_either_bound_is_absent() {
        let old = report("1999-01-01T00:00:00", UcrCategory::Other, "Market St");

        let start_only = Filters {
            start: Some(date("2024-03-01T00:00:00Z")),
            ..Filters::default()
        };
        let end_only = Filters {
            end: Some(date("2024-03-01T00:00:00Z")),
            ..Filters::default()
        };

        assert!(matches(&old, &start_only));
        assert!(matches(&old, &end_only));
    }

    #[test]
    fn unparseable_timestamp_fails_a_bounded_date_rule() {
        let filters = Filters {
            start: Some(date("2024-03-01T00:00:00Z")),
            end: Some(date("2024-03-31T00:00:00Z")),
            ..Filters::default()
        };
        let bad = report("not-a-date", UcrCategory::Other, "Market St");
        assert!(!matches(&bad, &filters));
    }

    #[test]
    fn category_rule_is_exact() {
        let filters = Filters {
            category: Some(UcrCategory::Burglary),
            ..Filters::default()
        };

        let burglary = report("2024-03-01T10:00:00", UcrCategory::Burglary, "Market St");
        let assault = report("2024-03-01T10:00:00", UcrCategory::Assault, "Market St");

        assert!(matches(&burglary, &filters));
        assert!(!matches(&assault, &filters));
    }

    #[test]
    fn location_rule_is_a_case_insensitive_substring() {
        let filters = Filters {
            location: Some("market".to_string()),
            ..Filters::default()
        };

        let on_market = report("2024-03-01T10:00:00", UcrCategory::Other, "MARKET ST");
        let elsewhere = report("2024-03-01T10:00:00", UcrCategory::Other, "Mission St");

        assert!(matches(&on_market, &filters));
        assert!(!matches(&elsewhere, &filters));
    }

    #[test]
    fn predicate_is_pure() {
        let r = report("2024-03-01T10:00:00", UcrCategory::Other, "Market St");
        let filters = Filters {
            location: Some("market".to_string()),
            ..Filters::default()
        };

        assert_eq!(matches(&r, &filters), matches(&r, &filters));
    }
}
