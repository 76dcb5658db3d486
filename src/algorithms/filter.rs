// Threshold and exclusion filtering of the trip pool

use log::debug;

use crate::models::{ExclusionSet, FilterCriteria, Trip};

/// Keeps the trips that satisfy all thresholds and are not excluded.
/// Output order follows input order.
pub fn filter_trips(
    trips: &[Trip],
    criteria: &FilterCriteria,
    exclusions: &ExclusionSet,
) -> Vec<Trip> {
    let candidates: Vec<Trip> = trips
        .iter()
        .filter(|trip| !exclusions.contains(trip.id) && criteria.admits(trip))
        .copied()
        .collect();

    debug!(
        "filter kept {} of {} trips ({} exclusions)",
        candidates.len(),
        trips.len(),
        exclusions.len()
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_trips() -> Vec<Trip> {
        let date = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        vec![
            Trip::new(5, date, date, 120.0, 3.0, 250.0),
            Trip::new(2, date, date, 290.0, 9.0, 480.0),
            Trip::new(8, date, date, 60.0, 1.0, 110.0),
            Trip::new(1, date, date, 200.0, 6.0, 320.0),
        ]
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let trips = create_test_trips();
        let kept = filter_trips(&trips, &FilterCriteria::default(), &ExclusionSet::new());
        let ids: Vec<_> = kept.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 2, 8, 1]);
    }

    #[test]
    fn test_filter_applies_thresholds() {
        let trips = create_test_trips();
        let criteria = FilterCriteria::new(200.0, 250.0, 8.0);
        let kept = filter_trips(&trips, &criteria, &ExclusionSet::new());
        let ids: Vec<_> = kept.iter().map(|t| t.id).collect();

        // 2 is too far, 8 saves too little
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn test_filter_applies_exclusions() {
        let trips = create_test_trips();
        let exclusions: ExclusionSet = [2, 1, 99].into_iter().collect();
        let kept = filter_trips(&trips, &FilterCriteria::default(), &exclusions);
        let ids: Vec<_> = kept.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 8]);
    }

    #[test]
    fn test_filter_empty_input() {
        let kept = filter_trips(&[], &FilterCriteria::default(), &ExclusionSet::new());
        assert!(kept.is_empty());
    }
}
