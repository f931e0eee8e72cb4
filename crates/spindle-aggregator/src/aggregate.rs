//! Shift and time-window aggregation

use spindle_domain::{AggregateOutcome, Query, Record};
use tracing::debug;

/// Whether a record belongs to the query's shift and window
///
/// Shift comparison is exact and case-sensitive. A record with an
/// unparseable timestamp never matches.
pub fn matches(record: &Record, query: &Query) -> bool {
    if record.shift != query.shift {
        return false;
    }
    match record.parsed_timestamp() {
        Some(instant) => query.contains(instant),
        None => {
            debug!(
                "Excluding record {}: unparseable timestamp {:?}",
                record.id, record.timestamp
            );
            false
        }
    }
}

/// Sum `actual_length` over records matching `query`
///
/// Records are visited in order and summed in `f64`. An inverted window is
/// not rejected here; it matches nothing.
pub fn aggregate(records: &[Record], query: &Query) -> AggregateOutcome {
    let mut total = 0.0_f64;
    let mut matched = 0_usize;

    for record in records.iter().filter(|r| matches(r, query)) {
        total += record.actual_length;
        matched += 1;
    }

    debug!(
        "Aggregated shift '{}' from {} to {}: {} of {} records, total {}",
        query.shift,
        query.start,
        query.end,
        matched,
        records.len(),
        total
    );

    if matched == 0 {
        AggregateOutcome::NoData
    } else {
        AggregateOutcome::Total { total, matched }
    }
}

/// Sum several queries into one outcome
///
/// Each query is evaluated on its own, so a record inside two overlapping
/// queries is counted once per query. The result is `NoData` only when no
/// query matched anything.
pub fn aggregate_batch(records: &[Record], queries: &[Query]) -> AggregateOutcome {
    queries
        .iter()
        .map(|query| aggregate(records, query))
        .fold(AggregateOutcome::NoData, AggregateOutcome::merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_domain::parse_timestamp;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("1", "2024-01-01 08:00:00", "A", 10.5),
            Record::new("2", "2024-01-01 09:00:00", "A", 5.0),
            Record::new("3", "2024-01-01 08:30:00", "B", 100.0),
        ]
    }

    fn query(shift: &str, start: &str, end: &str) -> Query {
        Query::parse(shift, start, end).unwrap()
    }

    #[test]
    fn test_shift_and_window_filter() {
        let outcome = aggregate(
            &sample_records(),
            &query("A", "2024-01-01 07:00:00", "2024-01-01 08:45:00"),
        );
        assert_eq!(outcome, AggregateOutcome::Total { total: 10.5, matched: 1 });
    }

    #[test]
    fn test_lengths_summed_as_printed() {
        let records = vec![
            Record::new("1", "2024-01-01 08:00:00", "A", 10.0),
            Record::new("2", "2024-01-01 08:10:00", "A", -4.0),
        ];
        let outcome = aggregate(
            &records,
            &query("A", "2024-01-01 08:00:00", "2024-01-01 09:00:00"),
        );
        assert_eq!(outcome, AggregateOutcome::Total { total: 6.0, matched: 2 });
    }

    #[test]
    fn test_unpadded_timestamp_is_unmatched() {
        let records = vec![
            Record::new("1", "2024-1-1 8:30:00", "A", 3.0),
            Record::new("2", "2024-01-01 08:30:00", "A", 2.0),
        ];
        let outcome = aggregate(
            &records,
            &query("A", "2024-01-01 08:00:00", "2024-01-01 09:00:00"),
        );
        assert_eq!(outcome, AggregateOutcome::Total { total: 2.0, matched: 1 });
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let outcome = aggregate(
            &sample_records(),
            &query("A", "2024-01-01 08:00:00", "2024-01-01 09:00:00"),
        );
        assert_eq!(outcome, AggregateOutcome::Total { total: 15.5, matched: 2 });
    }

    #[test]
    fn test_shift_is_case_sensitive() {
        let outcome = aggregate(
            &sample_records(),
            &query("a", "2024-01-01 00:00:00", "2024-01-02 00:00:00"),
        );
        assert!(outcome.is_no_data());
    }

    #[test]
    fn test_no_match_is_no_data() {
        let outcome = aggregate(
            &sample_records(),
            &query("C", "2024-01-01 00:00:00", "2024-01-02 00:00:00"),
        );
        assert_eq!(outcome, AggregateOutcome::NoData);
        assert_eq!(outcome.barcode_payload(), None);
    }

    #[test]
    fn test_zero_length_match_is_not_no_data() {
        let records = vec![Record::new("1", "2024-01-01 08:00:00", "A", 0.0)];
        let outcome = aggregate(
            &records,
            &query("A", "2024-01-01 07:00:00", "2024-01-01 09:00:00"),
        );
        assert_eq!(outcome, AggregateOutcome::Total { total: 0.0, matched: 1 });
    }

    #[test]
    fn test_empty_records() {
        let outcome = aggregate(&[], &query("A", "2024-01-01 07:00:00", "2024-01-01 09:00:00"));
        assert!(outcome.is_no_data());
    }

    #[test]
    fn test_unparseable_timestamp_excluded() {
        let mut records = sample_records();
        records.push(Record::new("4", "01/01/2024 08:10", "A", 1000.0));
        records.push(Record::new("5", "", "A", 1000.0));
        let outcome = aggregate(
            &records,
            &query("A", "2024-01-01 07:00:00", "2024-01-01 08:45:00"),
        );
        assert_eq!(outcome.total(), Some(10.5));
    }

    #[test]
    fn test_inverted_window_matches_nothing() {
        let inverted = Query::unchecked(
            "A",
            parse_timestamp("2024-01-01 09:00:00").unwrap(),
            parse_timestamp("2024-01-01 08:00:00").unwrap(),
        );
        assert!(aggregate(&sample_records(), &inverted).is_no_data());
    }

    #[test]
    fn test_duplicates_are_summed() {
        let records = vec![
            Record::new("7", "2024-01-01 08:00:00", "A", 2.5),
            Record::new("7", "2024-01-01 08:00:00", "A", 2.5),
        ];
        let outcome = aggregate(
            &records,
            &query("A", "2024-01-01 08:00:00", "2024-01-01 08:00:00"),
        );
        assert_eq!(outcome, AggregateOutcome::Total { total: 5.0, matched: 2 });
    }

    #[test]
    fn test_batch_sums_queries() {
        let queries = vec![
            query("A", "2024-01-01 07:00:00", "2024-01-01 08:45:00"),
            query("B", "2024-01-01 08:30:00", "2024-01-01 08:30:00"),
            query("C", "2024-01-01 00:00:00", "2024-01-02 00:00:00"),
        ];
        let outcome = aggregate_batch(&sample_records(), &queries);
        assert_eq!(outcome, AggregateOutcome::Total { total: 110.5, matched: 2 });
        assert_eq!(outcome.barcode_payload().unwrap(), "TOTAL : 110.50");
    }

    #[test]
    fn test_batch_without_matches() {
        let queries = vec![query("Z", "2024-01-01 07:00:00", "2024-01-01 08:45:00")];
        assert!(aggregate_batch(&sample_records(), &queries).is_no_data());
        assert!(aggregate_batch(&sample_records(), &[]).is_no_data());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = sample_records();
        let q = query("A", "2024-01-01 00:00:00", "2024-01-02 00:00:00");
        assert_eq!(aggregate(&records, &q), aggregate(&records, &q));
    }
}
