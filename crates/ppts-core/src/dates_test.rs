use super::*;
use crate::test_support::SourceTableBuilder;

fn parts(year: i64, month: i64, day: i64) -> DateParts {
    DateParts {
        year: Some(year),
        month: Some(month),
        day: Some(day),
    }
}

#[test]
fn test_month_day_year() {
    assert_eq!(parse_date_parts(Some("3/14/2019")), parts(2019, 3, 14));
}

#[test]
fn test_trailing_time_ignored() {
    assert_eq!(
        parse_date_parts(Some("12/01/2020 12:00:00 AM")),
        parts(2020, 12, 1)
    );
}

#[test]
fn test_missing_and_malformed() {
    assert_eq!(parse_date_parts(None), DateParts::default());
    assert_eq!(parse_date_parts(Some("")), DateParts::default());
    assert_eq!(parse_date_parts(Some("not-a-date")), DateParts::default());
    assert_eq!(parse_date_parts(Some("2019-03-14")), DateParts::default());
}

#[test]
fn test_no_calendar_validation() {
    assert_eq!(parse_date_parts(Some("13/45/2019")), parts(2019, 13, 45));
}

#[test]
fn test_overflowing_component_is_missing() {
    assert_eq!(
        parse_date_parts(Some("1/1/99999999999999999999")),
        DateParts::default()
    );
}

#[test]
fn test_decompose_columns_independently() {
    let table = SourceTableBuilder::new(3)
        .text("date_opened", 0, "3/14/2019")
        .text("date_closed", 0, "garbage")
        .text("date_closed", 1, "1/2/2021")
        .build();

    let dates = decompose_dates(&table).unwrap();
    assert_eq!(
        dates,
        vec![
            RecordDates {
                opened: parts(2019, 3, 14),
                closed: DateParts::default(),
            },
            RecordDates {
                opened: DateParts::default(),
                closed: parts(2021, 1, 2),
            },
            RecordDates::default(),
        ]
    );
}
