use super::*;
use crate::test_support::SourceTableBuilder;

#[test]
fn test_checked_hearings_carry_cell_value() {
    let table = SourceTableBuilder::new(3)
        .text("COM_HEARING", 2, "CHECKED")
        .text("BOS_1ST_READ", 1, "CHECKED")
        .text("BOS_1ST_READ", 0, "5/1/2019")
        .text("MAYORAL_SIGN", 0, "CHECKED")
        .build();

    let rows = pivot_hearing_dates(&table).unwrap();
    let summary: Vec<(usize, usize, &str, &str)> = rows
        .iter()
        .map(|h| {
            (
                h.hearing_id,
                h.record_id,
                h.hearing_type.as_str(),
                h.date.as_str(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, 1, "BOS_1ST_READ", "CHECKED"),
            (1, 2, "COM_HEARING", "CHECKED"),
            (2, 0, "MAYORAL_SIGN", "CHECKED"),
        ]
    );
}

#[test]
fn test_no_hearings() {
    let table = SourceTableBuilder::new(2).build();
    assert!(pivot_hearing_dates(&table).unwrap().is_empty());
}
