use super::*;
use crate::memory::MemorySink;
use ppts_core::output::{ADU_AREA, PRJ_DESC_DETAIL};
use ppts_core::test_support::RecordingObserver;
use ppts_core::NoopObserver;

fn detail_table(rows: Vec<Vec<SqlValue>>) -> NamedTable {
    NamedTable {
        spec: &PRJ_DESC_DETAIL,
        rows,
    }
}

#[test]
fn test_load_creates_and_fills() {
    let tables = vec![
        detail_table(vec![vec![
            SqlValue::Integer(0),
            SqlValue::Text("Referred".to_string()),
        ]]),
        NamedTable {
            spec: &ADU_AREA,
            rows: vec![],
        },
    ];
    let mut sink = MemorySink::new();

    let summary = load_tables(&mut sink, &tables, &NoopObserver).unwrap();
    assert_eq!(summary.rows("prj_desc_detail"), Some(1));
    assert_eq!(summary.rows("adu_area"), Some(0));
    assert_eq!(sink.rows("prj_desc_detail").unwrap().len(), 1);
    assert_eq!(sink.rows("adu_area").unwrap().len(), 0);
}

#[test]
fn test_bad_row_rolls_back_everything() {
    let tables = vec![
        NamedTable {
            spec: &ADU_AREA,
            rows: vec![vec![SqlValue::Integer(0), SqlValue::Real(350.0)]],
        },
        detail_table(vec![vec![SqlValue::Integer(0)]]),
    ];
    let mut sink = MemorySink::new();

    let err = load_tables(&mut sink, &tables, &NoopObserver).unwrap_err();
    assert!(matches!(
        err,
        DbError::RowShape {
            row: 0,
            actual: 1,
            expected: 2,
            ..
        }
    ));
    assert_eq!(sink.table_names().count(), 0);
}

#[test]
fn test_load_stage_reported_only_on_success() {
    let observer = RecordingObserver::default();
    let mut sink = MemorySink::new();
    load_tables(&mut sink, &[detail_table(vec![])], &observer).unwrap();
    assert_eq!(observer.finished(), vec![Stage::Load]);

    let observer = RecordingObserver::default();
    let bad = [detail_table(vec![vec![]])];
    assert!(load_tables(&mut MemorySink::new(), &bad, &observer).is_err());
    assert!(observer.finished().is_empty());
}

#[test]
fn test_check_shape_reports_first_bad_row() {
    let rows = vec![
        vec![SqlValue::Integer(0), SqlValue::Null],
        vec![SqlValue::Integer(1)],
        vec![],
    ];
    match check_shape(&PRJ_DESC_DETAIL, &rows) {
        Err(DbError::RowShape { table, row, .. }) => {
            assert_eq!(table, "prj_desc_detail");
            assert_eq!(row, 1);
        }
        other => panic!("expected row shape error, got {other:?}"),
    }
}
