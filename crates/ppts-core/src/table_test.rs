use super::*;

fn two_rows() -> SourceTable {
    let mut table = SourceTable::new(2);
    table
        .set_column("name", Column::Text(vec![Some("a".into()), None]))
        .unwrap();
    table
        .set_column("size", Column::Number(vec![None, Some(4.5)]))
        .unwrap();
    table
}

#[test]
fn test_typed_access() {
    let table = two_rows();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.text("name").unwrap()[0].as_deref(), Some("a"));
    assert_eq!(table.number("size").unwrap()[1], Some(4.5));
    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["name", "size"]);
}

#[test]
fn test_kind_mismatch() {
    let table = two_rows();
    let err = table.number("name").unwrap_err();
    assert!(matches!(err, CoreError::ColumnKindMismatch { .. }));
    assert!(err.to_string().contains("not a number column"));
}

#[test]
fn test_unknown_column() {
    let table = two_rows();
    assert!(matches!(
        table.text("missing"),
        Err(CoreError::UnknownColumn { .. })
    ));
}

#[test]
fn test_set_column_replaces_in_place() {
    let mut table = two_rows();
    table
        .set_column("name", Column::Text(vec![Some("x".into()), Some("y".into())]))
        .unwrap();
    assert_eq!(table.column_names().count(), 2);
    assert_eq!(table.text("name").unwrap()[1].as_deref(), Some("y"));
}

#[test]
fn test_set_column_rejects_wrong_length() {
    let mut table = two_rows();
    let err = table
        .set_column("extra", Column::Number(vec![Some(1.0)]))
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::ColumnLength {
            actual: 1,
            expected: 2,
            ..
        }
    ));
    assert!(!table.has_column("extra"));
}

#[test]
fn test_presence() {
    let table = two_rows();
    let name = table.column("name").unwrap();
    assert!(name.is_present(0));
    assert!(!name.is_present(1));
    assert!(!name.is_present(7));
    assert_eq!(Column::missing(ColumnKind::Number, 3).len(), 3);
}
