use super::*;
use crate::dates::{DateParts, RecordDates};
use std::collections::HashSet;

#[test]
fn test_table_names_unique() {
    let names: HashSet<&str> = ALL_TABLES.iter().map(|t| t.name).collect();
    assert_eq!(names.len(), ALL_TABLES.len());
}

#[test]
fn test_every_table_has_one_leading_primary_key() {
    for table in ALL_TABLES {
        let keys: Vec<&ColumnSpec> = table.columns.iter().filter(|c| c.primary_key).collect();
        assert_eq!(keys.len(), 1, "{}", table.name);
        assert_eq!(keys[0].name, table.columns[0].name, "{}", table.name);
    }
}

#[test]
fn test_record_column_order() {
    let names: Vec<&str> = RECORD.column_names().collect();
    assert_eq!(names.len(), 20);
    assert_eq!(&names[..4], &["record_id", "record_type", "planner_id", "location_id"]);
    assert_eq!(
        &names[14..],
        &[
            "year_opened",
            "month_opened",
            "day_opened",
            "year_closed",
            "month_closed",
            "day_closed"
        ]
    );
}

#[test]
fn test_counted_measurements_round() {
    let rows = [Measurement {
        id: 0,
        record_id: 4,
        category: "STORIES".to_string(),
        exist: 2.0,
        prop: 5.6,
        net: 0.0,
    }];
    let table = NamedTable::project_features(&rows);
    assert_eq!(table.name(), "prj_feature");
    assert_eq!(
        table.rows[0],
        vec![
            SqlValue::Integer(0),
            SqlValue::Integer(4),
            SqlValue::Text("STORIES".to_string()),
            SqlValue::Integer(2),
            SqlValue::Integer(6),
            SqlValue::Integer(0),
        ]
    );

    let land_use = NamedTable::land_uses(&rows);
    assert_eq!(land_use.rows[0][4], SqlValue::Real(5.6));
}

#[test]
fn test_record_row_width_and_nulls() {
    let row = RecordRow {
        record_id: 0,
        record_type: Some("PRJ".to_string()),
        planner_id: None,
        location_id: Some(2),
        record_strid: Some("2019-001PRJ".to_string()),
        object_id: Some(12.0),
        template_id: None,
        record_name: None,
        description: None,
        record_status: None,
        construct_cost: Some(0.0),
        related_building_permit: None,
        acalink: None,
        aalink: None,
        opened: DateParts {
            year: Some(2019),
            month: Some(3),
            day: Some(14),
        },
        closed: RecordDates::default().closed,
    };
    let table = NamedTable::records(&[row]);
    let values = &table.rows[0];
    assert_eq!(values.len(), RECORD.columns.len());
    assert_eq!(values[1], SqlValue::Text("PRJ".to_string()));
    assert!(values[2].is_null());
    assert_eq!(values[3], SqlValue::Integer(2));
    assert_eq!(values[5], SqlValue::Integer(12));
    assert_eq!(values[14], SqlValue::Integer(2019));
    assert!(values[17].is_null());
}

#[test]
fn test_relationship_ids_are_positions() {
    let rels = [
        RecordRelationship {
            parent_id: 0,
            child_id: 5,
        },
        RecordRelationship {
            parent_id: 0,
            child_id: 1,
        },
    ];
    let table = NamedTable::relationships(&rels);
    assert_eq!(
        table.rows,
        vec![
            vec![
                SqlValue::Integer(0),
                SqlValue::Integer(0),
                SqlValue::Integer(5)
            ],
            vec![
                SqlValue::Integer(1),
                SqlValue::Integer(0),
                SqlValue::Integer(1)
            ],
        ]
    );
}

#[test]
fn test_sql_value_serializes_untagged() {
    let row = vec![
        SqlValue::Integer(1),
        SqlValue::Null,
        SqlValue::Text("x".to_string()),
    ];
    assert_eq!(serde_json::to_string(&row).unwrap(), r#"[1,null,"x"]"#);
}

#[test]
fn test_rounded_non_finite_is_null() {
    assert_eq!(SqlValue::rounded(2.5), SqlValue::Integer(3));
    assert_eq!(SqlValue::rounded(f64::INFINITY), SqlValue::Null);
    assert_eq!(SqlValue::rounded(f64::NAN), SqlValue::Null);
}
