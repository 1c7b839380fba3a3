use super::*;
use std::collections::HashSet;

#[test]
fn test_source_columns_are_unique() {
    let columns = source_columns();
    let names: HashSet<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names.len(), columns.len());
}

#[test]
fn test_source_column_count() {
    // 24 text + 4 numeric record columns, 30 checkbox/detail/hearing columns,
    // 36 measurement groups of three, 4 ADU areas
    assert_eq!(source_columns().len(), 24 + 4 + 30 + 36 * 3 + 4);
}

#[test]
fn test_measurement_columns_are_numeric() {
    let columns = source_columns();
    let kind = |name: &str| columns.iter().find(|c| c.name == name).map(|c| c.kind);

    assert_eq!(kind("LAND_USE_OFFICE_EXIST"), Some(ColumnKind::Number));
    assert_eq!(kind("PRJ_FEATURE_OTHER_NET"), Some(ColumnKind::Number));
    assert_eq!(kind("RESIDENTIAL_ADU_1BR_AREA"), Some(ColumnKind::Number));
    assert_eq!(kind("PRJ_FEATURE_OTHER"), Some(ColumnKind::Text));
    assert_eq!(kind("the_geom"), Some(ColumnKind::Text));
    assert_eq!(kind("Shape_Area"), Some(ColumnKind::Number));
    assert_eq!(kind("RESIDENTIAL_STUDIO_AREA"), None);
}

#[test]
fn test_measurement_column_name() {
    assert_eq!(
        measurement_column("RESIDENTIAL", "ADU_STUDIO", Measure::Area),
        "RESIDENTIAL_ADU_STUDIO_AREA"
    );
    assert_eq!(
        measurement_column("LAND_USE", "PARKING_SPACES", Measure::Net),
        "LAND_USE_PARKING_SPACES_NET"
    );
}

#[test]
fn test_flag_list_contains_demolition() {
    assert_eq!(PRJ_DESC_FLAGS.len(), 22);
    assert!(PRJ_DESC_FLAGS.contains(&DEMOLITION));
}
