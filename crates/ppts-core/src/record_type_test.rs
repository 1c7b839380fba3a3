use super::*;
use crate::schema::{RECORD_TYPE_CATEGORY, RECORD_TYPE_NAME, RECORD_TYPE_TYPE};
use crate::test_support::SourceTableBuilder;

#[test]
fn test_three_letter_value_is_its_own_code() {
    let table = SourceTableBuilder::new(2)
        .texts(RECORD_TYPE_CATEGORY, &["ABC", "ABC"])
        .text(RECORD_TYPE_NAME, 0, "Something Else (XYZ)")
        .build();

    let resolution = resolve_record_types(&table).unwrap();
    assert_eq!(resolution.types.len(), 1);
    assert_eq!(resolution.types[0].code, "ABC");
    assert_eq!(
        resolution.codes,
        vec![Some("ABC".to_string()), Some("ABC".to_string())]
    );
}

#[test]
fn test_acronym_from_display_name() {
    let table = SourceTableBuilder::new(1)
        .text(RECORD_TYPE_CATEGORY, 0, "Conditional Use Authorization")
        .text(RECORD_TYPE_NAME, 0, "Conditional Use Authorization (CUA)")
        .text(RECORD_TYPE_TYPE, 0, "Entitlement")
        .build();

    let resolution = resolve_record_types(&table).unwrap();
    let cua = &resolution.types[0];
    assert_eq!(cua.code, "CUA");
    assert_eq!(cua.raw_value, "Conditional Use Authorization");
    assert_eq!(cua.category.as_deref(), Some("Entitlement"));
    assert_eq!(resolution.codes, vec![Some("CUA".to_string())]);
}

#[test]
fn test_other_is_kept_verbatim() {
    let table = SourceTableBuilder::new(1)
        .text(RECORD_TYPE_CATEGORY, 0, "Other")
        .build();
    let resolution = resolve_record_types(&table).unwrap();
    assert_eq!(resolution.types[0].code, "Other");
}

#[test]
fn test_later_row_supplies_acronym() {
    let table = SourceTableBuilder::new(3)
        .texts(
            RECORD_TYPE_CATEGORY,
            &["Variance", "Environmental", "Variance"],
        )
        .text(RECORD_TYPE_NAME, 0, "Variance")
        .text(RECORD_TYPE_NAME, 1, "Environmental (ENV)")
        .text(RECORD_TYPE_NAME, 2, "Zoning Variance (VAR)")
        .build();

    let resolution = resolve_record_types(&table).unwrap();
    let codes: Vec<&str> = resolution.types.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, vec!["VAR", "ENV"]);
    // Attributes come from the first row bearing the value
    assert_eq!(resolution.types[0].name.as_deref(), Some("Variance"));
    assert_eq!(
        resolution.codes,
        vec![
            Some("VAR".to_string()),
            Some("ENV".to_string()),
            Some("VAR".to_string())
        ]
    );
}

#[test]
fn test_unresolvable_category_is_fatal() {
    let table = SourceTableBuilder::new(2)
        .texts(RECORD_TYPE_CATEGORY, &["Mystery Permit", "Mystery Permit"])
        .text(RECORD_TYPE_NAME, 0, "Mystery Permit")
        .build();

    let err = resolve_record_types(&table).unwrap_err();
    match err {
        CoreError::UnresolvableCategory { value } => assert_eq!(value, "Mystery Permit"),
        other => panic!("expected unresolvable category, got {other}"),
    }
}

#[test]
fn test_shared_code_keeps_first_row() {
    let table = SourceTableBuilder::new(2)
        .texts(
            RECORD_TYPE_CATEGORY,
            &["CUA", "Conditional Use Authorization"],
        )
        .text(RECORD_TYPE_NAME, 0, "Conditional Use")
        .text(RECORD_TYPE_NAME, 1, "Conditional Use Authorization (CUA)")
        .build();

    let resolution = resolve_record_types(&table).unwrap();
    assert_eq!(resolution.types.len(), 1);
    assert_eq!(resolution.types[0].raw_value, "CUA");
    assert_eq!(resolution.types[0].name.as_deref(), Some("Conditional Use"));
    assert_eq!(
        resolution.codes,
        vec![Some("CUA".to_string()), Some("CUA".to_string())]
    );
}

#[test]
fn test_missing_category_has_no_code() {
    let table = SourceTableBuilder::new(2)
        .text(RECORD_TYPE_CATEGORY, 1, "PRV")
        .build();
    let resolution = resolve_record_types(&table).unwrap();
    assert_eq!(resolution.codes, vec![None, Some("PRV".to_string())]);
    assert_eq!(resolution.types.len(), 1);
}

#[test]
fn test_extract_acronym() {
    assert_eq!(extract_acronym("Discretionary Review (DRP)"), Some("DRP"));
    assert_eq!(extract_acronym("Project Review (PRJ) - Legacy (PRL)"), Some("PRL"));
    assert_eq!(extract_acronym("(DRP)"), None);
    assert_eq!(extract_acronym("Review (AB)"), None);
}
