use super::*;
use crate::schema::{PLANNER_EMAIL, PLANNER_ID, PLANNER_NAME, PLANNER_PHONE};
use crate::test_support::SourceTableBuilder;

#[test]
fn test_missing_key_gets_no_reference() {
    let table = SourceTableBuilder::new(4)
        .text(PLANNER_ID, 1, "jsmith")
        .text(PLANNER_ID, 2, "adoe")
        .text(PLANNER_ID, 3, "jsmith")
        .build();

    let dedup = dedupe_planners(&table).unwrap();
    assert_eq!(dedup.refs, vec![None, Some(0), Some(1), Some(0)]);
    let keys: Vec<&str> = dedup
        .planners
        .iter()
        .map(|p| p.planner_strid.as_str())
        .collect();
    assert_eq!(keys, vec!["jsmith", "adoe"]);
    assert_eq!(dedup.planners[1].planner_id, 1);
}

#[test]
fn test_contact_fields_from_first_row() {
    let table = SourceTableBuilder::new(2)
        .texts(PLANNER_ID, &["jsmith", "jsmith"])
        .text(PLANNER_NAME, 0, "Jo Smith")
        .text(PLANNER_NAME, 1, "Joanne Smith")
        .text(PLANNER_EMAIL, 1, "jo.smith@sfgov.org")
        .text(PLANNER_PHONE, 0, "415-555-0100")
        .build();

    let planner = &dedupe_planners(&table).unwrap().planners[0];
    assert_eq!(planner.name.as_deref(), Some("Jo Smith"));
    assert_eq!(planner.email, None);
    assert_eq!(planner.phone.as_deref(), Some("415-555-0100"));
}

#[test]
fn test_no_planners() {
    let dedup = dedupe_planners(&SourceTableBuilder::new(2).build()).unwrap();
    assert!(dedup.planners.is_empty());
    assert_eq!(dedup.refs, vec![None, None]);
}
