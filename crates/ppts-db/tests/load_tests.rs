//! Integration tests: normalize a synthetic extract and load it into an
//! on-disk DuckDB database.

use ppts_core::test_support::SourceTableBuilder;
use ppts_core::{prepare, LoadConfig, NoopObserver};
use ppts_db::{load_tables, DbError, DuckDbSink, MemorySink};

fn extract() -> SourceTableBuilder {
    SourceTableBuilder::new(3)
        .texts("record_id", &["A1", "B2", "C3"])
        .texts(
            "record_type_category",
            &["PRJ", "Conditional Use Authorization", "PRJ"],
        )
        .text("record_type", 1, "Conditional Use Authorization (CUA)")
        .text("children", 0, "B2,C3,Z9")
        .texts("the_geom", &["POINT (0 0)", "POINT (0 0)", "POINT (5 5)"])
        .texts("planner_id", &["PL1", "PL2", "PL1"])
        .text("NEW_CONSTRUCTION", 0, "CHECKED")
        .text("MCD_REFERRAL", 1, "Referred")
        .number("RESIDENTIAL_STUDIO_PROP", 0, 2.4)
        .number("RESIDENTIAL_ADU_STUDIO_AREA", 2, 350.0)
        .texts("date_opened", &["3/14/2019", "", "7/4/2020"])
}

fn count(sink: &DuckDbSink, sql: &str) -> i64 {
    sink.conn().query_row(sql, [], |row| row.get(0)).unwrap()
}

#[test]
fn test_full_load_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ppts.duckdb");

    let dataset = prepare(extract().build(), &LoadConfig::default(), &NoopObserver).unwrap();
    let mut sink = DuckDbSink::open(&path, false).unwrap();
    let summary = load_tables(&mut sink, &dataset.tables(), &NoopObserver).unwrap();

    assert_eq!(summary.tables.len(), 12);
    assert_eq!(count(&sink, "SELECT COUNT(*) FROM record"), 3);
    assert_eq!(count(&sink, "SELECT COUNT(*) FROM record_type"), 2);
    assert_eq!(count(&sink, "SELECT COUNT(*) FROM record_rel"), 2);
    assert_eq!(count(&sink, "SELECT COUNT(*) FROM location"), 2);
    assert_eq!(count(&sink, "SELECT COUNT(*) FROM planner"), 2);
    assert_eq!(
        count(&sink, "SELECT dwelling_prop FROM dwelling WHERE dwelling_type = 'STUDIO'"),
        2
    );

    // Detail and area rows join to their parents through explicit ids
    assert_eq!(
        count(
            &sink,
            "SELECT COUNT(*) FROM prj_desc_detail d JOIN prj_desc p USING (desc_id) \
             WHERE p.desc_type = 'MCD_REFERRAL' AND p.record_id = 1"
        ),
        1
    );
    assert_eq!(
        count(
            &sink,
            "SELECT COUNT(*) FROM adu_area a JOIN dwelling w USING (dwelling_id) \
             WHERE w.dwelling_type = 'ADU_STUDIO' AND w.record_id = 2"
        ),
        1
    );
    assert_eq!(
        count(
            &sink,
            "SELECT COUNT(*) FROM record WHERE record_type = 'CUA' AND year_opened IS NULL"
        ),
        1
    );
    sink.persist().unwrap();
    assert!(path.exists());

    let err = DuckDbSink::open(&path, false).err().unwrap();
    assert!(matches!(err, DbError::DestinationExists { .. }));
}

#[test]
fn test_memory_sink_matches_dataset() {
    let dataset = prepare(extract().build(), &LoadConfig::default(), &NoopObserver).unwrap();
    let tables = dataset.tables();
    let mut sink = MemorySink::new();
    load_tables(&mut sink, &tables, &NoopObserver).unwrap();

    for table in &tables {
        assert_eq!(sink.rows(table.name()).unwrap(), table.rows.as_slice());
    }
}
