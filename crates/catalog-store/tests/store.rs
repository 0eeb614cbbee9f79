use std::path::PathBuf;

use catalog_store::CatalogStore;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn loaded_store() -> CatalogStore {
    let mut store = CatalogStore::new(fixture_path("courses.json"));
    store.try_load().expect("load fixture catalog");
    store
}

#[test]
fn load_reports_all_courses_in_document_order() {
    let mut store = CatalogStore::new(fixture_path("courses.json"));
    assert!(!store.is_loaded());
    let courses = store.load().expect("fixture should load");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].acronym, "CS");
    assert_eq!(courses[1].acronym, "SE");
    assert!(store.is_loaded());
    assert_eq!(store.course_count(), 2);
}

#[test]
fn load_failure_returns_none_and_leaves_store_unloaded() {
    let mut store = CatalogStore::new(fixture_path("does-not-exist.json"));
    assert!(store.load().is_none());
    assert!(!store.is_loaded());
    assert!(store.all_courses().is_empty());
}

#[test]
fn decode_failure_is_reported_as_json_error() {
    let mut store = CatalogStore::new(fixture_path("broken.json"));
    let error = store.try_load().expect_err("broken fixture must not decode");
    assert!(matches!(error, catalog_store::CatalogError::Json { .. }));
    assert!(!store.is_loaded());
}

#[test]
fn failed_reload_keeps_previously_loaded_records() {
    let path = std::env::temp_dir().join("catalog-store-reload-test.json");
    std::fs::copy(fixture_path("courses.json"), &path).expect("stage catalog copy");
    let mut store = CatalogStore::new(&path);
    store.try_load().expect("staged catalog loads");
    assert_eq!(store.course_count(), 2);

    std::fs::write(&path, b"not json").expect("corrupt staged catalog");
    assert!(store.load().is_none());
    // The failed load must not disturb the in-memory copy.
    assert!(store.is_loaded());
    assert_eq!(store.course_count(), 2);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn queries_before_load_are_empty_and_do_not_panic() {
    let store = CatalogStore::new(fixture_path("courses.json"));
    assert!(store.all_courses().is_empty());
    assert!(store.course_by_acronym("CS").is_none());
    assert!(store.search("computer").is_empty());
    assert!(store.courses_by_year(1).is_empty());
    assert!(store.modules_for_course("CS").is_empty());
    assert!(store.modules_for_year("CS", 1).is_empty());
}

#[test]
fn lookup_is_case_sensitive_exact_match() {
    let store = loaded_store();
    assert_eq!(store.course_by_acronym("SE").unwrap().acronym, "SE");
    assert!(store.course_by_acronym("se").is_none());
    assert!(store.course_by_acronym("S").is_none());
}

#[test]
fn search_matches_any_text_field_case_insensitively() {
    let store = loaded_store();
    let by_name = store.search("computer");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].acronym, "CS");

    let by_overview = store.search("TEAMS");
    assert_eq!(by_overview.len(), 1);
    assert_eq!(by_overview[0].acronym, "SE");

    let by_short = store.search("delivery");
    assert_eq!(by_short.len(), 1);
    assert_eq!(by_short[0].acronym, "SE");

    assert!(store.search("").is_empty());
    assert!(store.search("quantum").is_empty());
}

#[test]
fn search_returns_matches_in_document_order() {
    let store = loaded_store();
    // Both overviews contain the letter sequence "sys".
    let hits = store.search("sys");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].acronym, "CS");
    assert_eq!(hits[1].acronym, "SE");
}

#[test]
fn year_filter_requires_non_empty_module_list() {
    let store = loaded_store();
    let first_year: Vec<&str> = store
        .courses_by_year(1)
        .iter()
        .map(|c| c.acronym.as_str())
        .collect();
    assert_eq!(first_year, ["CS"]);

    let second_year: Vec<&str> = store
        .courses_by_year(2)
        .iter()
        .map(|c| c.acronym.as_str())
        .collect();
    assert_eq!(second_year, ["CS", "SE"]);

    assert!(store.courses_by_year(3).is_empty());
}

#[test]
fn modules_flatten_grouped_by_year_with_stripped_labels() {
    let store = loaded_store();
    let modules = store.modules_for_course("CS");
    assert_eq!(modules.len(), 3);
    let annotated: Vec<(String, u64)> = modules
        .iter()
        .map(|m| {
            let id = m.fields.0.get("id").and_then(serde_json::Value::as_u64);
            (m.year.clone(), id.expect("fixture modules carry ids"))
        })
        .collect();
    assert_eq!(
        annotated,
        [
            ("1".to_string(), 1),
            ("2".to_string(), 2),
            ("2".to_string(), 3),
        ]
    );
}

#[test]
fn modules_for_unknown_course_are_empty() {
    let store = loaded_store();
    assert!(store.modules_for_course("ZZZ").is_empty());
    assert!(store.modules_for_year("ZZZ", 1).is_empty());
}

#[test]
fn modules_for_year_returns_plain_records() {
    let store = loaded_store();
    let year_two = store.modules_for_year("CS", 2);
    assert_eq!(year_two.len(), 2);
    assert_eq!(
        year_two[0].0.get("name").and_then(serde_json::Value::as_str),
        Some("Operating Systems")
    );
    assert!(store.modules_for_year("CS", 3).is_empty());
}

#[test]
fn repeated_reads_are_idempotent() {
    let store = loaded_store();
    let first = store.search("software").len();
    let _ = store.courses_by_year(2);
    let _ = store.modules_for_course("CS");
    assert_eq!(store.search("software").len(), first);
    assert_eq!(store.all_courses().len(), 2);
}

#[test]
fn radar_data_round_trips_through_the_record() {
    let store = loaded_store();
    let cs = store.course_by_acronym("CS").unwrap();
    let points = cs.radar_points();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].label, "Theory");
    assert_eq!(points[0].value, 4.0);
    assert_eq!(points[2].value, 4.5);

    let se = store.course_by_acronym("SE").unwrap();
    assert!(se.radar_points().is_empty());
}
