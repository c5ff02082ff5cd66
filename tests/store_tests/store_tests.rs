//! Tests for EmployeeStore
//!
//! These tests verify:
//! - Identifier assignment and validation
//! - Update/delete semantics and NotFound handling
//! - Full rewrite of the backing file after every mutation
//! - Reload behavior (round-trip, malformed lines, id counter)
//! - Snapshot isolation

use std::fs;
use std::path::PathBuf;

use payroll::{Config, EmployeeRecord, EmployeeStore, PayrollError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, EmployeeStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("employees.dat"))
        .build();
    let store = EmployeeStore::open(config).unwrap();
    (temp_dir, store)
}

fn data_file(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("employees.dat")
}

fn record(id: u32, name: &str, department: &str, salary: f64) -> EmployeeRecord {
    EmployeeRecord {
        id,
        name: name.to_string(),
        department: department.to_string(),
        salary,
    }
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_missing_file_is_empty() {
    let (temp, store) = setup_temp_store();

    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
    assert!(!data_file(&temp).exists());
}

#[test]
fn test_open_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("roster").join("employees.dat");

    let _store = EmployeeStore::open_path(&path).unwrap();

    assert!(path.parent().unwrap().is_dir());
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_and_list() {
    let (_temp, mut store) = setup_temp_store();

    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();

    let roster = store.list().to_vec();
    assert_eq!(
        roster,
        vec![
            record(1, "Alice", "Eng", 75000.0),
            record(2, "Bob", "Sales", 60000.0),
        ]
    );
}

#[test]
fn test_add_ids_strictly_increase() {
    let (_temp, mut store) = setup_temp_store();

    let ids: Vec<u32> = (0..20)
        .map(|i| store.add(&format!("Employee {}", i), "Ops", "1000").unwrap().id)
        .collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ids.first(), Some(&1));
    assert_eq!(ids.last(), Some(&20));
}

#[test]
fn test_add_trims_input() {
    let (_temp, mut store) = setup_temp_store();

    let added = store.add("  Alice  ", " Eng ", " 75000.50 ").unwrap();

    assert_eq!(added, record(1, "Alice", "Eng", 75000.5));
}

#[test]
fn test_add_rejects_empty_name() {
    let (temp, mut store) = setup_temp_store();

    let err = store.add("   ", "Eng", "100").unwrap_err();

    assert!(matches!(err, PayrollError::Validation(_)));
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
    assert!(!data_file(&temp).exists());
}

#[test]
fn test_add_rejects_bad_salary() {
    let (_temp, mut store) = setup_temp_store();

    for salary in ["", "lots", "-5", "NaN"] {
        let err = store.add("Alice", "Eng", salary).unwrap_err();
        assert!(matches!(err, PayrollError::Validation(_)), "salary {:?}", salary);
    }
    assert!(store.is_empty());
}

#[test]
fn test_add_rejects_line_breaks() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();

    let err = store.add("A\n2|Evil|Ops|1", "Eng", "1").unwrap_err();
    assert!(matches!(err, PayrollError::Validation(_)));
    let err = store.update(1, "Alice", "Eng\r\n9|X|Y|1", "1").unwrap_err();
    assert!(matches!(err, PayrollError::Validation(_)));

    let contents = fs::read_to_string(data_file(&temp)).unwrap();
    assert_eq!(contents, "1|Alice|Eng|75000.0\n");
}

#[test]
fn test_add_rewrites_file() {
    let (temp, mut store) = setup_temp_store();

    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();

    let contents = fs::read_to_string(data_file(&temp)).unwrap();
    assert_eq!(contents, "1|Alice|Eng|75000.0\n2|Bob|Sales|60000.0\n");
}

#[test]
fn test_add_persist_failure_leaves_store_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("sub");
    let mut store = EmployeeStore::open_path(&sub.join("employees.dat")).unwrap();
    store.add("Alice", "Eng", "1").unwrap();

    fs::remove_dir_all(&sub).unwrap();

    let err = store.add("Bob", "Sales", "2").unwrap_err();
    assert!(matches!(err, PayrollError::Io(_)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), 2);
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_replaces_fields() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();

    let updated = store.update(1, "Alice Smith", "Management", "90000").unwrap();

    assert_eq!(updated, record(1, "Alice Smith", "Management", 90000.0));
    assert_eq!(store.get(1), Some(&updated));
    assert_eq!(store.list().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);

    let contents = fs::read_to_string(data_file(&temp)).unwrap();
    assert_eq!(contents, "1|Alice Smith|Management|90000.0\n2|Bob|Sales|60000.0\n");
}

#[test]
fn test_update_nonexistent_id() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    let before_file = fs::read(data_file(&temp)).unwrap();
    let before = store.list().to_vec();

    let err = store.update(42, "Ghost", "None", "1").unwrap_err();

    assert!(matches!(err, PayrollError::NotFound { id: 42 }));
    assert_eq!(store.list().to_vec(), before);
    assert_eq!(fs::read(data_file(&temp)).unwrap(), before_file);
}

#[test]
fn test_update_validates_input() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();

    let err = store.update(1, "", "Eng", "75000").unwrap_err();
    assert!(matches!(err, PayrollError::Validation(_)));

    let err = store.update(1, "Alice", "Eng", "-1").unwrap_err();
    assert!(matches!(err, PayrollError::Validation(_)));

    assert_eq!(store.get(1), Some(&record(1, "Alice", "Eng", 75000.0)));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_one_record() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();
    store.add("Carol", "Eng", "80000").unwrap();

    store.delete(2).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.get(2).is_none());
    let contents = fs::read_to_string(data_file(&temp)).unwrap();
    assert_eq!(contents, "1|Alice|Eng|75000.0\n3|Carol|Eng|80000.0\n");
}

#[test]
fn test_delete_twice_is_not_found() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();

    store.delete(1).unwrap();
    let err = store.delete(1).unwrap_err();

    assert!(matches!(err, PayrollError::NotFound { id: 1 }));
}

#[test]
fn test_delete_last_record_leaves_empty_file() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();

    store.delete(1).unwrap();

    assert_eq!(fs::read_to_string(data_file(&temp)).unwrap(), "");
}

#[test]
fn test_deleted_id_is_not_reused() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();

    store.delete(2).unwrap();
    let carol = store.add("Carol", "Eng", "80000").unwrap();

    assert_eq!(carol.id, 3);
}

// =============================================================================
// Reload Tests
// =============================================================================

#[test]
fn test_reopen_round_trip() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "", "60000.25").unwrap();
    store.add("Carol", "Eng", "0").unwrap();
    let before = store.list().to_vec();
    drop(store);

    let reopened = EmployeeStore::open_path(&data_file(&temp)).unwrap();

    assert_eq!(reopened.list().to_vec(), before);
    assert_eq!(reopened.next_id(), 4);
}

#[test]
fn test_reopen_counter_follows_max_id() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();
    store.add("Carol", "Eng", "80000").unwrap();
    store.delete(1).unwrap();
    drop(store);

    let mut reopened = EmployeeStore::open_path(&data_file(&temp)).unwrap();

    assert_eq!(reopened.next_id(), 4);
    assert_eq!(reopened.add("Dave", "Ops", "1").unwrap().id, 4);
}

#[test]
fn test_load_skips_malformed_lines() {
    let (temp, mut store) = setup_temp_store();
    fs::write(
        data_file(&temp),
        "1|Alice|Eng|75000.0\nnot a record\n7|Bob|Sales\n9|Carol|Eng|80000\nx|Dave|Ops|1\n",
    )
    .unwrap();

    let result = store.reload().unwrap();

    assert_eq!(result.records_loaded, 2);
    assert_eq!(result.lines_skipped, 3);
    assert_eq!(
        store.list().to_vec(),
        vec![record(1, "Alice", "Eng", 75000.0), record(9, "Carol", "Eng", 80000.0)]
    );
    assert_eq!(store.next_id(), 10);
}

#[test]
fn test_open_tolerates_invalid_utf8() {
    let (temp, store) = setup_temp_store();
    drop(store);
    let mut contents = b"1|Alice|Eng|75000.0\n2|Jos".to_vec();
    contents.push(0xE9);
    contents.extend_from_slice(b"|Sales|60000.0\n3|Carol|Eng|1.0\n");
    fs::write(data_file(&temp), contents).unwrap();

    let store = EmployeeStore::open_path(&data_file(&temp)).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(2).map(|r| r.name.as_str()), Some("Jos\u{FFFD}"));
    assert_eq!(store.next_id(), 4);
}

#[test]
fn test_load_skips_out_of_range_salaries() {
    let (temp, mut store) = setup_temp_store();
    fs::write(
        data_file(&temp),
        "1|Alice|Eng|NaN\n2|Bob|Sales|-500\n3|Carol|Ops|inf\n4|Dave|Ops|100\n",
    )
    .unwrap();

    let result = store.reload().unwrap();

    assert_eq!(result.lines_skipped, 3);
    let summary = store.summary();
    assert_eq!(summary.count, 1);
    assert_eq!(summary.total_salary, 100.0);
    assert_eq!(summary.average_salary, 100.0);
}

#[test]
fn test_load_replaces_in_memory_state() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();

    let other = temp.path().join("other.dat");
    fs::write(&other, "5|Zed|Ops|10.0\n").unwrap();
    store.load(&other).unwrap();

    assert_eq!(store.list().to_vec(), vec![record(5, "Zed", "Ops", 10.0)]);
    assert_eq!(store.next_id(), 6);
}

#[test]
fn test_load_unreadable_source_keeps_state() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();

    // A directory opens but cannot be read as a stream
    let err = store.load(temp.path()).unwrap_err();

    assert!(matches!(err, PayrollError::Io(_)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), 2);
}

#[test]
fn test_pipe_in_name_is_lost_on_reload() {
    let (temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob|Robert", "Sales", "60000").unwrap();
    drop(store);

    let reopened = EmployeeStore::open_path(&data_file(&temp)).unwrap();

    assert_eq!(reopened.list().to_vec(), vec![record(1, "Alice", "Eng", 75000.0)]);
}

// =============================================================================
// Snapshot Tests
// =============================================================================

#[test]
fn test_snapshot_is_detached_from_mutations() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();

    let snapshot = store.list();
    store.add("Bob", "Sales", "60000").unwrap();
    store.update(1, "Alicia", "Eng", "1").unwrap();

    assert_eq!(snapshot.to_vec(), vec![record(1, "Alice", "Eng", 75000.0)]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_snapshot_is_restartable() {
    let (_temp, mut store) = setup_temp_store();
    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();

    let snapshot = store.list();
    let first: Vec<u32> = snapshot.iter().map(|r| r.id).collect();
    let second: Vec<u32> = (&snapshot).into_iter().map(|r| r.id).collect();

    assert_eq!(first, vec![1, 2]);
    assert_eq!(first, second);
    assert_eq!(snapshot.get(2).map(|r| r.name.as_str()), Some("Bob"));
}

#[test]
fn test_summary() {
    let (_temp, mut store) = setup_temp_store();
    assert_eq!(store.summary().average_salary, 0.0);

    store.add("Alice", "Eng", "75000").unwrap();
    store.add("Bob", "Sales", "60000").unwrap();

    let summary = store.summary();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_salary, 135000.0);
    assert_eq!(summary.average_salary, 67500.0);
}
