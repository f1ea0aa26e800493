// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{Recorder, create_test_today};
use crate::{Persistence, PersistenceError};
use warden::State;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_keys_are_enforced() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_fresh_database_loads_empty_state() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let state: State = persistence.load_state(create_test_today()).unwrap();

    assert_eq!(state, State::new());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut recorder: Recorder = Recorder::new();
    recorder.create_department("Kitchen");
    let mut other: Persistence = Persistence::new_in_memory().unwrap();

    let mine: State = recorder.persistence.load_state(create_test_today()).unwrap();
    let theirs: State = other.load_state(create_test_today()).unwrap();

    assert_eq!(mine.departments.len(), 1);
    assert!(theirs.departments.is_empty());
}

#[test]
fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!("warden-reopen-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let expected: State = {
        let mut recorder: Recorder = Recorder::new();
        recorder.persistence = Persistence::new_with_file(&path).unwrap();
        recorder.create_department("Security");
        recorder.state
    };

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let loaded: State = reopened.load_state(create_test_today()).unwrap();
    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }

    assert_eq!(loaded, expected);
}
