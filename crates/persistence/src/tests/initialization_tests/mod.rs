// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;

#[test]
fn test_in_memory_database_initializes() {
    let result = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    first.create_club("Harbour United").unwrap();

    assert_eq!(first.list_clubs().unwrap().len(), 1);
    assert!(second.list_clubs().unwrap().is_empty());
}

#[test]
fn test_file_database_initializes_and_reopens() {
    let dir: std::path::PathBuf = std::env::temp_dir().join(format!(
        "matchday_persistence_test_{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path: std::path::PathBuf = dir.join("reopen.db");
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence.create_club("Harbour United").unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.list_clubs().unwrap().len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}
