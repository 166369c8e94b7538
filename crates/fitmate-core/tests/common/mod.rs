use fitmate_core::{Database, Tracker, TrackerBuilder};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
