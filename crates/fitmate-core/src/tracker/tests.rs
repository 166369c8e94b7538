//! Tests for the tracker module.

use std::sync::Arc;

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    coach::FallbackGenerator,
    models::{PlanItemRef, UserProfile},
    params::{AddWeight, CreateExercise, CreatePlan, History, Id},
    error::TrackerError,
    session::{SessionResult, SessionStatus, TickOutcome},
};

async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

async fn create_exercise(tracker: &Tracker, name: &str) -> u64 {
    tracker
        .create_exercise(&CreateExercise {
            name: name.to_string(),
            instructions: vec![format!("Do {name}")],
        })
        .await
        .expect("Failed to create exercise")
        .id
}

#[tokio::test]
async fn test_build_creates_nested_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("a").join("b").join("fitmate.db");

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");

    assert!(db_path.exists());
    assert_eq!(tracker.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_resolve_nested_plan_end_to_end() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let squats = create_exercise(&tracker, "Squats").await;
    let lunges = create_exercise(&tracker, "Lunges").await;

    let legs = tracker
        .create_plan(&CreatePlan {
            name: "Legs".to_string(),
            items: vec![PlanItemRef::Exercise(lunges)],
        })
        .await
        .expect("Failed to create plan");
    let warmup = tracker
        .create_plan(&CreatePlan {
            name: "Warmup".to_string(),
            items: vec![
                PlanItemRef::Exercise(squats),
                PlanItemRef::Break,
                PlanItemRef::NestedPlan(legs.id),
            ],
        })
        .await
        .expect("Failed to create plan");

    let resolution = tracker
        .resolve_plan(&Id { id: warmup.id })
        .await
        .expect("Failed to resolve");

    let names: Vec<_> = resolution
        .plan
        .steps
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, ["Squats", "Break Time", "Lunges"]);
    assert!(resolution.warnings.is_empty());
    assert_eq!(resolution.plan.total_minutes(), 3);
}

#[tokio::test]
async fn test_resolve_missing_plan() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let err = tracker.resolve_plan(&Id { id: 99 }).await.unwrap_err();
    assert!(matches!(err, TrackerError::PlanNotFound { id: 99 }));
}

#[tokio::test]
async fn test_start_session_and_log_completion() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.seed_catalog().await.expect("Failed to seed");

    let mut session = tracker
        .start_session(&Id { id: 1 })
        .await
        .expect("Failed to start session");
    let total = session.plan().total_seconds();

    let mut result = None;
    for _ in 0..total {
        if let TickOutcome::Completed(r) = session.tick() {
            result = Some(r);
        }
    }
    let result = result.expect("Session should complete");
    assert_eq!(session.status(), SessionStatus::Completed);

    let record = tracker
        .log_session(1, &result)
        .await
        .expect("Failed to log")
        .expect("Result should be logged");
    assert_eq!(record.kind, result.plan_name);
    assert_eq!(u64::from(record.duration_minutes), total / 60);

    let recent = tracker
        .recent_workouts(&History::default())
        .await
        .expect("Failed to read history");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, record.id);
}

#[tokio::test]
async fn test_log_short_and_empty_sessions() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.seed_catalog().await.expect("Failed to seed");

    let mut session = tracker
        .start_session(&Id { id: 1 })
        .await
        .expect("Failed to start session");
    let empty = session.clone().stop().expect("Stop should emit");
    for _ in 0..30 {
        session.tick();
    }
    let partial = session.stop().expect("Stop should emit");

    assert!(tracker
        .log_session(1, &empty)
        .await
        .expect("Failed to log")
        .is_none());

    let record = tracker
        .log_session(1, &partial)
        .await
        .expect("Failed to log")
        .expect("Partial session should be logged");
    assert_eq!(record.duration_minutes, 1);
}

#[tokio::test]
async fn test_log_session_rejects_unstorable_user() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let result = SessionResult {
        plan_name: "Warmup".to_string(),
        total_elapsed_seconds: 120,
        completed: true,
    };

    let err = tracker.log_session(u64::MAX, &result).await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "user_id"));

    let err = tracker
        .recent_workouts(&History {
            user_id: u64::MAX,
            limit: 10,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_start_session_on_empty_plan() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    // Stored lists can reference rows that no longer exist
    let connection =
        rusqlite::Connection::open(tracker.database_path()).expect("Failed to open database");
    connection
        .execute(
            "INSERT INTO plans (name, item_list) VALUES ('Ghost', '42,P99')",
            [],
        )
        .expect("Failed to insert plan");
    let plan_id = connection.last_insert_rowid() as u64;
    drop(connection);

    let resolution = tracker
        .resolve_plan(&Id { id: plan_id })
        .await
        .expect("Failed to resolve");
    assert!(resolution.plan.is_empty());
    assert_eq!(resolution.warnings.len(), 2);

    let err = tracker.start_session(&Id { id: plan_id }).await.unwrap_err();
    assert!(matches!(err, TrackerError::EmptyPlan { plan_id: id } if id == plan_id));
}

#[tokio::test]
async fn test_weights_round_trip_through_tracker() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .add_weight(&AddWeight {
            user_id: 1,
            weight_kg: 80.0,
            date: Some(date(2024, 1, 1)),
        })
        .await
        .expect("Failed to add weight");
    let latest = tracker
        .add_weight(&AddWeight {
            user_id: 1,
            weight_kg: 79.2,
            date: Some(date(2024, 1, 8)),
        })
        .await
        .expect("Failed to add weight");

    let weights = tracker
        .recent_weights(&History::default())
        .await
        .expect("Failed to list weights");
    assert_eq!(weights.len(), 2);
    assert_eq!(weights[0], latest);

    let err = tracker
        .add_weight(&AddWeight {
            user_id: 1,
            weight_kg: -3.0,
            date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_generate_plan_is_saved() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let profile = UserProfile {
        age: 42,
        gender: "Male".to_string(),
        height_cm: 180.0,
        current_weight_kg: 90.0,
        goal_weight_kg: 82.0,
        goal_time_weeks: 16,
        activity_level: "Light".to_string(),
        primary_goal: "Weight loss".to_string(),
        diet_preference: "None".to_string(),
        budget_level: "Low".to_string(),
        health_conditions: vec!["Knee pain".to_string()],
    };

    let plan = tracker
        .generate_plan(Arc::new(FallbackGenerator), profile)
        .await
        .expect("Failed to generate");
    assert!(!plan.ai_generated);

    let saved = tracker
        .list_generated_plans()
        .await
        .expect("Failed to list plans");
    assert_eq!(saved, vec![plan]);
}
