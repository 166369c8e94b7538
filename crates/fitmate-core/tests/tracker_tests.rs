mod common;

use common::create_test_tracker;
use fitmate_core::{
    models::PlanItemRef,
    params::{CreateExercise, CreatePlan, History, Id},
    ResolveWarning, SessionStatus, TickOutcome, TrackerError,
};

#[tokio::test]
async fn test_seeded_plan_runs_to_completion() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.seed_catalog().await.expect("Failed to seed");

    let plans = tracker.list_plans().await.expect("Failed to list plans");
    let warmup = plans
        .iter()
        .find(|p| p.name == "Warmup")
        .expect("Warmup plan missing");

    let mut session = tracker
        .start_session(&Id { id: warmup.id })
        .await
        .expect("Failed to start");
    assert_eq!(session.plan().steps.len(), 4);

    let mut completions = Vec::new();
    let mut advances = 0;
    for _ in 0..400 {
        match session.tick() {
            TickOutcome::Completed(result) => completions.push(result),
            TickOutcome::StepAdvanced { .. } => advances += 1,
            _ => {}
        }
    }

    assert_eq!(advances, 3);
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].total_elapsed_seconds, 240);
    assert_eq!(session.status(), SessionStatus::Completed);

    let record = tracker
        .log_session(1, &completions[0])
        .await
        .expect("Failed to log")
        .expect("Completed session should be logged");
    assert_eq!(record.kind, "Warmup");
    assert_eq!(record.duration_minutes, 4);
    assert!((20..=40).contains(&record.calories));

    let dates = tracker.activity_dates(1).await.expect("Failed to query");
    assert!(dates.contains(&record.date));
}

#[tokio::test]
async fn test_cycle_is_reported_not_fatal() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let squats = tracker
        .create_exercise(&CreateExercise {
            name: "Squats".to_string(),
            instructions: vec![],
        })
        .await
        .expect("Failed to create exercise");
    let first = tracker
        .create_plan(&CreatePlan {
            name: "First".to_string(),
            items: vec![PlanItemRef::Exercise(squats.id)],
        })
        .await
        .expect("Failed to create plan");
    let second = tracker
        .create_plan(&CreatePlan {
            name: "Second".to_string(),
            items: vec![PlanItemRef::Break, PlanItemRef::NestedPlan(first.id)],
        })
        .await
        .expect("Failed to create plan");

    // Point the first plan back at the second to close the loop
    let connection =
        rusqlite::Connection::open(tracker.database_path()).expect("Failed to open database");
    connection
        .execute(
            "UPDATE plans SET item_list = ?1 WHERE id = ?2",
            rusqlite::params![format!("{},P{}", squats.id, second.id), first.id as i64],
        )
        .expect("Failed to update plan");
    drop(connection);

    let resolution = tracker
        .resolve_plan(&Id { id: first.id })
        .await
        .expect("Failed to resolve");

    let names: Vec<_> = resolution
        .plan
        .steps
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, ["Squats", "Break Time"]);
    assert_eq!(
        resolution.warnings,
        [ResolveWarning::CycleDetected {
            plan_id: second.id,
            nested_plan_id: first.id,
        }]
    );
}

#[tokio::test]
async fn test_deleted_nested_plan_is_reported_missing() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let squats = tracker
        .create_exercise(&CreateExercise {
            name: "Squats".to_string(),
            instructions: vec![],
        })
        .await
        .expect("Failed to create exercise");
    let legs = tracker
        .create_plan(&CreatePlan {
            name: "Legs".to_string(),
            items: vec![PlanItemRef::Exercise(squats.id), PlanItemRef::Break],
        })
        .await
        .expect("Failed to create plan");
    let full = tracker
        .create_plan(&CreatePlan {
            name: "Full Body".to_string(),
            items: vec![
                PlanItemRef::Exercise(squats.id),
                PlanItemRef::NestedPlan(legs.id),
            ],
        })
        .await
        .expect("Failed to create plan");

    tracker
        .delete_plan(&Id { id: legs.id })
        .await
        .expect("Failed to delete plan");

    let resolution = tracker
        .resolve_plan(&Id { id: full.id })
        .await
        .expect("Failed to resolve");
    assert_eq!(resolution.plan.steps.len(), 1);
    assert_eq!(resolution.plan.steps[0].name, "Squats");
    assert_eq!(
        resolution.warnings,
        [ResolveWarning::MissingPlan {
            plan_id: full.id,
            nested_plan_id: legs.id,
        }]
    );

    let err = tracker
        .resolve_plan(&Id { id: legs.id })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::PlanNotFound { id } if id == legs.id));
}

#[tokio::test]
async fn test_history_is_per_user() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.seed_catalog().await.expect("Failed to seed");

    for user_id in [1, 2, 2] {
        let mut session = tracker
            .start_session(&Id { id: 1 })
            .await
            .expect("Failed to start");
        for _ in 0..90 {
            session.tick();
        }
        let result = session.stop().expect("Stop should emit");
        tracker
            .log_session(user_id, &result)
            .await
            .expect("Failed to log");
    }

    let first_user = tracker
        .recent_workouts(&History {
            user_id: 1,
            limit: 10,
        })
        .await
        .expect("Failed to query");
    let second_user = tracker
        .daily_totals(&History {
            user_id: 2,
            limit: 10,
        })
        .await
        .expect("Failed to query");

    assert_eq!(first_user.len(), 1);
    assert_eq!(first_user[0].duration_minutes, 1);
    assert_eq!(second_user.len(), 1);
    assert_eq!(second_user[0].duration_minutes, 2);
}
