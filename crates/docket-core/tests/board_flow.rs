use chrono::{DateTime, Duration, TimeZone, Utc};
use docket_core::config::DraftDefaults;
use docket_core::filter::{CompletionFilter, Criteria, apply};
use docket_core::store::TaskBoard;
use docket_core::task::{Label, Priority};

fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 9, 9, 30, 0)
        .single()
        .expect("fixture time")
}

#[test]
fn empty_title_add_is_rejected() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "   ".to_string();
    draft.description = "never stored".to_string();

    assert!(board.add(&draft, fixture_now()).is_none());
    assert!(board.tasks().is_empty());
}

#[test]
fn add_yields_incomplete_task() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "Buy milk".to_string();

    let task = board
        .add(&draft, fixture_now())
        .expect("add should succeed");

    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed());
    assert_eq!(task.completed_at, None);
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0], task);
}

#[test]
fn completing_twice_keeps_first_timestamp() {
    let now = fixture_now();
    let later = now + Duration::hours(2);

    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "Water plants".to_string();
    let task = board.add(&draft, now).expect("add should succeed");

    assert!(board.complete(task.id, now));
    assert!(!board.complete(task.id, later));

    let stored = board.get(task.id).expect("task should still exist");
    assert_eq!(stored.completed_at, Some(now));
}

#[test]
fn complete_and_remove_of_missing_id_are_noops() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "Only task".to_string();
    board.add(&draft, fixture_now()).expect("add should succeed");

    let mut ghost = board.blank_draft();
    ghost.title = "Ghost".to_string();

    assert!(!board.complete(99, fixture_now()));
    assert!(!board.remove(99));
    assert!(!board.update(99, &ghost));
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].title, "Only task");
}

#[test]
fn remove_leaves_other_tasks_untouched() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    for title in ["first", "second", "third"] {
        let mut draft = board.blank_draft();
        draft.title = title.to_string();
        board.add(&draft, fixture_now()).expect("add should succeed");
    }

    let snapshot: Vec<_> = board.tasks().to_vec();
    assert!(board.remove(2));

    let ids: Vec<u64> = board.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(board.tasks()[0], snapshot[0]);
    assert_eq!(board.tasks()[1], snapshot[2]);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "first".to_string();
    board.add(&draft, fixture_now()).expect("add should succeed");

    draft = board.blank_draft();
    draft.title = "second".to_string();
    let second = board.add(&draft, fixture_now()).expect("add should succeed");
    assert!(board.remove(second.id));

    draft = board.blank_draft();
    draft.title = "third".to_string();
    let third = board.add(&draft, fixture_now()).expect("add should succeed");

    assert_eq!(third.id, 3);
    assert!(board.tasks().iter().all(|task| task.id != second.id));
}

#[test]
fn edit_updates_only_mutable_fields() {
    let now = fixture_now();
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "Pay rent".to_string();
    draft.description = "before the 5th".to_string();
    let task = board.add(&draft, now).expect("add should succeed");
    assert!(board.complete(task.id, now));

    let mut edit = board.blank_draft();
    edit.begin_edit(board.get(task.id).expect("task should exist"));
    edit.description = "before the 1st".to_string();
    board
        .commit(&mut edit, now + Duration::days(1))
        .expect("commit should update");

    let stored = board.get(task.id).expect("task should still exist");
    assert_eq!(stored.id, task.id);
    assert_eq!(stored.title, "Pay rent");
    assert_eq!(stored.description, "before the 1st");
    assert_eq!(stored.added_at, task.added_at);
    assert_eq!(stored.completed_at, Some(now));
    assert!(!edit.is_editing());
    assert!(edit.title.is_empty());
}

#[test]
fn commit_routes_between_add_and_update() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "New task".to_string();

    let added = board
        .commit(&mut draft, fixture_now())
        .expect("commit without edit marker should add");
    assert_eq!(board.tasks().len(), 1);
    assert!(draft.title.is_empty());

    draft.begin_edit(board.get(added.id).expect("task should exist"));
    draft.title = "Renamed task".to_string();
    board
        .commit(&mut draft, fixture_now())
        .expect("commit with edit marker should update");

    assert_eq!(board.tasks().len(), 1);
    assert_eq!(
        board.get(added.id).expect("task should exist").title,
        "Renamed task"
    );
}

#[test]
fn rejected_commit_keeps_draft() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.description = "typed before the title".to_string();

    assert!(board.commit(&mut draft, fixture_now()).is_none());
    assert_eq!(draft.description, "typed before the title");
    assert!(board.tasks().is_empty());
}

#[test]
fn cancel_edit_reverts_draft_without_touching_store() {
    let defaults = DraftDefaults::default();
    let mut board = TaskBoard::new(defaults);
    let mut draft = board.blank_draft();
    draft.title = "Stable title".to_string();
    let task = board.add(&draft, fixture_now()).expect("add should succeed");

    let mut edit = board.blank_draft();
    edit.begin_edit(board.get(task.id).expect("task should exist"));
    edit.title = "Abandoned rename".to_string();
    edit.cancel_edit(defaults);

    assert!(!edit.is_editing());
    assert!(edit.title.is_empty());
    assert_eq!(
        board.get(task.id).expect("task should exist").title,
        "Stable title"
    );
}

#[test]
fn report_scenario_filters_by_label_and_completion() {
    let mut board = TaskBoard::new(DraftDefaults::default());

    let mut draft = board.blank_draft();
    draft.title = "Write report".to_string();
    draft.priority = Priority::High;
    draft.label = Label::Work;
    let report = board.add(&draft, fixture_now()).expect("add should succeed");

    draft = board.blank_draft();
    draft.title = "Read book".to_string();
    draft.priority = Priority::Low;
    draft.label = Label::Personal;
    board.add(&draft, fixture_now()).expect("add should succeed");

    let work_only = apply(
        board.tasks(),
        &Criteria {
            label: Some(Label::Work),
            ..Criteria::default()
        },
    );
    assert_eq!(work_only.len(), 1);
    assert_eq!(work_only[0].id, report.id);

    assert!(board.complete(report.id, fixture_now()));

    let completed_only = apply(
        board.tasks(),
        &Criteria {
            completion: CompletionFilter::Completed,
            ..Criteria::default()
        },
    );
    assert_eq!(completed_only.len(), 1);
    assert_eq!(completed_only[0].id, report.id);
    assert!(completed_only[0].completed_at.is_some());
}

#[test]
fn completed_at_serializes_as_null_until_completion() {
    let mut board = TaskBoard::new(DraftDefaults::default());
    let mut draft = board.blank_draft();
    draft.title = "Ship release".to_string();
    let task = board.add(&draft, fixture_now()).expect("add should succeed");

    let value = serde_json::to_value(board.get(task.id).expect("task should exist"))
        .expect("task should serialize");
    assert!(value["completed_at"].is_null());
    assert_eq!(value["title"], "Ship release");

    assert!(board.complete(task.id, fixture_now()));
    let value = serde_json::to_value(board.get(task.id).expect("task should exist"))
        .expect("task should serialize");
    assert!(value["completed_at"].is_string());
}
