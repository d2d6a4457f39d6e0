use super::*;
use shared::domain::ProblemId;

fn problem(id: i64, name: &str, topic: &str, level: &str, platform: &str) -> Problem {
    Problem {
        id: ProblemId::Number(id),
        name: name.to_string(),
        topic: topic.to_string(),
        level: level.to_string(),
        link: format!("http://example.com/{id}"),
        platform: platform.to_string(),
    }
}

fn loaded(problems: Vec<Problem>) -> ViewState {
    let mut state = ViewState::new();
    assert_eq!(state.apply(Action::Mounted), Some(Effect::LoadAll));
    state.apply(Action::ProblemsLoaded(problems));
    state
}

fn numbered(count: i64) -> Vec<Problem> {
    (1..=count)
        .map(|id| problem(id, &format!("Problem {id}"), "Array", "Easy", "LeetCode"))
        .collect()
}

fn fill_draft(state: &mut ViewState, draft: &ProblemDraft) {
    for field in DraftField::ALL {
        state.apply(Action::DraftEdited {
            field,
            value: draft.field(field).to_string(),
        });
    }
}

fn valid_draft() -> ProblemDraft {
    ProblemDraft {
        name: "A".into(),
        topic: "B".into(),
        level: "C".into(),
        link: "http://d".into(),
        platform: "E".into(),
    }
}

#[test]
fn load_replaces_full_and_filtered_lists() {
    let state = loaded(numbered(3));
    assert_eq!(state.problems.len(), 3);
    assert_eq!(state.filtered, state.problems);
    assert_eq!(state.page, 0);
}

#[test]
fn failed_load_leaves_catalog_empty() {
    let mut state = ViewState::new();
    state.apply(Action::Mounted);
    let effect = state.apply(Action::LoadFailed {
        reason: "connection refused".into(),
    });
    assert_eq!(effect, None);
    assert!(state.problems.is_empty());
    assert!(state.visible_page().is_empty());
    assert_eq!(state.page_count(), 0);
}

#[test]
fn name_search_narrows_listing() {
    let mut state = loaded(vec![
        problem(1, "Two Sum", "Array", "Easy", "LeetCode"),
        problem(2, "Word Ladder", "Graph", "Hard", "LeetCode"),
    ]);
    state.apply(Action::SearchChanged {
        field: SearchField::Name,
        value: "two".into(),
    });
    assert_eq!(state.filtered.len(), 1);
    assert_eq!(state.filtered[0].name, "Two Sum");
}

#[test]
fn any_search_edit_returns_to_first_page() {
    for field in SearchField::ALL {
        let mut state = loaded(numbered(30));
        state.apply(Action::PageSelected(3));
        assert_eq!(state.page, 3);

        state.apply(Action::SearchChanged {
            field,
            value: String::new(),
        });
        assert_eq!(state.page, 0, "field {field:?}");
    }
}

#[test]
fn clearing_a_search_restores_full_list() {
    let mut state = loaded(numbered(10));
    state.apply(Action::SearchChanged {
        field: SearchField::Name,
        value: "problem 1".into(),
    });
    assert_eq!(state.filtered.len(), 2);
    state.apply(Action::SearchChanged {
        field: SearchField::Name,
        value: String::new(),
    });
    assert_eq!(state.filtered.len(), 10);
}

#[test]
fn nine_problems_paginate_over_two_pages() {
    let mut state = loaded(numbered(9));
    assert_eq!(state.page_count(), 2);
    assert_eq!(state.visible_page().len(), 8);
    assert_eq!(state.visible_page()[0].id, ProblemId::Number(1));

    state.apply(Action::PageSelected(1));
    assert_eq!(state.visible_page().len(), 1);
    assert_eq!(state.visible_page()[0].id, ProblemId::Number(9));
}

#[test]
fn selecting_page_past_the_end_shows_nothing() {
    let mut state = loaded(numbered(9));
    state.apply(Action::PageSelected(5));
    assert_eq!(state.page, 5);
    assert!(state.visible_page().is_empty());
}

#[test]
fn far_out_of_range_page_is_empty_and_renders_controls() {
    let mut state = loaded(numbered(60));
    for page in [1_usize << 62, usize::MAX] {
        state.apply(Action::PageSelected(page));
        assert!(state.visible_page().is_empty());
        assert_eq!(state.page_count(), 8);
        assert!(!state.page_controls().is_empty());
    }
}

#[test]
fn submitting_valid_draft_requests_creation() {
    let mut state = loaded(numbered(2));
    state.apply(Action::OpenCreate);
    fill_draft(&mut state, &valid_draft());

    let effect = state.apply(Action::SubmitDraft);
    assert_eq!(effect, Some(Effect::Create(valid_draft())));
    assert_eq!(state.create_stage, CreateStage::Submitting);
}

#[test]
fn created_problem_is_appended_and_form_resets() {
    let mut state = loaded(numbered(2));
    state.apply(Action::OpenCreate);
    fill_draft(&mut state, &valid_draft());
    state.apply(Action::SubmitDraft);

    let created = valid_draft().with_id(ProblemId::Number(10));
    state.apply(Action::ProblemCreated(created.clone()));

    assert_eq!(state.problems.len(), 3);
    assert_eq!(state.problems.last(), Some(&created));
    assert_eq!(state.create_stage, CreateStage::Closed);
    assert!(!state.is_create_open());
    assert_eq!(state.draft, ProblemDraft::default());
}

#[test]
fn failed_create_keeps_form_open_with_entered_values() {
    let mut state = loaded(numbered(2));
    state.apply(Action::OpenCreate);
    fill_draft(&mut state, &valid_draft());
    state.apply(Action::SubmitDraft);

    state.apply(Action::CreateFailed {
        reason: "500 Internal Server Error".into(),
    });

    assert_eq!(state.problems.len(), 2);
    assert_eq!(state.create_stage, CreateStage::Editing);
    assert_eq!(state.draft, valid_draft());
}

// The new problem lands in the visible list even when it fails the active
// criteria. Kept on purpose; flip this test if the append is ever filtered.
#[test]
fn created_problem_bypasses_active_criteria() {
    let mut state = loaded(vec![problem(1, "Two Sum", "Array", "Easy", "LeetCode")]);
    state.apply(Action::SearchChanged {
        field: SearchField::Name,
        value: "two".into(),
    });
    state.apply(Action::OpenCreate);
    fill_draft(&mut state, &valid_draft());
    state.apply(Action::SubmitDraft);
    state.apply(Action::ProblemCreated(
        valid_draft().with_id(ProblemId::Number(10)),
    ));

    assert!(!state.criteria.matches(&state.filtered[1]));
    assert_eq!(state.filtered.len(), 2);
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut state = loaded(Vec::new());
    state.apply(Action::OpenCreate);
    fill_draft(&mut state, &valid_draft());
    assert!(state.apply(Action::SubmitDraft).is_some());
    assert_eq!(state.apply(Action::SubmitDraft), None);
}

#[test]
fn reopening_form_during_pending_create_blocks_resubmit() {
    let mut state = loaded(Vec::new());
    state.apply(Action::OpenCreate);
    fill_draft(&mut state, &valid_draft());
    assert!(state.apply(Action::SubmitDraft).is_some());

    state.apply(Action::CloseCreate);
    assert!(!state.is_create_open());
    assert!(state.create_in_flight);

    state.apply(Action::OpenCreate);
    assert_eq!(state.create_stage, CreateStage::Submitting);
    assert_eq!(state.apply(Action::SubmitDraft), None);

    state.apply(Action::ProblemCreated(
        valid_draft().with_id(ProblemId::Number(10)),
    ));
    assert!(!state.create_in_flight);
    assert_eq!(state.create_stage, CreateStage::Closed);
    assert_eq!(state.problems.len(), 1);
}

#[test]
fn late_failure_after_close_allows_new_submit() {
    let mut state = loaded(Vec::new());
    state.apply(Action::OpenCreate);
    fill_draft(&mut state, &valid_draft());
    state.apply(Action::SubmitDraft);
    state.apply(Action::CloseCreate);

    state.apply(Action::CreateFailed {
        reason: "connection reset".into(),
    });
    assert!(!state.create_in_flight);
    assert_eq!(state.create_stage, CreateStage::Closed);

    state.apply(Action::OpenCreate);
    assert_eq!(state.create_stage, CreateStage::Editing);
    assert_eq!(state.draft, valid_draft());
    assert_eq!(
        state.apply(Action::SubmitDraft),
        Some(Effect::Create(valid_draft()))
    );
}

#[test]
fn incomplete_draft_is_held_back() {
    let mut state = loaded(Vec::new());
    state.apply(Action::OpenCreate);
    state.apply(Action::DraftEdited {
        field: DraftField::Name,
        value: "A".into(),
    });

    assert_eq!(state.apply(Action::SubmitDraft), None);
    assert_eq!(state.create_stage, CreateStage::Editing);
    assert_eq!(
        state.draft_error,
        Some(DraftError::MissingField(DraftField::Topic))
    );

    state.apply(Action::DraftEdited {
        field: DraftField::Topic,
        value: "B".into(),
    });
    assert_eq!(state.draft_error, None);
}

#[test]
fn submit_without_open_form_does_nothing() {
    let mut state = loaded(Vec::new());
    fill_draft(&mut state, &valid_draft());
    assert_eq!(state.apply(Action::SubmitDraft), None);
    assert_eq!(state.create_stage, CreateStage::Closed);
}

#[test]
fn closing_form_keeps_draft_for_next_open() {
    let mut state = loaded(Vec::new());
    state.apply(Action::OpenCreate);
    state.apply(Action::DraftEdited {
        field: DraftField::Name,
        value: "Half typed".into(),
    });
    state.apply(Action::CloseCreate);
    state.apply(Action::OpenCreate);
    assert_eq!(state.draft.name, "Half typed");
}

#[test]
fn random_pick_opens_revision_panel() {
    let mut state = loaded(numbered(3));
    assert_eq!(state.apply(Action::ReviseRequested), Some(Effect::FetchRandom));

    let pick = problem(2, "Word Ladder", "Graph", "Hard", "LeetCode");
    state.apply(Action::RandomFetched(pick.clone()));
    assert_eq!(state.open_revision(), Some(&pick));

    state.apply(Action::CloseRevision);
    assert!(!state.revision_open);
    assert_eq!(state.open_revision(), None);
    assert_eq!(state.revision.as_ref(), Some(&pick));
}

#[test]
fn failed_random_pick_keeps_panel_closed() {
    let mut state = loaded(numbered(3));
    state.apply(Action::ReviseRequested);
    state.apply(Action::RandomFailed {
        reason: "timed out".into(),
    });
    assert!(!state.revision_open);
    assert_eq!(state.revision, None);
}

#[test]
fn view_state_round_trips_through_json() {
    let mut state = loaded(numbered(9));
    state.apply(Action::PageSelected(1));
    state.apply(Action::OpenCreate);
    state.apply(Action::SubmitDraft);

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: ViewState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);
}
