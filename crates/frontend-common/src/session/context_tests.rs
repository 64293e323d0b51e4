use std::rc::Rc;

use serde_json::json;
use yew::prelude::*;

use crate::error::SessionError;
use crate::storage;

use super::context::{display_name, SessionAction, SessionState};

fn reduce(state: SessionState, action: SessionAction) -> SessionState {
    (*Rc::new(state).reduce(action)).clone()
}

#[test]
fn profile_load_sets_user_and_mirror() {
    let profile = json!({"id": "u1", "name": "Ann"});

    let state = reduce(
        SessionState::default(),
        SessionAction::ProfileLoaded(profile.clone()),
    );

    assert_eq!(state.user, Some(profile.clone()));
    assert_eq!(state.error, None);
    assert!(!state.is_loading);
    assert_eq!(storage::load_user(), Some(profile.clone()));
    assert_eq!(storage::raw_user(), Some(profile.to_string()));
}

#[test]
fn profile_failure_clears_user_and_mirror_and_records_error() {
    // A stale mirror from an earlier session must not survive the failure.
    storage::store_user(&json!({"id": "stale"}));

    let state = reduce(
        SessionState::default(),
        SessionAction::ProfileFailed(SessionError::ProfileStatus(401)),
    );

    assert_eq!(state.user, None);
    assert_eq!(state.error, Some(SessionError::ProfileStatus(401)));
    assert!(!state.is_loading);
    assert_eq!(storage::load_user(), None);
}

#[test]
fn repeated_load_overwrites_the_mirror() {
    let profile = json!({"id": "u1", "name": "Ann"});

    let state = reduce(
        SessionState::default(),
        SessionAction::ProfileLoaded(profile.clone()),
    );
    let first_mirror = storage::raw_user();
    let state = reduce(state, SessionAction::ProfileLoaded(profile.clone()));

    assert_eq!(state.user, Some(profile));
    assert_eq!(storage::raw_user(), first_mirror);
}

#[test]
fn successful_load_clears_a_recorded_error() {
    let errored = reduce(
        SessionState::default(),
        SessionAction::ProfileFailed(SessionError::Network("offline".into())),
    );
    assert!(errored.error.is_some());

    let recovered = reduce(
        errored,
        SessionAction::ProfileLoaded(json!({"id": "u1"})),
    );

    assert_eq!(recovered.error, None);
    assert_eq!(recovered.user, Some(json!({"id": "u1"})));
}

#[test]
fn storage_change_updates_user_without_writing_back() {
    let state = reduce(
        SessionState::default(),
        SessionAction::StorageChanged(Some(json!({"id": "u2"}))),
    );

    assert_eq!(state.user, Some(json!({"id": "u2"})));
    // The value came from the mirror; the reducer must not echo it back.
    assert_eq!(storage::load_user(), None);
}

#[test]
fn storage_removal_signs_the_user_out() {
    let state = reduce(
        SessionState::default(),
        SessionAction::ProfileLoaded(json!({"id": "u1"})),
    );
    let state = reduce(state, SessionAction::StorageChanged(None));

    assert_eq!(state.user, None);
}

#[test]
fn refresh_failure_keeps_the_user_but_records_the_error() {
    let state = reduce(
        SessionState::default(),
        SessionAction::ProfileLoaded(json!({"id": "u1"})),
    );
    let state = reduce(
        state,
        SessionAction::RefreshFailed(SessionError::RefreshStatus(500)),
    );

    assert_eq!(state.user, Some(json!({"id": "u1"})));
    assert_eq!(state.error, Some(SessionError::RefreshStatus(500)));
    // The mirror is untouched by refresh outcomes.
    assert_eq!(storage::load_user(), Some(json!({"id": "u1"})));
}

#[test]
fn display_name_reads_the_name_field() {
    assert_eq!(
        display_name(&json!({"id": "u1", "name": "Ann"})),
        Some("Ann".to_owned())
    );
    assert_eq!(display_name(&json!({"id": "u1"})), None);
    assert_eq!(display_name(&json!({"name": 42})), None);
}
