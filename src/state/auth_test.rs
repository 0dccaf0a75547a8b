use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::ClientConfig;
use crate::net::types::Role;
use crate::test_support::RejectingStorage;
use crate::util::storage::MemoryStorage;

fn keys() -> StorageKeys {
    ClientConfig::default().storage_keys
}

fn make_user() -> User {
    User {
        id: 1,
        email: "t@example.com".to_owned(),
        full_name: "Terry Teacher".to_owned(),
        role: Role::Teacher,
        is_verified: true,
        ai_requests_used: 0,
        ai_requests_limit: 50,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn should_redirect_unauth_when_not_loading_and_no_session() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { token: Some("t".to_owned()), user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = AuthState { token: Some("t".to_owned()), user: Some(make_user()), loading: false };
    assert!(!should_redirect_unauth(&state));
    assert!(state.is_teacher());
}

// =============================================================
// Memory + storage agreement
// =============================================================

#[test]
fn set_auth_then_storage_holds_same_token() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = MemoryStorage::default();
    set_auth(&cell, &storage, &keys(), "tok-123".to_owned(), make_user()).unwrap();

    assert_eq!(storage.get("token").as_deref(), Some("tok-123"));
    assert_eq!(cell.borrow().token.as_deref(), Some("tok-123"));
    assert_eq!(cell.borrow().user.as_ref().map(|u| u.id), Some(1));
}

#[test]
fn logout_then_storage_holds_no_token() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = MemoryStorage::default();
    set_auth(&cell, &storage, &keys(), "tok-123".to_owned(), make_user()).unwrap();
    logout(&cell, &storage, &keys()).unwrap();

    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.get("auth-storage"), None);
    assert_eq!(*cell.borrow(), AuthState::default());
}

#[test]
fn update_user_keeps_token_and_rewrites_snapshot() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = MemoryStorage::default();
    set_auth(&cell, &storage, &keys(), "tok".to_owned(), make_user()).unwrap();

    let mut verified = make_user();
    verified.full_name = "Terry T.".to_owned();
    update_user(&cell, &storage, &keys(), verified).unwrap();

    let restored = rehydrate(&storage, &keys());
    assert_eq!(restored.token.as_deref(), Some("tok"));
    assert_eq!(restored.user.map(|u| u.full_name).as_deref(), Some("Terry T."));
}

// =============================================================
// Storage failures keep memory in agreement
// =============================================================

fn memory_token(cell: &Rc<RefCell<AuthState>>) -> Option<String> {
    cell.borrow().token.clone()
}

#[test]
fn set_auth_rejected_leaves_memory_signed_out() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = RejectingStorage::locked();

    let result = set_auth(&cell, &storage, &keys(), "tok".to_owned(), make_user());

    assert_eq!(result, Err(StorageError::WriteRejected { key: "token".to_owned() }));
    assert_eq!(memory_token(&cell), storage.get("token"));
    assert_eq!(*cell.borrow(), AuthState::default());
}

#[test]
fn set_auth_snapshot_rejected_rolls_back_token() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = RejectingStorage::default().rejecting_key("auth-storage");

    assert!(set_auth(&cell, &storage, &keys(), "tok".to_owned(), make_user()).is_err());

    assert_eq!(storage.get("token"), None);
    assert_eq!(memory_token(&cell), None);
}

#[test]
fn set_auth_snapshot_rejected_restores_previous_token() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = RejectingStorage::default();
    set_auth(&cell, &storage, &keys(), "old".to_owned(), make_user()).unwrap();

    let storage = storage.rejecting_key("auth-storage");
    assert!(set_auth(&cell, &storage, &keys(), "new".to_owned(), make_user()).is_err());

    assert_eq!(storage.get("token").as_deref(), Some("old"));
    assert_eq!(memory_token(&cell).as_deref(), Some("old"));
    assert_eq!(rehydrate(&storage, &keys()), *cell.borrow());
}

#[test]
fn update_user_rejected_keeps_previous_user() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = RejectingStorage::default();
    set_auth(&cell, &storage, &keys(), "tok".to_owned(), make_user()).unwrap();

    let storage = storage.rejecting_key("auth-storage");
    let mut renamed = make_user();
    renamed.full_name = "Renamed".to_owned();
    assert!(update_user(&cell, &storage, &keys(), renamed).is_err());

    assert_eq!(cell.borrow().user.as_ref().map(|u| u.full_name.as_str()), Some("Terry Teacher"));
    assert_eq!(rehydrate(&storage, &keys()), *cell.borrow());
}

#[test]
fn logout_blanks_token_when_removal_fails() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = RejectingStorage::default();
    set_auth(&cell, &storage, &keys(), "tok".to_owned(), make_user()).unwrap();

    let storage = storage.rejecting_removals();
    logout(&cell, &storage, &keys()).unwrap();

    assert_eq!(storage.get("token").as_deref(), Some(""));
    assert_eq!(*cell.borrow(), AuthState::default());
    assert_eq!(rehydrate(&storage, &keys()), AuthState::default());
}

#[test]
fn logout_on_locked_storage_keeps_session_in_memory() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = MemoryStorage::default();
    set_auth(&cell, &storage, &keys(), "tok".to_owned(), make_user()).unwrap();

    let locked = RejectingStorage { inner: storage, ..RejectingStorage::locked() };
    assert!(logout(&cell, &locked, &keys()).is_err());

    assert_eq!(memory_token(&cell), locked.get("token"));
    assert!(cell.borrow().is_authenticated());
}

// =============================================================
// Rehydrate
// =============================================================

#[test]
fn rehydrate_restores_token_and_user() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = MemoryStorage::default();
    set_auth(&cell, &storage, &keys(), "tok".to_owned(), make_user()).unwrap();

    let restored = rehydrate(&storage, &keys());
    assert_eq!(restored, *cell.borrow());
}

#[test]
fn rehydrate_without_token_is_signed_out() {
    let storage = MemoryStorage::default();
    assert_eq!(rehydrate(&storage, &keys()), AuthState::default());
}

#[test]
fn rehydrate_with_mismatched_snapshot_refetches_user() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    let storage = MemoryStorage::default();
    set_auth(&cell, &storage, &keys(), "old".to_owned(), make_user()).unwrap();
    storage.set("token", "new").unwrap();

    let restored = rehydrate(&storage, &keys());
    assert_eq!(restored.token.as_deref(), Some("new"));
    assert!(restored.user.is_none());
    assert!(restored.loading);
}

#[test]
fn rehydrate_with_corrupt_snapshot_refetches_user() {
    let storage = MemoryStorage::default();
    storage.set("token", "tok").unwrap();
    storage.set("auth-storage", "{broken").unwrap();

    let restored = rehydrate(&storage, &keys());
    assert_eq!(restored.token.as_deref(), Some("tok"));
    assert!(restored.loading);
}
