use super::*;

fn alice() -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), handle: "@alice".to_owned(), avatar_url: None }
}

#[test]
fn default_session_is_pending() {
    let session = AuthSession::default();
    assert!(session.loading);
    assert!(session.user.is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn resolved_with_user_is_signed_in() {
    let session = AuthSession::resolved(Some(alice()));
    assert!(!session.loading);
    assert!(session.is_signed_in());
    assert_eq!(session.display_name(), Some("Alice"));
}

#[test]
fn signed_out_is_resolved_without_user() {
    let session = AuthSession::signed_out();
    assert!(!session.loading);
    assert!(!session.is_signed_in());
    assert_eq!(session.display_name(), None);
}

#[test]
fn loading_session_with_stale_user_is_not_signed_in() {
    let session = AuthSession { user: Some(alice()), loading: true };
    assert!(!session.is_signed_in());
}

#[test]
fn after_fetch_resolves_on_answer() {
    let signed_in = AuthSession::pending().after_fetch(Ok(Some(alice())));
    assert!(signed_in.is_signed_in());

    let signed_out = signed_in.after_fetch(Ok(None));
    assert_eq!(signed_out, AuthSession::signed_out());
}

#[test]
fn failed_fetch_keeps_signed_in_user() {
    let session = AuthSession::resolved(Some(alice()));
    let next = session.after_fetch(Err("502 Bad Gateway".to_owned()));
    assert_eq!(next, session);
    assert!(next.is_signed_in());
}

#[test]
fn failed_first_fetch_stays_pending() {
    let next = AuthSession::pending().after_fetch(Err("network error".to_owned()));
    assert!(next.loading);
    assert!(next.user.is_none());
}

#[test]
fn failed_fetch_keeps_signed_out_session() {
    let next = AuthSession::signed_out().after_fetch(Err("timeout".to_owned()));
    assert_eq!(next, AuthSession::signed_out());
}
