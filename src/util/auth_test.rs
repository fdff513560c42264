use super::*;
use crate::net::types::User;

fn alice() -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), handle: "@alice".to_owned(), avatar_url: None }
}

fn loading() -> AuthSession {
    AuthSession::pending()
}

fn signed_out() -> AuthSession {
    AuthSession::signed_out()
}

fn signed_in() -> AuthSession {
    AuthSession::resolved(Some(alice()))
}

/// One render pass followed by the post-render phase. Returns what was
/// rendered; navigations are appended to `nav_log`.
fn frame(machine: &mut AuthGateMachine, session: &AuthSession, nav_log: &mut Vec<String>) -> GateRender<&'static str> {
    let rendered = machine.observe(session).render("children");
    for effect in machine.take_effects() {
        match effect {
            GateEffect::Navigate(path) => nav_log.push(path.to_owned()),
        }
    }
    rendered
}

// =============================================================
// classify / transition
// =============================================================

#[test]
fn classify_maps_session_to_state() {
    assert_eq!(GateState::classify(&loading()), GateState::Pending);
    assert_eq!(GateState::classify(&signed_out()), GateState::Unauthenticated);
    assert_eq!(GateState::classify(&signed_in()), GateState::Authenticated);
}

#[test]
fn loading_wins_over_stale_user() {
    let session = AuthSession { user: Some(alice()), loading: true };
    assert_eq!(GateState::classify(&session), GateState::Pending);
}

#[test]
fn transition_into_unauthenticated_emits_one_redirect() {
    let (next, effects) = GateState::Pending.transition(&signed_out());
    assert_eq!(next, GateState::Unauthenticated);
    assert_eq!(effects, vec![GateEffect::Navigate(LOGIN_PATH)]);
}

#[test]
fn staying_unauthenticated_emits_nothing() {
    let (next, effects) = GateState::Unauthenticated.transition(&signed_out());
    assert_eq!(next, GateState::Unauthenticated);
    assert!(effects.is_empty());
}

#[test]
fn transition_into_authenticated_emits_nothing() {
    for from in [GateState::Pending, GateState::Unauthenticated, GateState::Authenticated] {
        let (next, effects) = from.transition(&signed_in());
        assert_eq!(next, GateState::Authenticated);
        assert!(effects.is_empty());
    }
}

#[test]
fn render_per_state() {
    assert_eq!(GateState::Pending.render(1), GateRender::Loading);
    assert_eq!(GateState::Unauthenticated.render(1), GateRender::Nothing);
    assert_eq!(GateState::Authenticated.render(1), GateRender::Children(1));
}

// =============================================================
// AuthGateMachine
// =============================================================

#[test]
fn pending_renders_loading_without_navigation() {
    let mut machine = AuthGateMachine::new();
    let mut nav = Vec::new();
    assert_eq!(machine.state(), GateState::Pending);
    assert_eq!(frame(&mut machine, &loading(), &mut nav), GateRender::Loading);
    assert_eq!(frame(&mut machine, &loading(), &mut nav), GateRender::Loading);
    assert!(nav.is_empty());
}

#[test]
fn resolving_signed_out_renders_nothing_and_redirects_once() {
    let mut machine = AuthGateMachine::new();
    let mut nav = Vec::new();
    frame(&mut machine, &loading(), &mut nav);
    assert_eq!(frame(&mut machine, &signed_out(), &mut nav), GateRender::Nothing);
    // Re-renders in the same state don't re-fire.
    assert_eq!(frame(&mut machine, &signed_out(), &mut nav), GateRender::Nothing);
    assert_eq!(nav, vec!["/login".to_owned()]);
}

#[test]
fn resolving_signed_in_renders_children_without_navigation() {
    let mut machine = AuthGateMachine::new();
    let mut nav = Vec::new();
    frame(&mut machine, &loading(), &mut nav);
    assert_eq!(frame(&mut machine, &signed_in(), &mut nav), GateRender::Children("children"));
    assert!(nav.is_empty());
}

#[test]
fn late_sign_out_redirects_again() {
    let mut machine = AuthGateMachine::new();
    let mut nav = Vec::new();
    frame(&mut machine, &signed_out(), &mut nav);
    frame(&mut machine, &signed_in(), &mut nav);
    assert_eq!(nav.len(), 1);

    assert_eq!(frame(&mut machine, &signed_out(), &mut nav), GateRender::Nothing);
    assert_eq!(nav, vec!["/login".to_owned(), "/login".to_owned()]);
}

#[test]
fn sign_in_while_mounted_switches_to_children() {
    let mut machine = AuthGateMachine::new();
    let mut nav = Vec::new();
    frame(&mut machine, &signed_out(), &mut nav);
    assert_eq!(frame(&mut machine, &signed_in(), &mut nav), GateRender::Children("children"));
    assert_eq!(machine.state(), GateState::Authenticated);
    assert_eq!(nav.len(), 1);
}

#[test]
fn restarted_cycle_returns_to_pending_without_effects() {
    let mut machine = AuthGateMachine::new();
    let mut nav = Vec::new();
    frame(&mut machine, &signed_in(), &mut nav);
    assert_eq!(frame(&mut machine, &loading(), &mut nav), GateRender::Loading);
    assert!(nav.is_empty());
}

#[test]
fn effects_are_held_until_post_render_phase() {
    let mut machine = AuthGateMachine::new();
    let state = machine.observe(&signed_out());
    assert_eq!(state.render(()), GateRender::Nothing);
    assert_eq!(machine.take_effects(), vec![GateEffect::Navigate(LOGIN_PATH)]);
    assert!(machine.take_effects().is_empty());
}

#[test]
fn unmount_before_resolution_drops_redirect() {
    let mut machine = AuthGateMachine::new();
    let mut nav = Vec::new();
    frame(&mut machine, &loading(), &mut nav);
    machine.unmount();

    machine.observe(&signed_out());
    assert!(machine.take_effects().is_empty());
    assert_eq!(machine.state(), GateState::Pending);
    assert!(nav.is_empty());
}

#[test]
fn unmount_discards_effects_queued_before_post_render() {
    let mut machine = AuthGateMachine::new();
    machine.observe(&signed_out());
    machine.unmount();
    assert!(machine.take_effects().is_empty());
}

fn recorder() -> (std::sync::Arc<std::sync::Mutex<Vec<String>>>, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let navs = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&navs);
    (navs, move |path: &str, _: NavigateOptions| sink.lock().unwrap().push(path.to_owned()))
}

#[tokio::test]
async fn installed_gate_redirects_once_after_sign_out() {
    _ = any_spawner::Executor::init_tokio();
    tokio::task::LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            owner.set();
            let auth = RwSignal::new(AuthSession::pending());
            let (navs, navigate) = recorder();
            let gate = owner.child();
            gate.with(|| install_unauth_redirect(auth, navigate));

            any_spawner::Executor::tick().await;
            assert!(navs.lock().unwrap().is_empty());

            auth.set(signed_out());
            any_spawner::Executor::tick().await;
            auth.set(signed_out());
            any_spawner::Executor::tick().await;

            assert_eq!(*navs.lock().unwrap(), vec![LOGIN_PATH.to_owned()]);
        })
        .await;
}

#[tokio::test]
async fn installed_gate_does_not_redirect_after_cleanup() {
    _ = any_spawner::Executor::init_tokio();
    tokio::task::LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            owner.set();
            let auth = RwSignal::new(AuthSession::pending());
            let (navs, navigate) = recorder();
            let gate = owner.child();
            gate.with(|| install_unauth_redirect(auth, navigate));
            any_spawner::Executor::tick().await;

            gate.cleanup();
            auth.set(signed_out());
            any_spawner::Executor::tick().await;

            assert!(navs.lock().unwrap().is_empty());
        })
        .await;
}
