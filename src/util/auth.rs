//! Auth gate decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `components::auth_gate::AuthGate`,
//! which delegates here. The render decision is a pure function of the
//! session; the redirect is described as a [`GateEffect`] and carried out by a
//! post-render effect, so an unauthenticated viewer never sees a frame of
//! protected content and the redirect fires once per transition rather than
//! once per render.
//!
//! LIMITATIONS
//! ===========
//! There is no timeout. A session provider that never resolves leaves the gate
//! showing its loading indicator indefinitely; provider liveness belongs to
//! the provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthSession;

/// Where unauthenticated viewers are sent.
pub const LOGIN_PATH: &str = "/login";

/// Gate state derived from the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Session not yet resolved.
    #[default]
    Pending,
    /// Resolved with no user; a redirect is underway.
    Unauthenticated,
    /// Resolved with a user.
    Authenticated,
}

/// Side effect requested by a transition, performed after render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEffect {
    Navigate(&'static str),
}

/// What the gate renders for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateRender<C> {
    /// Spinner + label, no children.
    Loading,
    /// Empty output while the redirect completes.
    Nothing,
    /// The wrapped subtree, untouched.
    Children(C),
}

impl GateState {
    /// State the gate should be in for `session`, regardless of history.
    #[must_use]
    pub fn classify(session: &AuthSession) -> Self {
        if session.loading {
            Self::Pending
        } else if session.user.is_some() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }

    /// Advance on a session update. A redirect is emitted only when entering
    /// `Unauthenticated`; staying there emits nothing.
    #[must_use]
    pub fn transition(self, session: &AuthSession) -> (Self, Vec<GateEffect>) {
        let next = Self::classify(session);
        let effects = if next == Self::Unauthenticated && self != Self::Unauthenticated {
            vec![GateEffect::Navigate(LOGIN_PATH)]
        } else {
            Vec::new()
        };
        (next, effects)
    }

    #[must_use]
    pub fn render<C>(self, children: C) -> GateRender<C> {
        match self {
            Self::Pending => GateRender::Loading,
            Self::Unauthenticated => GateRender::Nothing,
            Self::Authenticated => GateRender::Children(children),
        }
    }
}

/// Gate state plus effects awaiting the post-render phase.
///
/// Once unmounted, queued effects are dropped and later session updates are
/// ignored, so a session that resolves after the view is gone can't redirect.
#[derive(Clone, Debug)]
pub struct AuthGateMachine {
    state: GateState,
    mounted: bool,
    pending: Vec<GateEffect>,
}

impl Default for AuthGateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthGateMachine {
    /// A freshly mounted gate in `Pending`.
    #[must_use]
    pub fn new() -> Self {
        Self { state: GateState::Pending, mounted: true, pending: Vec::new() }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Apply a session update and queue any resulting effects.
    pub fn observe(&mut self, session: &AuthSession) -> GateState {
        if !self.mounted {
            return self.state;
        }
        let (next, effects) = self.state.transition(session);
        if next != self.state {
            log::debug!("auth gate: {:?} -> {next:?}", self.state);
        }
        self.state = next;
        self.pending.extend(effects);
        next
    }

    /// Drain queued effects for the post-render phase.
    pub fn take_effects(&mut self) -> Vec<GateEffect> {
        if !self.mounted {
            self.pending.clear();
            return Vec::new();
        }
        std::mem::take(&mut self.pending)
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending.clear();
    }
}

/// Drive an [`AuthGateMachine`] from the session signal, performing redirects
/// in a post-render effect. The machine is unmounted with the calling owner.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let machine = StoredValue::new(AuthGateMachine::new());
    Effect::new(move || {
        let session = auth.get();
        let effects = machine
            .try_update_value(|m| {
                m.observe(&session);
                m.take_effects()
            })
            .unwrap_or_default();
        for effect in effects {
            match effect {
                GateEffect::Navigate(path) => {
                    log::info!("auth gate: redirecting to {path}");
                    navigate(path, NavigateOptions::default());
                }
            }
        }
    });
    on_cleanup(move || {
        machine.try_update_value(AuthGateMachine::unmount);
    });
}
