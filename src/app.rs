//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::components::chat_overlay::ChatOverlayProvider;
use crate::components::pwa_head::PwaHead;
use crate::config::DeploymentConfig;
use crate::pages::{feed::FeedPage, login::LoginPage, messages::MessagesPage};
use crate::state::auth::AuthSession;
use crate::util::asset_path::{AssetPath, DeploymentContext, EvaluationContext, use_asset};

/// Directory holding the WASM bundle, JS glue and CSS.
pub const PKG_DIR: AssetPath = AssetPath::from_static("/pkg");
const STYLESHEET: AssetPath = AssetPath::from_static("/pkg/pora.css");

/// How often the browser re-checks the session so a sign-out elsewhere
/// reaches the auth gate.
#[cfg(feature = "hydrate")]
const SESSION_RECHECK_SECS: u64 = 60;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, deployment: DeploymentContext) -> impl IntoView {
    let root = deployment.prefix.clone();
    provide_context(deployment);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options root=root/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the deployment prefix for this evaluation context, provides the
/// session, and mounts the chat overlay above every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server shell provides its own context; the browser detects from
    // its location.
    let deployment = use_context::<DeploymentContext>().unwrap_or_else(|| {
        DeploymentContext::detect(&DeploymentConfig::from_build(), &EvaluationContext::current())
    });
    log::debug!("deployment prefix: {:?}", deployment.prefix);
    let base = deployment.prefix.clone();
    provide_context(deployment);

    let auth = RwSignal::new(AuthSession::default());
    provide_context(auth);
    provide_session(auth);

    view! {
        <Stylesheet id="leptos" href=use_asset(&STYLESHEET)/>
        <Title text="pora"/>
        <PwaHead/>

        <Router base=base>
            <ChatOverlayProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <AuthGate><FeedPage/></AuthGate> }
                    />
                    <Route
                        path=StaticSegment("messages")
                        view=|| view! { <AuthGate><MessagesPage/></AuthGate> }
                    />
                </Routes>
            </ChatOverlayProvider>
        </Router>
    }
}

/// Session provider: resolve the signed-in user from the backend and keep it
/// fresh. On the server the session stays pending, so protected routes render
/// the gate's loading view and hydrate consistently.
fn provide_session(auth: RwSignal<AuthSession>) {
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let outcome = crate::net::api::fetch_current_user().await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let next = auth.get_untracked().after_fetch(outcome);
                if auth.get_untracked() != next {
                    auth.set(next);
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(SESSION_RECHECK_SECS)).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
