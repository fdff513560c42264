//! Home feed: greeting, suggested contacts, recent conversations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Contact cards and conversation rows open
//! chats through the overlay bus; the page itself never touches the overlay.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::contact_card::ContactCard;
use crate::components::conversation_row::ConversationRow;
use crate::state::auth::AuthSession;
use crate::state::conversations::ConversationsState;

use super::load_conversations;

const SUGGESTED_LIMIT: usize = 4;
const RECENT_LIMIT: usize = 3;

pub(crate) fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn FeedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let conversations = RwSignal::new(ConversationsState::default());
    load_conversations(conversations);

    let title = move || greeting(auth.get().display_name());
    let suggested = move || conversations.get().suggested_contacts(SUGGESTED_LIMIT);
    let recent = move || conversations.get().items.into_iter().take(RECENT_LIMIT);

    view! {
        <div class="page feed-page">
            <AppHeader/>
            <main class="feed">
                <h1 class="feed__title">{title}</h1>
                <section class="feed__section">
                    <h2>"People online"</h2>
                    <Show
                        when=move || !suggested().is_empty()
                        fallback=|| view! { <p class="feed__empty">"Nobody you know is online."</p> }
                    >
                        <div class="feed__contacts">
                            {move || {
                                suggested()
                                    .into_iter()
                                    .map(|user| view! { <ContactCard user=user/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>
                <section class="feed__section">
                    <h2>"Recent conversations"</h2>
                    {move || {
                        recent()
                            .into_iter()
                            .map(|target| view! { <ConversationRow target=target/> })
                            .collect::<Vec<_>>()
                    }}
                </section>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_uses_display_name() {
        assert_eq!(greeting(Some("Alice")), "Welcome back, Alice");
    }

    #[test]
    fn greeting_without_name() {
        assert_eq!(greeting(None), "Welcome back");
        assert_eq!(greeting(Some("  ")), "Welcome back");
    }
}
