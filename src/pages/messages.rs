//! Conversation list; each row opens the chat overlay.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::conversation_row::ConversationRow;
use crate::state::conversations::ConversationsState;

use super::load_conversations;

pub(crate) fn unread_heading(total: u32) -> String {
    match total {
        0 => "Messages".to_owned(),
        n => format!("Messages ({n} unread)"),
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let conversations = RwSignal::new(ConversationsState::default());
    load_conversations(conversations);

    let heading = move || unread_heading(conversations.get().total_unread());
    let items = move || conversations.get().items;

    view! {
        <div class="page messages-page">
            <AppHeader/>
            <main class="messages">
                <h1 class="messages__title">{heading}</h1>
                <Show when=move || conversations.get().failed>
                    <p class="messages__error">"Couldn't load conversations."</p>
                </Show>
                <Show
                    when=move || !conversations.get().loading || !items().is_empty()
                    fallback=|| view! { <p class="messages__loading">"Loading conversations..."</p> }
                >
                    <Show
                        when=move || !items().is_empty()
                        fallback=|| view! { <p class="messages__empty">"No conversations yet."</p> }
                    >
                        <div class="messages__list">
                            {move || {
                                items()
                                    .into_iter()
                                    .map(|target| view! { <ConversationRow target=target/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}
