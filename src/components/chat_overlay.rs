//! Chat overlay provider and panel.
//!
//! DESIGN
//! ======
//! `ChatOverlayProvider` owns the overlay state and is the single handler on
//! the chat overlay bus. Descendants only ever see the bus, never the state.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::state::chat::ChatOverlayState;
use crate::util::chat_bus::provide_chat_overlay;

/// Install the chat overlay bus for `children` and render the overlay beside
/// them.
#[component]
pub fn ChatOverlayProvider(children: Children) -> impl IntoView {
    let overlay = RwSignal::new(ChatOverlayState::default());
    provide_chat_overlay(move |target| overlay.update(|s| s.open(target)));

    view! {
        {children()}
        <ChatOverlayPanel overlay=overlay/>
    }
}

/// Floating panel for the active conversation.
#[component]
pub fn ChatOverlayPanel(overlay: RwSignal<ChatOverlayState>) -> impl IntoView {
    let on_close = move |_| overlay.update(ChatOverlayState::close);
    let on_minimize = move |_| overlay.update(ChatOverlayState::toggle_minimized);

    move || {
        let state = overlay.get();
        let target = state.active?;
        let name = target.display_user.name.clone();
        let handle = target.display_user.handle.clone();
        let summary = target.summary_text().to_owned();
        let timestamp = target.timestamp_label.clone().unwrap_or_default();
        let minimized = state.minimized;
        let class = if minimized { "chat-overlay chat-overlay--minimized" } else { "chat-overlay" };
        let body = (!minimized).then(|| {
            if summary.is_empty() {
                view! { <p class="chat-overlay__empty">{format!("Say hi to {name}.")}</p> }.into_any()
            } else {
                view! {
                    <p class="chat-overlay__message">{summary}</p>
                    <span class="chat-overlay__time">{timestamp}</span>
                }
                    .into_any()
            }
        });

        Some(view! {
            <aside class=class aria-label="Chat">
                <header class="chat-overlay__header">
                    <Avatar user=target.display_user.clone()/>
                    <div class="chat-overlay__title">
                        <span class="chat-overlay__name">{name.clone()}</span>
                        <span class="chat-overlay__handle">{handle}</span>
                    </div>
                    <button class="chat-overlay__btn" title="Minimize" on:click=on_minimize>
                        {if minimized { "\u{25b4}" } else { "\u{25be}" }}
                    </button>
                    <button class="chat-overlay__btn" title="Close" on:click=on_close>
                        "\u{2715}"
                    </button>
                </header>
                <div class="chat-overlay__body">{body}</div>
            </aside>
        })
    }
}
