//! Suggested-contact card with a "Message" action.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::net::types::{ChatTarget, ChatUser};
use crate::util::chat_bus::expect_chat_overlay;

#[component]
pub fn ContactCard(user: ChatUser) -> impl IntoView {
    let bus = expect_chat_overlay();
    let target = ChatTarget::with_user(user.clone());
    let on_message = move |_| bus.open_chat(target.clone());

    view! {
        <article class="contact-card">
            <Avatar user=user.clone()/>
            <div class="contact-card__text">
                <span class="contact-card__name">{user.name.clone()}</span>
                <span class="contact-card__handle">{user.handle.clone()}</span>
            </div>
            <button class="contact-card__message" on:click=on_message>
                "Message"
            </button>
        </article>
    }
}
