//! One row in the conversation list.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::net::types::ChatTarget;
use crate::util::chat_bus::expect_chat_overlay;

/// Badge text for an unread count; counts above 99 collapse to `99+`.
pub(crate) fn unread_badge(count: Option<u32>) -> Option<String> {
    match count {
        None | Some(0) => None,
        Some(n @ 1..=99) => Some(n.to_string()),
        Some(_) => Some("99+".to_owned()),
    }
}

#[component]
pub fn ConversationRow(target: ChatTarget) -> impl IntoView {
    let bus = expect_chat_overlay();
    let badge = unread_badge(target.unread_count);
    let name = target.display_user.name.clone();
    let summary = target.summary_text().to_owned();
    let timestamp = target.timestamp_label.clone().unwrap_or_default();
    let user = target.display_user.clone();
    let class = if target.has_unread() { "conversation-row conversation-row--unread" } else { "conversation-row" };
    let on_open = move |_| bus.open_chat(target.clone());

    view! {
        <button class=class on:click=on_open>
            <Avatar user=user/>
            <div class="conversation-row__text">
                <span class="conversation-row__name">{name}</span>
                <span class="conversation-row__summary">{summary}</span>
            </div>
            <span class="conversation-row__time">{timestamp}</span>
            {badge.map(|text| view! { <span class="conversation-row__badge">{text}</span> })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_badge_hides_zero_and_missing() {
        assert_eq!(unread_badge(None), None);
        assert_eq!(unread_badge(Some(0)), None);
    }

    #[test]
    fn unread_badge_caps_at_99() {
        assert_eq!(unread_badge(Some(7)).as_deref(), Some("7"));
        assert_eq!(unread_badge(Some(99)).as_deref(), Some("99"));
        assert_eq!(unread_badge(Some(100)).as_deref(), Some("99+"));
    }
}
