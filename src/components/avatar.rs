//! Round user avatar with an online dot.

use leptos::prelude::*;

use crate::net::types::ChatUser;

/// Initials used when the user has no avatar image.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Avatar(user: ChatUser) -> impl IntoView {
    let online = user.online;
    let body = if user.avatar_url.is_empty() {
        view! { <span class="avatar__initials">{initials(&user.name)}</span> }.into_any()
    } else {
        view! { <img class="avatar__img" src=user.avatar_url.clone() alt=user.name.clone()/> }.into_any()
    };

    view! {
        <span class="avatar">
            {body}
            <Show when=move || online>
                <span class="avatar__online" aria-label="online"></span>
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("alice liddell"), "AL");
        assert_eq!(initials("Bo"), "B");
        assert_eq!(initials("Ana Maria de la Cruz"), "AM");
        assert_eq!(initials("   "), "");
    }
}
