//! Message list rendering inbound chat traffic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState` populated by the bus client's `message` events.
//! Room-wide notices render without attribution, inside angle-bracket
//! delimiters; direct messages lead with the emphasized sender name.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState};
use crate::util::clock;

/// Body text as shown in the list.
pub(crate) fn entry_body(message: &ChatMessage) -> String {
    if message.is_broadcast {
        format!("<{}>", message.body)
    } else {
        message.body.clone()
    }
}

/// Scrolling list of rendered chat entries, oldest at the top.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry visible.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="message-list" node_ref=messages_ref>
            {move || {
                let messages = chat.get().messages;
                if messages.is_empty() {
                    return view! {
                        <div class="message-list__empty">"No messages yet"</div>
                    }
                        .into_any();
                }

                messages
                    .into_iter()
                    .map(|message| {
                        let stamp = clock::wall_clock_label(message.received_at_ms);
                        let text = entry_body(&message);
                        let author = message.sender_name.clone();
                        let is_notice = message.is_broadcast;
                        view! {
                            <div class="message-list__entry" class:message-list__entry--notice=is_notice>
                                <span class="message-list__text" class:muted=is_notice>
                                    {author
                                        .map(|name| {
                                            view! {
                                                <strong class="message-list__author">{name}</strong>
                                                ": "
                                            }
                                        })}
                                    {text}
                                </span>
                                <span class="message-list__stamp muted">{stamp}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
