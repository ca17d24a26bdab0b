//! Message input form for sending chat messages.
//!
//! Submitting emits exactly one `message` event with the input's
//! contents and clears the field. The empty string is dropped silently
//! with the field left untouched; no error is surfaced either way.

use leptos::prelude::*;

use crate::app::BusSender;
use crate::util::event_emit;

/// Input row with a text field and a send button.
#[component]
pub fn MessageForm() -> impl IntoView {
    let sender = expect_context::<RwSignal<BusSender>>();
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if event_emit::send_chat_message(sender, &input.get()) {
            input.set(String::new());
        }
    };

    view! {
        <form class="message-form" on:submit=on_submit>
            <input
                class="message-form__input"
                type="text"
                placeholder="Say something..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="message-form__send" type="submit">
                "Send"
            </button>
        </form>
    }
}
