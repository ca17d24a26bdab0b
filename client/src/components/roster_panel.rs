//! Connected members panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders roster state populated by the bus client's `connected` and
//! `disconnected` events. The displayed count is derived from the
//! roster set, so it can never disagree with the listed names.

use leptos::prelude::*;

use crate::state::roster::RosterState;

/// Side panel showing the live member count and names.
#[component]
pub fn RosterPanel() -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    let names = move || {
        roster
            .get()
            .names()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="roster-panel">
            <div class="roster-panel__summary">
                {move || format!("{} connected", roster.get().member_count())}
            </div>

            <Show
                when=move || (roster.get().member_count() > 0)
                fallback=move || view! { <div class="roster-panel__empty">"No one is here yet."</div> }
            >
                <ul class="roster-panel__list">
                    {move || {
                        names()
                            .into_iter()
                            .map(|name| view! { <li class="roster-panel__member">{name}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </aside>
    }
}
