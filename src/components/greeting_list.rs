//! `#greetingsList`: one `.greeting` item per message.
//!
//! SYSTEM CONTEXT
//! ==============
//! The delete button of each item is re-evaluated against the current user
//! whenever `AuthState` changes (see [`Greeting::can_be_deleted_by`]).

use leptos::prelude::*;

use crate::net::api::Endpoints;
use crate::net::types::Greeting;
use crate::state::auth::AuthState;
use crate::state::greetings::GreetingsState;

#[component]
pub fn GreetingList() -> impl IntoView {
    let greetings = expect_context::<RwSignal<GreetingsState>>();

    view! {
        <ul id="greetingsList">
            {move || {
                greetings
                    .get()
                    .items
                    .into_iter()
                    .map(|greeting| view! { <GreetingItem greeting=greeting/> })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

#[component]
fn GreetingItem(greeting: Greeting) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greetings = expect_context::<RwSignal<GreetingsState>>();
    let endpoints = expect_context::<Endpoints>();

    let id = greeting.id;
    let byline = greeting.byline();
    let message = greeting.message.clone();
    let can_delete = move || greeting.can_be_deleted_by(auth.get().user.as_ref());

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if !crate::util::browser::confirm("You sure?") {
                return;
            }
            let endpoints = endpoints.clone();
            leptos::task::spawn_local(async move {
                match endpoints.delete_greeting(id).await {
                    Ok(()) => greetings.update(|s| {
                        s.remove(id);
                    }),
                    Err(error) => log::warn!("delete greeting {id} rejected: {error}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (greetings, &endpoints, id);
        }
    };

    view! {
        <li class="greeting">
            <div class="topWrapper">
                <div class="message">{message}</div>
                <button class="deleteButton" hidden=move || !can_delete() on:click=on_delete>
                    "Delete"
                </button>
            </div>
            <small>{byline}</small>
        </li>
    }
}
