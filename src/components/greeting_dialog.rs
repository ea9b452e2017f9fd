//! `#writeGreetingButton` and the write-greeting modal (`#greetingDialog`).
//!
//! The button is hidden for anonymous visitors. A created greeting is
//! appended to the list locally from the returned id and the current user's
//! identity instead of reloading the whole list.

use leptos::prelude::*;

use crate::net::api::Endpoints;
#[cfg(feature = "hydrate")]
use crate::net::types::{CreateGreetingRequest, Greeting};
use crate::state::auth::AuthState;
use crate::state::dialogs::DialogState;
use crate::state::greetings::GreetingsState;

#[component]
pub fn GreetingDialog() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dialogs = expect_context::<RwSignal<DialogState>>();

    view! {
        <button
            id="writeGreetingButton"
            class="btn btn--primary"
            hidden=move || !auth.get().can_write()
            on:click=move |_| dialogs.update(|d| d.greeting.show())
        >
            "Write a greeting"
        </button>
        <Show when=move || dialogs.get().greeting.open && auth.get().can_write()>
            <GreetingDialogBody/>
        </Show>
    }
}

#[component]
fn GreetingDialogBody() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dialogs = expect_context::<RwSignal<DialogState>>();
    let greetings = expect_context::<RwSignal<GreetingsState>>();
    let endpoints = expect_context::<Endpoints>();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(form) = form_ref.get() else {
                return;
            };
            let Some(user) = auth.get_untracked().user else {
                dialogs.update(|d| d.greeting.fail());
                return;
            };
            let request = match crate::util::form::decode_form::<CreateGreetingRequest>(&form) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("greeting form incomplete: {error}");
                    dialogs.update(|d| d.greeting.fail());
                    return;
                }
            };
            let endpoints = endpoints.clone();
            leptos::task::spawn_local(async move {
                match endpoints.create_greeting(&request).await {
                    Ok(id) => {
                        greetings.update(|s| s.append(Greeting::authored(id, request.message, &user)));
                        form.reset();
                        dialogs.update(|d| d.greeting.succeed());
                    }
                    Err(error) => {
                        log::warn!("create greeting rejected: {error}");
                        dialogs.update(|d| d.greeting.fail());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, greetings, &endpoints);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| dialogs.update(|d| d.greeting.close())>
            <div id="greetingDialog" class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Write a greeting"</h2>
                <form node_ref=form_ref on:submit=on_submit>
                    <label class="dialog__label">
                        "Message"
                        <textarea class="dialog__input" name="message" rows="3" required></textarea>
                    </label>
                    <p class="error" hidden=move || !dialogs.get().greeting.error>
                        "Could not post your greeting."
                    </p>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| dialogs.update(|d| d.greeting.close())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Post"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
