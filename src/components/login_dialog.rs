//! Login modal (`#loginDialog`).

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::LoginRequest;
use crate::net::api::Endpoints;
#[cfg(feature = "hydrate")]
use crate::state::auth::dispatch_auth_event;
use crate::state::auth::AuthState;
use crate::state::dialogs::DialogState;

/// Shown while `DialogState::login.open` is set.
#[component]
pub fn LoginDialog() -> impl IntoView {
    let dialogs = expect_context::<RwSignal<DialogState>>();

    view! {
        <Show when=move || dialogs.get().login.open>
            <LoginDialogBody/>
        </Show>
    }
}

#[component]
fn LoginDialogBody() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dialogs = expect_context::<RwSignal<DialogState>>();
    let endpoints = expect_context::<Endpoints>();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(form) = form_ref.get() else {
                return;
            };
            let request = match crate::util::form::decode_form::<LoginRequest>(&form) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("login form incomplete: {error}");
                    dialogs.update(|d| d.login.fail());
                    return;
                }
            };
            let endpoints = endpoints.clone();
            leptos::task::spawn_local(async move {
                match endpoints.login(&request).await {
                    Ok(user) => {
                        dispatch_auth_event(auth, Some(user));
                        form.reset();
                        dialogs.update(|d| d.login.succeed());
                    }
                    Err(error) => {
                        log::warn!("login rejected: {error}");
                        dialogs.update(|d| d.login.fail());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, &endpoints);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| dialogs.update(|d| d.login.close())>
            <div id="loginDialog" class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Log in"</h2>
                <form node_ref=form_ref on:submit=on_submit>
                    <label class="dialog__label">
                        "Username"
                        <input class="dialog__input" type="text" name="username" required/>
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input class="dialog__input" type="password" name="password" required/>
                    </label>
                    <p class="error" hidden=move || !dialogs.get().login.error>
                        "Login failed. Check your username and password."
                    </p>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| dialogs.update(|d| d.login.close())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Log in"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
