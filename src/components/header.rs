//! Page header: login/register buttons or the signed-in identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Subscribes to `AuthState`; which block is visible follows
//! [`AuthState::header_mode`]. Logging out dispatches an auth event with no
//! user so every other subscriber resets too.

use leptos::prelude::*;

use crate::net::api::Endpoints;
#[cfg(feature = "hydrate")]
use crate::state::auth::dispatch_auth_event;
use crate::state::auth::{AuthState, HeaderMode};
use crate::state::dialogs::DialogState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dialogs = expect_context::<RwSignal<DialogState>>();
    let endpoints = expect_context::<Endpoints>();

    let mode = move || auth.get().header_mode();
    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();
    let company = move || auth.get().user.map(|u| u.company_id).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let endpoints = endpoints.clone();
            leptos::task::spawn_local(async move {
                match endpoints.logout().await {
                    Ok(()) => dispatch_auth_event(auth, None),
                    Err(error) => log::warn!("logout failed: {error}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &endpoints;
        }
    };

    view! {
        <header class="header">
            <div id="headerLogin" hidden=move || mode() != HeaderMode::Login>
                <button id="loginButton" class="btn" on:click=move |_| dialogs.update(|d| d.login.show())>
                    "Log in"
                </button>
                <button id="registerButton" class="btn" on:click=move |_| dialogs.update(|d| d.register.show())>
                    "Register"
                </button>
            </div>
            <div id="headerAuthenticated" hidden=move || mode() != HeaderMode::Authenticated>
                <span id="headerAuthenticated__name">{username}</span>
                " @ "
                <span id="headerAuthenticated__company">{company}</span>
                <button id="headerAuthenticated__logoutButton" class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
