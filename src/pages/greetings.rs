//! Greetings app page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page asks `GET /auth` who is signed in and broadcasts the
//! answer as the first auth event. Every auth event (boot, login, logout)
//! reloads the greetings list; components re-render header, dialogs, and
//! delete buttons from the same event.

use leptos::prelude::*;

use crate::components::greeting_dialog::GreetingDialog;
use crate::components::greeting_list::GreetingList;
use crate::components::header::Header;
use crate::components::login_dialog::LoginDialog;
use crate::components::register_dialog::RegisterDialog;
use crate::net::api::Endpoints;
#[cfg(feature = "hydrate")]
use crate::state::auth::dispatch_auth_event;
use crate::state::auth::AuthState;
use crate::state::dialogs::DialogState;
use crate::state::greetings::GreetingsState;

#[component]
pub fn GreetingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let endpoints = expect_context::<Endpoints>();
    let greetings = RwSignal::new(GreetingsState::default());
    let dialogs = RwSignal::new(DialogState::default());

    provide_context(greetings);
    provide_context(dialogs);

    #[cfg(feature = "hydrate")]
    {
        let endpoints = endpoints.clone();
        leptos::task::spawn_local(async move {
            match endpoints.current_user().await {
                Ok(user) => dispatch_auth_event(auth, user),
                Err(error) => {
                    log::warn!("session lookup failed: {error}");
                    dispatch_auth_event(auth, None);
                }
            }
        });
    }

    Effect::new(move || {
        if auth.with(|state| state.revision) == 0 {
            return;
        }
        reload_greetings(&endpoints, greetings);
    });

    view! {
        <div class="greetings-page">
            <Header/>
            <main class="greetings-page__main">
                <GreetingDialog/>
                <GreetingList/>
            </main>
            <LoginDialog/>
            <RegisterDialog/>
        </div>
    }
}

/// Fetch the list and install it unless a newer reload started meanwhile.
fn reload_greetings(endpoints: &Endpoints, greetings: RwSignal<GreetingsState>) {
    let mut seq = 0;
    greetings.update(|s| seq = s.begin_load());

    #[cfg(feature = "hydrate")]
    {
        let endpoints = endpoints.clone();
        leptos::task::spawn_local(async move {
            match endpoints.list_greetings().await {
                Ok(items) => greetings.update(|s| {
                    if !s.finish_load(seq, items) {
                        log::debug!("dropped stale greetings load {seq}");
                    }
                }),
                Err(error) => {
                    log::warn!("greetings load failed: {error}");
                    greetings.update(|s| s.abandon_load(seq));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, seq);
    }
}
