//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::Endpoints;
use crate::pages::{greetings::GreetingsPage, site::SitePage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration, the REST endpoints, and the auth signal that
/// every greetings-app component subscribes to.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::resolve();
    let endpoints = Endpoints::from_config(&config);
    let auth = RwSignal::new(AuthState::pending());

    provide_context(config);
    provide_context(endpoints);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/greetings-web.css"/>
        <Title text="Greetings"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GreetingsPage/>
                <Route path=StaticSegment("site") view=SitePage/>
            </Routes>
        </Router>
    }
}
