//! Site footer with the collapsible main navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hovering into the footer opens the menu, the hamburger button toggles it,
//! leaving the footer closes it (rules in [`NavMenu`]). The footer also
//! slides out of view while the page scrolls down ([`FooterOffset`]).

use leptos::prelude::*;

use crate::state::nav::NavMenu;
use crate::state::scroll::FooterOffset;

/// One entry of the main navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[component]
pub fn MainNav(links: Vec<NavLink>) -> impl IntoView {
    let nav = RwSignal::new(NavMenu::default());
    let offset = RwSignal::new(FooterOffset::new(crate::util::browser::scroll_y(), 0.0));
    let footer_ref = NodeRef::<leptos::html::Footer>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(footer) = footer_ref.get() {
                let height = f64::from(footer.scroll_height());
                offset.update(|o| o.set_footer_height(height));
            }
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = crate::util::browser::scroll_y();
            offset.update(|o| {
                o.on_scroll(scroll_y);
            });
        });
        on_cleanup(move || handle.remove());
    }

    let on_mouse_over = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        let from_outside = crate::util::browser::entered_from_outside(&ev, footer_ref.get().as_ref());
        #[cfg(not(feature = "hydrate"))]
        let from_outside = {
            let _ = (&ev, footer_ref);
            false
        };
        let mut accepted = false;
        nav.update(|menu| accepted = menu.hover_enter(from_outside));
        if accepted {
            release_next_tick(nav);
        }
    };

    let on_toggle = move |_| {
        let mut accepted = false;
        nav.update(|menu| accepted = menu.click());
        if accepted {
            release_next_tick(nav);
        }
    };

    let panel_style = move || {
        let menu = nav.get();
        #[cfg(feature = "hydrate")]
        let content_height = panel_ref
            .get()
            .map_or(0, |panel| u32::try_from(panel.scroll_height()).unwrap_or(0));
        #[cfg(not(feature = "hydrate"))]
        let content_height = 0;
        format!("height: {}px", menu.panel_height(content_height))
    };

    let links = links
        .into_iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.href>{link.label}</a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer
            node_ref=footer_ref
            class=move || nav.get().footer_class()
            style=move || format!("bottom: {}px", offset.get().bottom())
            on:mouseover=on_mouse_over
            on:mouseleave=move |_| nav.update(NavMenu::mouse_leave)
        >
            <div id="mainNavButtonContainer">
                <button type="button" aria-label="Toggle navigation" on:click=on_toggle>
                    <span class=move || nav.get().hamburger_class()></span>
                </button>
            </div>
            <div id="mainNavContainer" node_ref=panel_ref style=panel_style>
                <nav>
                    <ul>{links}</ul>
                </nav>
            </div>
        </footer>
    }
}

/// Clear the nav re-entrancy block once the current event has finished
/// dispatching.
fn release_next_tick(nav: RwSignal<NavMenu>) {
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(0, move || nav.update(NavMenu::release)).forget();
    #[cfg(not(feature = "hydrate"))]
    nav.update(NavMenu::release);
}
