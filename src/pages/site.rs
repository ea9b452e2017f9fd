//! Marketing site page: latest articles and the footer navigation.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use leptos::prelude::*;

use crate::components::article_pager::{ArticlePager, ArticleSummary};
use crate::components::main_nav::{MainNav, NavLink};
use crate::config::ClientConfig;

const LATEST_ARTICLES: &[ArticleSummary] = &[
    ArticleSummary {
        title: "Shipping a JWT cookie session",
        href: "/articles/jwt-cookie-session",
        teaser: "Keeping tokens out of JavaScript with HttpOnly cookies.",
    },
    ArticleSummary {
        title: "Company-scoped permissions",
        href: "/articles/company-scoped-permissions",
        teaser: "Authors and admins, and why the company check comes first.",
    },
    ArticleSummary {
        title: "Paging without a server",
        href: "/articles/client-paging",
        teaser: "Hiding list items instead of fetching pages.",
    },
    ArticleSummary {
        title: "A footer that gets out of the way",
        href: "/articles/sliding-footer",
        teaser: "Sliding navigation off-screen while the reader scrolls.",
    },
    ArticleSummary {
        title: "Hover menus that respect clicks",
        href: "/articles/hover-menus",
        teaser: "Remembering that the user closed the menu on purpose.",
    },
    ArticleSummary {
        title: "Testing UI state without a browser",
        href: "/articles/testing-ui-state",
        teaser: "Plain state machines behind every widget.",
    },
];

const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/site" },
    NavLink { label: "Articles", href: "/site#latestArticlesList" },
    NavLink { label: "Greetings", href: "/" },
];

pub fn latest_articles() -> Vec<ArticleSummary> {
    LATEST_ARTICLES.to_vec()
}

pub fn nav_links() -> Vec<NavLink> {
    NAV_LINKS.to_vec()
}

#[component]
pub fn SitePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    view! {
        <div class="site-page">
            <main class="site-page__main">
                <section class="site-page__latest">
                    <h2>"Latest articles"</h2>
                    <ArticlePager articles=latest_articles() page_size=config.articles_per_page/>
                </section>
            </main>
            <MainNav links=nav_links()/>
        </div>
    }
}
