//! `#latestArticlesList` with Previous/Next paging.
//!
//! Items outside the current page are rendered `hidden`. When the list fits
//! on one page no navigation is rendered at all.

use leptos::prelude::*;

use crate::state::pagination::Pagination;
#[cfg(feature = "hydrate")]
use crate::state::pagination::sticky_height;

/// One entry of the latest-articles list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleSummary {
    pub title: &'static str,
    pub href: &'static str,
    pub teaser: &'static str,
}

#[component]
pub fn ArticlePager(articles: Vec<ArticleSummary>, page_size: usize) -> impl IntoView {
    let pager = RwSignal::new(Pagination::new(articles.len(), page_size));
    let min_height = RwSignal::new(0_i32);
    let list_ref = NodeRef::<leptos::html::Ul>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        pager.track();
        if let Some(list) = list_ref.get() {
            let measured = list.scroll_height();
            min_height.update(|h| *h = sticky_height(*h, measured));
        }
    });

    let list_style = move || {
        let height = min_height.get();
        if height > 0 { format!("height: {height}px") } else { String::new() }
    };

    let items = articles
        .into_iter()
        .enumerate()
        .map(|(index, article)| {
            view! {
                <li class="article" hidden=move || pager.get().is_some_and(|p| !p.is_visible(index))>
                    <a href=article.href>{article.title}</a>
                    <p>{article.teaser}</p>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <ul id="latestArticlesList" node_ref=list_ref style=list_style>
            {items}
        </ul>
        <Show when=move || pager.get().is_some()>
            <div id="latestArticleListNav">
                <button
                    disabled=move || pager.get().is_none_or(|p| p.previous_disabled())
                    on:click=move |_| {
                        pager.update(|p| {
                            if let Some(p) = p.as_mut() {
                                p.previous();
                            }
                        });
                    }
                >
                    "Previous"
                </button>
                <button
                    disabled=move || pager.get().is_none_or(|p| p.next_disabled())
                    on:click=move |_| {
                        pager.update(|p| {
                            if let Some(p) = p.as_mut() {
                                p.next();
                            }
                        });
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
