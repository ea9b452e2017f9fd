use std::collections::HashSet;

use super::*;
use crate::config::DEFAULT_ARTICLES_PER_PAGE;
use crate::state::pagination::Pagination;

#[test]
fn latest_articles_span_more_than_one_default_page() {
    let articles = latest_articles();
    let pager = Pagination::new(articles.len(), DEFAULT_ARTICLES_PER_PAGE);
    assert_eq!(pager.map(|p| p.page_count()), Some(2));
}

#[test]
fn latest_articles_have_unique_links() {
    let articles = latest_articles();
    let hrefs = articles.iter().map(|a| a.href).collect::<HashSet<_>>();
    assert_eq!(hrefs.len(), articles.len());
}

#[test]
fn nav_links_include_greetings_app() {
    assert!(nav_links().iter().any(|link| link.href == "/"));
}
