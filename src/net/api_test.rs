use super::*;
use crate::config::ClientConfig;

// =============================================================
// Status handling
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    for status in [199, 300, 302, 401, 404, 500] {
        assert_eq!(check_status(status), Err(ApiError::Status(status)));
    }
}

#[test]
fn api_error_status_only_for_status_variant() {
    assert_eq!(ApiError::Status(404).status(), Some(404));
    assert_eq!(ApiError::Transport("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(401).to_string(), "server responded with status 401");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
}

// =============================================================
// Resource URLs
// =============================================================

#[test]
fn resource_url_joins_base_and_path() {
    assert_eq!(Resource::new("/v1/greetings", "/api").url(), "/api/v1/greetings");
    assert_eq!(Resource::new("", "/auth").url(), "/auth");
    assert_eq!(Resource::new("/users", "/auth").url(), "/auth/users");
}

#[test]
fn resource_item_url_appends_id_when_present() {
    let resource = Resource::new("/v1/greetings", "/api");
    assert_eq!(resource.item_url(Some("0")), "/api/v1/greetings/0");
    assert_eq!(resource.item_url(Some("17")), "/api/v1/greetings/17");
}

#[test]
fn resource_item_url_without_id_targets_collection() {
    let resource = Resource::new("", "/auth");
    assert_eq!(resource.item_url(None), "/auth");
    assert_eq!(resource.item_url(Some("")), "/auth");
}

#[test]
fn endpoints_follow_config_bases() {
    let endpoints = Endpoints::from_config(&ClientConfig::default());
    assert_eq!(endpoints.auth.url(), "/auth");
    assert_eq!(endpoints.auth_users.url(), "/auth/users");
    assert_eq!(endpoints.greetings.url(), "/api/v1/greetings");

    let custom = ClientConfig::from_values(Some("/backend"), Some("/session"), None).unwrap();
    let endpoints = Endpoints::from_config(&custom);
    assert_eq!(endpoints.auth_users.url(), "/session/users");
    assert_eq!(endpoints.greetings.item_url(Some("5")), "/backend/v1/greetings/5");
}

// =============================================================
// Current-user body
// =============================================================

#[test]
fn parse_current_user_empty_or_null_means_signed_out() {
    assert_eq!(parse_current_user(""), Ok(None));
    assert_eq!(parse_current_user("  \n"), Ok(None));
    assert_eq!(parse_current_user("null"), Ok(None));
}

#[test]
fn parse_current_user_decodes_user() {
    let user = parse_current_user(r#"{"username":"alice","companyId":"acme","isAdmin":false}"#).unwrap();
    assert_eq!(
        user,
        Some(AuthUser { username: "alice".to_owned(), company_id: "acme".to_owned(), is_admin: false })
    );
}

#[test]
fn parse_current_user_rejects_garbage() {
    assert!(matches!(parse_current_user("<html>"), Err(ApiError::Decode(_))));
}

// =============================================================
// Non-browser behavior
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_outside_browser() {
    let endpoints = Endpoints::from_config(&ClientConfig::default());
    futures::executor::block_on(async {
        assert_eq!(endpoints.list_greetings().await, Err(ApiError::Unavailable));
        assert_eq!(endpoints.current_user().await, Err(ApiError::Unavailable));
        assert_eq!(endpoints.logout().await, Err(ApiError::Unavailable));
        assert_eq!(endpoints.delete_greeting(1).await, Err(ApiError::Unavailable));
        let request = CreateGreetingRequest { message: "hi".to_owned() };
        assert_eq!(endpoints.create_greeting(&request).await, Err(ApiError::Unavailable));
    });
}
