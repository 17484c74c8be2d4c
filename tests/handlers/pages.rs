use crate::common::{TestApp, page, register_and_login};

#[tokio::test]
async fn test_static_pages_render_their_templates() {
    let app = TestApp::new().await;

    for (path, template) in [
        ("/", "home.html"),
        ("/about", "about.html"),
        ("/services", "services.html"),
        ("/contact", "contact.html"),
    ] {
        let body = page(app.get(path).await).await;
        assert_eq!(body["template"], template);
        assert!(body["context"]["identity"].is_null());
        assert_eq!(body["flashes"], serde_json::json!([]));
    }
}

#[tokio::test]
async fn test_anonymous_browsing_sets_no_cookie() {
    let app = TestApp::new().await;

    let response = app.get("/about").await;

    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_pages_know_who_is_signed_in() {
    let app = TestApp::new().await;
    let (client, _, id) = register_and_login(&app, "patient", "Ravi").await;

    let body = page(app.get_as(&client, "/").await).await;

    assert_eq!(body["context"]["identity"]["user_id"], id.to_string());
    assert_eq!(body["context"]["identity"]["role"], "patient");
}
