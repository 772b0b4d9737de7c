use crate::helpers::{spawn_app, valid_submission};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn preflight_gets_permissive_headers_and_no_body() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.preflight("/send-contact-email").await;

    // Assert
    assert_eq!(204, response.status().as_u16());
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn error_responses_carry_cors_headers_too() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_submission();
    body["name"] = "".into();

    // Act
    let response = app.post_contact(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
