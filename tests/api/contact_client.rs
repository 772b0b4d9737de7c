use crate::helpers::{spawn_app, when_sending_an_email};
use contact_relay::contact_client::ContactClient;
use contact_relay::domain::FormFields;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

fn client(app: &crate::helpers::TestApp) -> ContactClient {
    ContactClient::new(
        format!("{}/send-contact-email", app.address),
        std::time::Duration::from_secs(5),
    )
    .unwrap()
}

fn fields(name: &str) -> FormFields {
    FormFields {
        name: name.into(),
        email: "  ada@example.com ".into(),
        subject: "challenge".into(),
        message: "Need a pwn box".into(),
    }
}

#[tokio::test]
async fn submitting_through_the_client_reaches_the_provider() {
    // Arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let notice = client(&app).submit_with_notice(fields(" Ada ")).await;

    // Assert
    assert_eq!(notice.title, "Message Transmitted");
    let emails = app.sent_emails().await;
    assert_eq!(emails[1]["to"], serde_json::json!(["ada@example.com"]));
}

#[tokio::test]
async fn an_overlong_name_is_caught_before_any_request() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let notice = client(&app).submit_with_notice(fields(&"a".repeat(101))).await;

    // Assert
    assert_eq!(notice.title, "Validation Error");
    assert_eq!(notice.description, "Name must be less than 100 characters");
}

#[tokio::test]
async fn a_provider_failure_is_reported_as_a_transmission_failure() {
    // Arrange
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let notice = client(&app).submit_with_notice(fields("Ada")).await;

    // Assert
    assert_eq!(notice.title, "Transmission Failed");
    assert_eq!(
        notice.description,
        "Failed to send message. Please try again or email directly."
    );
}
