use contact_relay::configuration::get_configuration;
use contact_relay::startup::Application;
use contact_relay::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer, Request};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).unwrap();
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
    };
});

pub const OWNER_EMAIL: &str = "owner@example.com";

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/send-contact-email", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_contact(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/send-contact-email", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn preflight(&self, route: &str) -> reqwest::Response {
        self.api_client
            .request(reqwest::Method::OPTIONS, &format!("{}{}", &self.address, route))
            .header("Origin", "https://portfolio.example")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn sent_emails(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.authorization_token = Secret::new("re_test_token".into());
        c.email_client.timeout_milliseconds = 500;
        c.contact.owner_email = OWNER_EMAIL.into();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let client = reqwest::Client::builder().build().unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        email_server,
        api_client: client,
    }
}

pub fn when_sending_an_email() -> MockBuilder {
    Mock::given(path("/emails")).and(method("POST"))
}

/// Matches provider requests addressed to a single recipient.
pub struct RecipientMatcher(pub &'static str);

impl wiremock::Match for RecipientMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<serde_json::Value>(&request.body)
            .map(|body| body["to"] == serde_json::json!([self.0]))
            .unwrap_or(false)
    }
}

pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "challenge",
        "message": "Need a pwn box"
    })
}
