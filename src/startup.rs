use crate::configuration::Settings;
use crate::cors::permissive_cors;
use crate::dispatcher::ContactDispatcher;
use crate::routes::{health_check, json_error_handler, list_categories, send_contact_email};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_lab::middleware::from_fn;
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration
            .email_client
            .client()
            .context("Failed to build the email provider client")?;
        let dispatcher = ContactDispatcher::new(email_client, configuration.contact)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, dispatcher)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, dispatcher: ContactDispatcher) -> Result<Server, anyhow::Error> {
    let dispatcher = web::Data::new(dispatcher);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(permissive_cors))
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health_check", web::get().to(health_check))
            .route("/contact/categories", web::get().to(list_categories))
            .route("/send-contact-email", web::post().to(send_contact_email))
            .app_data(dispatcher.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
