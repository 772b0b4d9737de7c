pub mod configuration;
pub mod contact_client;
pub mod cors;
pub mod dispatcher;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
pub mod utils;
