mod categories;
mod contact_client;
mod cors;
mod health_check;
mod helpers;
