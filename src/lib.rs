pub mod client;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{email_service::EmailService, submission_service::SubmissionService};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub submission_service: SubmissionService,
    pub email_service: EmailService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::new();

        let submission_service = SubmissionService::new(pool.clone());
        let email_service = EmailService::new(
            http_client,
            config.resend_api_key.clone(),
            config.email_from.clone(),
            config.assessor_recipients(),
        );

        Self {
            pool,
            submission_service,
            email_service,
        }
    }
}
