use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const FALLBACK_ASSESSOR_EMAIL: &str = "assessor@example.com";
const DEFAULT_EMAIL_FROM: &str = "Assessment Platform <onboarding@resend.dev>";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub resend_api_key: String,
    pub email_from: String,
    pub assessor_emails: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            resend_api_key: env::var("RESEND_API_KEY").unwrap_or_default(),
            email_from: env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string()),
            assessor_emails: env::var("ASSESSOR_EMAIL").ok(),
        })
    }

    /// Assessor recipients, split on commas with per-entry whitespace trimmed.
    /// Falls back to a single placeholder address when unset or empty.
    pub fn assessor_recipients(&self) -> Vec<String> {
        let recipients: Vec<String> = self
            .assessor_emails
            .as_deref()
            .unwrap_or(FALLBACK_ASSESSOR_EMAIL)
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect();

        if recipients.is_empty() {
            vec![FALLBACK_ASSESSOR_EMAIL.to_string()]
        } else {
            recipients
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_assessors(assessor_emails: Option<&str>) -> Config {
        Config {
            server_address: "127.0.0.1:0".into(),
            database_url: "postgres://localhost/test".into(),
            resend_api_key: String::new(),
            email_from: DEFAULT_EMAIL_FROM.into(),
            assessor_emails: assessor_emails.map(String::from),
        }
    }

    #[test]
    fn splits_and_trims_assessor_list() {
        let config = config_with_assessors(Some("a@example.com, b@example.com ,c@example.com"));
        assert_eq!(
            config.assessor_recipients(),
            vec!["a@example.com", "b@example.com", "c@example.com"]
        );
    }

    #[test]
    fn falls_back_when_unset() {
        let config = config_with_assessors(None);
        assert_eq!(config.assessor_recipients(), vec![FALLBACK_ASSESSOR_EMAIL]);
    }

    #[test]
    fn falls_back_when_blank() {
        let config = config_with_assessors(Some(" , "));
        assert_eq!(config.assessor_recipients(), vec![FALLBACK_ASSESSOR_EMAIL]);
    }
}
