use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub test_database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" => Environment::Production,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            test_database_url: env::var("TEST_DATABASE_URL").ok(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: Environment::parse(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            ),
            log_format: LogFormat::parse(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
        };

        Ok(config)
    }

    /// Database the server binds to: the test target when running under
    /// `ENVIRONMENT=test` and one is configured, otherwise `DATABASE_URL`.
    pub fn database_target(&self) -> &str {
        match (&self.environment, &self.test_database_url) {
            (Environment::Test, Some(url)) => url,
            _ => &self.database_url,
        }
    }
}
