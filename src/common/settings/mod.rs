use std::{env, str::FromStr};

use crate::settings::types::{ApplicationSettings, DatabaseSettings, Environment, Settings};

pub mod types;

const TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Loads `env_file_name` if it exists, then builds settings for `APP_ENVIRONMENT`
/// with environment variables taking precedence.
pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    if let Err(e) = dotenvy::from_filename(env_file_name) {
        if !e.not_found() {
            return Err(format!("Failed to fetch env file: {}", e));
        }
    }

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => Ok(get_testing_settings()),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

/// Settings for tests: a private in-memory SQLite database unless
/// `.env.testing` or the environment points somewhere else.
pub fn get_test_settings() -> Settings {
    dotenvy::from_filename(".env.testing").ok();
    get_testing_settings()
}

fn get_testing_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..b.application
        },
        database: DatabaseSettings {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| TEST_DATABASE_URL.to_string()),
            max_connections: 1,
        },
        debug: true,
    }
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            host: env::var("APP_APPLICATION__HOST").unwrap_or(s.application.host),
            port: parse_env_var_or("APP_APPLICATION__PORT", s.application.port)?,
            max_log_files: parse_env_var_or(
                "APP_APPLICATION__MAX_LOG_FILES",
                s.application.max_log_files,
            )?,
            allowed_origins: match env::var("APP_APPLICATION__ALLOWED_ORIGINS") {
                Ok(origins) => parse_origins(&origins),
                Err(_) => s.application.allowed_origins,
            },
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
            max_connections: parse_env_var_or(
                "DATABASE_MAX_CONNECTIONS",
                s.database.max_connections,
            )?,
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
    })
}

/// Comma separated, blanks ignored.
fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}

fn parse_env_var_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| format!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
