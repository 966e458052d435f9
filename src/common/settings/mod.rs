use std::env;

use crate::settings::types::{
    ApplicationSettings, DatabaseSettings, Environment, RedisSettings, SecretSettings, Settings,
};

pub mod types;

/// Secret used for signing session cookies in tests. `cookie::Key` needs at least 64 bytes.
const TESTING_HMAC_SECRET: &str =
    "notebook-testing-hmac-secret-which-is-long-enough-for-cookie-keys-0123456789";

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e.to_string()))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => Ok(get_testing_settings()),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => return Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

/// Settings for the test suite. An `.env.testing` file is optional.
pub fn get_test_settings() -> Settings {
    dotenvy::from_filename(".env.testing").ok();
    get_testing_settings()
}

fn get_testing_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1".to_string(),
            media_root: env::var("APP_APPLICATION__MEDIA_ROOT").unwrap_or_else(|_| {
                env::temp_dir()
                    .join("notebook-test-media")
                    .to_string_lossy()
                    .to_string()
            }),
            ..b.application
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        debug: true,
        secret: SecretSettings {
            hmac_secret: TESTING_HMAC_SECRET.to_string(),
        },
        ..b
    }
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1".to_string(),
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
            protocol: "https".to_string(),
            host: "0.0.0.0".to_string(),
            base_url: "".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            port: match env::var("APP_APPLICATION__PORT") {
                Ok(port) => port.parse::<u16>().map_err(|e| e.to_string())?,
                Err(_) => s.application.port,
            },
            media_root: env::var("APP_APPLICATION__MEDIA_ROOT")
                .unwrap_or(s.application.media_root),
            ..s.application
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
            max_connections: match env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(max) => max.parse::<u32>().map_err(|e| e.to_string())?,
                Err(_) => s.database.max_connections,
            },
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        redis: RedisSettings {
            url: get_env_var("REDIS_URL")?,
        },
        secret: SecretSettings {
            hmac_secret: get_env_var("APP_SECRET__HMAC_SECRET")?,
        },
    })
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}
