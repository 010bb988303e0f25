use std::env::var;
use std::time::Duration;

use dotenvy::dotenv;

use crate::application::services::jwt::JwtServiceConfig;

const DEFAULT_ACCESS_TTL_SECS: u64 = 900;
const DEFAULT_REFRESH_TTL_SECS: u64 = 14 * 24 * 60 * 60;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub database_url: String,
    pub jwt: JwtServiceConfig,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            database_url: var("DATABASE_URL")
                .map_err(|_| "An error occured while getting DATABASE_URL env param")?,
            jwt: JwtServiceConfig {
                secret: var("JWT_SECRET")
                    .map_err(|_| "An error occured while getting JWT_SECRET env param")?,
                access_ttl: duration_var("JWT_ACCESS_TTL_SECS", DEFAULT_ACCESS_TTL_SECS)?,
                refresh_ttl: duration_var("JWT_REFRESH_TTL_SECS", DEFAULT_REFRESH_TTL_SECS)?,
            },
        })
    }
}

fn duration_var(name: &str, default_secs: u64) -> Result<Duration, &'static str> {
    match var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| "An error occured while parsing a TTL env param"),
        Err(_) => Ok(Duration::from_secs(default_secs)),
    }
}
