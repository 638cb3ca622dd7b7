use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub image_host: ImageHostConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: env::var("REDIS_HOST")?,
            port: env::var("REDIS_PORT")?.parse()?,
        };
        let auth = AuthConfig {
            ttl: match env::var("AUTH_TOKEN_TTL") {
                Ok(ttl) => ttl.parse()?,
                Err(_) => 86400,
            },
        };
        let image_host = ImageHostConfig {
            endpoint: env::var("IMAGE_HOST_ENDPOINT")
                .unwrap_or_else(|_| "https://api.imgbb.com/1/upload".into()),
            api_key: env::var("IMAGE_HOST_API_KEY").ok(),
        };
        Ok(Self {
            database,
            redis,
            auth,
            image_host,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    /// Access token lifetime in seconds.
    pub ttl: u64,
}

pub struct ImageHostConfig {
    pub endpoint: String,
    /// Uploads are skipped entirely when no key is configured.
    pub api_key: Option<String>,
}
