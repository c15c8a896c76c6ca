use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub access_ttl_min: i64,
    pub refresh_ttl_days: i64,
    pub token_length: usize,
    pub token_ttl_min: i64,
    pub items_per_page: i64,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;
        let jwt_refresh_secret = env_required("JWT_REFRESH_SECRET")?;

        let access_ttl_min = parse_i64("ECCLESIA_ACCESS_TTL_MIN", "60")?;
        let refresh_ttl_days = parse_i64("ECCLESIA_REFRESH_TTL_DAYS", "7")?;
        let token_ttl_min = parse_i64("ECCLESIA_TOKEN_TTL_MIN", "30")?;
        let items_per_page = parse_i64("ECCLESIA_ITEMS_PER_PAGE", "20")?;

        let token_length: usize = env_or("ECCLESIA_TOKEN_LENGTH", "8")
            .parse()
            .map_err(|e| format!("Invalid ECCLESIA_TOKEN_LENGTH: {e}"))?;

        let host: IpAddr = env_or("ECCLESIA_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ECCLESIA_HOST: {e}"))?;

        let port: u16 = env_or("ECCLESIA_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid ECCLESIA_PORT: {e}"))?;

        let max_body_size: usize = env_or("ECCLESIA_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid ECCLESIA_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("ECCLESIA_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("ECCLESIA_SMTP_HOST").ok(),
            std::env::var("ECCLESIA_SMTP_PORT").ok(),
            std::env::var("ECCLESIA_SMTP_USER").ok(),
            std::env::var("ECCLESIA_SMTP_PASS").ok(),
            std::env::var("ECCLESIA_SMTP_FROM").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid ECCLESIA_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
            }),
            _ => None,
        };

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_refresh_secret,
            access_ttl_min,
            refresh_ttl_days,
            token_length,
            token_ttl_min,
            items_per_page,
            host,
            port,
            max_body_size,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_i64(key: &str, default: &str) -> Result<i64, String> {
    env_or(key, default)
        .parse()
        .map_err(|e| format!("Invalid {key}: {e}"))
}
