/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWTs. Env var: `SECRET_KEY`.
    pub secret_key: String,
    /// TCP port to listen on (default 8080). Env var: `PORT`.
    pub port: u16,
    /// Opaque value echoed back by the stub endpoints. Env var: `UNIQUE_KEY`.
    pub unique_key: Option<String>,
    /// Token lifetime in seconds. Unset means tokens never expire. Env var: `TOKEN_TTL_SECS`.
    pub token_ttl_secs: Option<u64>,
    /// bcrypt work factor (default 12). Env var: `BCRYPT_COST`.
    pub bcrypt_cost: u32,
    /// Apply pending migrations before serving. Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            secret_key: std::env::var("SECRET_KEY").expect("SECRET_KEY"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            unique_key: std::env::var("UNIQUE_KEY").ok(),
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            bcrypt_cost: bcrypt_cost(std::env::var("BCRYPT_COST").ok().as_deref()),
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

/// bcrypt only accepts costs in this range; anything else fails every hash.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

fn bcrypt_cost(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return bcrypt::DEFAULT_COST;
    };
    match raw.trim().parse::<u32>() {
        Ok(cost) if BCRYPT_COST_RANGE.contains(&cost) => cost,
        _ => panic!("BCRYPT_COST must be an integer in 4..=31, got {raw:?}"),
    }
}
