use crate::auth::jwt::JwtConfig;

/// Optional first account seeded at startup.
///
/// Creating users requires a bearer token, so on an empty database this
/// account is the only way to obtain the first token.
#[derive(Debug, Clone)]
pub struct BootstrapUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// Built once in `main` and handed to the router through [`AppState`](crate::state::AppState).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Path prefix every API route is mounted under (default: `/fastapi`).
    pub api_prefix: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `10`).
    pub database_max_connections: u32,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Account created on startup if it does not exist yet.
    pub bootstrap_user: Option<BootstrapUser>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default     |
    /// |----------------------------|-------------|
    /// | `HOST`                     | `0.0.0.0`   |
    /// | `PORT`                     | `8000`      |
    /// | `API_PREFIX`               | `/fastapi`  |
    /// | `CORS_ORIGINS`             | `*`         |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`        |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`        |
    /// | `BOOTSTRAP_USERNAME`       | unset       |
    /// | `BOOTSTRAP_EMAIL`          | unset       |
    /// | `BOOTSTRAP_PASSWORD`       | unset       |
    ///
    /// # Panics
    ///
    /// Panics on unparsable numeric values or a missing `JWT_SECRET`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let api_prefix =
            normalize_prefix(&std::env::var("API_PREFIX").unwrap_or_else(|_| "/fastapi".into()));

        let cors_origins =
            parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let jwt = JwtConfig::from_env();

        let bootstrap_user = match (
            std::env::var("BOOTSTRAP_USERNAME"),
            std::env::var("BOOTSTRAP_EMAIL"),
            std::env::var("BOOTSTRAP_PASSWORD"),
        ) {
            (Ok(name), Ok(email), Ok(password)) if !name.is_empty() && !password.is_empty() => {
                Some(BootstrapUser {
                    name,
                    email,
                    password,
                })
            }
            _ => None,
        };

        Self {
            host,
            port,
            api_prefix,
            cors_origins,
            request_timeout_secs,
            database_max_connections,
            jwt,
            bootstrap_user,
        }
    }

    /// Whether the CORS configuration allows any origin.
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Ensure the prefix starts with `/` and has no trailing `/`.
///
/// An empty result means routes are mounted at the root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn wildcard_origin_is_detected() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            api_prefix: "/fastapi".into(),
            cors_origins: parse_origins("*"),
            request_timeout_secs: 30,
            database_max_connections: 1,
            jwt: JwtConfig::new("secret"),
            bootstrap_user: None,
        };
        assert!(config.cors_allows_any());
    }

    #[test]
    fn prefix_is_normalized() {
        assert_eq!(normalize_prefix("fastapi"), "/fastapi");
        assert_eq!(normalize_prefix("/fastapi/"), "/fastapi");
        assert_eq!(normalize_prefix("/api/v1"), "/api/v1");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }
}
