use actix_web::cookie::Key;

use crate::errors::AppError;

/// Minimum length `Key::from` accepts.
const SESSION_KEY_MIN_LEN: usize = 64;

/// Server settings read from the environment (and `.env`, if present).
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub session_key: Key,
    pub static_dir: String,
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; `lookup` returns `None` for unset names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("REUSEIT_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("REUSEIT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("REUSEIT_PORT '{raw}': {e}")))?,
            None => 8080,
        };

        // Load from SESSION_KEY for sessions that survive restarts
        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= SESSION_KEY_MIN_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {SESSION_KEY_MIN_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        };

        let static_dir = lookup("REUSEIT_STATIC_DIR").unwrap_or_else(|| "./static".to_string());

        let cookie_secure = match lookup("REUSEIT_COOKIE_SECURE").as_deref().map(str::trim) {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "REUSEIT_COOKIE_SECURE must be true or false, got '{other}'"
                )));
            }
        };

        Ok(Self { host, port, session_key, static_dir, cookie_secure })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = load(&[]).expect("defaults");
        assert_eq!(cfg.bind_addr(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(cfg.static_dir, "./static");
        assert!(!cfg.cookie_secure);
    }

    #[test]
    fn reads_overrides() {
        let cfg = load(&[
            ("REUSEIT_HOST", "0.0.0.0"),
            ("REUSEIT_PORT", "3000"),
            ("REUSEIT_STATIC_DIR", "/srv/static"),
            ("REUSEIT_COOKIE_SECURE", "true"),
        ])
        .expect("overrides");
        assert_eq!(cfg.bind_addr(), ("0.0.0.0".to_string(), 3000));
        assert_eq!(cfg.static_dir, "/srv/static");
        assert!(cfg.cookie_secure);
    }

    #[test]
    fn long_session_key_is_used_verbatim() {
        let secret = "k".repeat(64);
        let a = load(&[("SESSION_KEY", secret.as_str())]).expect("key a");
        let b = load(&[("SESSION_KEY", secret.as_str())]).expect("key b");
        assert_eq!(a.session_key.master(), b.session_key.master());
    }

    #[test]
    fn short_session_key_falls_back_to_random() {
        let a = load(&[("SESSION_KEY", "short")]).expect("key a");
        let b = load(&[("SESSION_KEY", "short")]).expect("key b");
        assert_ne!(a.session_key.master(), b.session_key.master());
    }

    #[test]
    fn rejects_bad_port() {
        assert!(matches!(load(&[("REUSEIT_PORT", "eighty")]), Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_bad_cookie_flag() {
        assert!(matches!(load(&[("REUSEIT_COOKIE_SECURE", "maybe")]), Err(AppError::Config(_))));
    }
}
