use std::env;
use std::net::SocketAddr;

use chrono::{FixedOffset, Offset, Utc};
use tracing::warn;

/// India Standard Time, the clinic's home offset.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rpc_base_url: String,
    pub rpc_api_key: String,
    pub jwt_secret: String,
    pub utc_offset_minutes: i32,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            rpc_base_url: env::var("CLINIC_RPC_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| {
                    warn!("CLINIC_RPC_URL not set, using empty value");
                    String::new()
                }),
            rpc_api_key: env::var("CLINIC_RPC_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_RPC_API_KEY not set, using empty value");
                    String::new()
                }),
            jwt_secret: env::var("CLINIC_JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_JWT_SECRET not set, every request will be anonymous");
                    String::new()
                }),
            utc_offset_minutes: env::var("CLINIC_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|raw| match raw.parse::<i32>() {
                    Ok(minutes) if offset_from_minutes(minutes).is_some() => Some(minutes),
                    _ => {
                        warn!("CLINIC_UTC_OFFSET_MINUTES is invalid ({}), using default", raw);
                        None
                    }
                })
                .unwrap_or(DEFAULT_UTC_OFFSET_MINUTES),
            bind_addr: env::var("BIND_ADDR")
                .ok()
                .and_then(|raw| match raw.parse::<SocketAddr>() {
                    Ok(addr) => Some(addr),
                    Err(_) => {
                        warn!("BIND_ADDR is invalid ({}), using default", raw);
                        None
                    }
                })
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000))),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.rpc_base_url.is_empty() && !self.jwt_secret.is_empty()
    }

    /// Offset used for "today" and for turning a picked date + slot into a timestamp.
    pub fn clinic_offset(&self) -> FixedOffset {
        offset_from_minutes(self.utc_offset_minutes).unwrap_or_else(|| Utc.fix())
    }
}

fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_offset_from_minutes() {
        let config = AppConfig {
            rpc_base_url: "http://localhost:4000".to_string(),
            rpc_api_key: String::new(),
            jwt_secret: "secret".to_string(),
            utc_offset_minutes: 330,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        assert_eq!(config.clinic_offset().local_minus_utc(), 330 * 60);
        assert!(config.is_configured());
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        let config = AppConfig {
            rpc_base_url: String::new(),
            rpc_api_key: String::new(),
            jwt_secret: String::new(),
            utc_offset_minutes: 60 * 48,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        assert_eq!(config.clinic_offset().local_minus_utc(), 0);
        assert!(!config.is_configured());
    }
}
