//! Environment-driven configuration.
//!
//! Everything has a default; the service starts with no environment at all.
//!
//! | Variable       | Default        | Meaning |
//! |----------------|----------------|---------|
//! | `BLOGD_ADDR`   | `0.0.0.0:8080` | socket address to bind |
//! | `BLOGD_KEYING` | `uuid`         | store keying mode: `uuid` or `slug` |

use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::Error;
use crate::store::Keying;

/// Runtime configuration, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub keying: Keying,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; set-but-invalid values are a
    /// startup error rather than a silent fallback.
    pub fn from_env() -> Result<Self, Error> {
        let addr = match std::env::var("BLOGD_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("BLOGD_ADDR: invalid socket address `{raw}`")))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let keying = match std::env::var("BLOGD_KEYING") {
            Ok(raw) => Keying::from_str(&raw)
                .map_err(|_| Error::Config(format!("BLOGD_KEYING: expected `uuid` or `slug`, got `{raw}`")))?,
            Err(_) => Keying::Uuid,
        };

        Ok(Self { addr, keying })
    }
}
