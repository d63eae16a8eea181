// Startup configuration read from the environment, the same way the
// API client used to pick up its gateway URL. Nothing here is persisted.

/// First page of the location-area listing on the public PokeAPI.
pub const DEFAULT_START_URL: &str = "https://pokeapi.co/api/v2/location-area/";

/// Log filter used when `POKEDEX_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const START_URL_VAR: &str = "POKEDEX_START_URL";
pub const LOG_FILTER_VAR: &str = "POKEDEX_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL the forward cursor is seeded with.
    pub start_url: String,
    /// `env_logger` filter directive.
    pub log_filter: String,
}

impl Config {
    /// Read `POKEDEX_START_URL` and `POKEDEX_LOG`, falling back to the
    /// defaults for anything unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Config {
            start_url: read(START_URL_VAR, DEFAULT_START_URL),
            log_filter: read(LOG_FILTER_VAR, DEFAULT_LOG_FILTER),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
