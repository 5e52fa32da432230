//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Table that receives applications when `REGISTRATION_TABLE` is unset.
pub const DEFAULT_REGISTRATION_TABLE: &str = "reg25";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Supabase project
    /// Example: https://abcdefgh.supabase.co
    pub supabase_url: Option<String>,

    /// Public anon key of the Supabase project
    pub supabase_anon_key: Option<String>,

    /// Table that receives one row per application
    pub registration_table: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            supabase_url: lookup("SUPABASE_URL").map(|url| url.trim_end_matches('/').to_string()),
            supabase_anon_key: lookup("SUPABASE_ANON_KEY"),
            registration_table: lookup("REGISTRATION_TABLE")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REGISTRATION_TABLE.to_string()),
        }
    }

    /// Check if the Supabase URL is configured
    pub fn has_supabase_url(&self) -> bool {
        self.supabase_url.as_ref().is_some_and(|u| !u.is_empty())
    }

    /// Check if the Supabase key is configured
    pub fn has_supabase_key(&self) -> bool {
        self.supabase_anon_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if applications can be stored
    pub fn is_store_configured(&self) -> bool {
        self.has_supabase_url() && self.has_supabase_key()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
