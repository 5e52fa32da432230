//! Supabase (PostgREST) registration store
//!
//! Inserts one row per application via `POST /rest/v1/{table}`.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::core::config::Config;
use crate::core::registration::{Registration, RegistrationStore, StoreError};

/// Registration store backed by a Supabase table.
#[derive(Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl SupabaseStore {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        let endpoint = config
            .supabase_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| insert_endpoint(url, &config.registration_table));

        Self {
            client,
            endpoint,
            api_key: config.supabase_anon_key.clone().filter(|k| !k.is_empty()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(reqwest::Client::new(), config)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.api_key.is_some()
    }

    /// Insert a single row.
    pub async fn insert_row(&self, registration: &Registration) -> Result<(), StoreError> {
        let (Some(endpoint), Some(api_key)) = (self.endpoint.as_deref(), self.api_key.as_deref())
        else {
            return Err(StoreError::NotConfigured);
        };

        let response = self
            .client
            .post(endpoint)
            .header("apikey", api_key)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=minimal")
            .json(&[registration])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Supabase request failed: {}", e);
                StoreError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(
                "Stored application for {} ({})",
                registration.registration_number,
                registration.interested_domain
            );
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Supabase rejected insert: status={}, body={}", status, body);
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

impl RegistrationStore for SupabaseStore {
    async fn insert(&self, registration: &Registration) -> Result<(), StoreError> {
        self.insert_row(registration).await
    }
}

/// PostgREST insert URL for `table`.
pub fn insert_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}
