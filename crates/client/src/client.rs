//! ASoC HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required).
//! Covers the provisioning flow: login → find app → default group → create.

use std::time::Duration;

use serde::Deserialize;

/// Production API base. Override per client for test servers or
/// on-prem deployments.
pub const DEFAULT_API_BASE: &str = "https://cloud.appscan.com";

/// ASoC API client (blocking).
#[derive(Clone, Debug)]
pub struct AsocClient {
    http: reqwest::blocking::Client,
    api_base: String,
    token: String,
}

/// Error type for ASoC operations.
#[derive(Debug)]
pub enum AsocError {
    /// Network error
    Network(String),
    /// Unexpected HTTP status, with the response body
    Http(u16, String),
    /// JSON parsing error
    Parse(String),
}

impl std::fmt::Display for AsocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsocError::Network(msg) => write!(f, "Network error: {}", msg),
            AsocError::Http(code, body) => write!(f, "HTTP {}: {}", code, body),
            AsocError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AsocError {}

/// Application record from the Apps API.
///
/// The service returns many more fields; only the ones the flow reads
/// are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "AssetGroupId", default)]
    pub asset_group_id: Option<String>,
}

/// Asset group record from the AssetGroups API.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetGroupInfo {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "IsDefault", default)]
    pub is_default: bool,
}

impl AsocClient {
    /// Authenticate with an API key pair and return a ready client.
    ///
    /// POST /api/v2/Account/ApiKeyLogin with `{KeyId, KeySecret}`;
    /// the returned `Token` is attached as a bearer header to every
    /// subsequent call. Valid for this process run only.
    pub fn login(
        api_base: impl Into<String>,
        key_id: &str,
        key_secret: &str,
    ) -> Result<Self, AsocError> {
        let api_base = api_base.into();
        let http = build_http();

        let url = format!("{}/api/v2/Account/ApiKeyLogin", api_base);
        let response = http
            .post(&url)
            .json(&serde_json::json!({ "KeyId": key_id, "KeySecret": key_secret }))
            .send()
            .map_err(|e| AsocError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().unwrap_or_default();
            return Err(AsocError::Http(status, body));
        }

        let json: serde_json::Value =
            response.json().map_err(|e| AsocError::Parse(e.to_string()))?;
        let token = json["Token"]
            .as_str()
            .ok_or_else(|| AsocError::Parse("Missing Token in login response".into()))?
            .to_string();

        Ok(Self { http, api_base, token })
    }

    /// Create a client from an existing bearer token.
    pub fn with_token(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: build_http(),
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    /// Applications whose name exactly matches `name`.
    pub fn apps_by_name(&self, name: &str) -> Result<Vec<AppInfo>, AsocError> {
        let url = format!("{}/api/v2/Apps", self.api_base);
        let filter = format!("Name eq '{}'", odata_quote(name));
        let resp = self.get(&url, &[("$filter", filter.as_str())])?;
        resp.json::<Vec<AppInfo>>()
            .map_err(|e| AsocError::Parse(e.to_string()))
    }

    /// Asset groups flagged as the account default.
    pub fn default_asset_groups(&self) -> Result<Vec<AssetGroupInfo>, AsocError> {
        // The service publishes this path with a capital V2.
        let url = format!("{}/api/V2/AssetGroups", self.api_base);
        let resp = self.get(&url, &[("$filter", "IsDefault eq true")])?;
        resp.json::<Vec<AssetGroupInfo>>()
            .map_err(|e| AsocError::Parse(e.to_string()))
    }

    /// Create an application in the given asset group. Returns the new id.
    ///
    /// The service answers 201 on success; every other status is an error.
    pub fn create_app(
        &self,
        name: &str,
        asset_group_id: &str,
        business_impact: Option<&str>,
    ) -> Result<String, AsocError> {
        let url = format!("{}/api/v2/Apps", self.api_base);

        let mut body = serde_json::json!({
            "Name": name,
            "AssetGroupId": asset_group_id,
        });
        if let Some(impact) = business_impact {
            body["BusinessImpact"] = serde_json::Value::String(impact.to_string());
        }

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(|e| AsocError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 201 {
            let body = response.text().unwrap_or_default();
            return Err(AsocError::Http(status, body));
        }

        let json: serde_json::Value =
            response.json().map_err(|e| AsocError::Parse(e.to_string()))?;
        json_str(&json, "Id")
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::blocking::Response, AsocError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .map_err(|e| AsocError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().unwrap_or_default();
            return Err(AsocError::Http(status, body));
        }

        Ok(response)
    }
}

// ── Free functions ──────────────────────────────────────────────────

fn build_http() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("asoc/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .expect("failed to build HTTP client")
}

/// Escape a value for an OData string literal (single quotes doubled).
fn odata_quote(value: &str) -> String {
    value.replace('\'', "''")
}

fn json_str(json: &serde_json::Value, key: &str) -> Result<String, AsocError> {
    json[key]
        .as_str()
        .map(String::from)
        .or_else(|| json[key].as_i64().map(|n| n.to_string()))
        .ok_or_else(|| AsocError::Parse(format!("Missing {} in response", key)))
}
