use crate::inspection::domain::Advisory;
use crate::ports::outbound::AdvisoryFeed;
use crate::shared::Result;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Packagist security-advisories client
///
/// One GET request per batch of package names.
///
/// # Security
/// - Package names are URL-encoded
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests; the caller degrades to no advisories
pub struct PackagistAdvisoryFeed {
    client: Client,
    api_url: String,
}

impl PackagistAdvisoryFeed {
    const API_ENDPOINT: &'static str = "https://packagist.org/api/security-advisories";
    const TIMEOUT_SECONDS: u64 = 30;

    /// Environment variable overriding the advisory endpoint
    pub const ENDPOINT_ENV: &'static str = "PATROL_ADVISORY_URL";

    /// Creates a new Packagist client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_endpoint(Self::API_ENDPOINT)
    }

    /// Creates a client for the endpoint named by `PATROL_ADVISORY_URL`,
    /// or the public Packagist API when it is unset or blank
    pub fn from_env() -> Result<Self> {
        Self::with_endpoint(Self::resolve_endpoint(
            std::env::var(Self::ENDPOINT_ENV).ok(),
        ))
    }

    fn resolve_endpoint(configured: Option<String>) -> String {
        configured
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::API_ENDPOINT.to_string())
    }

    /// Creates a client querying another endpoint (mirrors, tests)
    pub fn with_endpoint(api_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("patrol/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Builds the query URL: `<endpoint>?packages[]=a&packages[]=b`
    fn batch_url(&self, packages: &[String]) -> String {
        let query = packages
            .iter()
            .map(|name| format!("packages[]={}", urlencoding::encode(name)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.api_url, query)
    }

    /// Converts a response body into domain advisories
    pub fn parse_response(body: &str) -> Result<Vec<Advisory>> {
        let response: PackagistResponse = serde_json::from_str(body)?;
        Ok(response.into_advisories())
    }
}

impl AdvisoryFeed for PackagistAdvisoryFeed {
    fn fetch(&self, packages: &[String]) -> Result<Vec<Advisory>> {
        if packages.is_empty() {
            return Ok(Vec::new());
        }

        let response = self.client.get(self.batch_url(packages)).send()?;

        if !response.status().is_success() {
            anyhow::bail!("Packagist API returned status code {}", response.status());
        }

        let body = response.text()?;
        Self::parse_response(&body)
    }
}

// Packagist API response types

#[derive(Debug, Deserialize)]
struct PackagistResponse {
    #[serde(default)]
    advisories: AdvisoryMap,
}

impl PackagistResponse {
    fn into_advisories(self) -> Vec<Advisory> {
        match self.advisories {
            AdvisoryMap::ByPackage(map) => map
                .into_values()
                .flatten()
                .map(PackagistAdvisory::into_domain)
                .collect(),
            AdvisoryMap::Empty(_) => Vec::new(),
        }
    }
}

/// `advisories` is an object keyed by package name, or `[]` when nothing matched
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AdvisoryMap {
    ByPackage(BTreeMap<String, Vec<PackagistAdvisory>>),
    Empty(Vec<serde_json::Value>),
}

impl Default for AdvisoryMap {
    fn default() -> Self {
        AdvisoryMap::Empty(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackagistAdvisory {
    package_name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    reported_at: String,
    #[serde(default)]
    affected_versions: String,
    #[serde(default)]
    cve: Option<String>,
}

impl PackagistAdvisory {
    fn into_domain(self) -> Advisory {
        Advisory {
            package_name: self.package_name,
            title: self.title,
            link: self.link,
            reported_at: self.reported_at,
            affected_versions: self.affected_versions,
            cve: self.cve.filter(|cve| !cve.is_empty()),
        }
    }
}
