use crate::inspection::domain::Vulnerability;
use std::fmt;

/// Status reported by the package manager for the newest known version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LatestStatus {
    UpToDate,
    SemverSafeUpdate,
    UpdatePossible,
    /// Any other value, including non-stable releases and a missing status
    Other(String),
}

impl LatestStatus {
    const NON_STABLE: &'static str = "non-stable";

    /// Parses the raw status; a missing status is treated as non-stable.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("up-to-date") => LatestStatus::UpToDate,
            Some("semver-safe-update") => LatestStatus::SemverSafeUpdate,
            Some("update-possible") => LatestStatus::UpdatePossible,
            Some(other) => LatestStatus::Other(other.to_string()),
            None => LatestStatus::Other(Self::NON_STABLE.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LatestStatus::UpToDate => "up-to-date",
            LatestStatus::SemverSafeUpdate => "semver-safe-update",
            LatestStatus::UpdatePossible => "update-possible",
            LatestStatus::Other(other) => other,
        }
    }

    pub fn is_non_stable(&self) -> bool {
        matches!(self, LatestStatus::Other(other) if other == Self::NON_STABLE)
    }
}

impl fmt::Display for LatestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How safe it is to move from the installed version to the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSafety {
    /// Already on the latest stable version
    Current,
    /// A semver-compatible update is available
    Safe,
    /// A breaking or non-stable update
    Unsafe,
}

/// Raw record of an installed package, as listed by the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
    pub latest: Option<String>,
    pub latest_status: Option<String>,
    pub description: Option<String>,
}

impl InstalledPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            latest: None,
            latest_status: None,
            description: None,
        }
    }

    pub fn with_latest(mut self, latest: impl Into<String>, status: impl Into<String>) -> Self {
        self.latest = Some(latest.into());
        self.latest_status = Some(status.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Why a package is installed, and what prevents it from being upgraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReasons {
    /// Packages that require this one, in the order reported
    pub requirers: Vec<String>,
    /// Raw reasons blocking an upgrade to the latest version
    pub blockers: Vec<String>,
}

/// One normalized record per installed dependency.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    name: String,
    version: String,
    latest: String,
    latest_status: LatestStatus,
    description: String,
    vulnerabilities: Vec<Vulnerability>,
    why: Vec<String>,
    why_not: Vec<String>,
}

impl Dependency {
    /// Normalizes a raw listing record: trailing periods are stripped from the
    /// description and a missing latest version falls back to the installed one.
    pub fn from_installed(package: InstalledPackage) -> Self {
        let latest = package.latest.unwrap_or_else(|| package.version.clone());
        let description = package
            .description
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('.')
            .to_string();

        Self {
            latest_status: LatestStatus::parse(package.latest_status.as_deref()),
            name: package.name,
            version: package.version,
            latest,
            description,
            vulnerabilities: Vec::new(),
            why: Vec::new(),
            why_not: Vec::new(),
        }
    }

    pub fn with_vulnerabilities(mut self, vulnerabilities: Vec<Vulnerability>) -> Self {
        self.vulnerabilities = vulnerabilities;
        self
    }

    pub fn with_reasons(mut self, why: Vec<String>, why_not: Vec<String>) -> Self {
        self.why = why;
        self.why_not = why_not;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn latest(&self) -> &str {
        &self.latest
    }

    pub fn latest_status(&self) -> &LatestStatus {
        &self.latest_status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }

    pub fn why(&self) -> &[String] {
        &self.why
    }

    pub fn why_not(&self) -> &[String] {
        &self.why_not
    }

    pub fn is_up_to_date(&self) -> bool {
        self.latest_status == LatestStatus::UpToDate
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }

    /// Whether the dependency deserves a line in the report.
    pub fn is_reportable(&self) -> bool {
        !self.is_up_to_date() || self.is_vulnerable()
    }

    /// Installed version without the `v` prefix.
    pub fn current_display(&self) -> &str {
        self.version.trim_start_matches('v')
    }

    /// Latest version without the `v` prefix.
    pub fn latest_display(&self) -> &str {
        self.latest.trim_start_matches('v')
    }

    pub fn update_safety(&self) -> UpdateSafety {
        if !self.latest_status.is_non_stable() && self.current_display() == self.latest_display() {
            UpdateSafety::Current
        } else if self.latest_status == LatestStatus::SemverSafeUpdate {
            UpdateSafety::Safe
        } else {
            UpdateSafety::Unsafe
        }
    }
}
