use crate::inspection::domain::{DependencyReasons, InstalledPackage};
use crate::inspection::services::ReasonParser;
use crate::ports::outbound::{CommandRunner, Listing, PackageManager};
use crate::shared::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    installed: Vec<RawInstalledPackage>,
}

#[derive(Debug, Deserialize)]
struct RawInstalledPackage {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    latest: Option<String>,
    #[serde(default, rename = "latest-status")]
    latest_status: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// ComposerBinary adapter implementing the PackageManager port
///
/// Translates listing and reason queries into composer commands executed
/// through a [`CommandRunner`].
pub struct ComposerBinary<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ComposerBinary<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn listing_args(listing: Listing) -> &'static [&'static str] {
        match listing {
            Listing::All => &["show", "--latest", "--no-dev", "--format=json"],
            Listing::Outdated => &["show", "--outdated", "--latest", "--no-dev", "--format=json"],
            Listing::Root => &["show", "--direct", "--no-dev", "--format=json"],
        }
    }

    /// Reads the `installed` key of a structured listing. Empty or malformed
    /// output yields no packages; records without a name or version are skipped.
    pub fn parse_listing(output: &str) -> Vec<InstalledPackage> {
        let Ok(listing) = serde_json::from_str::<RawListing>(output.trim()) else {
            return Vec::new();
        };

        listing
            .installed
            .into_iter()
            .filter_map(|raw| {
                Some(InstalledPackage {
                    name: raw.name?,
                    version: raw.version?,
                    latest: raw.latest,
                    latest_status: raw.latest_status,
                    description: raw.description,
                })
            })
            .collect()
    }
}

impl<R: CommandRunner> PackageManager for ComposerBinary<R> {
    fn installed(&self, listing: Listing) -> Result<Vec<InstalledPackage>> {
        let output = self.runner.run(Self::listing_args(listing))?;
        Ok(Self::parse_listing(&output))
    }

    fn reasons(&self, name: &str, latest: &str) -> Result<DependencyReasons> {
        let why = self.runner.run(&["why", name, "--recursive"])?;
        let why_not = self.runner.run(&["why-not", name, latest])?;

        Ok(DependencyReasons {
            requirers: ReasonParser::requirers(&why),
            blockers: ReasonParser::blockers(&why_not),
        })
    }
}
