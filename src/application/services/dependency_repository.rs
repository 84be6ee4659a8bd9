use crate::application::services::AdvisoryClient;
use crate::inspection::domain::{Dependency, DependencyReasons, InstalledPackage};
use crate::ports::outbound::{AdvisoryFeed, Listing, PackageManager};
use crate::shared::{collect, Collection, Result};
use std::cell::OnceCell;

/// Packages whose "outdated" status is known to be noise; never reported.
pub const DEFAULT_EXCLUDED_PACKAGES: &[&str] = &["psr/container"];

/// DependencyRepository - the three views of the project's direct dependencies
///
/// Merges the package manager listings, the "why" reasons and the advisory
/// vulnerabilities into one [`Dependency`] per package. Each view is built
/// once per run; excluded packages never appear in any of them. The "why"
/// queries run once per package of the `all` listing and serve every view.
pub struct DependencyRepository<'a, PM, F> {
    package_manager: &'a PM,
    advisories: &'a AdvisoryClient<'a, F>,
    excluded: Vec<String>,
    all: OnceCell<Collection<Dependency>>,
    outdated: OnceCell<Collection<Dependency>>,
    root: OnceCell<Vec<String>>,
    all_packages: OnceCell<Vec<InstalledPackage>>,
    reasons: OnceCell<Collection<DependencyReasons>>,
}

impl<'a, PM, F> DependencyRepository<'a, PM, F>
where
    PM: PackageManager,
    F: AdvisoryFeed,
{
    /// Creates a repository; `extra_excluded` is added to the built-in exclude list.
    pub fn new(
        package_manager: &'a PM,
        advisories: &'a AdvisoryClient<'a, F>,
        extra_excluded: Vec<String>,
    ) -> Self {
        let mut excluded: Vec<String> = DEFAULT_EXCLUDED_PACKAGES
            .iter()
            .map(|name| name.to_string())
            .collect();
        excluded.extend(extra_excluded);

        Self {
            package_manager,
            advisories,
            excluded,
            all: OnceCell::new(),
            outdated: OnceCell::new(),
            root: OnceCell::new(),
            all_packages: OnceCell::new(),
            reasons: OnceCell::new(),
        }
    }

    /// Every direct, non-dev dependency.
    pub fn all(&self) -> Result<Collection<Dependency>> {
        if let Some(all) = self.all.get() {
            return Ok(all.clone());
        }
        let all = self.load(Listing::All)?;
        Ok(self.all.get_or_init(|| all).clone())
    }

    /// Dependencies with a newer version available.
    pub fn outdated(&self) -> Result<Collection<Dependency>> {
        if let Some(outdated) = self.outdated.get() {
            return Ok(outdated.clone());
        }
        let outdated = self
            .load(Listing::Outdated)?
            .filter(|dependency, _| !dependency.is_up_to_date());
        Ok(self.outdated.get_or_init(|| outdated).clone())
    }

    /// Dependencies of [`Self::all`] that are not outdated.
    pub fn updated(&self) -> Result<Collection<Dependency>> {
        let outdated = self.outdated()?;
        Ok(self.all()?.filter(|dependency, _| {
            outdated
                .find_where(Dependency::name, dependency.name())
                .is_none()
        }))
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|excluded| excluded == name)
    }

    fn root_names(&self) -> Result<&Vec<String>> {
        if let Some(root) = self.root.get() {
            return Ok(root);
        }
        let root = collect(self.package_manager.installed(Listing::Root)?)
            .map(|package, _| package.name.clone())
            .into_vec();
        Ok(self.root.get_or_init(|| root))
    }

    fn all_packages(&self) -> Result<&Vec<InstalledPackage>> {
        if let Some(packages) = self.all_packages.get() {
            return Ok(packages);
        }
        let packages = self.package_manager.installed(Listing::All)?;
        Ok(self.all_packages.get_or_init(|| packages))
    }

    /// Reasons keyed by package name, asked against each package's latest
    /// version as reported by the `all` listing.
    fn reasons(&self) -> Result<&Collection<DependencyReasons>> {
        if let Some(reasons) = self.reasons.get() {
            return Ok(reasons);
        }

        let latest_by_name = collect(self.all_packages()?.iter())
            .filter(|package, _| !self.is_excluded(&package.name))
            .key_by(|package| package.name.clone())
            .map(|package, _| package.latest.clone().unwrap_or_else(|| package.version.clone()));

        let mut reasons = Vec::new();
        for (key, latest) in latest_by_name.iter() {
            if let Some(name) = key.as_name() {
                reasons.push((name, self.package_manager.reasons(name, latest)?));
            }
        }

        Ok(self.reasons.get_or_init(|| Collection::from_pairs(reasons)))
    }

    fn load(&self, listing: Listing) -> Result<Collection<Dependency>> {
        let root = self.root_names()?;
        let reasons_by_name = self.reasons()?;
        let packages = match listing {
            Listing::All => self.all_packages()?.clone(),
            other => self.package_manager.installed(other)?,
        };

        let mut dependencies = Vec::new();
        for package in packages {
            if self.is_excluded(&package.name) {
                continue;
            }

            let dependency = Dependency::from_installed(package);
            let reasons = reasons_by_name
                .get(dependency.name())
                .cloned()
                .unwrap_or_default();
            let why = collect(reasons.requirers)
                .filter(|requirer, _| root.contains(requirer))
                .into_vec();
            let vulnerabilities = self.advisories.vulnerabilities_of(dependency.name());

            dependencies.push(
                dependency
                    .with_vulnerabilities(vulnerabilities)
                    .with_reasons(why, reasons.blockers),
            );
        }

        Ok(collect(dependencies))
    }
}
