use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Advisory entry as returned by the advisory feed, before it is narrowed to
/// the installed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub package_name: String,
    pub title: String,
    pub link: String,
    pub reported_at: String,
    /// Raw affected-version ranges, clauses separated by `|`
    pub affected_versions: String,
    pub cve: Option<String>,
}

/// An advisory confirmed to affect the installed version of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vulnerability {
    package_name: String,
    title: String,
    link: String,
    reported_at: String,
    affected_versions: String,
    current: String,
    cve: Option<String>,
}

impl Vulnerability {
    /// Narrows `advisory` to the single range `clause` matched by `current`.
    pub fn from_advisory(advisory: &Advisory, clause: String, current: String) -> Self {
        Self {
            package_name: advisory.package_name.clone(),
            title: advisory.title.clone(),
            link: advisory.link.clone(),
            reported_at: advisory.reported_at.clone(),
            affected_versions: clause,
            current,
            cve: advisory.cve.clone(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn reported_at(&self) -> &str {
        &self.reported_at
    }

    /// The matched range clause, not the raw multi-clause string.
    pub fn affected_versions(&self) -> &str {
        &self.affected_versions
    }

    /// The installed version that triggered the match.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn cve(&self) -> Option<&str> {
        self.cve.as_deref()
    }

    /// Link without its `https://` or `http://` prefix.
    pub fn link_without_scheme(&self) -> &str {
        self.link
            .strip_prefix("https://")
            .or_else(|| self.link.strip_prefix("http://"))
            .unwrap_or(&self.link)
    }

    /// Report date as `YYYY-MM-DD`, or the raw value when it cannot be parsed.
    pub fn reported_on(&self) -> String {
        parse_report_date(&self.reported_at)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.reported_at.clone())
    }
}

fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(date_time.date());
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisory(reported_at: &str, link: &str) -> Advisory {
        Advisory {
            package_name: "acme/log".to_string(),
            title: "Log injection".to_string(),
            link: link.to_string(),
            reported_at: reported_at.to_string(),
            affected_versions: "<1.3.0|>=2.0.0,<2.1.0".to_string(),
            cve: Some("CVE-2023-0001".to_string()),
        }
    }

    #[test]
    fn test_from_advisory_keeps_single_clause() {
        let vulnerability = Vulnerability::from_advisory(
            &advisory("2023-01-01", "https://x"),
            "<1.3.0".to_string(),
            "1.2.0".to_string(),
        );

        assert_eq!(vulnerability.affected_versions(), "<1.3.0");
        assert_eq!(vulnerability.current(), "1.2.0");
        assert_eq!(vulnerability.package_name(), "acme/log");
        assert_eq!(vulnerability.cve(), Some("CVE-2023-0001"));
    }

    #[test]
    fn test_link_without_scheme() {
        let https = Vulnerability::from_advisory(
            &advisory("2023-01-01", "https://github.com/advisories/GHSA-1"),
            "<1.3.0".to_string(),
            "1.2.0".to_string(),
        );
        assert_eq!(https.link_without_scheme(), "github.com/advisories/GHSA-1");

        let plain = Vulnerability::from_advisory(
            &advisory("2023-01-01", "example.com/a"),
            "<1.3.0".to_string(),
            "1.2.0".to_string(),
        );
        assert_eq!(plain.link_without_scheme(), "example.com/a");
    }

    #[test]
    fn test_reported_on_formats() {
        for raw in [
            "2023-01-05 14:37:49",
            "2023-01-05T14:37:49+00:00",
            "2023-01-05",
        ] {
            let vulnerability = Vulnerability::from_advisory(
                &advisory(raw, "https://x"),
                "<1.3.0".to_string(),
                "1.2.0".to_string(),
            );
            assert_eq!(vulnerability.reported_on(), "2023-01-05");
        }
    }

    #[test]
    fn test_reported_on_unparseable_is_kept() {
        let vulnerability = Vulnerability::from_advisory(
            &advisory("last week", "https://x"),
            "<1.3.0".to_string(),
            "1.2.0".to_string(),
        );
        assert_eq!(vulnerability.reported_on(), "last week");
    }
}
