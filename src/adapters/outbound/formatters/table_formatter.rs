use super::palette::Palette;
use super::score_block::render_score_block;
use crate::application::dto::RenderOptions;
use crate::application::read_models::InspectionReport;
use crate::inspection::domain::{Dependency, Vulnerability};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use tabled::{settings::Style, Table, Tabled};

/// Printed below the score block when nothing needs attention
const NOTHING_TO_REPORT: &str = "All dependencies are up to date.";

#[derive(Tabled)]
struct DependencyRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Why")]
    why: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Latest")]
    latest: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Vulnerabilities")]
    vulnerabilities: usize,
}

impl From<&Dependency> for DependencyRow {
    fn from(dependency: &Dependency) -> Self {
        Self {
            package: dependency.name().to_string(),
            why: dependency.why().join(", "),
            current: dependency.current_display().to_string(),
            latest: dependency.latest_display().to_string(),
            status: dependency.latest_status().to_string(),
            vulnerabilities: dependency.vulnerabilities().len(),
        }
    }
}

#[derive(Tabled)]
struct VulnerabilityRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Affected")]
    affected: String,
    #[tabled(rename = "CVE")]
    cve: String,
    #[tabled(rename = "Reported")]
    reported: String,
    #[tabled(rename = "Link")]
    link: String,
}

impl From<&Vulnerability> for VulnerabilityRow {
    fn from(vulnerability: &Vulnerability) -> Self {
        Self {
            package: vulnerability.package_name().to_string(),
            title: vulnerability.title().to_string(),
            affected: vulnerability.affected_versions().to_string(),
            cve: vulnerability.cve().unwrap_or("-").to_string(),
            reported: vulnerability.reported_on(),
            link: vulnerability.link().to_string(),
        }
    }
}

/// TableFormatter adapter rendering the report as rounded tables
///
/// Table cells are never colored; only the score block honors the palette.
pub struct TableFormatter {
    palette: Palette,
}

impl TableFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            palette: Palette::new(options.colored),
        }
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &InspectionReport) -> Result<String> {
        let mut output = render_score_block(&report.score, &self.palette);

        if report.entries.is_empty() {
            output.push_str(NOTHING_TO_REPORT);
            output.push('\n');
            return Ok(output);
        }

        let rows: Vec<DependencyRow> = report.entries.iter().map(DependencyRow::from).collect();
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');

        if report.has_vulnerabilities() {
            let rows: Vec<VulnerabilityRow> =
                report.vulnerabilities().map(VulnerabilityRow::from).collect();
            output.push('\n');
            output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
            output.push('\n');
        }

        Ok(output)
    }
}
