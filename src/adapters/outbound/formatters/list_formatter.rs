use super::palette::{take_chars, width_of, Palette};
use super::score_block::render_score_block;
use crate::application::dto::RenderOptions;
use crate::application::read_models::InspectionReport;
use crate::inspection::domain::{Dependency, UpdateSafety, Vulnerability};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::Style;

/// ListFormatter adapter rendering one dotted line per dependency
///
/// ```text
///  acme/log: acme/app ............................ 1.2.0 ➜ 2.0.0
///   ↳ Log injection ............................... ↓<1.3.0
///     » github.com/advisories/GHSA-1 ........... 2023-01-01
/// ```
pub struct ListFormatter {
    options: RenderOptions,
    palette: Palette,
}

impl ListFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            palette: Palette::new(options.colored),
        }
    }

    fn render_dependency(&self, dependency: &Dependency, output: &mut String) {
        let name = dependency.name();
        let current = dependency.current_display();
        let latest = dependency.latest_display();
        let width = self.options.width;

        let mut why = dependency.why().join(", ");
        let fixed = width_of(name) + width_of(current) + width_of(latest);
        let mut dots = ".".repeat(width.saturating_sub(fixed + 11 + width_of(&why)));

        if dots.is_empty() && !self.options.verbose {
            why = format!("{}...", take_chars(&why, width.saturating_sub(fixed + 13)));
        } else {
            dots.push(' ');
        }

        let latest_style = match dependency.update_safety() {
            UpdateSafety::Current => Style::new().green(),
            UpdateSafety::Safe => Style::new().yellow(),
            UpdateSafety::Unsafe => Style::new().red(),
        };
        let latest_style = if current == latest {
            latest_style
        } else {
            latest_style.bold()
        };

        output.push_str(&format!(
            " {} {}{} ➜ {}\n",
            self.palette.bold(&format!("{}:", name)),
            self.palette.muted(&format!("{} {}", why, dots)),
            current,
            self.palette.paint(latest, latest_style),
        ));

        if self.options.verbose && !dependency.is_up_to_date() {
            for blocker in dependency.why_not() {
                output.push_str(&format!(
                    "    {} {}\n",
                    self.palette.paint("✗", Style::new().red()),
                    blocker
                ));
            }
        }

        for vulnerability in dependency.vulnerabilities() {
            self.render_vulnerability(vulnerability, output);
        }
        if dependency.is_vulnerable() {
            output.push('\n');
        }
    }

    fn render_vulnerability(&self, vulnerability: &Vulnerability, output: &mut String) {
        let width = self.options.width;
        let affected = vulnerability.affected_versions();

        let mut title = vulnerability.title().to_string();
        let mut dots = ".".repeat(width.saturating_sub(10 + width_of(&title) + width_of(affected)));

        if dots.is_empty() && !self.options.verbose {
            title = format!(
                "{}...",
                take_chars(&title, width.saturating_sub(13 + width_of(affected)))
            );
        } else {
            dots.push(' ');
        }

        output.push_str(&format!(
            "  {} {}{}\n",
            self.palette.paint(&format!("↳ {}", title), Style::new().red().bold()),
            self.palette.muted(&dots),
            self.palette.paint(&format!("↓{}", affected), Style::new().red().bold()),
        ));

        let link = vulnerability.link_without_scheme();
        let reported = vulnerability.reported_on();
        let dots = ".".repeat(width.saturating_sub(10 + width_of(link) + width_of(&reported)));
        let trailer = if dots.is_empty() {
            reported
        } else {
            format!("{} {}", dots, reported)
        };

        output.push_str(&format!(
            "    {} {} {}\n",
            self.palette.bold("»"),
            link,
            self.palette.muted(&trailer),
        ));
    }
}

impl ReportFormatter for ListFormatter {
    fn format(&self, report: &InspectionReport) -> Result<String> {
        let mut output = render_score_block(&report.score, &self.palette);

        for dependency in &report.entries {
            self.render_dependency(dependency, &mut output);
        }

        Ok(output)
    }
}
