use crate::adapters::outbound::formatters::{ListFormatter, TableFormatter};
use crate::application::dto::{RenderOptions, ReportFormat};
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter matching the requested report format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Examples
    /// ```
    /// use patrol::application::dto::{RenderOptions, ReportFormat};
    /// use patrol::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Table, RenderOptions::default());
    /// ```
    pub fn create(format: ReportFormat, options: RenderOptions) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::List => Box::new(ListFormatter::new(options)),
            ReportFormat::Table => Box::new(TableFormatter::new(options)),
        }
    }

    /// Returns the progress message for the specified report format
    ///
    /// # Examples
    /// ```
    /// use patrol::application::dto::ReportFormat;
    /// use patrol::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ReportFormat::List);
    /// assert_eq!(message, "📝 Rendering LIST report...");
    /// ```
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::List => "📝 Rendering LIST report...",
            ReportFormat::Table => "📝 Rendering TABLE report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::InspectionReport;
    use crate::inspection::domain::{Dependency, InstalledPackage, Score, ScoreColor};

    fn report() -> InspectionReport {
        let outdated = Dependency::from_installed(
            InstalledPackage::new("acme/log", "1.2.0").with_latest("2.0.0", "update-possible"),
        );
        InspectionReport::new(
            Score::new(50.0, 2, 1, 0, ScoreColor::Yellow),
            vec![outdated],
        )
    }

    #[test]
    fn test_create_list_formatter() {
        let formatter = FormatterFactory::create(ReportFormat::List, RenderOptions::default());
        let output = formatter.format(&report()).unwrap();
        assert!(output.contains(" acme/log: "));
        assert!(output.contains("➜ 2.0.0"));
    }

    #[test]
    fn test_create_table_formatter() {
        let formatter = FormatterFactory::create(ReportFormat::Table, RenderOptions::default());
        let output = formatter.format(&report()).unwrap();
        assert!(output.contains("Vulnerabilities"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(ReportFormat::List),
            "📝 Rendering LIST report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(ReportFormat::Table),
            "📝 Rendering TABLE report..."
        );
    }
}
