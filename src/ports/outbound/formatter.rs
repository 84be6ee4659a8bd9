use crate::application::read_models::InspectionReport;
use crate::shared::Result;

/// ReportFormatter port for rendering an inspection report
///
/// This port abstracts the report layout (LIST, TABLE).
pub trait ReportFormatter {
    /// Renders the report as text ready for presentation
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, report: &InspectionReport) -> Result<String>;
}
