use crate::application::read_models::InspectionReport;

/// InspectResponse - response DTO of the inspection use case
#[derive(Debug, Clone)]
pub struct InspectResponse {
    /// Report ready to be formatted
    pub report: InspectionReport,
    /// True when the score is below the minimum or a vulnerability was found
    pub failed: bool,
}

impl InspectResponse {
    pub fn new(report: InspectionReport, failed: bool) -> Self {
        Self { report, failed }
    }
}
