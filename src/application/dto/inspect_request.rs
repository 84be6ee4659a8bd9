use std::path::PathBuf;

/// InspectRequest - request DTO for the inspection use case
#[derive(Debug, Clone)]
pub struct InspectRequest {
    /// Path to the project directory containing composer.lock
    pub project_path: PathBuf,
    /// Minimum acceptable score, in percent
    pub min: f64,
    /// Packages to exclude in addition to the built-in list
    pub exclude_packages: Vec<String>,
}

impl InspectRequest {
    pub fn new(project_path: PathBuf, min: f64, exclude_packages: Vec<String>) -> Self {
        Self {
            project_path,
            min,
            exclude_packages,
        }
    }
}
