/// Report layout
///
/// Shared by the CLI, the config file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One line per dependency (default)
    #[default]
    List,
    /// Bordered tables
    Table,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(ReportFormat::List),
            "table" => Ok(ReportFormat::Table),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'LIST' or 'TABLE'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::List => write!(f, "LIST"),
            ReportFormat::Table => write!(f, "TABLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_report_format_from_str_case_insensitive() {
        assert_eq!(ReportFormat::from_str("LIST").unwrap(), ReportFormat::List);
        assert_eq!(ReportFormat::from_str("list").unwrap(), ReportFormat::List);
        assert_eq!(ReportFormat::from_str("Table").unwrap(), ReportFormat::Table);
    }

    #[test]
    fn test_report_format_from_str_invalid() {
        let error = ReportFormat::from_str("json").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("json"));
        assert!(error.contains("TABLE"));
    }

    #[test]
    fn test_report_format_default_and_display() {
        assert_eq!(ReportFormat::default(), ReportFormat::List);
        assert_eq!(ReportFormat::List.to_string(), "LIST");
        assert_eq!(ReportFormat::Table.to_string(), "TABLE");
    }
}
