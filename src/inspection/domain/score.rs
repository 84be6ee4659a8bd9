use std::fmt;

/// Severity color of the score block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreColor::Green => "green",
            ScoreColor::Yellow => "yellow",
            ScoreColor::Red => "red",
        };
        write!(f, "{}", name)
    }
}

/// Health score of a project's dependency set.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    percentage: f64,
    dependencies: usize,
    outdated: usize,
    vulnerabilities: usize,
    color: ScoreColor,
}

impl Score {
    pub fn new(
        percentage: f64,
        dependencies: usize,
        outdated: usize,
        vulnerabilities: usize,
        color: ScoreColor,
    ) -> Self {
        Self {
            percentage,
            dependencies,
            outdated,
            vulnerabilities,
            color,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn dependencies(&self) -> usize {
        self.dependencies
    }

    pub fn outdated(&self) -> usize {
        self.outdated
    }

    pub fn vulnerabilities(&self) -> usize {
        self.vulnerabilities
    }

    pub fn color(&self) -> ScoreColor {
        self.color
    }

    /// Percentage as shown inside the score block: `"100  %"` for a perfect
    /// score, otherwise one decimal and `%`, padded to five characters.
    pub fn percentage_as_string(&self) -> String {
        format_percentage(self.percentage)
    }

    pub fn is_below(&self, min: f64) -> bool {
        self.percentage < min
    }

    /// One-line description, e.g. `"3 dependencies, 1 outdated, 2 vulnerabilities."`.
    pub fn summary(&self) -> String {
        self.summary_with(|clause| clause.to_string(), |clause| clause.to_string())
    }

    /// Like [`Score::summary`], with the outdated and vulnerability clauses
    /// passed through the given stylers.
    pub fn summary_with<O, V>(&self, outdated_style: O, vulnerability_style: V) -> String
    where
        O: Fn(&str) -> String,
        V: Fn(&str) -> String,
    {
        let mut parts = vec![format!("{} dependencies", self.dependencies)];

        if self.outdated > 0 {
            parts.push(outdated_style(&format!("{} outdated", self.outdated)));
        }

        if self.vulnerabilities > 0 {
            let noun = if self.vulnerabilities == 1 {
                "vulnerability"
            } else {
                "vulnerabilities"
            };
            parts.push(vulnerability_style(&format!(
                "{} {}",
                self.vulnerabilities, noun
            )));
        }

        format!("{}.", parts.join(", "))
    }
}

/// Formats a percentage the way the score block shows it.
pub fn format_percentage(percentage: f64) -> String {
    if percentage == 100.0 {
        return "100  %".to_string();
    }
    format!("{:<5}", format!("{:.1}%", percentage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_as_string() {
        assert_eq!(format_percentage(100.0), "100  %");
        assert_eq!(format_percentage(42.5), "42.5%");
        assert_eq!(format_percentage(5.0), "5.0% ");
        assert_eq!(format_percentage(0.0), "0.0% ");
    }

    #[test]
    fn test_summary_omits_zero_clauses() {
        let score = Score::new(100.0, 4, 0, 0, ScoreColor::Green);
        assert_eq!(score.summary(), "4 dependencies.");
    }

    #[test]
    fn test_summary_full() {
        let score = Score::new(50.0, 4, 2, 3, ScoreColor::Red);
        assert_eq!(
            score.summary(),
            "4 dependencies, 2 outdated, 3 vulnerabilities."
        );
    }

    #[test]
    fn test_summary_singular_vulnerability() {
        let score = Score::new(50.0, 4, 0, 1, ScoreColor::Red);
        assert_eq!(score.summary(), "4 dependencies, 1 vulnerability.");
    }

    #[test]
    fn test_summary_with_styles() {
        let score = Score::new(50.0, 4, 2, 1, ScoreColor::Red);
        let summary = score.summary_with(|c| format!("<y>{}</y>", c), |c| format!("<r>{}</r>", c));
        assert_eq!(
            summary,
            "4 dependencies, <y>2 outdated</y>, <r>1 vulnerability</r>."
        );
    }

    #[test]
    fn test_is_below() {
        let score = Score::new(75.0, 4, 1, 0, ScoreColor::Yellow);
        assert!(score.is_below(80.0));
        assert!(!score.is_below(75.0));
        assert!(!score.is_below(0.0));
    }
}
