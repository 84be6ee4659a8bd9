use crate::inspection::domain::{Score, ScoreColor};

/// Reduces dependency counts into a [`Score`].
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Share of up-to-date dependencies, `0.0` when there are none.
    pub fn percentage(updated: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (updated as f64 * 100.0) / total as f64
    }

    /// Any vulnerability makes the score red; otherwise 80% and up is green
    /// and 50% and up is yellow.
    pub fn color(percentage: f64, vulnerabilities: usize) -> ScoreColor {
        if vulnerabilities > 0 {
            ScoreColor::Red
        } else if percentage >= 80.0 {
            ScoreColor::Green
        } else if percentage >= 50.0 {
            ScoreColor::Yellow
        } else {
            ScoreColor::Red
        }
    }

    pub fn calculate(total: usize, updated: usize, outdated: usize, vulnerabilities: usize) -> Score {
        let percentage = Self::percentage(updated, total);
        Score::new(
            percentage,
            total,
            outdated,
            vulnerabilities,
            Self::color(percentage, vulnerabilities),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_without_dependencies() {
        assert_eq!(ScoreCalculator::percentage(0, 0), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(ScoreCalculator::percentage(3, 4), 75.0);
        assert_eq!(ScoreCalculator::percentage(4, 4), 100.0);
    }

    #[test]
    fn test_color_thresholds() {
        assert_eq!(ScoreCalculator::color(80.0, 0), ScoreColor::Green);
        assert_eq!(ScoreCalculator::color(79.9, 0), ScoreColor::Yellow);
        assert_eq!(ScoreCalculator::color(50.0, 0), ScoreColor::Yellow);
        assert_eq!(ScoreCalculator::color(49.9, 0), ScoreColor::Red);
        assert_eq!(ScoreCalculator::color(100.0, 1), ScoreColor::Red);
    }

    #[test]
    fn test_calculate() {
        let score = ScoreCalculator::calculate(4, 3, 1, 0);
        assert_eq!(score.percentage(), 75.0);
        assert_eq!(score.color(), ScoreColor::Yellow);
        assert_eq!(score.summary(), "4 dependencies, 1 outdated.");
        assert_eq!(score.percentage_as_string(), "75.0%");
    }
}
