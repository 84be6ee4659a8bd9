use super::palette::Palette;
use crate::inspection::domain::{Score, ScoreColor};
use owo_colors::Style;

/// Renders the three-line colored score block followed by a blank line.
pub fn render_score_block(score: &Score, palette: &Palette) -> String {
    let background = match score.color() {
        ScoreColor::Green => Style::new().black().on_green(),
        ScoreColor::Yellow => Style::new().black().on_yellow(),
        ScoreColor::Red => Style::new().black().on_red(),
    };

    let summary = score.summary_with(
        |clause| palette.paint(clause, Style::new().yellow()),
        |clause| palette.paint(clause, Style::new().red()),
    );
    let padding = palette.paint("           ", background);
    let percentage = palette.paint(
        &format!("   {}   ", score.percentage_as_string()),
        background.bold(),
    );

    format!(
        "\n  {}\n  {}  {}\n  {}\n\n",
        padding, percentage, summary, padding
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_score_block() {
        let score = Score::new(42.5, 4, 2, 1, ScoreColor::Red);
        let block = render_score_block(&score, &Palette::new(false));

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "             ");
        assert_eq!(
            lines[2],
            "     42.5%     4 dependencies, 2 outdated, 1 vulnerability."
        );
        assert_eq!(lines[3], "             ");
    }

    #[test]
    fn test_perfect_score_block() {
        let score = Score::new(100.0, 3, 0, 0, ScoreColor::Green);
        let block = render_score_block(&score, &Palette::new(false));
        assert!(block.contains("   100  %     3 dependencies."));
    }
}
