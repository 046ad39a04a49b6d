// src/utils/format.rs
use console::style;

use crate::models::{StrengthLabel, StrengthScore};

// Colour a strength label the way it is shown in the menu
pub fn styled_label(label: StrengthLabel) -> String {
    let text = label.to_string();
    match label {
        StrengthLabel::Weak => style(text).red().bold().to_string(),
        StrengthLabel::Moderate => style(text).yellow().bold().to_string(),
        StrengthLabel::Strong => style(text).green().bold().to_string(),
    }
}

// One-line summary, e.g. "Strength: Moderate (4/6)"
pub fn format_strength(score: &StrengthScore) -> String {
    format!("Strength: {} ({}/6)", styled_label(score.label), score.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::score;

    #[test]
    fn summary_mentions_label_and_points() {
        console::set_colors_enabled(false);
        let summary = format_strength(&score("abcdefgh1"));
        assert_eq!(summary, "Strength: Moderate (3/6)");
    }
}
