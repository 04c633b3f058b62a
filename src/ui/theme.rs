//! Visual theme and styling.

use console::{Style, Term};

/// Terminal styles.
#[derive(Debug, Clone)]
pub struct XcversionTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for XcversionTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl XcversionTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// The theme for output written to `term`.
    pub fn for_term(term: &Term) -> Self {
        if should_use_colors(term) {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// A theme without colors.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(format!("  {}", msg)))
    }
}

/// Check if colors should be used on `term`.
///
/// Each stream is checked on its own, so `xcversion list > out.txt` stays
/// plain while status lines on a terminal stderr are still colored.
pub fn should_use_colors(term: &Term) -> bool {
    // https://no-color.org/
    colors_wanted(std::env::var_os("NO_COLOR").is_some(), term.is_term())
}

fn colors_wanted(no_color: bool, is_term: bool) -> bool {
    !no_color && is_term
}
