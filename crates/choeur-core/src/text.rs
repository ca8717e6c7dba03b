//! Word-boundary text truncation for list and summary views.

/// Default maximum length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Default marker appended to truncated text.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Truncation settings.
///
/// ```rust
/// use choeur_core::text::Truncate;
///
/// let summary = Truncate::new(15).apply("Le Choeur\n\n des   Pays\tdu Mont\nBlanc");
/// assert_eq!(summary, "Le Choeur des Pays...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncate {
    pub max_length: usize,
    pub ellipsis: String,
}

impl Truncate {
    /// Truncation at `max_length` characters with the default ellipsis.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }

    /// Replaces the ellipsis marker.
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn apply(&self, text: &str) -> String {
        truncate_at_word(text, self.max_length, &self.ellipsis)
    }
}

impl Default for Truncate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shortens `text` to about `max_length` characters without cutting a word.
///
/// Whitespace is normalized first. Text that fits is returned as is. Longer
/// text is cut at the first space at or after `max_length`, or failing that
/// at the last space before it; a single unbroken token is hard-cut at
/// exactly `max_length` characters. `ellipsis` is appended whenever text was
/// removed.
pub fn truncate_at_word(text: &str, max_length: usize, ellipsis: &str) -> String {
    let text = normalize_whitespace(text);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text;
    }

    let next_space = chars[max_length..]
        .iter()
        .position(|&c| c == ' ')
        .map(|offset| max_length + offset);

    let cut = match next_space {
        Some(index) => index,
        None => match chars[..=max_length].iter().rposition(|&c| c == ' ') {
            Some(index) if index > 0 => index,
            _ => max_length,
        },
    };

    let kept: String = chars[..cut].iter().collect();
    format!("{}{}", kept.trim_end(), ellipsis)
}
