//! Text helpers shared by the frontmatter parser and the normalizer.

use attic_core::config::DEFAULT_WORDS_PER_MINUTE;

/// Strip one layer of matching single or double quotes.
///
/// Unbalanced quotes are left in place.
///
/// # Example
///
/// ```rust
/// use attic_content::markdown::helpers::strip_quotes;
///
/// assert_eq!(strip_quotes("\"Test: Subtitle\""), "Test: Subtitle");
/// assert_eq!(strip_quotes("'tag'"), "tag");
/// assert_eq!(strip_quotes("\"half'"), "\"half'");
/// ```
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Split on commas that are not inside single or double quotes.
///
/// A quote only opens a quoted piece when it is the first non-blank
/// character of that piece, so apostrophes inside bare words (`kid's`)
/// do not swallow the following commas. Pieces are returned untrimmed; an
/// empty input yields one empty piece, mirroring `str::split`.
///
/// # Example
///
/// ```rust
/// use attic_content::markdown::helpers::split_unquoted_commas;
///
/// let parts = split_unquoted_commas("a, \"b, c\", 'd'");
/// assert_eq!(parts, vec!["a", " \"b, c\"", " 'd'"]);
/// ```
pub fn split_unquoted_commas(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match (quote, ch) {
            (None, '"' | '\'') if text[start..idx].trim().is_empty() => quote = Some(ch),
            (Some(open), _) if ch == open => quote = None,
            (None, ',') => {
                parts.push(&text[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Clean one list element: trim, drop a trailing comma, strip quotes.
pub fn clean_list_element(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed).trim();
    strip_quotes(trimmed).trim().to_string()
}

/// Estimate reading time in whole minutes.
///
/// Words are whitespace-separated runs. The result is rounded up and never
/// less than one minute. A `words_per_minute` of zero falls back to the
/// default reading speed.
///
/// # Example
///
/// ```rust
/// use attic_content::markdown::helpers::reading_time;
///
/// assert_eq!(reading_time("Hello world", 200), 1);
/// assert_eq!(reading_time(&"word ".repeat(500), 200), 3);
/// ```
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let words = u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX);
    words.div_ceil(wpm).max(1)
}
