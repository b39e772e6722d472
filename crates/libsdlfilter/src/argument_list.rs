use regex::Regex;
use std::sync::OnceLock;

fn leading_token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\w*)([:(])").expect("static regex"))
}

fn argument_list_close_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\):\s").expect("static regex"))
}

/// Where a physical line sits relative to a field's argument list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LineRole {
    /// The line begins a field (it may itself open an argument list).
    FieldStart,

    /// The line continues an argument list opened on an earlier line.
    Continuation,
}

/// Tracks whether a field's parenthesized argument list is still open
/// across physical lines.
///
/// A list opens on a line whose leading identifier is immediately followed
/// by `(`, and closes on the first line (possibly the same one) containing
/// `): `.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ArgumentListTracker {
    open: bool,
}
impl ArgumentListTracker {
    /// A tracker positioned inside an argument list opened on an earlier
    /// line.
    pub fn resumed() -> Self {
        Self { open: true }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn observe(&mut self, line: &str) -> LineRole {
        let was_open = self.open;
        if leading_token(line).is_some_and(|(_, delimiter)| delimiter == '(') {
            self.open = true;
        }
        if self.open && argument_list_close_regex().is_match(line) {
            self.open = false;
        }

        if was_open {
            LineRole::Continuation
        } else {
            LineRole::FieldStart
        }
    }
}

/// The leading identifier of a (trimmed) line along with the `:` or `(`
/// that follows it.
pub(crate) fn leading_token(line: &str) -> Option<(&str, char)> {
    let caps = leading_token_regex().captures(line.trim())?;
    let token = caps.get(1)?.as_str();
    let delimiter = caps.get(2)?.as_str().chars().next()?;
    Some((token, delimiter))
}
