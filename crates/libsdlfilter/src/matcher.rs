use indexmap::IndexSet;
use regex::Regex;

/// A predicate over a single string: either membership in an exact set of
/// strings, or a non-anchored regular expression search.
///
/// An absent matcher is modeled as `Option::<Matcher>::None` and never
/// matches (see [`matches`]).
///
/// When deserialized, a JSON string becomes a [`Matcher::Pattern`] and a
/// JSON array of strings becomes a [`Matcher::Exact`] set.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(try_from = "MatcherSpec")]
pub enum Matcher {
    Exact(IndexSet<String>),
    Pattern(Regex),
}
impl Matcher {
    pub fn exact<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exact(values.into_iter().map(Into::into).collect())
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// A pattern that matches wherever `needle` occurs literally.
    pub fn substring(needle: &str) -> Self {
        Self::Pattern(
            Regex::new(regex::escape(needle).as_str())
                .expect("escaped literals always compile"),
        )
    }

    /// The base test, without any exception applied.
    pub fn is_match(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(values) => values.contains(candidate),
            Self::Pattern(regex) => regex.is_match(candidate),
        }
    }
}
impl std::cmp::PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

/// Returns `true` when `matcher` is present, accepts `candidate`, and
/// `exception` (if present) does not also accept it.
pub fn matches(
    matcher: Option<&Matcher>,
    candidate: &str,
    exception: Option<&Matcher>,
) -> bool {
    let Some(matcher) = matcher else {
        return false;
    };
    matcher.is_match(candidate)
        && !exception.is_some_and(|exception| exception.is_match(candidate))
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum MatcherSpec {
    Pattern(String),
    Exact(Vec<String>),
}
impl std::convert::TryFrom<MatcherSpec> for Matcher {
    type Error = String;

    fn try_from(spec: MatcherSpec) -> Result<Self, Self::Error> {
        match spec {
            MatcherSpec::Exact(values) => Ok(Matcher::exact(values)),
            MatcherSpec::Pattern(pattern) =>
                Matcher::pattern(pattern.as_str())
                    .map_err(|err| format!("invalid pattern `{pattern}`: {err}")),
        }
    }
}
