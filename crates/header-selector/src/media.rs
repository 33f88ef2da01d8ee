//! Media type classification and candidate handling.
//!
//! Media types are kept as the raw strings an operation declares. Nothing here
//! parses them into structured values: classification only looks at the type,
//! the subtype and its `+json` structured syntax suffix, and quality handling
//! only touches the `q` parameter.

use std::borrow::Cow;

use mime::Mime;

const JSON_SUFFIX: &str = "+json";
const PARAM_SEPARATOR: char = ';';
const TRAILING_NOISE: [char; 2] = [';', ' '];

/// A single entry of an accept candidate list.
///
/// Candidate lists coming from generated operations may carry absent or empty
/// entries. Implementors report such entries as `None` or `Some("")` and the
/// selector drops them before ranking.
pub trait MediaTypeCandidate {
    fn media_type(&self) -> Option<&str>;
}

impl MediaTypeCandidate for str {
    fn media_type(&self) -> Option<&str> {
        Some(self)
    }
}

impl MediaTypeCandidate for String {
    fn media_type(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl MediaTypeCandidate for Mime {
    fn media_type(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: MediaTypeCandidate> MediaTypeCandidate for Option<T> {
    fn media_type(&self) -> Option<&str> {
        self.as_ref().and_then(T::media_type)
    }
}

impl<T: MediaTypeCandidate + ?Sized> MediaTypeCandidate for &T {
    fn media_type(&self) -> Option<&str> {
        (**self).media_type()
    }
}

/// Returns the candidate's media type if it is present and not blank.
pub(crate) fn present<C: MediaTypeCandidate + ?Sized>(candidate: &C) -> Option<&str> {
    candidate.media_type().filter(|media_type| !media_type.trim().is_empty())
}

/// Checks whether `media_type` denotes a JSON representation.
///
/// Matches `application/json` and every `application/<subtype>+json`, with or
/// without parameters, ignoring ASCII case. Absent and empty input is not JSON.
///
/// ```
/// use header_selector::is_json_mime;
///
/// assert!(is_json_mime(Some("application/json; charset=UTF-8")));
/// assert!(is_json_mime(Some("application/vnd.api+json")));
/// assert!(!is_json_mime(Some("application/xml")));
/// assert!(!is_json_mime(None));
/// ```
#[must_use]
pub fn is_json_mime(media_type: Option<&str>) -> bool {
    let Some(media_type) = media_type.map(str::trim).filter(|media_type| !media_type.is_empty()) else {
        return false;
    };

    let lowercase = media_type.to_ascii_lowercase();
    let essence = lowercase.split(PARAM_SEPARATOR).next().unwrap_or_default().trim_end();

    is_json_essence(essence) || is_json_essence(&lowercase)
}

fn is_json_essence(essence: &str) -> bool {
    if essence == mime::APPLICATION_JSON.essence_str() {
        return true;
    }

    essence
        .strip_prefix(mime::APPLICATION.as_str())
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|subtype| subtype.ends_with(JSON_SUFFIX))
}

/// Removes any `q` parameter from `media_type`, keeping the other parameters
/// as written. Surrounding whitespace is trimmed.
///
/// ```
/// use header_selector::strip_quality;
///
/// assert_eq!(strip_quality("text/html;q=0.9"), "text/html");
/// assert_eq!(strip_quality("text/plain; charset=utf-8; q=0.5"), "text/plain; charset=utf-8");
/// assert_eq!(strip_quality("application/json"), "application/json");
/// ```
#[must_use]
pub fn strip_quality(media_type: &str) -> Cow<'_, str> {
    let media_type = media_type.trim();
    let mut segments = media_type.split(PARAM_SEPARATOR);
    let essence = segments.next().unwrap_or_default();

    if !segments.clone().any(is_quality_param) {
        return Cow::Borrowed(media_type.trim_end_matches(TRAILING_NOISE));
    }

    let mut stripped = String::from(essence.trim_end());
    for param in segments.filter(|param| !is_quality_param(param)) {
        stripped.push(PARAM_SEPARATOR);
        stripped.push_str(param);
    }

    let trimmed_len = stripped.trim_end_matches(TRAILING_NOISE).len();
    stripped.truncate(trimmed_len);
    Cow::Owned(stripped)
}

fn is_quality_param(param: &str) -> bool {
    let name = param.split_once('=').map_or(param, |(name, _)| name);
    name.trim().eq_ignore_ascii_case("q")
}
