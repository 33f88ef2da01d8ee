use http::header::{self, HeaderName};
use http::{HeaderMap, HeaderValue};
use tracing::warn;

use crate::HeaderError;

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";

/// The `Accept` and `Content-Type` values selected for one request.
///
/// A header is only present when a value was determined; an empty value is
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedHeaders {
    accept: Option<String>,
    content_type: Option<String>,
}

impl SelectedHeaders {
    pub(crate) fn new(accept: Option<String>, content_type: Option<String>) -> Self {
        Self { accept: accept.filter(|v| !v.is_empty()), content_type: content_type.filter(|v| !v.is_empty()) }
    }

    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Looks a header up by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find_map(|(key, value)| key.eq_ignore_ascii_case(name).then_some(value))
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates the present headers as `(name, value)`, `Accept` first.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [(ACCEPT, self.accept()), (CONTENT_TYPE, self.content_type())]
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accept.is_none() && self.content_type.is_none()
    }

    /// Merges the selected headers into an outgoing request's header map.
    ///
    /// Existing `accept` and `content-type` entries are replaced, other headers
    /// are left alone. Nothing is written unless every value is a valid header
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::InvalidHeaderValue`] when a selected value contains
    /// bytes not allowed in a header value, e.g. a declared media type with a
    /// line break.
    pub fn apply_to(&self, headers: &mut HeaderMap) -> Result<(), HeaderError> {
        let mut values = Vec::with_capacity(2);
        for (name, value) in self.iter() {
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                warn!(header = name, value, "selected header value rejected");
                HeaderError::invalid_header_value(name, value, e)
            })?;
            values.push((header_name(name), header_value));
        }

        for (name, value) in values {
            headers.insert(name, value);
        }
        Ok(())
    }
}

fn header_name(name: &'static str) -> HeaderName {
    if name == ACCEPT { header::ACCEPT } else { header::CONTENT_TYPE }
}

impl TryFrom<SelectedHeaders> for HeaderMap {
    type Error = HeaderError;

    fn try_from(selected: SelectedHeaders) -> Result<Self, Self::Error> {
        let mut headers = HeaderMap::with_capacity(selected.len());
        selected.apply_to(&mut headers)?;
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both() -> SelectedHeaders {
        SelectedHeaders::new(Some("application/json,text/html;q=0.9".into()), Some("application/json".into()))
    }

    #[test]
    fn lookup_ignores_case() {
        let selected = both();
        assert_eq!(selected.get("Accept"), Some("application/json,text/html;q=0.9"));
        assert_eq!(selected.get("accept"), Some("application/json,text/html;q=0.9"));
        assert_eq!(selected.get("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(selected.get("Host"), None);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn empty_values_are_not_stored() {
        let selected = SelectedHeaders::new(Some(String::new()), None);
        assert!(selected.is_empty());
        assert!(!selected.contains_key("Accept"));
        assert_eq!(selected.iter().count(), 0);
    }

    #[test]
    fn iter_keeps_accept_first() {
        let names: Vec<&str> = both().iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![ACCEPT, CONTENT_TYPE]);

        let content_only = SelectedHeaders::new(None, Some("text/plain".into()));
        let pairs: Vec<_> = content_only.iter().collect();
        assert_eq!(pairs, vec![(CONTENT_TYPE, "text/plain")]);
    }

    #[test]
    fn apply_replaces_existing_entries() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static("petstore-client"));

        both().apply_to(&mut headers).unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get(header::ACCEPT).unwrap(), "application/json,text/html;q=0.9");
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(header::USER_AGENT).unwrap(), "petstore-client");
    }

    #[test]
    fn apply_leaves_map_untouched_on_invalid_value() {
        let selected =
            SelectedHeaders::new(Some("application/json".into()), Some("text/plain\r\nX-Injected: 1".into()));
        let mut headers = HeaderMap::new();

        let result = selected.apply_to(&mut headers);

        assert!(matches!(result, Err(HeaderError::InvalidHeaderValue { name: CONTENT_TYPE, .. })));
        assert!(headers.is_empty());
    }

    #[test]
    fn converts_into_header_map() {
        let headers = HeaderMap::try_from(both()).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("content-type").unwrap(), "application/json");

        let headers = HeaderMap::try_from(SelectedHeaders::default()).unwrap();
        assert!(headers.is_empty());
    }
}
