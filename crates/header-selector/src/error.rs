use http::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors raised while handing selected headers over to the `http` types.
///
/// Selection itself never fails, only the conversion of a selected value into a
/// [`http::HeaderValue`] can.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("invalid value for header {name}: {value:?}, cause: {source}")]
    InvalidHeaderValue {
        name: &'static str,
        value: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl HeaderError {
    pub fn invalid_header_value<S: ToString>(name: &'static str, value: S, source: InvalidHeaderValue) -> Self {
        Self::InvalidHeaderValue { name, value: value.to_string(), source }
    }
}
