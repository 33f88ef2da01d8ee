//! Content negotiation headers for a generated HTTP API client
//!
//! Every generated operation declares the media types it can answer with and
//! the media type of its request body. Before a request is dispatched the
//! client turns those declarations into an `Accept` and a `Content-Type`
//! header. This crate holds that step and nothing else: no transport, no
//! (de)serialization, no authentication.
//!
//! # Example
//!
//! ```
//! use header_selector::select_headers;
//!
//! let headers = select_headers(&["text/html", "application/vnd.api+json", "application/json"], None, false);
//!
//! assert_eq!(
//!     headers.get("Accept"),
//!     Some("application/vnd.api+json,application/json;q=0.9,text/html;q=0.8")
//! );
//! assert_eq!(headers.get("Content-Type"), Some("application/json"));
//!
//! let mut request_headers = http::HeaderMap::new();
//! headers.apply_to(&mut request_headers)?;
//! assert_eq!(request_headers.len(), 2);
//! # Ok::<(), header_selector::HeaderError>(())
//! ```
//!
//! # Architecture
//!
//! - [`media`]: JSON classification, candidate entries, quality parameter stripping
//! - [`weight`]: quality weights and their decay sequence
//! - [`selector`]: the configurable [`HeaderSelector`]
//! - [`SelectedHeaders`]: the selected header set and its hand-over to [`http::HeaderMap`]
//! - [`OperationMedia`]: per-operation media declarations
//!
//! The free functions [`is_json_mime`], [`select_headers`] and [`next_weight`]
//! use the default selector.
//!
//! # Logging
//!
//! Decisions are reported through `tracing` at `trace`/`debug` level; installing
//! a subscriber is left to the application.

mod error;
mod headers;
mod operation;

pub mod media;
pub mod selector;
pub mod weight;

use once_cell::sync::Lazy;

pub use error::HeaderError;
pub use headers::{ACCEPT, CONTENT_TYPE, SelectedHeaders};
pub use media::{MediaTypeCandidate, is_json_mime, strip_quality};
pub use operation::OperationMedia;
pub use selector::{HeaderSelector, HeaderSelectorBuilder};
pub use weight::{Weight, WeightSequence, next_weight};

static DEFAULT_SELECTOR: Lazy<HeaderSelector> = Lazy::new(HeaderSelector::default);

/// Selects the `Accept` and `Content-Type` headers with the default selector.
///
/// See [`HeaderSelector::select_headers`].
#[must_use]
pub fn select_headers<C: MediaTypeCandidate>(
    accepts: &[C],
    content_type: Option<&str>,
    is_multipart: bool,
) -> SelectedHeaders {
    DEFAULT_SELECTOR.select_headers(accepts, content_type, is_multipart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn free_function_uses_defaults() {
        let headers = select_headers(&["application/json"], Some(""), false);
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert_eq!(headers.get("Accept"), Some("application/json"));

        let headers = select_headers::<&str>(&[], Some("application/json"), false);
        assert!(!headers.contains_key("Accept"));

        let headers = select_headers(&["application/json"], Some("application/json"), true);
        assert!(!headers.contains_key("Content-Type"));
    }

    #[test]
    fn json_types_lead_the_accept_header() {
        let accept = select_headers(&["text/html", "application/json"], None, false).accept().unwrap().to_owned();
        assert!(accept.starts_with("application/json"));
        assert!(accept.contains("text/html;q=0.9"));
        assert!(!accept.contains(";q=0.900"));

        let accept = select_headers(&["text/html", "application/vnd.api+json", "application/json"], None, false)
            .accept()
            .unwrap()
            .to_owned();
        let html = accept.find("text/html").unwrap();
        assert!(accept.find("application/vnd.api+json").unwrap() < html);
        assert!(accept.find("application/json").unwrap() < html);
    }

    #[test]
    fn shared_between_threads() {
        const ACCEPTS: [&str; 2] = ["text/plain", "application/hal+json"];
        let expected = select_headers(&ACCEPTS, Some("application/xml"), false);

        let handles: Vec<_> =
            (0..4).map(|_| thread::spawn(|| select_headers(&ACCEPTS, Some("application/xml"), false))).collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
