//! `Accept` and `Content-Type` selection.
//!
//! # Accept
//!
//! Blank candidates are dropped first. A single remaining candidate is sent as
//! written. Several candidates without any JSON type among them are joined as
//! written. Otherwise JSON candidates are moved in front of the others, both
//! groups keeping their declared order, and the combined list is weighted along
//! [`WeightSequence`]: the first entry goes out bare, the rest carry `;q=`.
//!
//! # Content-Type
//!
//! Multipart requests get none, their boundary is set by whoever encodes the
//! body. Otherwise the declared type is used, falling back to the configured
//! default.

use std::borrow::Cow;

use mime::Mime;
use tracing::{debug, trace};

use crate::headers::SelectedHeaders;
use crate::media::{self, MediaTypeCandidate, is_json_mime, strip_quality};
use crate::weight::{Weight, WeightSequence};

/// Above this many candidates weights decay linearly instead of per decade.
pub const DEFAULT_LINEAR_DECAY_THRESHOLD: usize = 28;

/// Selects request headers from an operation's declared media types.
///
/// The default selector falls back to `application/json` and switches to
/// linear weight decay above 28 candidates. Selection is a pure function of
/// its inputs, a selector can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSelector {
    default_content_type: Mime,
    linear_decay_threshold: usize,
}

impl Default for HeaderSelector {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HeaderSelector {
    #[must_use]
    pub fn builder() -> HeaderSelectorBuilder {
        HeaderSelectorBuilder::new()
    }

    #[must_use]
    pub fn default_content_type(&self) -> &Mime {
        &self.default_content_type
    }

    #[must_use]
    pub fn linear_decay_threshold(&self) -> usize {
        self.linear_decay_threshold
    }

    /// Builds the header set for one request.
    ///
    /// ```
    /// use header_selector::HeaderSelector;
    ///
    /// let selector = HeaderSelector::default();
    /// let headers = selector.select_headers(&["text/html", "application/json"], None, false);
    ///
    /// assert_eq!(headers.get("Accept"), Some("application/json,text/html;q=0.9"));
    /// assert_eq!(headers.get("Content-Type"), Some("application/json"));
    /// ```
    #[must_use]
    pub fn select_headers<C: MediaTypeCandidate>(
        &self,
        accepts: &[C],
        content_type: Option<&str>,
        is_multipart: bool,
    ) -> SelectedHeaders {
        SelectedHeaders::new(self.select_accept(accepts), self.select_content_type(content_type, is_multipart))
    }

    /// The `Accept` value for `accepts`, `None` when no candidate is left after
    /// dropping absent and blank entries.
    #[must_use]
    pub fn select_accept<C: MediaTypeCandidate>(&self, accepts: &[C]) -> Option<String> {
        let candidates: Vec<&str> = accepts.iter().filter_map(media::present).collect();
        trace!(declared = accepts.len(), candidates = candidates.len(), "selecting accept header");

        match candidates.as_slice() {
            [] => None,
            [single] => Some((*single).to_owned()),
            _ if !candidates.iter().any(|candidate| is_json_mime(Some(*candidate))) => {
                trace!("no json candidate, accept list sent as declared");
                Some(candidates.join(","))
            }
            _ => Some(self.weighted_accept(&candidates)),
        }
    }

    /// The `Content-Type` value, never set for multipart bodies.
    #[must_use]
    pub fn select_content_type(&self, content_type: Option<&str>, is_multipart: bool) -> Option<String> {
        if is_multipart {
            return None;
        }

        match content_type.filter(|content_type| !content_type.trim().is_empty()) {
            Some(content_type) => Some(content_type.to_owned()),
            None => Some(self.default_content_type.to_string()),
        }
    }

    fn weighted_accept(&self, candidates: &[&str]) -> String {
        let (json, others): (Vec<&str>, Vec<&str>) =
            candidates.iter().copied().partition(|candidate| is_json_mime(Some(*candidate)));
        let many_headers = candidates.len() > self.linear_decay_threshold;
        trace!(json = json.len(), others = others.len(), many_headers, "weighting accept candidates");

        json.into_iter()
            .chain(others)
            .zip(WeightSequence::new(many_headers))
            .map(|(candidate, weight)| weighted_entry(candidate, weight))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn weighted_entry(candidate: &str, weight: Weight) -> String {
    let media_type = strip_quality(candidate);
    if let Cow::Owned(_) = media_type {
        debug!(candidate, "declared quality replaced by computed weight");
    }

    if weight.is_max() { media_type.into_owned() } else { format!("{media_type};q={weight}") }
}

/// Builder for [`HeaderSelector`].
#[derive(Debug)]
pub struct HeaderSelectorBuilder {
    default_content_type: Mime,
    linear_decay_threshold: usize,
}

impl HeaderSelectorBuilder {
    fn new() -> Self {
        Self { default_content_type: mime::APPLICATION_JSON, linear_decay_threshold: DEFAULT_LINEAR_DECAY_THRESHOLD }
    }

    /// `Content-Type` used when a non-multipart request declares none.
    #[must_use]
    pub fn default_content_type(mut self, content_type: Mime) -> Self {
        self.default_content_type = content_type;
        self
    }

    /// Candidate count above which weights decrease by one per entry.
    #[must_use]
    pub fn linear_decay_threshold(mut self, threshold: usize) -> Self {
        self.linear_decay_threshold = threshold;
        self
    }

    #[must_use]
    pub fn build(self) -> HeaderSelector {
        HeaderSelector {
            default_content_type: self.default_content_type,
            linear_decay_threshold: self.linear_decay_threshold,
        }
    }
}
