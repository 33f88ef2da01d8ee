use crate::{HeaderSelector, SelectedHeaders};

/// Media types declared by one generated API operation.
///
/// `produces` lists the response representations the operation can return,
/// `consumes` is the request body type. A `multipart/*` body type marks the
/// request as multipart on its own, [`OperationMedia::multipart`] covers
/// operations that build multipart bodies without declaring it.
///
/// ```
/// use header_selector::{HeaderSelector, OperationMedia};
///
/// let upload_image = OperationMedia::new()
///     .produces(["application/json"])
///     .consumes("multipart/form-data");
///
/// let headers = upload_image.select(&HeaderSelector::default());
/// assert_eq!(headers.accept(), Some("application/json"));
/// assert_eq!(headers.content_type(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationMedia {
    produces: Vec<String>,
    consumes: Option<String>,
    multipart: bool,
}

impl OperationMedia {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn produces<I, S>(mut self, media_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces.extend(media_types.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn consumes<S: Into<String>>(mut self, media_type: S) -> Self {
        self.consumes = Some(media_type.into());
        self
    }

    #[must_use]
    pub fn multipart(mut self, multipart: bool) -> Self {
        self.multipart = multipart;
        self
    }

    #[must_use]
    pub fn produced(&self) -> &[String] {
        &self.produces
    }

    #[must_use]
    pub fn consumed(&self) -> Option<&str> {
        self.consumes.as_deref()
    }

    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.multipart || self.consumes.as_deref().is_some_and(is_multipart_type)
    }

    #[must_use]
    pub fn select(&self, selector: &HeaderSelector) -> SelectedHeaders {
        selector.select_headers(self.produces.as_slice(), self.consumed(), self.is_multipart())
    }
}

fn is_multipart_type(media_type: &str) -> bool {
    media_type
        .trim_start()
        .split_once('/')
        .is_some_and(|(top_level, _)| top_level.eq_ignore_ascii_case(mime::MULTIPART.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_operation() {
        let add_pet =
            OperationMedia::new().produces(["application/json", "application/xml"]).consumes("application/json");

        assert!(!add_pet.is_multipart());
        assert_eq!(add_pet.produced().len(), 2);

        let headers = add_pet.select(&HeaderSelector::default());
        assert_eq!(headers.accept(), Some("application/json,application/xml;q=0.9"));
        assert_eq!(headers.content_type(), Some("application/json"));
    }

    #[test]
    fn multipart_derived_from_consumes() {
        let upload = OperationMedia::new().produces(["application/json"]).consumes("Multipart/Form-Data; boundary=x");
        assert!(upload.is_multipart());
        assert_eq!(upload.select(&HeaderSelector::default()).content_type(), None);

        let form = OperationMedia::new().consumes("application/x-www-form-urlencoded");
        assert!(!form.is_multipart());
    }

    #[test]
    fn explicit_multipart_flag() {
        let upload = OperationMedia::new().consumes("application/octet-stream").multipart(true);
        let headers = upload.select(&HeaderSelector::default());

        assert!(headers.is_empty());
    }

    #[test]
    fn operation_without_declarations() {
        let delete_pet = OperationMedia::new();
        let headers = delete_pet.select(&HeaderSelector::default());

        assert_eq!(headers.accept(), None);
        assert_eq!(headers.content_type(), Some("application/json"));
    }
}
