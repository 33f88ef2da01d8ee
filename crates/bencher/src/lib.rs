#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    accepts: &'static [&'static str],
}

impl TestCase {
    #[must_use]
    pub fn new(name: &'static str, group: TestGroup, accepts: &'static [&'static str]) -> Self {
        Self { name, group, accepts }
    }

    #[must_use]
    pub fn small(name: &'static str, accepts: &'static [&'static str]) -> Self {
        Self::new(name, TestGroup::Small, accepts)
    }

    #[must_use]
    pub fn normal(name: &'static str, accepts: &'static [&'static str]) -> Self {
        Self::new(name, TestGroup::Normal, accepts)
    }

    #[must_use]
    pub fn large(name: &'static str, accepts: &'static [&'static str]) -> Self {
        Self::new(name, TestGroup::Large, accepts)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn group(&self) -> TestGroup {
        self.group
    }

    #[must_use]
    pub fn accepts(&self) -> &'static [&'static str] {
        self.accepts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accepts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepts.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}

/// Accept candidates of a typical generated operation.
pub static PETSTORE_ACCEPTS: [&str; 3] = ["application/xml", "application/json", "text/plain"];

/// Mixed JSON and non-JSON candidates, some carrying their own quality.
pub static MIXED_ACCEPTS: [&str; 8] = [
    "text/html;q=0.9",
    "application/xml",
    "application/vnd.api+json",
    "text/plain; charset=utf-8",
    "application/json",
    "application/hal+json",
    "image/png;q=0.5",
    "*/*;q=0.1",
];

/// More candidates than the decade decay covers, weighted linearly.
pub static MANY_ACCEPTS: [&str; 32] = [
    "application/json",
    "application/vnd.api+json",
    "application/hal+json",
    "application/problem+json",
    "text/html",
    "text/plain",
    "text/csv",
    "text/xml",
    "application/xml",
    "application/octet-stream",
    "application/pdf",
    "application/zip",
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "audio/mpeg",
    "audio/ogg",
    "video/mp4",
    "video/webm",
    "font/woff2",
    "application/javascript",
    "application/wasm",
    "application/yaml",
    "application/toml",
    "application/x-www-form-urlencoded",
    "multipart/form-data",
    "text/markdown",
    "text/calendar",
    "application/rtf",
    "*/*",
];
