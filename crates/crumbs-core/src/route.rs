//! Route parsing: path segments, readable labels and link targets.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Document name that stands for its parent directory.
const INDEX_DOCUMENT: &str = "README";

/// Marker left in front of paths by hash-based client routing.
const FRAGMENT_MARKER: &str = "#";

/// Bytes escaped when a decoded segment is written back into a link target.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The page being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Slash-delimited navigation path, e.g. `/guide/setup` or `#/guide/setup`.
    pub path: String,
    /// Identifier of the underlying document, used for title lookup.
    pub file: String,
}

impl Route {
    /// Create a route from a navigation path and its document identifier.
    pub fn new(path: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
        }
    }

    /// Create a route whose document identifier is derived from the path.
    ///
    /// The fragment marker and surrounding slashes are stripped, so
    /// `#/guide/setup/` maps to the file `guide/setup`.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let file = path
            .trim_start_matches(FRAGMENT_MARKER)
            .trim_matches('/')
            .to_owned();
        Self { path, file }
    }

    /// Navigable segments of the path (see [`url_parts`]).
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        url_parts(&self.path)
    }

    /// Whether the route denotes the site root.
    ///
    /// True for `""`, `"/"`, `"#/"` and any path made only of index
    /// documents, since none of those leave a navigable segment.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.segments().is_empty()
    }
}

/// Split a route path into navigable, percent-decoded segments.
///
/// Empty segments, the bare fragment marker and the index document name are
/// dropped. Invalid UTF-8 after decoding is replaced lossily.
///
/// # Examples
///
/// ```
/// use crumbs_core::url_parts;
///
/// assert_eq!(
///     url_parts("articles/books-and-more/adventure"),
///     ["articles", "books-and-more", "adventure"]
/// );
/// assert_eq!(url_parts("#/guide/README"), ["guide"]);
/// ```
#[must_use]
pub fn url_parts(path: &str) -> Vec<String> {
    path.split('/')
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy())
        .filter(|segment| !matches!(segment.as_ref(), "" | FRAGMENT_MARKER | INDEX_DOCUMENT))
        .map(Cow::into_owned)
        .collect()
}

/// Turn a path segment into display text.
///
/// Every `.`, `_` and `-` becomes a single space. Casing is left alone; it
/// is applied by the list's `text-transform` style.
#[must_use]
pub fn readable(segment: &str) -> String {
    segment.replace(['.', '_', '-'], " ")
}

/// Readable labels for a list of segments, in order.
#[must_use]
pub fn sanitize<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts.iter().map(|part| readable(part.as_ref())).collect()
}

/// Link target for the first `end` segments, e.g. `#/articles/`.
///
/// Segments are percent-encoded so decoded characters such as spaces stay
/// valid inside an href. With no segments the root `#/` is returned.
#[must_use]
pub fn item_link<S: AsRef<str>>(parts: &[S], end: usize) -> String {
    let mut link = String::from("#/");
    for part in parts.iter().take(end) {
        link.extend(utf8_percent_encode(part.as_ref(), SEGMENT));
        link.push('/');
    }
    link
}
