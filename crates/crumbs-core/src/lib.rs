//! Breadcrumb trails for documentation pages.
//!
//! This crate turns the current page's route into an accessible breadcrumb
//! trail: a Home link, one link per ancestor path segment, and a terminal
//! entry carrying the page title.
//!
//! The pipeline is pure and deterministic:
//!
//! 1. [`url_parts`] splits and percent-decodes the route path.
//! 2. [`sanitize`] turns segments into readable labels.
//! 3. [`Trail::build`] assembles typed [`Crumb`] entries, resolving the page
//!    title from the host's [`TitleIndex`].
//! 4. [`Trail::to_html`] serializes the entries to escaped markup.
//!
//! Hosts either call [`render`] directly or register a [`BreadcrumbHook`] in
//! a [`HookChain`] that runs after each page render.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use crumbs_config::BreadcrumbConfig;
//! use crumbs_core::{Heading, Route, TitleIndex, render};
//!
//! let mut titles = TitleIndex::new();
//! titles.insert(
//!     "articles/books-and-more/adventure",
//!     vec![Heading::new(1, "Books and More")],
//! );
//! let route = Route::new("/articles/books-and-more/adventure", "articles/books-and-more/adventure");
//!
//! let html = render(&route, &titles, &BreadcrumbConfig::default())?;
//! assert!(html.contains(r##"<a href="#/articles/" style="color: var(--theme-color, #42b983)">articles</a>"##));
//! assert!(html.contains(r#"<li class="active" aria-current="page">Books and More</li>"#));
//! # Ok(())
//! # }
//! ```

mod error;
mod hook;
mod html;
mod route;
mod title;
mod trail;

use crumbs_config::BreadcrumbConfig;

pub use error::RenderError;
pub use hook::{AfterRender, BreadcrumbHook, HookChain, PageContext};
pub use html::escape_html;
pub use route::{Route, item_link, readable, sanitize, url_parts};
pub use title::{Heading, TitleError, TitleIndex, headings};
pub use trail::{Crumb, Trail};

/// Render the breadcrumb markup for `route`.
///
/// Returns the `<nav>` fragment the host prepends to the rendered page.
/// Home pages with `show_home` disabled yield the empty wrapper.
///
/// # Errors
///
/// Returns `RenderError::Title` if `titles` lacks a level-1 heading for a
/// page below the root.
pub fn render(
    route: &Route,
    titles: &TitleIndex,
    config: &BreadcrumbConfig,
) -> Result<String, RenderError> {
    Ok(Trail::build(route, titles, config)?.to_html(config))
}
