//! Post-render hooks.
//!
//! A host renders a page to HTML and then threads it through a
//! [`HookChain`]. Every hook receives the output of the previous one and
//! hands back the transformed document; the chain returns the output of the
//! last hook. [`BreadcrumbHook`] prepends the breadcrumb trail.
//!
//! # Example
//!
//! ```
//! use crumbs_config::BreadcrumbConfig;
//! use crumbs_core::{BreadcrumbHook, Heading, HookChain, PageContext, Route, TitleIndex};
//!
//! let mut titles = TitleIndex::new();
//! titles.insert("guide/setup", vec![Heading::new(1, "Setup")]);
//! let route = Route::new("/guide/setup", "guide/setup");
//!
//! let chain = HookChain::new().with_hook(BreadcrumbHook::new(BreadcrumbConfig::default()));
//! let html = chain
//!     .run("<h1>Setup</h1>".to_owned(), &PageContext::new(&route, &titles))
//!     .unwrap();
//!
//! assert!(html.starts_with("<nav aria-label=\"Breadcrumb\""));
//! assert!(html.ends_with("<h1>Setup</h1>"));
//! ```

use crumbs_config::BreadcrumbConfig;

use crate::error::RenderError;
use crate::route::Route;
use crate::title::TitleIndex;

/// Per-page data available to hooks.
#[derive(Clone, Copy, Debug)]
pub struct PageContext<'a> {
    /// The page being rendered.
    pub route: &'a Route,
    /// Heading index maintained by the host.
    pub titles: &'a TitleIndex,
}

impl<'a> PageContext<'a> {
    pub fn new(route: &'a Route, titles: &'a TitleIndex) -> Self {
        Self { route, titles }
    }
}

/// Transformation applied to a page after it has been rendered.
///
/// Implementations must return the whole document: dropping `html` loses
/// the page for every later hook.
pub trait AfterRender: Send + Sync {
    /// Transform the rendered page.
    ///
    /// # Errors
    ///
    /// An error aborts the chain; no later hook runs.
    fn after_render(&self, html: String, page: &PageContext<'_>) -> Result<String, RenderError>;
}

/// Hook that prepends the breadcrumb trail to the page.
#[derive(Debug, Clone)]
pub struct BreadcrumbHook {
    config: BreadcrumbConfig,
}

impl BreadcrumbHook {
    #[must_use]
    pub fn new(config: BreadcrumbConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }
}

impl AfterRender for BreadcrumbHook {
    fn after_render(&self, html: String, page: &PageContext<'_>) -> Result<String, RenderError> {
        let mut output = crate::render(page.route, page.titles, &self.config)?;
        output.push_str(&html);
        Ok(output)
    }
}

/// Adapter running a closure as a hook.
struct FnHook<F>(F);

impl<F> AfterRender for FnHook<F>
where
    F: Fn(String, &PageContext<'_>) -> Result<String, RenderError> + Send + Sync,
{
    fn after_render(&self, html: String, page: &PageContext<'_>) -> Result<String, RenderError> {
        (self.0)(html, page)
    }
}

/// Ordered list of post-render hooks.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn AfterRender>>,
}

impl HookChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook; it runs after every hook added before it.
    #[must_use]
    pub fn with_hook(mut self, hook: impl AfterRender + 'static) -> Self {
        self.push(hook);
        self
    }

    /// Append a closure hook.
    #[must_use]
    pub fn with_fn<F>(self, f: F) -> Self
    where
        F: Fn(String, &PageContext<'_>) -> Result<String, RenderError> + Send + Sync + 'static,
    {
        self.with_hook(FnHook(f))
    }

    /// Append a hook in place.
    pub fn push(&mut self, hook: impl AfterRender + 'static) {
        self.hooks.push(Box::new(hook));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Thread `html` through every hook in order.
    ///
    /// # Errors
    ///
    /// Returns the first hook error; remaining hooks are skipped.
    pub fn run(&self, html: String, page: &PageContext<'_>) -> Result<String, RenderError> {
        tracing::debug!(path = %page.route.path, hooks = self.hooks.len(), "Running after-render hooks");
        self.hooks
            .iter()
            .try_fold(html, |html, hook| hook.after_render(html, page))
    }
}
