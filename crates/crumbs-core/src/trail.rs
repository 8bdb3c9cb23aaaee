//! Breadcrumb trail assembly.

use crumbs_config::BreadcrumbConfig;

use crate::html;
use crate::route::{Route, item_link, sanitize};
use crate::title::{TitleError, TitleIndex};

/// One entry of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Crumb {
    /// Link back to the site root.
    ///
    /// `active` is set when the current page is the root itself; the entry
    /// is then the terminal one and renders without link emphasis.
    Home { active: bool },
    /// Clickable ancestor.
    Link { label: String, href: String },
    /// The current page, never clickable.
    Current { label: String },
}

impl Crumb {
    /// Whether this entry stands for the current page.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Home { active: true } | Self::Current { .. })
    }
}

/// Ordered breadcrumb entries for one page.
///
/// Built fresh for every render. When non-empty, exactly the last entry is
/// terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trail {
    crumbs: Vec<Crumb>,
}

impl Trail {
    /// Build the trail for `route`.
    ///
    /// Every navigable segment but the last becomes a [`Crumb::Link`] to its
    /// prefix path, labelled with the readable segment. The last segment is
    /// replaced by a [`Crumb::Current`] carrying the page title from
    /// `titles`. A Home entry leads the trail on every page below the root,
    /// and on the root itself only when `config.show_home` is set.
    ///
    /// # Errors
    ///
    /// Returns a [`TitleError`] when the route has segments but `titles`
    /// holds no level-1 heading for `route.file`.
    pub fn build(
        route: &Route,
        titles: &TitleIndex,
        config: &BreadcrumbConfig,
    ) -> Result<Self, TitleError> {
        let parts = route.segments();
        let is_home = parts.is_empty();

        let mut crumbs = Vec::with_capacity(parts.len() + 1);
        if config.show_home || !is_home {
            crumbs.push(Crumb::Home { active: is_home });
        }

        if let Some((_, ancestors)) = parts.split_last() {
            let title = titles.page_title(&route.file).inspect_err(|e| {
                tracing::warn!(path = %route.path, file = %route.file, error = %e, "Title lookup failed");
            })?;

            crumbs.extend(
                sanitize(ancestors)
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| Crumb::Link {
                        label,
                        href: item_link(&parts, i + 1),
                    }),
            );
            crumbs.push(Crumb::Current {
                label: title.to_owned(),
            });
        }

        tracing::debug!(path = %route.path, entries = crumbs.len(), "Built breadcrumb trail");
        Ok(Self { crumbs })
    }

    #[must_use]
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Serialize the trail to its `<nav>` markup.
    #[must_use]
    pub fn to_html(&self, config: &BreadcrumbConfig) -> String {
        html::render_trail(&self.crumbs, config)
    }
}
