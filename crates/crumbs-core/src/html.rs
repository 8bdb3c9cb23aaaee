//! Breadcrumb markup.
//!
//! Labels, titles and attribute values are escaped. The configured
//! separator is written as-is since it is itself a markup fragment
//! (`&rsaquo;` by default).

use std::fmt::Write;

use crumbs_config::BreadcrumbConfig;

use crate::trail::Crumb;

/// Link target of the Home entry.
const ROOT_HREF: &str = "#/";

/// Render trail entries wrapped in the breadcrumb `<nav>` container.
pub(crate) fn render_trail(crumbs: &[Crumb], config: &BreadcrumbConfig) -> String {
    let mut html = String::with_capacity(256 + crumbs.len() * 128);

    html.push_str("<nav aria-label=\"Breadcrumb\" class=\"breadcrumb\">\n");
    let _ = writeln!(
        html,
        "<ol class=\"breadcrumb--{}\" style=\"text-transform:{}\">",
        escape_html(&config.size),
        config.casing,
    );
    for crumb in crumbs {
        render_crumb(&mut html, crumb, config);
    }
    html.push_str("</ol>\n</nav>\n");
    html
}

fn render_crumb(html: &mut String, crumb: &Crumb, config: &BreadcrumbConfig) {
    match crumb {
        Crumb::Home { active: true } => {
            let _ = writeln!(
                html,
                "<li><a href=\"{ROOT_HREF}\" aria-current=\"page\" \
                 style=\"color: inherit; font-weight: inherit\">{}</a></li>",
                escape_html(&config.home_text),
            );
        }
        Crumb::Home { active: false } => {
            render_link(html, ROOT_HREF, &config.home_text, config);
        }
        Crumb::Link { label, href } => {
            render_link(html, href, label, config);
        }
        Crumb::Current { label } => {
            let _ = writeln!(
                html,
                "<li class=\"active\" aria-current=\"page\">{}</li>",
                escape_html(label),
            );
        }
    }
}

fn render_link(html: &mut String, href: &str, label: &str, config: &BreadcrumbConfig) {
    let _ = writeln!(
        html,
        "<li><a href=\"{}\" style=\"color: {}\">{}</a>{}</li>",
        escape_html(href),
        escape_html(&config.link_color),
        escape_html(label),
        config.separator,
    );
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
