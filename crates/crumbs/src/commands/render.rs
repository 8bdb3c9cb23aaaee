//! `crumbs render` command implementation.

use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::Args;
use crumbs_config::{CliSettings, Config, TextCasing};
use crumbs_core::{BreadcrumbHook, HookChain, PageContext, Route, TitleIndex};

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Route path of the page (e.g. `/guide/setup` or `#/guide/setup`).
    #[arg(long)]
    path: String,

    /// Document identifier for title lookup (default: the path without
    /// fragment marker and surrounding slashes).
    #[arg(long)]
    file: Option<String>,

    /// JSON title index: `{"<file>": [{"level": 1, "title": "..."}]}`.
    #[arg(long, required_unless_present = "markdown", conflicts_with = "markdown")]
    titles: Option<PathBuf>,

    /// Markdown source of the page, indexed for its title.
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Rendered page HTML (default: read from stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover crumbs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the Home entry on the home page too.
    #[arg(long)]
    show_home: bool,

    /// Hide the Home entry on the home page.
    #[arg(long, conflicts_with = "show_home")]
    hide_home: bool,

    /// Label of the Home entry (overrides config).
    #[arg(long)]
    home_text: Option<String>,

    /// Markup placed after each link (overrides config).
    #[arg(long, allow_hyphen_values = true)]
    separator: Option<String>,

    /// CSS text-transform keyword (overrides config).
    #[arg(long)]
    casing: Option<TextCasing>,

    /// CSS color of link entries (overrides config).
    #[arg(long)]
    link_color: Option<String>,

    /// Size keyword for the `breadcrumb--<size>` class (overrides config).
    #[arg(long)]
    size: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input files or the title lookup fail.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        if self.input.is_none() && std::io::stdin().is_terminal() {
            tracing::warn!("Reading page HTML from stdin (Ctrl-D to finish)");
        }
        let page_html = self.read_page()?;

        let html = self.run(page_html)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Load configuration and titles, then run the page through the hook chain.
    fn run(&self, page_html: String) -> Result<String, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;

        let route = self.route();
        let titles = self.load_titles(&route.file)?;
        tracing::info!(path = %route.path, file = %route.file, "Rendering breadcrumb");

        let chain = HookChain::new().with_hook(BreadcrumbHook::new(config.breadcrumb));
        Ok(chain.run(page_html, &PageContext::new(&route, &titles))?)
    }

    fn cli_settings(&self) -> CliSettings {
        let show_home = if self.show_home {
            Some(true)
        } else if self.hide_home {
            Some(false)
        } else {
            None
        };

        CliSettings {
            show_home,
            home_text: self.home_text.clone(),
            separator: self.separator.clone(),
            casing: self.casing,
            link_color: self.link_color.clone(),
            size: self.size.clone(),
        }
    }

    fn route(&self) -> Route {
        match &self.file {
            Some(file) => Route::new(self.path.clone(), file.clone()),
            None => Route::from_path(self.path.clone()),
        }
    }

    fn load_titles(&self, file: &str) -> Result<TitleIndex, CliError> {
        if let Some(path) = &self.markdown {
            let source = std::fs::read_to_string(path)?;
            let mut titles = TitleIndex::new();
            titles.insert_markdown(file, &source);
            return Ok(titles);
        }

        match &self.titles {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let titles: TitleIndex = serde_json::from_str(&json)?;
                tracing::debug!(path = %path.display(), files = titles.len(), "Loaded title index");
                Ok(titles)
            }
            None => Ok(TitleIndex::new()),
        }
    }

    fn read_page(&self) -> Result<String, CliError> {
        match &self.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut html = String::new();
                std::io::stdin().lock().read_to_string(&mut html)?;
                Ok(html)
            }
        }
    }
}
