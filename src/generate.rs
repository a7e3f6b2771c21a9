//! Static site generation.
//!
//! Renders every route of the reader to `{route}/index.html` under the output
//! directory, so the site can be hosted from any static file server. Pages
//! come from the same [`crate::pages`] handlers the HTTP server uses; "today"
//! is resolved once, at build time.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home (today's reading at build date)
//! ├── 404.html                   # Not-found page
//! ├── today/index.html           # Today's reading, or a redirect page
//! ├── feb/
//! │   ├── index.html             # Month article list
//! │   ├── today/index.html       # Only if feb has the build date's day
//! │   └── day/
//! │       ├── 1/index.html       # One page per available day
//! │       └── ...
//! └── mar/
//!     └── ...
//! ```
//!
//! Redirect routes become small meta-refresh documents since there is no
//! server to send a `Location` header.

use crate::data::{DataError, Dataset};
use crate::pages::{self, Page, PageQuery};
use crate::render::{self, SiteContext};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// What a generated file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Today,
    MonthList,
    MonthToday,
    Day,
    Redirect,
    NotFound,
}

/// One file written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    /// Route the file serves, e.g. `/feb/day/3`.
    pub route: String,
    /// Path relative to the output directory.
    pub file: PathBuf,
    pub kind: PageKind,
}

#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    pub build_date: NaiveDate,
    pub pages: Vec<GeneratedPage>,
}

impl GenerateSummary {
    pub fn count(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|p| p.kind == kind).count()
    }
}

/// File path (relative to the output root) for a route.
///
/// `/` maps to `index.html`, anything else to `{route}/index.html`.
pub fn route_file(route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(trimmed).join("index.html")
    }
}

/// Load the data file and generate the site from it.
pub fn build(
    data_path: &Path,
    ctx: &SiteContext,
    output_dir: &Path,
    today: NaiveDate,
) -> Result<GenerateSummary, GenerateError> {
    let data = Dataset::load(data_path)?;
    generate(&data, ctx, output_dir, today)
}

pub fn generate(
    data: &Dataset,
    ctx: &SiteContext,
    output_dir: &Path,
    today: NaiveDate,
) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let query = PageQuery::default();
    let mut writer = SiteWriter {
        ctx,
        output_dir,
        pages: Vec::new(),
    };

    writer.write("/", PageKind::Home, pages::home(data, ctx, &query, today))?;
    writer.write("/today", PageKind::Today, pages::today(data, ctx, &query, today))?;

    for month in data.available_months() {
        let key = month.key();
        writer.write(
            &format!("/{key}"),
            PageKind::MonthList,
            pages::month(data, ctx, key, &query),
        )?;

        let month_today = pages::month_today(data, ctx, key, &query, today);
        if !month_today.is_not_found() {
            writer.write(&format!("/{key}/today"), PageKind::MonthToday, month_today)?;
        }

        for day in data.days_for_month(month) {
            let number = day.to_string();
            writer.write(
                &format!("/{key}/day/{day}"),
                PageKind::Day,
                pages::day(data, ctx, key, &number, &query),
            )?;
        }
    }

    let not_found = pages::not_found(ctx);
    writer.write_file(Path::new("404.html"), "/404", PageKind::NotFound, not_found)?;

    info!(
        pages = writer.pages.len(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(GenerateSummary {
        output_dir: output_dir.to_path_buf(),
        build_date: today,
        pages: writer.pages,
    })
}

struct SiteWriter<'a> {
    ctx: &'a SiteContext,
    output_dir: &'a Path,
    pages: Vec<GeneratedPage>,
}

impl SiteWriter<'_> {
    fn write(&mut self, route: &str, kind: PageKind, page: Page) -> Result<(), GenerateError> {
        self.write_file(&route_file(route), route, kind, page)
    }

    fn write_file(
        &mut self,
        file: &Path,
        route: &str,
        kind: PageKind,
        page: Page,
    ) -> Result<(), GenerateError> {
        let (kind, html) = match page {
            Page::Html(markup) | Page::NotFound(markup) => (kind, markup.into_string()),
            Page::Redirect(target) => (
                PageKind::Redirect,
                render::render_redirect(self.ctx, &target).into_string(),
            ),
        };

        let path = self.output_dir.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        debug!(route, file = %file.display(), "wrote page");

        self.pages.push(GeneratedPage {
            route: route.to_string(),
            file: file.to_path_buf(),
            kind,
        });
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
