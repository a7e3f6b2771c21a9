//! Route handlers shared by the HTTP server and the static site generator.
//!
//! Each function maps one route to a [`Page`]: resolve the entry with
//! [`crate::resolve`], then render it with [`crate::render`]. Neither the
//! server nor the generator contains any lookup logic of its own, so both
//! deliver identical pages for the same date.

use crate::data::Dataset;
use crate::render::{self, SiteContext, TabTarget};
use crate::resolve::{self, HomeView, TodayResolution};
use crate::types::{Entry, Language};
use chrono::NaiveDate;
use maud::Markup;
use serde::Deserialize;

/// Result of handling a route.
#[derive(Debug)]
pub enum Page {
    Html(Markup),
    Redirect(String),
    NotFound(Markup),
}

impl Page {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Page::NotFound(_))
    }
}

/// Query parameters understood by every page: `month` (home page only) and
/// `la` (`ta` for Tamil).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub month: Option<String>,
    pub la: Option<String>,
}

impl PageQuery {
    /// Language from `la`, or the configured default when absent.
    pub fn language(&self, ctx: &SiteContext) -> Language {
        match self.la.as_deref() {
            None => ctx.config.reader.language,
            la => Language::from_query(la),
        }
    }
}

fn reader_page(data: &Dataset, ctx: &SiteContext, entry: Entry<'_>, language: Language) -> Page {
    let days = data.days_for_month(entry.month);
    Page::Html(render::render_reader_page(ctx, entry, &days, language))
}

/// `GET /`
pub fn home(data: &Dataset, ctx: &SiteContext, query: &PageQuery, today: NaiveDate) -> Page {
    let language = query.language(ctx);
    match resolve::resolve_home(data, query.month.as_deref(), today) {
        HomeView::Empty => Page::Html(render::render_empty(ctx)),
        HomeView::MonthList(month) => {
            let entries = data.devotionals_for_month(month);
            Page::Html(render::render_month_page(
                ctx,
                month,
                &data.available_months(),
                &entries,
                ctx.home_tabs(),
                language,
            ))
        }
        HomeView::Reader(entry) => {
            let days = data.days_for_month(entry.month);
            let entries = data.devotionals_for_month(entry.month);
            Page::Html(render::render_home(
                ctx,
                entry,
                &days,
                &data.available_months(),
                &entries,
                language,
            ))
        }
    }
}

/// `GET /today`
pub fn today(data: &Dataset, ctx: &SiteContext, query: &PageQuery, today: NaiveDate) -> Page {
    match resolve::resolve_today(data, today, ctx.config.fallback()) {
        TodayResolution::Found(entry) => reader_page(data, ctx, entry, query.language(ctx)),
        TodayResolution::Redirect(path) => Page::Redirect(path),
    }
}

/// `GET /{month}`
pub fn month(data: &Dataset, ctx: &SiteContext, month_key: &str, query: &PageQuery) -> Page {
    match resolve::resolve_month(data, month_key) {
        Some(month) => {
            let entries = data.devotionals_for_month(month);
            Page::Html(render::render_month_page(
                ctx,
                month,
                &data.available_months(),
                &entries,
                TabTarget::MonthPage,
                query.language(ctx),
            ))
        }
        None => not_found(ctx),
    }
}

/// `GET /{month}/today`
pub fn month_today(
    data: &Dataset,
    ctx: &SiteContext,
    month_key: &str,
    query: &PageQuery,
    today: NaiveDate,
) -> Page {
    match resolve::resolve_month_today(data, month_key, today) {
        Some(entry) => reader_page(data, ctx, entry, query.language(ctx)),
        None => not_found(ctx),
    }
}

/// `GET /{month}/day/{number}`
pub fn day(
    data: &Dataset,
    ctx: &SiteContext,
    month_key: &str,
    number: &str,
    query: &PageQuery,
) -> Page {
    match resolve::resolve_day(data, month_key, number) {
        Some(entry) => reader_page(data, ctx, entry, query.language(ctx)),
        None => not_found(ctx),
    }
}

pub fn not_found(ctx: &SiteContext) -> Page {
    Page::NotFound(render::render_not_found(ctx))
}
