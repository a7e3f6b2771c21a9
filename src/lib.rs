//! # Devotional
//!
//! A bilingual (English/Tamil) daily devotional reader. One devotional per
//! calendar day is read from a static JSON file and served as a small website,
//! either live over HTTP or pre-rendered as static HTML.
//!
//! # Architecture: Data → Resolve → Render
//!
//! ```text
//! data.json ──▶ Dataset ──▶ resolve (today / month / day) ──▶ render (maud) ──▶ Page
//!                                                                               │
//!                                           serve: axum response ◀──────────────┤
//!                                           build: dist/**/index.html ◀─────────┘
//! ```
//!
//! - **Data** is loaded into typed, ordered maps. Keys that are not month or
//!   `dayN` keys are skipped, never fatal.
//! - **Resolve** is pure: given the dataset and a date, pick the entry a route
//!   should show, including the "today" fallback chain.
//! - **Render** turns entries into HTML with Maud. The server and the static
//!   builder both go through [`pages`], so they produce the same markup.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`calendar`] | `Month` keys and `dayN` key parsing |
//! | [`types`] | Devotional records, `Entry`, `Language`, `FontSize` |
//! | [`data`] | JSON loading and lookups (`Dataset`) |
//! | [`resolve`] | Today/month/day resolution and fallback rules |
//! | [`text`] | Excerpts, newline cleanup, card titles |
//! | [`render`] | Maud components: reader, day picker, month tabs, share menu, tour |
//! | [`pages`] | Route → `Page` mapping shared by server and builder |
//! | [`server`] | Axum router for `devotional serve` |
//! | [`generate`] | Static site output for `devotional build` |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Server-Rendered Reader State
//!
//! Language and font size have server-side defaults (config and `?la=`), and
//! the page carries both language variants so the toggle works without a
//! round trip. Font size and theme choices persist in `localStorage` through
//! a few lines of vanilla JavaScript; nothing else runs client-side.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a compile error and all interpolation is escaped, which matters here
//! because devotional bodies are user-authored markdown.
//!
//! ## Available Days Only
//!
//! Navigation never links to a day that does not exist: the day picker and
//! its arrows are built from the days present in the data, so gaps in the
//! calendar are skipped rather than leading to a 404.

pub mod calendar;
pub mod config;
pub mod data;
pub mod generate;
pub mod logging;
pub mod output;
pub mod pages;
pub mod render;
pub mod resolve;
pub mod server;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
