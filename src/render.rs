//! HTML rendering.
//!
//! Every page is built from a handful of components, all plain functions
//! returning [`Markup`]:
//!
//! | Component | Used on |
//! |-----------|---------|
//! | [`render_reader`] | `/`, `/today`, `/{month}/today`, `/{month}/day/{n}` |
//! | [`render_day_picker`] | below the reader |
//! | [`render_month_tabs`] | home page, month pages |
//! | [`render_article_card`] | month lists |
//! | [`render_share_menu`] | inside each article card |
//! | [`render_onboarding_tour`] | reader pages, first visit only |
//!
//! ## Client-side state
//!
//! The reader's language, font size and theme are client-side toggles. Both
//! language variants are rendered into the page and the inactive one is
//! `hidden`; `static/reader.js` flips between them, swaps the font-size class
//! and sets `data-theme` on `<html>`. Preferences persist in `localStorage`,
//! so the server never needs to know about them. The initial language comes
//! from the `?la=ta` query parameter or the configured default.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! every interpolated string is escaped.

use crate::calendar::Month;
use crate::config::{self, SiteConfig};
use crate::resolve::adjacent_days;
use crate::text::{card_title, clean_content, generate_excerpt, strip_day_prefix};
use crate::types::{Entry, FontSize, Language, day_path};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/reader.js");

/// Applies the stored theme before first paint, so dark-theme readers don't
/// see a light flash.
const THEME_BOOTSTRAP: &str = "(function(){try{var t=localStorage.getItem('theme');\
if(t==='dark'||t==='light'){document.documentElement.setAttribute('data-theme',t);}}catch(e){}})();";

/// `localStorage` key marking the onboarding tour as seen.
pub const ONBOARDING_STORAGE_KEY: &str = "hasSeenOnboarding";

/// Configuration plus the stylesheet derived from it, shared by every page.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub config: SiteConfig,
    css: String,
    static_site: bool,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let color_css = config::generate_color_css(&config.colors);
        let css = format!("{}\n\n{}", color_css, CSS_STATIC);
        Self {
            config,
            css,
            static_site: false,
        }
    }

    /// Context for `build` output. Static file servers ignore query strings,
    /// so home-page month tabs link to the month pages instead of `/?month=`.
    pub fn for_static_site(config: SiteConfig) -> Self {
        Self {
            static_site: true,
            ..Self::new(config)
        }
    }

    /// Tab target for month tabs on the home page.
    pub fn home_tabs(&self) -> TabTarget {
        if self.static_site {
            TabTarget::MonthPage
        } else {
            TabTarget::Home
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// URL used in share links: absolute when `site.base_url` is set.
    pub fn share_url(&self, path: &str) -> String {
        format!("{}{}", self.config.site.base_url.trim_end_matches('/'), path)
    }
}

/// Append `?la=ta` for Tamil so the language choice survives navigation.
pub fn with_language(path: &str, language: Language) -> String {
    match language {
        Language::English => path.to_string(),
        Language::Tamil if path.contains('?') => format!("{path}&la=ta"),
        Language::Tamil => format!("{path}?la=ta"),
    }
}

/// Render a markdown body to HTML.
///
/// Raw HTML in the source is shown as text rather than injected, and single
/// line breaks are kept as `<br>` since devotional bodies are written with
/// meaningful line breaks.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// Layout
// ============================================================================

/// Renders the base HTML document structure
pub fn base_document(ctx: &SiteContext, title: &str, language: Language, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(language.html_lang()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script { (PreEscaped(THEME_BOOTSTRAP)) }
                style { (PreEscaped(ctx.css())) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Sticky header: site title on the left, `right` on the right.
fn site_header(ctx: &SiteContext, wide: bool, right: Markup) -> Markup {
    html! {
        header.site-header {
            div class={ "header-inner " (container_class(wide)) } {
                a.site-title href="/" { (ctx.config.site.title) }
                div.header-right { (right) }
            }
        }
    }
}

fn site_footer(ctx: &SiteContext) -> Markup {
    html! {
        footer.site-footer {
            p { (ctx.config.site.footer) }
        }
    }
}

fn container_class(wide: bool) -> &'static str {
    if wide { "container-wide" } else { "container" }
}

// ============================================================================
// Reader
// ============================================================================

/// The three reader controls: language, font size, theme.
fn reader_controls(language: Language, font_size: FontSize) -> Markup {
    html! {
        button #language-button .icon-button type="button" title="Switch Language"
            aria-label="Switch Language" data-language=(language.key()) {
            span.lang-label { "EN" } " / " span.lang-label { "த" }
        }
        div.font-menu {
            button #font-button .icon-button type="button" title="Font Size"
                aria-label="Font Size" aria-haspopup="menu" aria-expanded="false" {
                "Aa"
            }
            ul.menu-items.font-menu-items role="menu" hidden {
                @for size in FontSize::ALL {
                    li role="none" {
                        button.font-option.selected[size == font_size] type="button" role="menuitem"
                            data-font=(size.css_class()) {
                            (size.label())
                        }
                    }
                }
            }
        }
        button #theme-button .icon-button type="button" title="Toggle theme" aria-label="Toggle theme" {
            span.icon-sun aria-hidden="true" { "☀" }
            span.icon-moon aria-hidden="true" { "☾" }
            span.sr-only { "Toggle theme" }
        }
    }
}

/// Reader view body: both language variants (inactive one hidden) and the
/// day picker.
pub fn render_reader(
    ctx: &SiteContext,
    entry: Entry<'_>,
    days: &[u32],
    language: Language,
) -> Markup {
    let font_size = ctx.config.reader.font_size;
    html! {
        main.reader-main.container {
            div #reader-content class={ "reader-content " (font_size.css_class()) }
                data-font=(font_size.css_class()) {
                @for lang in [Language::English, Language::Tamil] {
                    @let text = entry.devotional.text(lang);
                    div.lang-variant data-lang=(lang.key()) lang=(lang.html_lang()) hidden[lang != language] {
                        h1.reader-title { (text.title) }
                        article.prose {
                            (PreEscaped(markdown_to_html(&clean_content(&text.data))))
                        }
                    }
                }
            }
            div.day-picker-section {
                (render_day_picker(entry.month, days, entry.day, true, language))
            }
        }
    }
}

/// Full reader page for a single entry.
pub fn render_reader_page(
    ctx: &SiteContext,
    entry: Entry<'_>,
    days: &[u32],
    language: Language,
) -> Markup {
    let title = entry.devotional.text(language).title.clone();
    let content = html! {
        (render_onboarding_tour())
        (site_header(ctx, false, reader_controls(language, ctx.config.reader.font_size)))
        (render_reader(ctx, entry, days, language))
        (site_footer(ctx))
    };
    base_document(ctx, &title, language, content)
}

// ============================================================================
// Day picker
// ============================================================================

/// Links to every available day of the month, with arrows to the adjacent
/// available days. Links keep the reader's language.
pub fn render_day_picker(
    month: Month,
    days: &[u32],
    current: u32,
    inline: bool,
    language: Language,
) -> Markup {
    let (prev, next) = adjacent_days(days, current);
    let href = |day: u32| with_language(&day_path(month, day), language);
    html! {
        nav.day-picker.inline[inline] aria-label="Days" {
            div.day-picker-row {
                @if let Some(day) = prev {
                    a.day-arrow href=(href(day)) aria-label="Previous day" { "‹" }
                } @else {
                    span.day-arrow-spacer {}
                }
                div.day-links {
                    @for &day in days {
                        @let is_current = day == current;
                        a.day-link.current[is_current] href=(href(day))
                            aria-current=[is_current.then_some("page")] {
                            (day)
                        }
                    }
                }
                @if let Some(day) = next {
                    a.day-arrow href=(href(day)) aria-label="Next day" { "›" }
                } @else {
                    span.day-arrow-spacer {}
                }
            }
            p.day-picker-label { "Day " (current) " • " (month.display_name()) }
        }
    }
}

// ============================================================================
// Month tabs
// ============================================================================

/// Where month tabs navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTarget {
    /// Home page: `/?month=m`, or `/` for the first month.
    Home,
    /// Month list pages: `/{m}`.
    MonthPage,
}

pub fn month_tab_href(months: &[Month], month: Month, target: TabTarget, language: Language) -> String {
    let path = match target {
        TabTarget::Home if months.first() == Some(&month) => "/".to_string(),
        TabTarget::Home => format!("/?month={}", month.key()),
        TabTarget::MonthPage => format!("/{}", month.key()),
    };
    with_language(&path, language)
}

pub fn render_month_tabs(
    months: &[Month],
    active: Month,
    target: TabTarget,
    language: Language,
) -> Markup {
    html! {
        nav.month-tabs aria-label="Months" {
            div.month-tabs-row {
                @for &month in months {
                    @let is_active = month == active;
                    a.month-tab.active[is_active] href=(month_tab_href(months, month, target, language))
                        aria-current=[is_active.then_some("page")] {
                        (month.display_name())
                    }
                }
            }
        }
    }
}

// ============================================================================
// Article cards and sharing
// ============================================================================

pub fn render_article_card(ctx: &SiteContext, entry: Entry<'_>, language: Language) -> Markup {
    let text = entry.devotional.text(language);
    let heading = card_title(language, entry.day, &text.title);
    let excerpt = generate_excerpt(&text.data, ctx.config.excerpt_length);
    let path = entry.path();
    let href = with_language(&path, language);
    let share_url = ctx.share_url(&path);

    html! {
        div.card {
            div.card-header {
                a.card-title-link href=(href) {
                    h3.card-title { (heading) }
                }
                (render_share_menu(&share_url, &strip_day_prefix(&text.title)))
            }
            a.card-excerpt-link href=(href) {
                p.card-excerpt { (excerpt) }
            }
        }
    }
}

/// Share targets as `(label, href)` pairs, parameters URL-encoded.
pub fn share_links(url: &str, title: &str) -> Vec<(&'static str, String)> {
    let u = urlencoding::encode(url);
    let t = urlencoding::encode(title);
    vec![
        ("WhatsApp", format!("https://wa.me/?text={t}%20{u}")),
        ("Facebook", format!("https://www.facebook.com/sharer/sharer.php?u={u}")),
        ("X", format!("https://twitter.com/intent/tweet?text={t}&url={u}")),
        ("Telegram", format!("https://t.me/share/url?url={u}&text={t}")),
        ("Email", format!("mailto:?subject={t}&body={u}")),
    ]
}

pub fn render_share_menu(url: &str, title: &str) -> Markup {
    html! {
        details.share-menu {
            summary.icon-button title="Share" aria-label="Share" { "Share" }
            ul.menu-items.share-menu-items role="menu" {
                @for (label, href) in share_links(url, title) {
                    li role="none" {
                        a role="menuitem" href=(href) target="_blank" rel="noopener noreferrer" { (label) }
                    }
                }
                li role="none" {
                    button.copy-link type="button" role="menuitem" data-url=(url) { "Copy link" }
                }
            }
        }
    }
}

// ============================================================================
// Onboarding tour
// ============================================================================

/// One step of the first-visit tour, anchored to a reader control.
#[derive(Debug, Clone, Copy)]
pub struct TourStep {
    pub target_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TOUR_STEPS: [TourStep; 3] = [
    TourStep {
        target_id: "language-button",
        title: "Switch Language",
        description: "Toggle between English and Tamil translations of the devotional.",
    },
    TourStep {
        target_id: "font-button",
        title: "Font Size",
        description: "Adjust the text size for comfortable reading - from small to extra large.",
    },
    TourStep {
        target_id: "theme-button",
        title: "Theme Toggle",
        description: "Switch between light and dark themes based on your preference.",
    },
];

/// Tour markup. Starts hidden; the script reveals it unless
/// [`ONBOARDING_STORAGE_KEY`] is set, and sets the key on finish or skip.
pub fn render_onboarding_tour() -> Markup {
    let last = TOUR_STEPS.len() - 1;
    html! {
        div #onboarding-tour .tour hidden data-storage-key=(ONBOARDING_STORAGE_KEY) {
            div.tour-backdrop {}
            div.tour-highlight {}
            @for (idx, step) in TOUR_STEPS.iter().enumerate() {
                div.tour-step role="dialog" aria-label=(step.title) data-step=(idx)
                    data-target=(step.target_id) hidden[idx != 0] {
                    div.tour-step-header {
                        h2.tour-step-title { (step.title) }
                        button.tour-skip type="button" aria-label="Skip tour" { "×" }
                    }
                    p.tour-step-description { (step.description) }
                    div.tour-step-footer {
                        span.tour-progress { (idx + 1) " of " (TOUR_STEPS.len()) }
                        div.tour-buttons {
                            @if idx > 0 {
                                button.tour-prev type="button" { "Back" }
                            }
                            button.tour-next type="button" {
                                @if idx == last { "Finish" } @else { "Next" }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

fn card_grid(ctx: &SiteContext, entries: &[Entry<'_>], language: Language) -> Markup {
    html! {
        div.card-grid {
            @for &entry in entries {
                (render_article_card(ctx, entry, language))
            }
        }
    }
}

/// Home page: today's reader followed by the month browser.
pub fn render_home(
    ctx: &SiteContext,
    entry: Entry<'_>,
    days: &[u32],
    months: &[Month],
    month_entries: &[Entry<'_>],
    language: Language,
) -> Markup {
    let title = entry.devotional.text(language).title.clone();
    let content = html! {
        (render_onboarding_tour())
        (site_header(ctx, false, reader_controls(language, ctx.config.reader.font_size)))
        (render_reader(ctx, entry, days, language))
        section.browse {
            div.container-wide {
                h2.section-title { "Browse by Month" }
                (render_month_tabs(months, entry.month, ctx.home_tabs(), language))
                (card_grid(ctx, month_entries, language))
            }
        }
        (site_footer(ctx))
    };
    base_document(ctx, &title, language, content)
}

/// Month list page: tabs plus one card per available day.
pub fn render_month_page(
    ctx: &SiteContext,
    month: Month,
    months: &[Month],
    entries: &[Entry<'_>],
    target: TabTarget,
    language: Language,
) -> Markup {
    let name = month.display_name();
    let header_right = html! {
        span.header-caption { (name) " Devotionals" }
    };
    let content = html! {
        (site_header(ctx, true, header_right))
        (render_month_tabs(months, month, target, language))
        main.month-page.container-wide {
            h1.page-title { (name) " Articles" }
            (card_grid(ctx, entries, language))
        }
        (site_footer(ctx))
    };
    base_document(ctx, &format!("{name} Devotionals"), language, content)
}

/// Shown when the dataset has no available months.
pub fn render_empty(ctx: &SiteContext) -> Markup {
    let content = html! {
        main.centered-message {
            h1.page-title { "No Devotionals Available" }
            p.muted { "Please check back later." }
        }
    };
    base_document(ctx, &ctx.config.site.title, Language::English, content)
}

pub fn render_not_found(ctx: &SiteContext) -> Markup {
    let content = html! {
        (site_header(ctx, false, html! {}))
        main.centered-message {
            h1.page-title { "404" }
            p.muted { "This devotional could not be found." }
            p { a href="/" { "Go to today's devotional" } }
        }
        (site_footer(ctx))
    };
    base_document(ctx, "Not Found", Language::English, content)
}

/// Client-side redirect for static builds, where no HTTP redirect is possible.
pub fn render_redirect(ctx: &SiteContext, target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(target);
                title { (ctx.config.site.title) }
            }
            body {
                p { a href=(target) { "Continue" } }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn base_document_includes_doctype_and_lang() {
        let ctx = test_context();
        let doc = base_document(&ctx, "T", Language::Tamil, html! { p { "x" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="ta">"#));
    }

    #[test]
    fn base_document_css_is_not_escaped() {
        let ctx = test_context();
        let doc = base_document(&ctx, "T", Language::English, html! {}).into_string();
        assert!(doc.contains(r#":root[data-theme="dark"]"#));
        assert!(!doc.contains("&quot;dark&quot;"));
    }

    #[test]
    fn markdown_renders_formatting() {
        let html = markdown_to_html("This is **bold** and *italic*.");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html = markdown_to_html("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn markdown_keeps_single_line_breaks() {
        let html = markdown_to_html("line one\nline two");
        assert!(html.contains("<br"));
    }

    #[test]
    fn reader_renders_both_languages_with_inactive_hidden() {
        let ctx = test_context();
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 1);
        let html = render_reader(&ctx, entry, &[1, 2, 3, 5], Language::Tamil).into_string();

        assert!(html.contains("A New Beginning"));
        assert!(html.contains("ஒரு புதிய தொடக்கம்"));
        assert!(html.contains(r#"data-lang="english" lang="en" hidden"#));
        assert!(!html.contains(r#"data-lang="tamil" lang="ta" hidden"#));
    }

    #[test]
    fn reader_cleans_excess_newlines_and_renders_markdown() {
        let ctx = test_context();
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 1);
        let html = render_reader(&ctx, entry, &[1], Language::English).into_string();
        assert!(html.contains("<strong>Read:</strong>"));
        assert!(html.contains("<blockquote>"));
    }

    #[test]
    fn reader_applies_configured_font_size() {
        let mut config = SiteConfig::default();
        config.reader.font_size = FontSize::Small;
        let ctx = SiteContext::new(config);
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 1);
        let html = render_reader(&ctx, entry, &[1], Language::English).into_string();
        assert!(html.contains("reader-content text-sm"));
    }

    #[test]
    fn reader_page_has_controls_tour_and_footer() {
        let ctx = test_context();
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 2);
        let html = render_reader_page(&ctx, entry, &[1, 2], Language::English).into_string();

        assert!(html.contains(r#"id="language-button""#));
        assert!(html.contains(r#"id="font-button""#));
        assert!(html.contains(r#"id="theme-button""#));
        assert!(html.contains(r#"id="onboarding-tour""#));
        assert!(html.contains("May God bless you."));
        assert!(html.contains("<title>Day 2 — Walking in the Light</title>"));
    }

    #[test]
    fn font_menu_lists_all_sizes_and_marks_current() {
        let html = reader_controls(Language::English, FontSize::Large).into_string();
        for size in FontSize::ALL {
            assert!(html.contains(size.label()));
        }
        assert!(html.contains(r#"class="font-option selected" type="button" role="menuitem" data-font="text-lg""#));
    }

    #[test]
    fn day_picker_links_available_days_and_marks_current() {
        let html =
            render_day_picker(Month::Feb, &[1, 2, 3, 5], 3, true, Language::English).into_string();
        assert!(html.contains(r#"href="/feb/day/5""#));
        assert!(!html.contains(r#"href="/feb/day/4""#));
        assert!(html.contains(r#"class="day-link current""#));
        assert!(html.contains(r#"aria-current="page""#));
    }

    #[test]
    fn day_picker_arrows_skip_gaps() {
        let html =
            render_day_picker(Month::Feb, &[1, 2, 3, 5], 5, true, Language::English).into_string();
        assert!(html.contains(r#"href="/feb/day/3" aria-label="Previous day""#));
        assert!(!html.contains("Next day"));
    }

    #[test]
    fn day_picker_first_day_has_no_previous() {
        let html =
            render_day_picker(Month::Mar, &[1, 2, 10], 1, false, Language::English).into_string();
        assert!(!html.contains("Previous day"));
        assert!(html.contains("Next day"));
        assert!(html.contains("Day 1 • Mar"));
    }

    #[test]
    fn inline_day_picker_keeps_tamil_and_names_month() {
        let html =
            render_day_picker(Month::Feb, &[1, 2, 3, 5], 3, true, Language::Tamil).into_string();
        assert!(html.contains(r#"href="/feb/day/5?la=ta""#));
        assert!(html.contains(r#"href="/feb/day/2?la=ta" aria-label="Previous day""#));
        assert!(!html.contains(r#"href="/feb/day/1""#));
        assert!(html.contains("Day 3 • Feb"));
    }

    #[test]
    fn month_tab_hrefs_by_target() {
        let months = [Month::Feb, Month::Mar];
        assert_eq!(month_tab_href(&months, Month::Feb, TabTarget::Home, Language::English), "/");
        assert_eq!(
            month_tab_href(&months, Month::Mar, TabTarget::Home, Language::English),
            "/?month=mar"
        );
        assert_eq!(
            month_tab_href(&months, Month::Mar, TabTarget::Home, Language::Tamil),
            "/?month=mar&la=ta"
        );
        assert_eq!(
            month_tab_href(&months, Month::Feb, TabTarget::MonthPage, Language::English),
            "/feb"
        );
    }

    #[test]
    fn month_tabs_mark_active() {
        let html = render_month_tabs(&[Month::Feb, Month::Mar], Month::Mar, TabTarget::MonthPage, Language::English)
            .into_string();
        assert!(html.contains(r#"class="month-tab active" href="/mar""#));
        assert!(html.contains(">Feb<"));
    }

    #[test]
    fn article_card_strips_and_reprefixes_title() {
        let ctx = test_context();
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 2);
        let html = render_article_card(&ctx, entry, Language::English).into_string();
        assert!(html.contains("Day 2 - Walking in the Light"));
        assert!(html.contains(r#"href="/feb/day/2""#));

        let html = render_article_card(&ctx, entry, Language::Tamil).into_string();
        assert!(html.contains("நாள் 2 - வெளிச்சத்தில் நடத்தல்"));
        assert!(html.contains(r#"href="/feb/day/2?la=ta""#));
    }

    #[test]
    fn article_card_excerpt_respects_config_length() {
        let mut config = SiteConfig::default();
        config.excerpt_length = 10;
        let ctx = SiteContext::new(config);
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 1);
        let html = render_article_card(&ctx, entry, Language::English).into_string();
        assert!(html.contains("Read: Lamentations...") || html.contains("Read:..."));
    }

    #[test]
    fn share_urls_use_base_url() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.org/".to_string();
        let ctx = SiteContext::new(config);
        assert_eq!(ctx.share_url("/feb/day/1"), "https://example.org/feb/day/1");
        assert_eq!(test_context().share_url("/feb/day/1"), "/feb/day/1");
    }

    #[test]
    fn share_links_are_encoded() {
        let links = share_links("https://example.org/feb/day/1", "Rest & Peace");
        let (_, x) = links.iter().find(|(label, _)| *label == "X").unwrap();
        assert!(x.contains("text=Rest%20%26%20Peace"));
        assert!(x.contains("url=https%3A%2F%2Fexample.org%2Ffeb%2Fday%2F1"));
        assert_eq!(links.len(), 5);
    }

    #[test]
    fn share_menu_has_copy_button() {
        let html = render_share_menu("/feb/day/1", "Grace").into_string();
        assert!(html.contains(r#"data-url="/feb/day/1""#));
        assert!(html.contains("Copy link"));
        assert!(html.contains("WhatsApp"));
    }

    #[test]
    fn onboarding_tour_has_three_steps_first_visible() {
        let html = render_onboarding_tour().into_string();
        assert_eq!(html.matches("tour-step\"").count() + html.matches("tour-step ").count(), 3);
        assert!(html.contains(r#"data-step="0" data-target="language-button">"#));
        assert!(html.contains(r#"data-step="1" data-target="font-button" hidden"#));
        assert!(html.contains("Finish"));
        assert!(html.contains(ONBOARDING_STORAGE_KEY));
    }

    #[test]
    fn month_page_titles() {
        let ctx = test_context();
        let data = fixture_dataset();
        let entries = data.devotionals_for_month(Month::Mar);
        let html = render_month_page(
            &ctx,
            Month::Mar,
            &data.available_months(),
            &entries,
            TabTarget::MonthPage,
            Language::English,
        )
        .into_string();
        assert!(html.contains("<title>Mar Devotionals</title>"));
        assert!(html.contains("Mar Articles"));
        assert_eq!(html.matches(r#"class="card""#).count(), 3);
    }

    #[test]
    fn home_includes_browse_section() {
        let ctx = test_context();
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 1);
        let entries = data.devotionals_for_month(Month::Feb);
        let html = render_home(
            &ctx,
            entry,
            &data.days_for_month(Month::Feb),
            &data.available_months(),
            &entries,
            Language::English,
        )
        .into_string();
        assert!(html.contains("Browse by Month"));
        assert!(html.contains(r#"href="/?month=mar""#));
        assert_eq!(html.matches(r#"class="card""#).count(), 4);
    }

    #[test]
    fn static_home_tabs_link_to_month_pages() {
        let ctx = SiteContext::for_static_site(SiteConfig::default());
        let data = fixture_dataset();
        let entry = find_entry(&data, Month::Feb, 1);
        let html = render_home(
            &ctx,
            entry,
            &[1],
            &data.available_months(),
            &[entry],
            Language::English,
        )
        .into_string();
        assert!(html.contains(r#"href="/mar""#));
        assert!(!html.contains("?month="));
    }

    #[test]
    fn empty_and_not_found_pages() {
        let ctx = test_context();
        assert!(render_empty(&ctx).into_string().contains("No Devotionals Available"));
        assert!(render_not_found(&ctx).into_string().contains("404"));
    }

    #[test]
    fn redirect_page_refreshes_to_target() {
        let html = render_redirect(&test_context(), "/feb/day/1").into_string();
        assert!(html.contains(r#"content="0; url=/feb/day/1""#));
    }

    #[test]
    fn titles_are_escaped() {
        let html = render_share_menu("/x", "<script>alert('xss')</script>").into_string();
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn with_language_appends_query() {
        assert_eq!(with_language("/feb", Language::English), "/feb");
        assert_eq!(with_language("/feb", Language::Tamil), "/feb?la=ta");
        assert_eq!(with_language("/?month=mar", Language::Tamil), "/?month=mar&la=ta");
    }
}
