//! HTTP delivery for `devotional serve`.
//!
//! A thin axum layer over [`crate::pages`]. The data file is read again on
//! every request, so edits to it show up without a restart; the file is small
//! and there is no cache to invalidate. Reads run on tokio's blocking pool so
//! a slow disk never stalls the runtime workers.
//!
//! ## Routes
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | [`pages::home`] (`?month=`, `?la=`) |
//! | `GET /today` | [`pages::today`] (may redirect) |
//! | `GET /{month}` | [`pages::month`] |
//! | `GET /{month}/today` | [`pages::month_today`] |
//! | `GET /{month}/day/{number}` | [`pages::day`] |
//! | anything else | 404 page |

use crate::data::{DataError, Dataset};
use crate::pages::{self, Page, PageQuery};
use crate::render::SiteContext;
use axum::Router;
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Immutable state shared by all requests.
#[derive(Debug)]
pub struct AppState {
    pub ctx: SiteContext,
    pub data_path: PathBuf,
    /// Pins "today" for every request; `None` uses the local date.
    pub fixed_date: Option<NaiveDate>,
}

impl AppState {
    pub fn new(ctx: SiteContext, data_path: PathBuf) -> Self {
        Self {
            ctx,
            data_path,
            fixed_date: None,
        }
    }

    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Read and parse the data file off the async runtime.
    async fn load_dataset(&self) -> Result<Dataset, ServeError> {
        let path = self.data_path.clone();
        let data = tokio::task::spawn_blocking(move || Dataset::load(&path))
            .await
            .map_err(std::io::Error::other)??;
        Ok(data)
    }

    /// Load the dataset and hand it to `handler`; a load failure becomes a 500.
    async fn respond(&self, handler: impl FnOnce(&Dataset) -> Page) -> Response {
        match self.load_dataset().await {
            Ok(data) => page_response(handler(&data)),
            Err(e) => {
                error!(error = %e, "failed to load dataset");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The devotionals could not be loaded.",
                )
                    .into_response()
            }
        }
    }
}

type SharedState = Arc<AppState>;

/// Convert a rendered page into an HTTP response.
pub fn page_response(page: Page) -> Response {
    match page {
        Page::Html(markup) => Html(markup.into_string()).into_response(),
        Page::Redirect(path) => Redirect::temporary(&path).into_response(),
        Page::NotFound(markup) => {
            (StatusCode::NOT_FOUND, Html(markup.into_string())).into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/today", get(today))
        .route("/{month}", get(month))
        .route("/{month}/today", get(month_today))
        .route("/{month}/day/{number}", get(day))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(state))
}

/// Bind and serve until Ctrl-C.
///
/// The data file is loaded once up front so a broken file fails the command
/// instead of every request.
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<(), ServeError> {
    let data = state.load_dataset().await?;
    info!(months = data.available_months().len(), days = data.total_days(), "dataset loaded");

    let address = format!("{host}:{port}");
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|source| ServeError::Bind {
            address: address.clone(),
            source,
        })?;
    info!(address = %listener.local_addr()?, data = %state.data_path.display(), "serving devotionals");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutting down");
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    debug!(%method, %path, status = response.status().as_u16(), "request");
    response
}

// ============================================================================
// Handlers
// ============================================================================

async fn home(State(state): State<SharedState>, Query(query): Query<PageQuery>) -> Response {
    state
        .respond(|data| pages::home(data, &state.ctx, &query, state.today()))
        .await
}

async fn today(State(state): State<SharedState>, Query(query): Query<PageQuery>) -> Response {
    state
        .respond(|data| pages::today(data, &state.ctx, &query, state.today()))
        .await
}

async fn month(
    State(state): State<SharedState>,
    Path(month): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    state
        .respond(|data| pages::month(data, &state.ctx, &month, &query))
        .await
}

async fn month_today(
    State(state): State<SharedState>,
    Path(month): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    state
        .respond(|data| pages::month_today(data, &state.ctx, &month, &query, state.today()))
        .await
}

async fn day(
    State(state): State<SharedState>,
    Path((month, number)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Response {
    state
        .respond(|data| pages::day(data, &state.ctx, &month, &number, &query))
        .await
}

async fn not_found(State(state): State<SharedState>) -> Response {
    page_response(pages::not_found(&state.ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use axum::http::header::LOCATION;

    #[test]
    fn html_page_is_ok() {
        let response = page_response(Page::Html(maud::html! { p { "hi" } }));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn redirect_is_temporary_with_location() {
        let response = page_response(Page::Redirect("/feb/day/1".to_string()));
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[LOCATION], "/feb/day/1");
    }

    #[test]
    fn not_found_page_is_404() {
        let response = page_response(pages::not_found(&test_context()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_data_file_is_500() {
        let state = AppState::new(test_context(), PathBuf::from("/nonexistent/data.json"));
        let response = state
            .respond(|_| unreachable!("handler must not run"))
            .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn dataset_loads_on_blocking_pool() {
        let state = AppState::new(test_context(), fixture_data_path());
        let data = state.load_dataset().await.unwrap();
        assert_eq!(data.total_days(), 7);

        let response = state
            .respond(|data| pages::day(data, &state.ctx, "feb", "3", &PageQuery::default()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_data_file_is_io_error() {
        let state = AppState::new(test_context(), PathBuf::from("/nonexistent/data.json"));
        assert!(matches!(
            state.load_dataset().await,
            Err(ServeError::Data(DataError::Io { .. }))
        ));
    }

    #[test]
    fn fixed_date_pins_today() {
        let state =
            AppState::new(test_context(), fixture_data_path()).with_fixed_date(date(2026, 3, 10));
        assert_eq!(state.today(), date(2026, 3, 10));
    }
}
