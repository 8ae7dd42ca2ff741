use axum::{Router, extract::State, http::StatusCode, response::Html, routing::get};
use tracing::debug;

use crate::error::AppError;
use crate::home::{HomeView, HomeViewState};
use crate::render::{COURSES_FRAGMENT_PATH, render_course_grid, render_home_page};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route(COURSES_FRAGMENT_PATH, get(courses_fragment))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Full page. Without prefetch the grid goes out in its loading state and
/// the browser pulls the fragment; with prefetch the view settles first.
async fn home(State(state): State<AppState>) -> Html<String> {
    let view_state = if state.prefetch_courses {
        let mut view = HomeView::mount(state.catalog.clone());
        view.settled().await
    } else {
        HomeViewState::new()
    };

    Html(render_home_page(&view_state, &state.site))
}

/// Settled course grid. Fetch failures are already folded into the empty
/// state, so this always answers 200. If the client goes away first, the
/// handler future is dropped together with the view, aborting the fetch.
async fn courses_fragment(State(state): State<AppState>) -> Html<String> {
    let mut view = HomeView::mount(state.catalog.clone());
    let settled = view.settled().await;
    debug!("rendering {} courses", settled.courses().len());

    Html(render_course_grid(&settled, &state.site))
}
