use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::catalog::CatalogClient;
use crate::error::AppError;
use crate::home::state::HomeViewState;
use crate::home::visibility::{HERO_SECTION_ID, HeroObserver};

/// A mounted home view.
///
/// Mounting issues exactly one catalog read in the background. The read is
/// tied to this value: dropping the view aborts a request that is still in
/// flight.
pub struct HomeView {
    state: Arc<watch::Sender<HomeViewState>>,
    fetch: Option<JoinHandle<()>>,
    observer: HeroObserver,
}

impl HomeView {
    /// Must be called from inside a tokio runtime.
    pub fn mount(catalog: Arc<dyn CatalogClient>) -> Self {
        let state = Arc::new(watch::Sender::new(HomeViewState::new()));

        let writer = Arc::clone(&state);
        let fetch = tokio::spawn(async move {
            let result = catalog.fetch_public_courses().await;
            writer.send_modify(|state| {
                state.settle(result);
            });
        });

        let mut observer = HeroObserver::default();
        observer.observe(HERO_SECTION_ID);

        Self {
            state,
            fetch: Some(fetch),
            observer,
        }
    }

    pub fn snapshot(&self) -> HomeViewState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change, for re-rendering.
    pub fn subscribe(&self) -> watch::Receiver<HomeViewState> {
        self.state.subscribe()
    }

    /// Waits for the catalog fetch to settle and returns the final state.
    ///
    /// A fetch task that dies without settling (a panic inside the client)
    /// is treated like any other fetch failure.
    pub async fn settled(&mut self) -> HomeViewState {
        if let Some(fetch) = self.fetch.as_mut() {
            if let Err(err) = fetch.await {
                error!("course fetch task ended early: {}", err);
                self.state.send_modify(|state| {
                    state.settle(Err(AppError::InternalServerError));
                });
            }
            self.fetch = None;
        }
        self.snapshot()
    }

    /// Feeds an intersection ratio for the hero section. Returns the new
    /// visibility, or `None` when the observer is no longer attached.
    pub fn report_hero_intersection(&mut self, ratio: f64) -> Option<bool> {
        let visible = self.observer.on_intersection(ratio)?;
        self.state.send_if_modified(|state| {
            if state.hero_visible() == visible {
                return false;
            }
            state.set_hero_visible(visible);
            true
        });
        Some(visible)
    }

    pub fn observer(&self) -> &HeroObserver {
        &self.observer
    }
}

impl Drop for HomeView {
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            if !fetch.is_finished() {
                debug!("home view dropped before the course fetch settled; aborting");
            }
            fetch.abort();
        }
    }
}
