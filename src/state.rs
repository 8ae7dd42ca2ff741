use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogClient>,
    pub site: Arc<SiteConfig>,
    pub prefetch_courses: bool,
}
