//! Home view controller: one catalog read per mount, three pieces of
//! view state, and the hero visibility toggle.

pub mod state;
pub mod view;
pub mod visibility;

pub use state::{CourseGrid, HomeViewState};
pub use view::HomeView;
pub use visibility::{HERO_SECTION_ID, HERO_VISIBILITY_THRESHOLD, HeroObserver};
