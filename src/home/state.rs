use tracing::error;

use crate::error::AppError;
use crate::models::CourseWithProgress;

/// Transient state of one mounted home view.
///
/// `is_loading` starts true and clears exactly once, when the catalog fetch
/// settles. `courses` is written at most once, on a successful settle.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeViewState {
    courses: Vec<CourseWithProgress>,
    is_loading: bool,
    hero_visible: bool,
}

/// What the course grid shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourseGrid<'a> {
    Loading,
    Empty,
    Courses(&'a [CourseWithProgress]),
}

impl Default for HomeViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeViewState {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            is_loading: true,
            hero_visible: true,
        }
    }

    /// A state that has already settled with the given courses.
    pub fn with_courses(courses: Vec<CourseWithProgress>) -> Self {
        let mut state = Self::new();
        state.settle(Ok(courses));
        state
    }

    pub fn courses(&self) -> &[CourseWithProgress] {
        &self.courses
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn hero_visible(&self) -> bool {
        self.hero_visible
    }

    pub fn set_hero_visible(&mut self, visible: bool) {
        self.hero_visible = visible;
    }

    /// Applies the outcome of the catalog fetch. Returns false if the state
    /// had already settled, in which case nothing changes.
    ///
    /// Failures are logged and otherwise look like an empty catalog.
    pub fn settle(&mut self, result: Result<Vec<CourseWithProgress>, AppError>) -> bool {
        if !self.is_loading {
            return false;
        }

        match result {
            Ok(courses) => self.courses = courses,
            Err(err) => error!("Failed to fetch courses: {}", err),
        }
        self.is_loading = false;
        true
    }

    pub fn grid(&self) -> CourseGrid<'_> {
        if self.is_loading {
            CourseGrid::Loading
        } else if self.courses.is_empty() {
            CourseGrid::Empty
        } else {
            CourseGrid::Courses(&self.courses)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::Course;

    fn course(id: &str) -> CourseWithProgress {
        CourseWithProgress {
            course: Course {
                id: id.to_string(),
                user_id: "u1".to_string(),
                title: format!("Course {}", id),
                description: None,
                image_url: None,
                price: None,
                is_published: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            chapters: Vec::new(),
            quizzes: Vec::new(),
            enrollment_count: 0,
            progress: 0.0,
        }
    }

    #[test]
    fn starts_loading_with_no_courses() {
        let state = HomeViewState::new();
        assert!(state.is_loading());
        assert!(state.courses().is_empty());
        assert!(state.hero_visible());
        assert_eq!(state.grid(), CourseGrid::Loading);
    }

    #[test]
    fn success_assigns_courses_in_response_order() {
        let mut state = HomeViewState::new();
        assert!(state.settle(Ok(vec![course("b"), course("a"), course("c")])));

        assert!(!state.is_loading());
        let ids: Vec<&str> = state.courses().iter().map(|c| c.course.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert!(matches!(state.grid(), CourseGrid::Courses(list) if list.len() == 3));
    }

    #[test]
    fn failure_clears_loading_and_looks_empty() {
        let mut state = HomeViewState::new();
        let settled = state.settle(Err(AppError::UpstreamStatus {
            status: 503,
            reason: "Service Unavailable".to_string(),
        }));

        assert!(settled);
        assert!(!state.is_loading());
        assert_eq!(state.grid(), CourseGrid::Empty);
        assert_eq!(state, HomeViewState::with_courses(Vec::new()));
    }

    #[test]
    fn settles_only_once() {
        let mut state = HomeViewState::with_courses(vec![course("first")]);

        assert!(!state.settle(Ok(vec![course("late"), course("later")])));
        assert!(!state.settle(Err(AppError::InternalServerError)));
        assert_eq!(state.courses().len(), 1);
        assert_eq!(state.courses()[0].course.id, "first");
    }

    #[test]
    fn hero_visibility_is_independent_of_courses() {
        let mut state = HomeViewState::new();
        state.set_hero_visible(false);
        assert!(state.is_loading());
        state.settle(Ok(vec![course("x")]));
        assert!(!state.hero_visible());
    }
}
