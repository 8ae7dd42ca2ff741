pub mod course;

pub use course::{ChapterRef, Course, CourseWithProgress, QuizRef};
