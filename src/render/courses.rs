//! Course grid: skeletons while loading, an empty state, or one card per
//! course in catalog order.

use leptos::prelude::*;

use super::icons::{ICON_BOOK_OPEN, ICON_USERS, Icon};
use crate::home::{CourseGrid, HomeViewState};
use crate::models::CourseWithProgress;

pub const SKELETON_CARD_COUNT: usize = 6;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

pub const COURSES_GRID_ID: &str = "courses-grid";

pub fn chapter_label(count: usize) -> String {
    let noun = if count == 1 { "فصل" } else { "فصول" };
    format!("{} {}", count, noun)
}

/// `None` when the course has no quizzes; the fragment is omitted entirely.
pub fn quiz_label(count: usize) -> Option<String> {
    if count == 0 {
        return None;
    }
    let noun = if count == 1 { "اختبار" } else { "اختبارات" };
    Some(format!("{} {}", count, noun))
}

pub fn enrollment_label(count: u64) -> String {
    format!("{} طالب مسجل", count)
}

/// First chapter when there is one, the course root otherwise.
pub fn course_href(course: &CourseWithProgress) -> String {
    match course.first_chapter() {
        Some(chapter) => format!("/courses/{}/chapters/{}", course.course.id, chapter.id),
        None => format!("/courses/{}", course.course.id),
    }
}

pub fn course_image(course: &CourseWithProgress) -> &str {
    course
        .course
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// The grid container and its contents for the current view state.
#[component]
pub fn CourseGridView(state: HomeViewState, sign_up_path: String) -> impl IntoView {
    match state.grid() {
        CourseGrid::Loading => view! {
            <div id=COURSES_GRID_ID class="courses-grid" aria-busy="true">
                {(0..SKELETON_CARD_COUNT).map(|_| view! { <SkeletonCard /> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        CourseGrid::Empty => view! {
            <div id=COURSES_GRID_ID class="courses-grid">
                <EmptyState sign_up_path=sign_up_path />
            </div>
        }
        .into_any(),
        CourseGrid::Courses(courses) => {
            let cards = courses
                .iter()
                .cloned()
                .map(|course| view! { <CourseCard course=course /> })
                .collect::<Vec<_>>();
            view! {
                <div id=COURSES_GRID_ID class="courses-grid">
                    {cards}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="course-card-skeleton">
            <div class="skeleton-media"></div>
            <div class="skeleton-line"></div>
            <div class="skeleton-line short"></div>
        </div>
    }
}

#[component]
pub fn EmptyState(sign_up_path: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">
                <Icon path=ICON_BOOK_OPEN size="32" />
            </div>
            <h3>"لا توجد كورسات متاحة حالياً"</h3>
            <p class="muted">
                "سيتم إضافة الكورسات قريباً. تحقق من هذه الصفحة لاحقاً للاطلاع على أحدث الكورسات التعليمية."
            </p>
            <a class="btn btn-primary" href=sign_up_path>
                "سجل الآن للوصول المبكر"
            </a>
        </div>
    }
}

#[component]
fn CourseCard(course: CourseWithProgress) -> impl IntoView {
    let href = course_href(&course);
    let image = course_image(&course).to_string();
    let chapters = chapter_label(course.chapters.len());
    let quizzes = quiz_label(course.quizzes.len());
    let enrolled = enrollment_label(course.enrollment_count);
    let id = course.course.id;
    let title = course.course.title;

    view! {
        <article class="course-card" data-course-id=id>
            <div class="course-card-media">
                <img src=image alt=title.clone() loading="lazy" />
            </div>
            <div class="course-card-body">
                <h3 class="course-card-title">{title}</h3>
                <div class="course-card-meta">
                    <div class="meta-item">
                        <Icon path=ICON_BOOK_OPEN size="16" />
                        <span class="chapter-count">{chapters}</span>
                        {quizzes.map(|label| view! {
                            <span class="quiz-count">{format!("، {}", label)}</span>
                        })}
                    </div>
                    <div class="meta-item">
                        <Icon path=ICON_USERS size="16" />
                        <span class="enrollment-count">{enrolled}</span>
                    </div>
                </div>
                <a class="btn btn-primary btn-block" href=href>
                    "عرض الكورس"
                </a>
            </div>
        </article>
    }
}
