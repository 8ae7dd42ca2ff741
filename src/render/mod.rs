//! Server-side rendering of the landing page with Leptos.
//!
//! All output is a pure function of [`HomeViewState`] and [`SiteConfig`]:
//!
//! ```text
//! SiteLayout (html, head, navbar, footer)
//! └── HomePage
//!     ├── HeroSection
//!     │   └── ScrollIndicator (hero_visible)
//!     ├── SocialSection
//!     ├── CoursesSection
//!     │   └── CourseGridView (loading, empty, or cards)
//!     ├── TestimonialsSection
//!     ├── FeaturesSection
//!     └── CtaSection
//! ```
//!
//! A page rendered while the state is still loading carries a small
//! script that requests [`COURSES_FRAGMENT_PATH`] and swaps the settled
//! grid in, the same sequence a mounted view goes through.

pub mod courses;
pub mod icons;
pub mod layout;
pub mod sections;
pub mod styles;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::config::SiteConfig;
use crate::home::{HERO_SECTION_ID, HERO_VISIBILITY_THRESHOLD, HomeViewState};
use courses::{COURSES_GRID_ID, CourseGridView, EmptyState};
use layout::SiteLayout;
use sections::{CtaSection, FeaturesSection, HeroSection, SocialSection, TestimonialsSection};

pub use courses::{
    PLACEHOLDER_IMAGE, SKELETON_CARD_COUNT, chapter_label, course_href, enrollment_label,
    quiz_label,
};

pub const COURSES_FRAGMENT_PATH: &str = "/fragments/courses";

const EMPTY_TEMPLATE_ID: &str = "courses-empty-template";

/// Render the complete landing page, including `<!DOCTYPE html>`.
pub fn render_home_page(state: &HomeViewState, site: &SiteConfig) -> String {
    let page_state = state.clone();
    let page_site = site.clone();
    let doc = view! {
        <SiteLayout site=site.clone()>
            <HomePage state=page_state site=page_site />
        </SiteLayout>
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the course grid, for swapping into an already loaded page.
pub fn render_course_grid(state: &HomeViewState, site: &SiteConfig) -> String {
    view! {
        <CourseGridView state=state.clone() sign_up_path=site.sign_up_path.clone() />
    }
    .to_html()
}

#[component]
fn HomePage(state: HomeViewState, site: SiteConfig) -> impl IntoView {
    let hero_visible = state.hero_visible();

    view! {
        <HeroSection sign_up_path=site.sign_up_path.clone() hero_visible=hero_visible />
        <SocialSection social_url=site.social_url.clone() />
        <CoursesSection state=state sign_up_path=site.sign_up_path.clone() />
        <TestimonialsSection />
        <FeaturesSection />
        <CtaSection sign_up_path=site.sign_up_path.clone() />
        <script>{hero_observer_script(HERO_VISIBILITY_THRESHOLD)}</script>
    }
}

#[component]
fn CoursesSection(state: HomeViewState, sign_up_path: String) -> impl IntoView {
    let loading = state.is_loading();
    let empty_path = sign_up_path.clone();

    view! {
        <section id="courses-section" class="courses">
            <div class="container">
                <div class="section-heading">
                    <h2>"الكورسات المتاحة"</h2>
                    <p>"اكتشف مجموعة متنوعة من الكورسات التعليمية المميزة"</p>
                </div>
                <CourseGridView state=state sign_up_path=sign_up_path />
            </div>
            {loading.then(|| view! {
                <template id=EMPTY_TEMPLATE_ID>
                    <EmptyState sign_up_path=empty_path />
                </template>
                <script>{courses_loader_script()}</script>
            })}
        </section>
    }
}

/// Toggles the scroll indicator as the hero crosses `threshold`.
fn hero_observer_script(threshold: f64) -> String {
    format!(
        r#"
(function () {{
  var hero = document.getElementById('{hero}');
  var indicator = document.getElementById('scroll-indicator');
  if (!hero || !indicator || !('IntersectionObserver' in window)) return;
  var observer = new IntersectionObserver(function (entries) {{
    var visible = entries[0].intersectionRatio >= {threshold};
    indicator.classList.toggle('is-hidden', !visible);
  }}, {{ threshold: {threshold} }});
  observer.observe(hero);
  window.addEventListener('pagehide', function () {{
    observer.unobserve(hero);
  }});
}})();
"#,
        hero = HERO_SECTION_ID,
        threshold = threshold,
    )
}

/// Fetches the settled grid once. Any failure shows the empty state.
fn courses_loader_script() -> String {
    format!(
        r#"
(function () {{
  var grid = document.getElementById('{grid}');
  if (!grid) return;
  var controller = 'AbortController' in window ? new AbortController() : null;
  window.addEventListener('pagehide', function () {{
    if (controller) controller.abort();
  }});
  fetch('{path}', {{ headers: {{ 'Accept': 'text/html' }}, signal: controller ? controller.signal : undefined }})
    .then(function (res) {{
      if (!res.ok) throw new Error('HTTP ' + res.status);
      return res.text();
    }})
    .then(function (html) {{
      grid.outerHTML = html;
    }})
    .catch(function (err) {{
      console.error('Error fetching courses:', err);
      var template = document.getElementById('{template}');
      grid.removeAttribute('aria-busy');
      grid.innerHTML = template ? template.innerHTML : '';
    }});
}})();
"#,
        grid = COURSES_GRID_ID,
        path = COURSES_FRAGMENT_PATH,
        template = EMPTY_TEMPLATE_ID,
    )
}
