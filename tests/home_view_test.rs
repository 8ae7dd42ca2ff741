mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use escore::catalog::NoopCatalogClient;
use escore::config::SiteConfig;
use escore::home::{CourseGrid, HomeView, HomeViewState};
use escore::render::{SKELETON_CARD_COUNT, render_course_grid};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn shows_skeletons_until_the_fetch_settles() {
    let (catalog, release) = GatedCatalog::new();
    let mut view = HomeView::mount(Arc::new(catalog));
    let site = SiteConfig::default();

    let pending = view.snapshot();
    assert!(pending.is_loading());
    let html = render_course_grid(&pending, &site);
    assert_eq!(count(&html, SKELETON), SKELETON_CARD_COUNT);
    assert_eq!(count(&html, CARD), 0);

    release
        .send(vec![
            course("c2", "Listening B1", &[], 0, 3),
            course("c1", "Grammar A1", &["ch1"], 0, 42),
        ])
        .unwrap();

    let settled = view.settled().await;
    assert!(!settled.is_loading());
    let ids: Vec<&str> = settled.courses().iter().map(|c| c.course.id.as_str()).collect();
    assert_eq!(ids, vec!["c2", "c1"]);

    let html = render_course_grid(&settled, &site);
    assert_eq!(count(&html, SKELETON), 0);
    assert_eq!(count(&html, CARD), 2);
    let listening = html.find("Listening B1").unwrap();
    let grammar = html.find("Grammar A1").unwrap();
    assert!(listening < grammar);
}

#[tokio::test]
async fn failed_fetch_settles_to_the_empty_state() {
    let mut view = HomeView::mount(Arc::new(FailingCatalog));

    let settled = view.settled().await;

    assert_eq!(settled, HomeViewState::with_courses(Vec::new()));
    assert_eq!(settled.grid(), CourseGrid::Empty);
    let html = render_course_grid(&settled, &SiteConfig::default());
    assert!(html.contains("لا توجد كورسات متاحة حالياً"));
    assert!(html.contains(r#"href="/sign-up""#));
    assert_eq!(count(&html, CARD), 0);
}

#[tokio::test]
async fn empty_catalog_looks_the_same_as_a_failure() {
    let mut empty = HomeView::mount(Arc::new(NoopCatalogClient));
    let mut failed = HomeView::mount(Arc::new(FailingCatalog));

    let site = SiteConfig::default();
    assert_eq!(
        render_course_grid(&empty.settled().await, &site),
        render_course_grid(&failed.settled().await, &site),
    );
}

#[tokio::test]
async fn panicking_client_still_clears_loading() {
    let mut view = HomeView::mount(Arc::new(PanickingCatalog));

    let settled = view.settled().await;

    assert!(!settled.is_loading());
    assert!(settled.courses().is_empty());
}

#[tokio::test]
async fn dropping_the_view_aborts_the_fetch() {
    let (catalog, released) = HangingCatalog::new();
    let view = HomeView::mount(Arc::new(catalog));
    tokio::task::yield_now().await;
    assert!(view.snapshot().is_loading());

    drop(view);

    let outcome = tokio::time::timeout(Duration::from_secs(2), released).await;
    assert!(matches!(outcome, Ok(Err(_))), "fetch should be torn down with the view");
}

#[tokio::test]
async fn subscribers_see_the_settled_state() {
    let (catalog, release) = GatedCatalog::new();
    let mut view = HomeView::mount(Arc::new(catalog));
    let mut updates = view.subscribe();

    release.send(vec![course("c1", "Grammar A1", &[], 0, 0)]).unwrap();

    let state = updates.wait_for(|s| !s.is_loading()).await.unwrap().clone();
    assert_eq!(state.courses().len(), 1);
    assert_eq!(view.settled().await, state);
}

#[tokio::test]
async fn hero_intersection_toggles_visibility() {
    let mut view = HomeView::mount(Arc::new(NoopCatalogClient));
    assert!(view.observer().is_observing());
    assert!(view.snapshot().hero_visible());

    assert_eq!(view.report_hero_intersection(0.2), Some(false));
    assert!(!view.snapshot().hero_visible());

    assert_eq!(view.report_hero_intersection(0.75), Some(true));
    assert!(view.snapshot().hero_visible());

    let settled = view.settled().await;
    assert!(settled.hero_visible());
}
