//! Page Integration Tests
//!
//! Drive the whole page through the public API: load the fixture document,
//! render it into the fixture template, then exercise the filter and card
//! handlers against the in-memory document.

use pretty_assertions::assert_eq;
use profile_page::interaction::EventTarget;
use profile_page::{
    init, Activation, ProfileDocument, ProfilePage, RenderConfig, RenderPipeline, ScrollBehavior,
    SectionOutcome, StaticDom,
};

const TEMPLATE: &str = include_str!("fixtures/index.html");
const PROFILE_JSON: &str = include_str!("fixtures/profile.json");

fn document() -> ProfileDocument {
    serde_json::from_str(PROFILE_JSON).unwrap()
}

fn mounted() -> (StaticDom, ProfilePage) {
    let mut dom = StaticDom::from_template(TEMPLATE);
    let pipeline = RenderPipeline::new(RenderConfig::default()).unwrap();
    let page = ProfilePage::mount(&mut dom, pipeline, document());
    (dom, page)
}

fn grid_keys(dom: &StaticDom) -> Vec<String> {
    dom.child_keys("#projects-grid")
}

#[test]
fn test_every_section_renders() {
    let (dom, page) = mounted();

    for section in [
        "page_meta", "header", "banner", "publications", "projects", "skills", "education", "theme",
    ] {
        assert_eq!(page.report().outcome(section), Some(&SectionOutcome::Rendered), "{}", section);
    }

    assert_eq!(dom.title().as_deref(), Some("Ada Example"));
    assert_eq!(dom.inner_html("#header-logo").as_deref(), Some("<strong>Ada Example</strong>"));
    assert_eq!(
        dom.inner_html("#profile-title").as_deref(),
        Some("Research Engineer | Analytical Engines Lab")
    );
    assert_eq!(dom.attribute("#cv-button", "href"), Some("files/ada-cv.pdf"));
    assert_eq!(dom.root_style("--accent"), Some("#9b1c1c"));
    assert_eq!(dom.root_style("--bg-primary"), Some("#fffdf8"));

    let nav = dom.inner_html("#nav-links").unwrap();
    assert_eq!(nav.matches("<li>").count(), 4);
    assert!(nav.contains(r#"href="mailto:ada@example.org""#));

    let education = dom.inner_html("#education-grid").unwrap();
    assert!(education.contains("Master&#x27;s Data Science"));
    assert!(education.contains(r#"<div class="edu-degree">Computer Science</div>"#));
}

#[test]
fn test_second_pass_is_identical() {
    let (mut dom, mut page) = mounted();
    let first_snapshot = dom.snapshot();
    let first_html = dom.to_html();

    page.rerender(&mut dom);

    assert_eq!(dom.snapshot(), first_snapshot);
    assert_eq!(dom.to_html(), first_html);
}

#[test]
fn test_filter_shows_exactly_matching_projects_in_order() {
    let (mut dom, mut page) = mounted();
    let doc = document();
    let all: Vec<String> = doc.projects.as_ref().unwrap().iter().map(|p| p.id.clone()).collect();
    assert_eq!(grid_keys(&dom), all);

    let categories = page.projects().unwrap().categories().to_vec();
    assert_eq!(categories, vec!["github", "academic", "robotics"]);

    for category in &categories {
        assert!(page.on_category_click(&mut dom, category));
        let expected: Vec<String> = doc
            .projects
            .as_ref()
            .unwrap()
            .iter()
            .filter(|p| &p.category == category)
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(grid_keys(&dom), expected);

        let bar = dom.sibling_before("#projects-grid").unwrap();
        assert_eq!(bar.matches("category-btn active").count(), 1);
        assert!(bar.contains(&format!(r#"class="category-btn active" data-category="{}""#, category)));
    }

    assert!(page.on_category_click(&mut dom, "all"));
    assert_eq!(grid_keys(&dom), all);
}

#[test]
fn test_unknown_category_changes_nothing() {
    let (mut dom, mut page) = mounted();
    let before = dom.snapshot();
    assert!(!page.on_category_click(&mut dom, "gardening"));
    assert_eq!(dom.snapshot(), before);
}

#[test]
fn test_card_toggles_once_per_activation() {
    let (mut dom, mut page) = mounted();

    let scroll = page.on_card_activation(&mut dom, "engine", &Activation::click());
    assert!(scroll.is_some());
    assert!(page.projects().unwrap().is_expanded("engine"));
    let card = dom.keyed_child("#projects-grid", "engine").unwrap();
    assert!(card.contains(r#"aria-expanded="true""#));
    assert!(card.contains("<h4>Technologies Used:</h4>"));

    // Nested link: native action only.
    let link = Activation::Click {
        target: EventTarget::Link,
    };
    assert!(page.on_card_activation(&mut dom, "engine", &link).is_none());
    assert!(page.projects().unwrap().is_expanded("engine"));

    // Space collapses; no scroll on collapse.
    assert!(page.on_card_activation(&mut dom, "engine", &Activation::key(" ")).is_none());
    assert!(!page.projects().unwrap().is_expanded("engine"));
    assert!(dom
        .keyed_child("#projects-grid", "engine")
        .unwrap()
        .contains(r#"aria-expanded="false""#));

    // Other cards were never touched.
    assert!(dom
        .keyed_child("#projects-grid", "loom")
        .unwrap()
        .contains(r#"aria-expanded="false""#));
}

#[test]
fn test_filter_change_collapses_cards() {
    let (mut dom, mut page) = mounted();
    page.on_card_activation(&mut dom, "engine", &Activation::click());
    page.on_card_activation(&mut dom, "loom", &Activation::key("Enter"));
    assert_eq!(page.projects().unwrap().expanded_count(), 2);

    page.on_category_click(&mut dom, "github");
    assert_eq!(page.projects().unwrap().expanded_count(), 0);
    for key in grid_keys(&dom) {
        let card = dom.keyed_child("#projects-grid", &key).unwrap();
        assert!(card.contains(r#"aria-expanded="false""#), "{}", key);
    }
}

#[test]
fn test_cards_without_ids_toggle_independently() {
    let doc: ProfileDocument = serde_json::from_str(
        r#"{ "projects": [
            { "title": "Card A", "category": "github" },
            { "title": "Card B", "category": "github" }
        ] }"#,
    )
    .unwrap();
    let mut dom = StaticDom::from_template(TEMPLATE);
    let pipeline = RenderPipeline::new(RenderConfig::default()).unwrap();
    let mut page = ProfilePage::mount(&mut dom, pipeline, doc);

    assert_eq!(grid_keys(&dom), vec!["project-0", "project-1"]);
    assert!(page.on_card_activation(&mut dom, "project-1", &Activation::click()).is_some());

    let controller = page.projects().unwrap();
    assert!(controller.is_expanded("project-1"));
    assert!(!controller.is_expanded("project-0"));
    assert!(dom
        .keyed_child("#projects-grid", "project-0")
        .unwrap()
        .contains(r#"aria-expanded="false""#));
    assert!(dom
        .keyed_child("#projects-grid", "project-1")
        .unwrap()
        .contains(r#"aria-expanded="true""#));
}

#[test]
fn test_rerender_resolves_anchors_again() {
    let mut bare = StaticDom::from_template("<html><body></body></html>");
    let pipeline = RenderPipeline::new(RenderConfig::default()).unwrap();
    let mut page = ProfilePage::mount(&mut bare, pipeline, document());
    assert!(page.projects().is_none());
    assert!(page.anchors().projects_grid.is_none());

    let mut dom = StaticDom::from_template(TEMPLATE);
    page.rerender(&mut dom);

    assert!(page.anchors().projects_grid.is_some());
    assert_eq!(page.report().rendered_count(), 8);
    assert_eq!(grid_keys(&dom).len(), 4);
    assert!(page.on_card_activation(&mut dom, "engine", &Activation::click()).is_some());
}

#[test]
fn test_hidden_card_cannot_be_activated() {
    let (mut dom, mut page) = mounted();
    page.on_category_click(&mut dom, "academic");
    assert!(page.on_card_activation(&mut dom, "engine", &Activation::click()).is_none());
    assert!(!page.projects().unwrap().is_expanded("engine"));
}

#[test]
fn test_status_only_publication() {
    let (dom, _page) = mounted();
    let grid = dom.inner_html("#publications-grid").unwrap();
    let cards: Vec<&str> = grid.split("<article").skip(1).collect();
    assert_eq!(cards.len(), 2);

    assert!(cards[0].contains(">Read Paper</a>"));
    assert!(cards[1].contains(r##"<a href="#" class="button">Paper (under review)</a>"##));
    assert!(!cards[1].contains("Read Paper"));
    assert!(!cards[1].contains("View Project"));
}

#[test]
fn test_skills_cap_and_omission() {
    let (dom, _page) = mounted();
    let skills = dom.inner_html("#skills-container").unwrap();
    assert_eq!(skills.matches(r#"class="skills-category""#).count(), 2);
    assert!(skills.contains(r#"id="skills-programming""#));
    assert!(!skills.contains("skills-visualization"));
    assert!(skills.contains(">Bash</span>"));
    assert!(!skills.contains("Haskell"));
}

#[test]
fn test_missing_anchors_are_skipped() {
    let mut dom = StaticDom::from_template(r#"<html><body><div id="projects-grid"></div></body></html>"#);
    let pipeline = RenderPipeline::new(RenderConfig::default()).unwrap();
    let page = ProfilePage::mount(&mut dom, pipeline, document());

    let report = page.report();
    assert_eq!(report.outcome("projects"), Some(&SectionOutcome::Rendered));
    assert_eq!(report.outcome("publications"), Some(&SectionOutcome::MissingAnchor));
    assert_eq!(report.outcome("skills"), Some(&SectionOutcome::MissingAnchor));
    assert_eq!(report.outcome("page_meta"), Some(&SectionOutcome::MissingAnchor));
    assert_eq!(report.outcome("theme"), Some(&SectionOutcome::Rendered));
    assert_eq!(dom.child_keys("#projects-grid").len(), 4);
}

#[test]
fn test_absent_sections_leave_template_alone() {
    let mut dom = StaticDom::from_template(TEMPLATE);
    let pipeline = RenderPipeline::new(RenderConfig::default()).unwrap();
    let page = ProfilePage::mount(&mut dom, pipeline, ProfileDocument::default());

    assert_eq!(page.report().rendered_count(), 0);
    assert!(page.projects().is_none());
    assert!(dom.is_pristine());
    assert_eq!(dom.to_html(), TEMPLATE);
}

#[tokio::test]
async fn test_init_from_file_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/profile.json"), PROFILE_JSON).unwrap();

    let mut dom = StaticDom::from_template(TEMPLATE);
    let base = dir.path().to_string_lossy().into_owned();
    let page = init(&mut dom, RenderConfig::default(), Some(&base)).await.unwrap();

    assert_eq!(page.report().rendered_count(), 8);
    assert_eq!(dom.inner_html("#profile-name").as_deref(), Some("Ada Example"));
}

#[tokio::test]
async fn test_malformed_document_renders_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data/profile.json"),
        r#"{ "profile": { "name": "Ada" }, "projects": { "engine": {} } }"#,
    )
    .unwrap();

    let mut dom = StaticDom::from_template(TEMPLATE);
    let base = dir.path().to_string_lossy().into_owned();
    assert!(init(&mut dom, RenderConfig::default(), Some(&base)).await.is_none());
    assert!(dom.is_pristine());
}

#[tokio::test(start_paused = true)]
async fn test_scroll_fires_after_settle_delay() {
    let (mut dom, mut page) = mounted();
    let scroll = page
        .on_card_activation(&mut dom, "bernoulli", &Activation::click())
        .unwrap();
    assert_eq!(scroll.delay, std::time::Duration::from_millis(300));
    assert!(dom.scrolls().is_empty());

    let started = tokio::time::Instant::now();
    scroll.run(&mut dom).await;
    assert!(started.elapsed() >= std::time::Duration::from_millis(300));

    assert_eq!(dom.scrolls().len(), 1);
    assert_eq!(dom.scrolls()[0].key, "bernoulli");
    assert_eq!(dom.scrolls()[0].behavior, ScrollBehavior::Smooth);
}

#[tokio::test(start_paused = true)]
async fn test_reduced_motion_scrolls_instantly() {
    let mut dom = StaticDom::from_template(TEMPLATE).with_reduced_motion(true);
    let pipeline = RenderPipeline::new(RenderConfig::default()).unwrap();
    let mut page = ProfilePage::mount(&mut dom, pipeline, document());

    let scroll = page
        .on_card_activation(&mut dom, "engine", &Activation::click())
        .unwrap();
    scroll.run(&mut dom).await;
    assert_eq!(dom.scrolls()[0].behavior, ScrollBehavior::Auto);
}

#[tokio::test(start_paused = true)]
async fn test_stale_scroll_still_fires_after_collapse() {
    let (mut dom, mut page) = mounted();
    let scroll = page
        .on_card_activation(&mut dom, "engine", &Activation::click())
        .unwrap();
    page.on_card_activation(&mut dom, "engine", &Activation::click());
    assert!(!page.projects().unwrap().is_expanded("engine"));

    scroll.run(&mut dom).await;
    assert_eq!(dom.scrolls().len(), 1);
}
