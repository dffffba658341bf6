use super::*;

fn project(id: u32, category: &str) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        description: "short".to_owned(),
        long_description: "long".to_owned(),
        tech: vec!["Rust".to_owned()],
        category: category.to_owned(),
        image: None,
        video: None,
        demo_url: None,
        github_url: None,
        featured: false,
    }
}

fn ids(projects: &[&Project]) -> Vec<u32> {
    projects.iter().map(|p| p.id).collect()
}

// =============================================================
// filter_projects
// =============================================================

#[test]
fn filter_by_category_keeps_original_order() {
    let projects = vec![project(1, "Full Stack"), project(2, "Mobile"), project(3, "Full Stack")];
    let filtered = filter_projects(&projects, &CategoryFilter::Category("Full Stack".to_owned()));
    assert_eq!(ids(&filtered), vec![1, 3]);
}

#[test]
fn filter_all_returns_full_list() {
    let projects = vec![project(4, "Mobile"), project(2, "AI/ML"), project(9, "Frontend")];
    let filtered = filter_projects(&projects, &CategoryFilter::All);
    assert_eq!(ids(&filtered), vec![4, 2, 9]);
}

#[test]
fn filter_is_exact_match() {
    let projects = vec![project(1, "FullStack"), project(2, "Full Stack"), project(3, "full stack")];
    let filtered = filter_projects(&projects, &CategoryFilter::from_label("Full Stack"));
    assert_eq!(ids(&filtered), vec![2]);
}

#[test]
fn filter_with_no_match_is_empty() {
    let projects = vec![project(1, "Mobile")];
    let filtered = filter_projects(&projects, &CategoryFilter::from_label("Data Science"));
    assert!(filtered.is_empty());
}

#[test]
fn filter_on_empty_list_is_empty() {
    assert!(filter_projects(&[], &CategoryFilter::All).is_empty());
}

// =============================================================
// CategoryFilter
// =============================================================

#[test]
fn from_label_maps_all_sentinel() {
    assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_label("Mobile"), CategoryFilter::Category("Mobile".to_owned()));
}

#[test]
fn label_round_trips_display_text() {
    assert_eq!(CategoryFilter::All.label(), "All");
    assert_eq!(CategoryFilter::from_label("AI/ML").label(), "AI/ML");
}

#[test]
fn default_filter_is_all() {
    assert_eq!(CategoryFilter::default(), CategoryFilter::All);
}

// =============================================================
// Media
// =============================================================

#[test]
fn media_prefers_video_over_image() {
    let mut p = project(1, "Mobile");
    p.image = Some("/shot.png".to_owned());
    p.video = Some("https://cdn.example.com/demo.mp4".to_owned());
    assert_eq!(p.media(), Media::Video("https://cdn.example.com/demo.mp4"));
}

#[test]
fn media_uses_image_when_no_video() {
    let mut p = project(1, "Mobile");
    p.image = Some("/shot.png".to_owned());
    assert_eq!(p.media(), Media::Image("/shot.png"));
}

#[test]
fn media_falls_back_to_placeholder() {
    let mut p = project(1, "Mobile");
    p.video = Some("   ".to_owned());
    assert_eq!(p.media(), Media::Image(PLACEHOLDER_IMAGE));
}

#[test]
fn has_links_ignores_blank_urls() {
    let mut p = project(1, "Mobile");
    assert!(!p.has_links());
    p.demo_url = Some(String::new());
    assert!(!p.has_links());
    p.github_url = Some("https://github.com/example/app".to_owned());
    assert!(p.has_links());
}

#[test]
fn links_keep_demo_before_source() {
    let mut p = project(1, "Mobile");
    p.github_url = Some("https://github.com/example/app".to_owned());
    p.demo_url = Some("https://app.example".to_owned());
    let links = p.links();
    assert_eq!(
        links,
        vec![
            ProjectLink { kind: LinkKind::Demo, href: "https://app.example" },
            ProjectLink { kind: LinkKind::Source, href: "https://github.com/example/app" },
        ]
    );
    assert_eq!(links[0].kind.short_label(), "Demo");
    assert_eq!(links[1].kind.label(), "Source Code");
}

#[test]
fn links_skip_whitespace_only_urls() {
    let mut p = project(1, "Mobile");
    p.demo_url = Some("  ".to_owned());
    p.github_url = Some("https://github.com/example/app".to_owned());
    assert_eq!(p.links().len(), 1);
    assert_eq!(p.links()[0].kind, LinkKind::Source);
}
