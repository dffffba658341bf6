use super::*;

fn project(id: u32, category: &str) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        description: format!("short {id}"),
        long_description: format!("long {id}"),
        tech: vec!["Rust".to_owned(), "Leptos".to_owned()],
        category: category.to_owned(),
        image: None,
        video: None,
        demo_url: Some(format!("https://demo.example.com/{id}")),
        github_url: None,
        featured: false,
    }
}

/// Eight "Web" projects interleaved with two "Mobile" ones.
fn catalog() -> Vec<Project> {
    let mut projects = Vec::new();
    for id in 1..=10 {
        let category = if id % 5 == 0 { "Mobile" } else { "Web" };
        projects.push(project(id, category));
    }
    projects
}

/// The builtin catalog with its projects swapped for the fixture list.
fn site() -> Catalog {
    let mut site = content::builtin().expect("builtin catalog loads").clone();
    site.projects = catalog();
    site
}

fn ids(projects: &[&Project]) -> Vec<u32> {
    projects.iter().map(|p| p.id).collect()
}

// =============================================================
// defaults
// =============================================================

#[test]
fn default_state_is_all_grid_collapsed_closed() {
    let state = GalleryState::default();
    assert_eq!(state.filter, CategoryFilter::All);
    assert_eq!(state.view_mode, ViewMode::Grid);
    assert!(!state.show_all);
    assert_eq!(state.selected_project, None);
}

// =============================================================
// filtering
// =============================================================

#[test]
fn select_category_filters_in_order() {
    let projects = vec![project(1, "Full Stack"), project(2, "Mobile"), project(3, "Full Stack")];
    let mut state = GalleryState::default();
    state.select_category(CategoryFilter::from_label("Full Stack"));
    assert_eq!(ids(&state.filtered(&projects)), vec![1, 3]);
    assert!(state.is_selected(&CategoryFilter::from_label("Full Stack")));
    assert!(!state.is_selected(&CategoryFilter::All));
}

#[test]
fn every_category_returns_exact_subsequence() {
    let projects = catalog();
    for label in ["Web", "Mobile"] {
        let mut state = GalleryState::default();
        state.select_category(CategoryFilter::from_label(label));
        let expected = projects.iter().filter(|p| p.category == label).map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&state.filtered(&projects)), expected);
    }
}

// =============================================================
// pagination
// =============================================================

#[test]
fn displayed_is_first_page_until_expanded() {
    let projects = catalog();
    let mut state = GalleryState::default();
    assert_eq!(ids(&state.displayed(&projects)), vec![1, 2, 3, 4, 5, 6]);
    state.toggle_show_all();
    assert_eq!(state.displayed(&projects).len(), 10);
}

#[test]
fn displayed_count_is_min_of_page_and_filtered() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.select_category(CategoryFilter::from_label("Mobile"));
    assert_eq!(state.displayed(&projects).len(), 2);
    state.select_category(CategoryFilter::from_label("Web"));
    assert_eq!(state.displayed(&projects).len(), PAGE_SIZE);
}

#[test]
fn load_more_reports_hidden_count() {
    let projects = catalog();
    let state = GalleryState::default();
    let control = state.load_more(&projects).expect("10 projects overflow a page");
    assert_eq!(control, LoadMore { expanded: false, hidden: 4 });
    assert_eq!(control.label(), "Load More Projects (4 more)");
}

#[test]
fn load_more_label_flips_to_show_less() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.toggle_show_all();
    assert_eq!(state.load_more(&projects).unwrap().label(), "Show Less");
    state.toggle_show_all();
    assert!(!state.show_all);
}

#[test]
fn load_more_hidden_when_filtered_fits_one_page() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.select_category(CategoryFilter::from_label("Mobile"));
    assert_eq!(state.load_more(&projects), None);

    let exactly_six = (1..=6).map(|id| project(id, "Web")).collect::<Vec<_>>();
    assert_eq!(GalleryState::default().load_more(&exactly_six), None);
}

#[test]
fn empty_filter_renders_nothing_and_no_control() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.select_category(CategoryFilter::from_label("Data Science"));
    assert!(state.displayed(&projects).is_empty());
    assert_eq!(state.load_more(&projects), None);
}

#[test]
fn category_change_keeps_show_all() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.toggle_show_all();
    state.select_category(CategoryFilter::from_label("Web"));
    assert!(state.show_all);
    assert_eq!(state.displayed(&projects).len(), 8);
    assert_eq!(state.load_more(&projects).unwrap().hidden, 2);
}

// =============================================================
// view mode
// =============================================================

#[test]
fn view_mode_toggles_without_changing_displayed_set() {
    let projects = catalog();
    let mut state = GalleryState::default();
    let before = ids(&state.displayed(&projects));
    state.toggle_view_mode();
    assert_eq!(state.view_mode, ViewMode::List);
    assert_eq!(ids(&state.displayed(&projects)), before);
    state.toggle_view_mode();
    assert_eq!(state.view_mode, ViewMode::Grid);
}

// =============================================================
// detail overlay
// =============================================================

#[test]
fn open_details_surfaces_project_fields() {
    let site = site();
    let mut state = GalleryState::default();
    state.open_details(3);
    let open = state.selected(&site).expect("project 3 is open");
    assert_eq!(open.long_description, "long 3");
    assert_eq!(open.tech, vec!["Rust", "Leptos"]);
    assert_eq!(open.demo_url.as_deref(), Some("https://demo.example.com/3"));
    assert_eq!(open.github_url, None);
}

#[test]
fn opening_another_project_replaces_the_first() {
    let site = site();
    let mut state = GalleryState::default();
    state.open_details(2);
    state.open_details(7);
    assert_eq!(state.selected(&site).map(|p| p.id), Some(7));
}

#[test]
fn close_details_clears_selection() {
    let site = site();
    let mut state = GalleryState::default();
    state.open_details(2);
    state.close_details();
    assert_eq!(state.selected_project, None);
    assert!(state.selected(&site).is_none());
}

#[test]
fn unknown_selected_id_resolves_to_none() {
    let mut state = GalleryState::default();
    state.open_details(404);
    assert!(state.selected(&site()).is_none());
}
