//! Project gallery state: category filter, view mode, pagination, detail overlay.
//!
//! DESIGN
//! ======
//! Every user action is a method on `GalleryState`; every rendered quantity
//! (filtered list, visible page, Load More label, open project) is derived
//! from the state plus the immutable project list. Components only wire
//! events to these methods.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use content::{Catalog, CategoryFilter, Project, filter_projects};

/// Number of cards shown before "Load More".
pub const PAGE_SIZE: usize = 6;

/// Card layout for the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Multi-column cards with short description and "View Details".
    #[default]
    Grid,
    /// Single column with the long description and no action button.
    List,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Load More / Show Less control, present only when the filtered list overflows a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadMore {
    pub expanded: bool,
    pub hidden: usize,
}

impl LoadMore {
    #[must_use]
    pub fn label(&self) -> String {
        if self.expanded {
            "Show Less".to_owned()
        } else {
            format!("Load More Projects ({} more)", self.hidden)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub filter: CategoryFilter,
    pub view_mode: ViewMode,
    pub show_all: bool,
    /// Project shown in the detail overlay, by id.
    pub selected_project: Option<u32>,
}

impl GalleryState {
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Open the overlay for `id`, replacing any project already open.
    pub fn open_details(&mut self, id: u32) {
        self.selected_project = Some(id);
    }

    pub fn close_details(&mut self) {
        self.selected_project = None;
    }

    #[must_use]
    pub fn is_selected(&self, filter: &CategoryFilter) -> bool {
        self.filter == *filter
    }

    #[must_use]
    pub fn filtered<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.filter)
    }

    /// The cards to render: the first page, or everything when expanded.
    #[must_use]
    pub fn displayed<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let mut filtered = self.filtered(projects);
        if !self.show_all {
            filtered.truncate(PAGE_SIZE);
        }
        filtered
    }

    #[must_use]
    pub fn load_more(&self, projects: &[Project]) -> Option<LoadMore> {
        let total = projects.iter().filter(|p| self.filter.matches(p)).count();
        (total > PAGE_SIZE).then(|| LoadMore { expanded: self.show_all, hidden: total - PAGE_SIZE })
    }

    /// The project in the detail overlay, if the catalog has it.
    #[must_use]
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        catalog.project(self.selected_project?)
    }
}
