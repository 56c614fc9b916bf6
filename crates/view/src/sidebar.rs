use std::collections::BTreeSet;

use catalog::{Scene, group_by_movie};
use foundation::SceneId;

/// Sidebar state: the search term and which accordion groups are expanded.
///
/// Both fields are independent; any value may change at any time. Everything
/// shown in the sidebar is derived from this state plus the dataset via
/// [`SidebarState::model`], never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    search_term: String,
    open_accordions: BTreeSet<String>,
}

/// Derived render model for one sidebar pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarModel {
    pub groups: Vec<GroupModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupModel {
    pub movie: String,
    pub open: bool,
    pub scenes: Vec<SceneItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneItem {
    pub id: SceneId,
    pub title: String,
}

impl SidebarModel {
    /// True when the filter matched nothing; rendered as the no-results state.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Expands the group if collapsed, collapses it if expanded.
    ///
    /// Groups toggle independently; any number may be open at once. Returns
    /// whether the group is open after the call.
    pub fn toggle_accordion(&mut self, movie: &str) -> bool {
        if self.open_accordions.remove(movie) {
            false
        } else {
            self.open_accordions.insert(movie.to_string());
            true
        }
    }

    pub fn is_open(&self, movie: &str) -> bool {
        self.open_accordions.contains(movie)
    }

    /// Derives the grouped, filtered view of `scenes` for rendering.
    pub fn model(&self, scenes: &[Scene]) -> SidebarModel {
        let groups = group_by_movie(scenes, &self.search_term)
            .into_iter()
            .map(|group| GroupModel {
                movie: group.movie.to_string(),
                open: self.is_open(group.movie),
                scenes: group
                    .scenes
                    .iter()
                    .map(|scene| SceneItem {
                        id: scene.id,
                        title: scene.title.clone(),
                    })
                    .collect(),
            })
            .collect();

        SidebarModel { groups }
    }
}
