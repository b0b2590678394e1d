//! Portfolio gallery
//!
//! Read-only view over the project table with a single detail panel and
//! category filtering. Thumbnails come from an external screenshot
//! service; a failed thumbnail is the host's concern.

use crate::config::GalleryConfig;
use folio_content::Project;
use indexmap::IndexSet;

/// Tags shown on a gallery card before the detail view
pub const TECH_PREVIEW_LEN: usize = 2;

/// Gallery state
#[derive(Debug, Clone)]
pub struct Gallery {
    projects: &'static [Project],
    active: Option<usize>,
    config: GalleryConfig,
}

impl Gallery {
    /// Gallery over `projects`, detail closed
    #[inline]
    #[must_use]
    pub fn new(projects: &'static [Project], config: GalleryConfig) -> Self {
        Self {
            projects,
            active: None,
            config,
        }
    }

    /// All projects in display order
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    /// Categories in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        self.projects
            .iter()
            .map(|p| p.category)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Projects in `category`, display order preserved
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'static Project> + 'a {
        self.projects.iter().filter(move |p| p.category == category)
    }

    /// Show the detail view for `index`
    pub fn open(&mut self, index: usize) -> Option<&'static Project> {
        let project = self.projects.get(index)?;
        self.active = Some(index);
        tracing::debug!(project = project.title, "gallery detail opened");
        Some(project)
    }

    /// Dismiss the detail view
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Project in the detail view
    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<&'static Project> {
        self.active.and_then(|i| self.projects.get(i))
    }

    /// Thumbnail URL for a project's live site
    #[must_use]
    pub fn screenshot_url(&self, project: &Project) -> String {
        format!(
            "{}?key={}&url={}&dimension={}",
            self.config.screenshot_endpoint,
            urlencoding::encode(&self.config.screenshot_key),
            urlencoding::encode(project.url),
            urlencoding::encode(&self.config.dimension),
        )
    }

    /// Card tags: the first [`TECH_PREVIEW_LEN`] technologies
    #[inline]
    #[must_use]
    pub fn tech_preview(project: &Project) -> &'static [&'static str] {
        &project.tech[..project.tech.len().min(TECH_PREVIEW_LEN)]
    }
}
