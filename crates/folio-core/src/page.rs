//! Page composition
//!
//! Wires the content tables to the controllers the way the delivered page
//! lays them out: one navigator over the section table, one reveal target
//! per section, staggered reveal targets for the skill cards, plus the
//! router, FAQ accordion, gallery and contact form.

use crate::config::FolioConfig;
use crate::contact::{ContactForm, ContactHandoff};
use crate::error::{ContactError, FolioError};
use crate::faq::FaqAccordion;
use crate::gallery::Gallery;
use crate::logging;
use crate::navigation::{NavigateOutcome, SectionNavigator};
use crate::reveal::{RevealController, RevealOptions, RevealTarget};
use crate::router::{Route, Router};
use crate::viewport::ViewportAdapter;
use std::sync::Arc;

/// Element id of the `index`-th skill card
#[must_use]
pub fn skill_card_id(index: usize) -> String {
    format!("skill-{index}")
}

/// A mounted page
pub struct Page {
    viewport: Arc<dyn ViewportAdapter>,
    navigator: SectionNavigator,
    reveals: RevealController,
    section_reveals: Vec<RevealTarget>,
    skill_reveals: Vec<RevealTarget>,
    router: Router,
    faq: FaqAccordion,
    gallery: Gallery,
    contact: ContactForm,
    handoff: ContactHandoff,
}

impl Page {
    /// Mount every controller against `viewport`
    ///
    /// # Errors
    /// [`FolioError::Config`] for out-of-range configuration or a bad log
    /// filter,
    /// [`FolioError::Navigation`] for a malformed section table.
    pub fn mount(viewport: Arc<dyn ViewportAdapter>, config: FolioConfig) -> Result<Self, FolioError> {
        config.validate()?;
        let fresh_subscriber = logging::init(&config.log_filter)?;

        let sections = folio_content::sections();
        let navigator = SectionNavigator::new(
            Arc::clone(&viewport),
            sections.iter().copied(),
            config.navigation,
        )?;

        let reveals = RevealController::new(Arc::clone(&viewport), config.reveal.clone());
        let section_reveals = sections
            .iter()
            .map(|s| reveals.mount(s.id, RevealOptions::new()))
            .collect();
        let skill_count = folio_content::profile().skills.len();
        let skill_reveals = reveals.mount_staggered((0..skill_count).map(skill_card_id));

        tracing::info!(
            sections = sections.len(),
            skills = skill_count,
            fresh_subscriber,
            "page mounted"
        );
        Ok(Self {
            navigator,
            reveals,
            section_reveals,
            skill_reveals,
            router: Router::new(),
            faq: FaqAccordion::new(folio_content::faqs().len()),
            gallery: Gallery::new(folio_content::projects(), config.gallery),
            contact: ContactForm::new(),
            handoff: ContactHandoff::new(&config.contact),
            viewport,
        })
    }

    /// Section navigation
    #[inline]
    #[must_use]
    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    /// Reveal controller, for blocks mounted later by the host
    #[inline]
    #[must_use]
    pub fn reveals(&self) -> &RevealController {
        &self.reveals
    }

    /// Reveal targets of the top-level sections
    #[inline]
    #[must_use]
    pub fn section_reveals(&self) -> &[RevealTarget] {
        &self.section_reveals
    }

    /// Reveal targets of the skill cards
    #[inline]
    #[must_use]
    pub fn skill_reveals(&self) -> &[RevealTarget] {
        &self.skill_reveals
    }

    /// Current route
    #[inline]
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// FAQ accordion
    #[inline]
    pub fn faq_mut(&mut self) -> &mut FaqAccordion {
        &mut self.faq
    }

    /// FAQ accordion
    #[inline]
    #[must_use]
    pub fn faq(&self) -> &FaqAccordion {
        &self.faq
    }

    /// Project gallery
    #[inline]
    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    /// Project gallery
    #[inline]
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Contact form
    #[inline]
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Contact link builder
    #[inline]
    #[must_use]
    pub fn handoff(&self) -> &ContactHandoff {
        &self.handoff
    }

    /// Scroll to a section (or any anchor, e.g. a hero call-to-action)
    pub fn navigate_to(&self, id: &str) -> NavigateOutcome {
        self.navigator.navigate_to(id)
    }

    /// Change route; navigating away resets navbar state and collapses
    /// the FAQ and gallery detail
    pub fn go_to(&mut self, route: Route) -> bool {
        let changed = self.router.navigate(route);
        if changed {
            self.navigator.reset();
            self.faq.close_all();
            self.gallery.close();
        }
        changed
    }

    /// Submit the contact form
    ///
    /// # Errors
    /// [`ContactError::MissingField`] when a field is blank.
    pub fn submit_contact(&mut self) -> Result<String, ContactError> {
        self.contact.submit(&self.handoff, self.viewport.as_ref())
    }

    /// Tear down every subscription
    pub fn unmount(self) {
        tracing::debug!("page unmounted");
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("route", &self.router.current())
            .field("navigator", &self.navigator)
            .field("section_reveals", &self.section_reveals.len())
            .field("skill_reveals", &self.skill_reveals.len())
            .finish_non_exhaustive()
    }
}
