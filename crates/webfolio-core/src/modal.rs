//! Project detail modal.
//!
//! Two states. Opening renders the requested project (or the fallback
//! record) and locks background scrolling; every dismissal trigger closes
//! an open modal and is ignored on a closed one.

use std::rc::Rc;

use crate::content::ContentRegistry;
use crate::render::render_project;
use crate::surface::ModalSurface;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open { project_id: String },
}

/// Ways the user can dismiss the modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The close control inside the panel
    CloseControl,
    /// A click on the overlay outside the content panel
    Backdrop,
    /// The cancel key (Escape)
    CancelKey,
}

pub struct ModalController<M: ModalSurface> {
    registry: Rc<ContentRegistry>,
    surface: M,
    state: ModalState,
}

impl<M: ModalSurface> ModalController<M> {
    pub fn new(registry: Rc<ContentRegistry>, surface: M) -> Self {
        Self {
            registry,
            surface,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Show `project_id`, replacing whatever is open
    pub fn open(&mut self, project_id: &str) {
        let project = match self.registry.get(project_id) {
            Some(project) => project,
            None => {
                tracing::warn!(project_id, "Unknown project, showing fallback");
                self.registry.get_or_fallback(project_id)
            }
        };

        self.surface.show(render_project(project));
        self.surface.set_background_scroll(false);
        self.state = ModalState::Open {
            project_id: project_id.to_string(),
        };
        tracing::info!(project_id, "Project modal opened");
    }

    /// Close if open. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.surface.hide();
        self.surface.set_background_scroll(true);
        self.state = ModalState::Closed;
        true
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        let closed = self.close();
        if closed {
            tracing::debug!(?trigger, "Project modal dismissed");
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ProjectView;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorded {
        view: Option<ProjectView>,
        scroll_enabled: bool,
        shows: usize,
    }

    #[derive(Clone, Default)]
    struct FakeModal(Rc<RefCell<Recorded>>);

    impl ModalSurface for FakeModal {
        fn show(&mut self, view: ProjectView) {
            let mut r = self.0.borrow_mut();
            r.view = Some(view);
            r.shows += 1;
        }

        fn hide(&mut self) {
            self.0.borrow_mut().view = None;
        }

        fn set_background_scroll(&mut self, enabled: bool) {
            self.0.borrow_mut().scroll_enabled = enabled;
        }
    }

    fn controller() -> (FakeModal, ModalController<FakeModal>) {
        let fake = FakeModal::default();
        fake.0.borrow_mut().scroll_enabled = true;
        let controller = ModalController::new(Rc::new(ContentRegistry::builtin()), fake.clone());
        (fake, controller)
    }

    #[test]
    fn open_then_close_restores_scroll() {
        let (fake, mut modal) = controller();

        modal.open("project3");
        assert!(modal.is_open());
        assert_eq!(
            fake.0.borrow().view.as_ref().map(|v| v.title.as_str()),
            Some("Brand Identity")
        );
        assert!(!fake.0.borrow().scroll_enabled);

        assert!(modal.close());
        assert_eq!(modal.state(), &ModalState::Closed);
        assert!(fake.0.borrow().view.is_none());
        assert!(fake.0.borrow().scroll_enabled);
    }

    #[test]
    fn unknown_project_renders_fallback() {
        let (fake, mut modal) = controller();
        modal.open("does-not-exist");
        assert_eq!(
            fake.0.borrow().view.as_ref().map(|v| v.title.as_str()),
            Some("Project Not Found")
        );
        assert_eq!(
            modal.state(),
            &ModalState::Open {
                project_id: "does-not-exist".to_string()
            }
        );
    }

    #[test]
    fn open_while_open_replaces_content() {
        let (fake, mut modal) = controller();
        modal.open("project1");
        modal.open("project2");
        assert_eq!(fake.0.borrow().shows, 2);
        assert_eq!(
            fake.0.borrow().view.as_ref().map(|v| v.title.as_str()),
            Some("Fitness App")
        );
    }

    #[test]
    fn dismiss_triggers_are_noops_when_closed() {
        let (fake, mut modal) = controller();
        for trigger in [
            DismissTrigger::CloseControl,
            DismissTrigger::Backdrop,
            DismissTrigger::CancelKey,
        ] {
            assert!(!modal.dismiss(trigger));
        }
        assert!(fake.0.borrow().scroll_enabled);

        for trigger in [
            DismissTrigger::CloseControl,
            DismissTrigger::Backdrop,
            DismissTrigger::CancelKey,
        ] {
            modal.open("project1");
            assert!(modal.dismiss(trigger));
            assert!(!modal.is_open());
        }
    }
}
