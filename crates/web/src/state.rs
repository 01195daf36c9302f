// =============================================================================
// Cloudora Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. View Controller
// 3. App State
// 4. View Actions
// 5. Tests
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::WaitlistClient;
use crate::config::SiteConfig;
use crate::services::notifications::Toaster;
use crate::utils::scroll_to_top;

// -----------------------------------------------------------------------------
// 2. View Controller
// -----------------------------------------------------------------------------

/// Which top-level view the home page renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    MainView,
    FormView,
}

/// Handle for one pending view switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchTicket(u64);

/// Two-valued view mode plus the loading pause between switches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewController {
    mode: ViewMode,
    is_loading: bool,
    pending: Option<ViewMode>,
    generation: u64,
}

impl ViewController {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// True while a switch is waiting for its delay to pass.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Start switching to `target`. Any earlier pending switch is superseded.
    pub fn begin_switch(&mut self, target: ViewMode) -> SwitchTicket {
        self.generation += 1;
        self.pending = Some(target);
        self.is_loading = true;
        SwitchTicket(self.generation)
    }

    /// Finish a switch once its delay has elapsed. Stale tickets are ignored.
    /// Returns whether the view changed state.
    pub fn complete_switch(&mut self, ticket: SwitchTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        let Some(target) = self.pending.take() else {
            return false;
        };

        self.mode = target;
        self.is_loading = false;
        true
    }
}

// -----------------------------------------------------------------------------
// 3. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Home page view mode and loading flag.
    pub view: RwSignal<ViewController>,

    /// On-screen notifications.
    pub toaster: Toaster,

    /// Build-time configuration.
    pub config: SiteConfig,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            view: RwSignal::new(ViewController::default()),
            toaster: Toaster::new(),
            config,
        }
    }

    /// Client for the waitlist endpoint.
    pub fn waitlist_client(&self) -> WaitlistClient {
        WaitlistClient::from_config(&self.config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SiteConfig::from_env())
    }
}

// -----------------------------------------------------------------------------
// 4. View Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Show the loading placeholder, then swap to `target` after the
    /// configured transition delay.
    pub fn switch_mode(&self, target: ViewMode) {
        let mut ticket = None;
        self.view.update(|view| ticket = Some(view.begin_switch(target)));
        let Some(ticket) = ticket else {
            return;
        };

        log::debug!("Switching view to {:?}", target);

        let view = self.view;
        let delay_ms = self.config.transition_delay_ms();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let mut switched = false;
            view.update(|view| switched = view.complete_switch(ticket));
            if switched {
                scroll_to_top();
            }
        });
    }
}

// -----------------------------------------------------------------------------
// 5. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fixtures::{valid_form, RecordingDispatcher};
    use crate::form::WaitlistRecord;
    use futures::executor::block_on;

    fn form_view() -> ViewController {
        let mut view = ViewController::default();
        let ticket = view.begin_switch(ViewMode::FormView);
        view.complete_switch(ticket);
        view
    }

    /// Mirrors the home page wiring: a submitted form asks for the main view.
    fn submit_from_form_view(dispatcher: &RecordingDispatcher) -> (ViewController, WaitlistRecord) {
        let mut view = form_view();
        let mut form = valid_form();

        let outcome = block_on(form.submit(dispatcher));
        if outcome.is_submitted() {
            let ticket = view.begin_switch(ViewMode::MainView);
            view.complete_switch(ticket);
        }

        (view, form.record().clone())
    }

    #[test]
    fn test_starts_on_main_view() {
        let view = ViewController::default();
        assert_eq!(view.mode(), ViewMode::MainView);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_switch_shows_loading_until_complete() {
        let mut view = ViewController::default();
        let ticket = view.begin_switch(ViewMode::FormView);
        assert!(view.is_loading());
        assert_eq!(view.mode(), ViewMode::MainView);

        assert!(view.complete_switch(ticket));
        assert!(!view.is_loading());
        assert_eq!(view.mode(), ViewMode::FormView);

        assert!(!view.complete_switch(ticket));
    }

    #[test]
    fn test_stale_ticket_does_not_end_newer_switch() {
        let mut view = ViewController::default();
        let first = view.begin_switch(ViewMode::FormView);
        let second = view.begin_switch(ViewMode::MainView);

        assert!(!view.complete_switch(first));
        assert!(view.is_loading());

        assert!(view.complete_switch(second));
        assert_eq!(view.mode(), ViewMode::MainView);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_successful_submission_returns_to_main_view() {
        let (view, record) = submit_from_form_view(&RecordingDispatcher::succeeding());
        assert_eq!(record, WaitlistRecord::default());
        assert_eq!(view.mode(), ViewMode::MainView);
    }

    #[test]
    fn test_failed_submission_stays_on_form() {
        let (view, record) = submit_from_form_view(&RecordingDispatcher::failing("offline"));
        assert_eq!(record, valid_form().record().clone());
        assert_eq!(view.mode(), ViewMode::FormView);
        assert!(!view.is_loading());
    }
}
