use super::configuration::FlowConfiguration;
use super::error::FlowError;
use super::listener::{FlowListener, ListenerSet};
use super::state::{ControlVisibility, FlowState};

/// Direction of travel in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// The only authority that changes the current page
///
/// "Next" means +1 in LTR and -1 in RTL. Every boundary check goes through
/// [`NavigationController::can_move`] so the sign logic lives in one place.
#[derive(Debug)]
pub struct NavigationController {
    configuration: FlowConfiguration,
    state: FlowState,
    listeners: ListenerSet,
}

impl NavigationController {
    pub fn new(configuration: FlowConfiguration) -> Self {
        Self::with_listeners(configuration, Vec::new())
    }

    pub fn with_listeners(
        configuration: FlowConfiguration,
        listeners: Vec<Box<dyn FlowListener>>,
    ) -> Self {
        let state = FlowState::new(configuration.first_page_index());
        Self {
            configuration,
            state,
            listeners: ListenerSet::new(listeners),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn FlowListener>) {
        self.listeners.push(listener);
    }

    pub fn configuration(&self) -> &FlowConfiguration {
        &self.configuration
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn is_first(&self) -> bool {
        self.state.is_first(&self.configuration)
    }

    pub fn is_last(&self) -> bool {
        self.state.is_last(&self.configuration)
    }

    pub fn controls(&self) -> ControlVisibility {
        self.state.controls(&self.configuration)
    }

    pub fn compute_next_index(&self) -> isize {
        self.step(Direction::Forward)
    }

    pub fn compute_prev_index(&self) -> isize {
        self.step(Direction::Backward)
    }

    pub fn can_advance(&self) -> bool {
        self.can_move(Direction::Forward)
    }

    pub fn can_retreat(&self) -> bool {
        self.can_move(Direction::Backward)
    }

    /// Move one page forward. Returns false at the last page.
    pub fn advance(&mut self) -> bool {
        self.move_in(Direction::Forward)
    }

    /// Move one page backward. Returns false at the first page.
    pub fn retreat(&mut self) -> bool {
        self.move_in(Direction::Backward)
    }

    /// Select a page directly, as a swipe does
    ///
    /// Returns `Ok(false)` when `index` is already current.
    pub fn jump_to(&mut self, index: usize) -> Result<bool, FlowError> {
        self.configuration.page_at(index)?;
        if index == self.state.current_index() {
            return Ok(false);
        }
        self.select(index);
        Ok(true)
    }

    /// Forward in-progress swipe progress to listeners without changing the page
    pub fn relay_scroll(&mut self, position: usize, offset: f32) -> Result<(), FlowError> {
        self.configuration.page_at(position)?;
        let to = (position + 1).min(self.configuration.page_count() - 1);
        let progress = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, 1.0) };
        self.listeners.page_changing(position, to, progress);
        Ok(())
    }

    /// Re-announce the current page, as on flow start
    pub fn announce_current(&mut self) {
        self.listeners.page_selected(self.state.current_index());
    }

    pub(crate) fn listeners_mut(&mut self) -> &mut ListenerSet {
        &mut self.listeners
    }

    fn step(&self, direction: Direction) -> isize {
        let forward = if self.configuration.is_rtl() { -1 } else { 1 };
        let delta = match direction {
            Direction::Forward => forward,
            Direction::Backward => -forward,
        };
        self.state.current_index() as isize + delta
    }

    fn can_move(&self, direction: Direction) -> bool {
        let target = self.step(direction);
        let (bound, toward_higher) = match direction {
            Direction::Forward => (
                self.configuration.last_viewable_page_index(),
                !self.configuration.is_rtl(),
            ),
            Direction::Backward => (
                self.configuration.first_page_index(),
                self.configuration.is_rtl(),
            ),
        };
        let bound = bound as isize;
        if toward_higher {
            target <= bound
        } else {
            target >= bound
        }
    }

    fn move_in(&mut self, direction: Direction) -> bool {
        if !self.can_move(direction) {
            tracing::debug!(
                key = %self.configuration.identity_key(),
                index = self.state.current_index(),
                ?direction,
                "Navigation rejected at boundary"
            );
            return false;
        }
        let target = self.step(direction) as usize;
        self.select(target);
        true
    }

    fn select(&mut self, index: usize) {
        let from = self.state.current_index();
        self.state.set_current_index(index);
        tracing::info!(
            key = %self.configuration.identity_key(),
            from = from,
            to = index,
            "Page changed"
        );
        self.listeners.page_selected(index);
    }
}
