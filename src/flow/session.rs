use statig::blocking::StateMachine;
use statig::prelude::*;

use super::completion::CompletionRecorder;
use super::configuration::FlowConfiguration;
use super::error::FlowError;
use super::listener::FlowListener;
use super::navigation::NavigationController;
use super::render::PageRenderer;
use super::state::{ControlVisibility, FlowState};
use super::types::{CommandResponse, FlowCommand, FlowOutcome};
use crate::store::CompletionStore;
use crate::telemetry::{create_flow_span, generate_session_id};

/// Shared storage of the flow state machine
pub(crate) struct FlowMachine {
    session_id: String,
    navigator: NavigationController,
    recorder: CompletionRecorder,
    last_response: CommandResponse,
    last_error: Option<FlowError>,
}

impl FlowMachine {
    fn identity_key(&self) -> String {
        self.navigator.configuration().identity_key().to_string()
    }

    fn dispatch(&mut self, command: &FlowCommand) -> Result<CommandResponse, FlowError> {
        match *command {
            FlowCommand::Next => Ok(self.track_move(NavigationController::advance)),
            FlowCommand::Previous => Ok(self.track_move(NavigationController::retreat)),
            FlowCommand::Skip if self.navigator.configuration().can_skip() => self.complete(),
            FlowCommand::Done if self.navigator.is_last() => self.complete(),
            FlowCommand::Skip | FlowCommand::Done => Ok(CommandResponse::Rejected),
            FlowCommand::Back => self.back(),
            FlowCommand::Home if self.navigator.configuration().show_back_button_in_bar() => {
                self.cancel()
            }
            FlowCommand::Home => Ok(CommandResponse::Rejected),
            FlowCommand::DismissOutside => self.cancel(),
            FlowCommand::SelectPage { index } => {
                let from = self.navigator.current_index();
                if self.navigator.jump_to(index)? {
                    Ok(CommandResponse::Moved { from, to: index })
                } else {
                    Ok(CommandResponse::Rejected)
                }
            }
            FlowCommand::Scroll { position, offset } => {
                self.navigator.relay_scroll(position, offset)?;
                Ok(CommandResponse::Relayed)
            }
        }
    }

    /// Back-navigation policy: retreat wins over finishing the flow
    fn back(&mut self) -> Result<CommandResponse, FlowError> {
        let configuration = self.navigator.configuration();
        let navigates_pages = configuration.back_button_navigates_pages();
        let skips = configuration.can_skip() && configuration.back_button_skips();

        if navigates_pages {
            if let CommandResponse::Moved { from, to } =
                self.track_move(NavigationController::retreat)
            {
                return Ok(CommandResponse::Moved { from, to });
            }
        }

        if skips {
            self.complete()
        } else {
            self.cancel()
        }
    }

    fn track_move(&mut self, movement: fn(&mut NavigationController) -> bool) -> CommandResponse {
        let from = self.navigator.current_index();
        if movement(&mut self.navigator) {
            CommandResponse::Moved {
                from,
                to: self.navigator.current_index(),
            }
        } else {
            CommandResponse::Rejected
        }
    }

    fn complete(&mut self) -> Result<CommandResponse, FlowError> {
        let key = self.identity_key();
        let outcome = self.recorder.complete(&key)?;
        Ok(self.finish(outcome))
    }

    fn cancel(&mut self) -> Result<CommandResponse, FlowError> {
        let key = self.identity_key();
        let outcome = self.recorder.cancel(&key)?;
        Ok(self.finish(outcome))
    }

    fn finish(&mut self, outcome: FlowOutcome) -> CommandResponse {
        self.navigator.listeners_mut().finished(&outcome);
        CommandResponse::Finished(outcome)
    }
}

#[state_machine(initial = "State::active()")]
impl FlowMachine {
    #[state]
    fn active(&mut self, event: &FlowCommand) -> Outcome<State> {
        self.last_error = None;
        match self.dispatch(event) {
            Ok(CommandResponse::Finished(outcome)) => {
                tracing::info!(
                    session_id = %self.session_id,
                    command = ?event,
                    outcome = %outcome,
                    "Welcome flow finished"
                );
                self.last_response = CommandResponse::Finished(outcome);
                Transition(State::finished())
            }
            Ok(response) => {
                self.last_response = response;
                Handled
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    command = ?event,
                    error = %e,
                    "Flow command failed"
                );
                self.last_error = Some(e);
                self.last_response = CommandResponse::Rejected;
                Handled
            }
        }
    }

    #[state]
    fn finished(&mut self, event: &FlowCommand) -> Outcome<State> {
        self.last_error = None;
        tracing::debug!(
            session_id = %self.session_id,
            command = ?event,
            "Ignoring command after flow finished"
        );
        self.last_response = CommandResponse::Ignored;
        Handled
    }
}

/// A running welcome flow
///
/// Created by the host with a configuration and a completion store. Every input
/// goes through [`WelcomeFlow::handle`]; once a terminal outcome is produced
/// later commands return `CommandResponse::Ignored` and notify nobody.
pub struct WelcomeFlow {
    machine: StateMachine<FlowMachine>,
}

impl WelcomeFlow {
    pub fn start(configuration: FlowConfiguration, store: impl CompletionStore + 'static) -> Self {
        Self::start_with_listeners(configuration, store, Vec::new())
    }

    /// Start positioned on the first page; listeners hear that selection immediately
    pub fn start_with_listeners(
        configuration: FlowConfiguration,
        store: impl CompletionStore + 'static,
        listeners: Vec<Box<dyn FlowListener>>,
    ) -> Self {
        let session_id = generate_session_id();
        let mut navigator = NavigationController::with_listeners(configuration, listeners);

        tracing::info!(
            session_id = %session_id,
            key = %navigator.configuration().identity_key(),
            pages = navigator.configuration().page_count(),
            rtl = navigator.configuration().is_rtl(),
            first = navigator.current_index(),
            "Welcome flow started"
        );
        navigator.announce_current();

        let machine = FlowMachine {
            session_id,
            navigator,
            recorder: CompletionRecorder::new(Box::new(store)),
            last_response: CommandResponse::Ignored,
            last_error: None,
        }
        .state_machine();

        Self { machine }
    }

    /// Apply one input command
    ///
    /// Boundary moves come back as `Rejected`. Only an out-of-range page index
    /// from `SelectPage` or `Scroll` is an `Err`.
    pub fn handle(&mut self, command: FlowCommand) -> Result<CommandResponse, FlowError> {
        let span = create_flow_span(
            "handle",
            &self.context().identity_key(),
            &self.context().session_id,
        );
        let _entered = span.enter();

        self.machine.handle(&command);

        let context = self.context();
        match &context.last_error {
            Some(e) => Err(e.clone()),
            None => Ok(context.last_response.clone()),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.context().session_id
    }

    pub fn configuration(&self) -> &FlowConfiguration {
        self.context().navigator.configuration()
    }

    pub fn state(&self) -> FlowState {
        self.context().navigator.state()
    }

    pub fn current_index(&self) -> usize {
        self.context().navigator.current_index()
    }

    pub fn is_first(&self) -> bool {
        self.context().navigator.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.context().navigator.is_last()
    }

    pub fn can_advance(&self) -> bool {
        !self.is_finished() && self.context().navigator.can_advance()
    }

    pub fn can_retreat(&self) -> bool {
        !self.is_finished() && self.context().navigator.can_retreat()
    }

    pub fn controls(&self) -> ControlVisibility {
        self.context().navigator.controls()
    }

    pub fn outcome(&self) -> Option<&FlowOutcome> {
        self.context().recorder.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.context().recorder.is_terminated()
    }

    pub fn render_current<R: PageRenderer>(&self, renderer: &mut R) -> Result<R::Handle, FlowError> {
        let index = self.current_index();
        let page = self.configuration().page_at(index)?;
        Ok(renderer.render_page(page, index))
    }

    fn context(&self) -> &FlowMachine {
        self.machine.inner()
    }
}

impl std::fmt::Debug for WelcomeFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WelcomeFlow")
            .field("session_id", &self.session_id())
            .field("key", &self.configuration().identity_key())
            .field("current_index", &self.current_index())
            .field("outcome", &self.outcome())
            .finish()
    }
}
