// Welcome Flow - onboarding navigation and completion core
// This exposes the flow state machine, persistence seam and host helpers

pub mod config;
pub mod flow;
pub mod launcher;
pub mod store;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{config, WelcomeFlowConfig};
pub use flow::{
    identity_key_for, CommandResponse, CompletionRecorder, ControlVisibility, FlowCommand,
    FlowConfiguration, FlowConfigurationBuilder, FlowDefinition, FlowError, FlowListener,
    FlowNotification, FlowOutcome, FlowState, NavigationController, NotificationLog, PageRenderer,
    PageSpec, TextRenderer, WelcomeFlow,
};
pub use launcher::WelcomeLauncher;
pub use store::{CompletionStore, InMemoryCompletionStore, JsonFileCompletionStore, StoreError};
pub use telemetry::{create_flow_span, generate_session_id, init_telemetry};
