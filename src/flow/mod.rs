// Welcome Flow Module - Navigation and Completion State Machine
//
// Pure, platform-independent flow logic. The host translates input events into
// `FlowCommand`s and receives page notifications plus a single terminal outcome.

pub mod completion;
pub mod configuration;
pub mod error;
pub mod listener;
pub mod navigation;
pub mod render;
pub mod session;
pub mod state;
pub mod types;

pub use completion::CompletionRecorder;
pub use configuration::{identity_key_for, FlowConfiguration, FlowConfigurationBuilder, FlowDefinition};
pub use error::FlowError;
pub use listener::{FlowListener, FlowNotification, NotificationLog};
pub use navigation::NavigationController;
pub use render::{PageRenderer, TextRenderer};
pub use session::WelcomeFlow;
pub use state::{ControlVisibility, FlowState};
pub use types::{CommandResponse, FlowCommand, FlowOutcome, PageSpec};
