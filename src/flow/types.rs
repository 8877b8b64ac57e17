// Core types for the welcome flow state machine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FlowError;

/// Opaque page descriptor handed to the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl PageSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            body: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Terminal result of a flow, delivered to the host exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum FlowOutcome {
    /// User finished or skipped the flow; it is recorded as seen
    Completed { key: String },
    /// User left the flow; nothing is recorded
    Cancelled { key: String },
}

impl FlowOutcome {
    pub fn key(&self) -> &str {
        match self {
            FlowOutcome::Completed { key } | FlowOutcome::Cancelled { key } => key,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, FlowOutcome::Completed { .. })
    }
}

impl fmt::Display for FlowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowOutcome::Completed { key } => write!(f, "completed ({})", key),
            FlowOutcome::Cancelled { key } => write!(f, "cancelled ({})", key),
        }
    }
}

/// Input intents translated from the host's widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowCommand {
    /// Next button
    Next,
    /// Previous button
    Previous,
    /// Skip button, only honoured when the flow is skippable
    Skip,
    /// Done button on the last page
    Done,
    /// System back navigation, resolved through the back-button policy
    Back,
    /// App-bar up affordance, cancels when the bar back button is shown
    Home,
    /// Tap outside the flow content, always cancels
    DismissOutside,
    /// Swipe or direct selection of a page
    SelectPage { index: usize },
    /// In-progress swipe from `position` toward `position + 1`
    Scroll { position: usize, offset: f32 },
}

impl FromStr for FlowCommand {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        match token.as_str() {
            "next" => Ok(FlowCommand::Next),
            "prev" | "previous" => Ok(FlowCommand::Previous),
            "skip" => Ok(FlowCommand::Skip),
            "done" => Ok(FlowCommand::Done),
            "back" => Ok(FlowCommand::Back),
            "home" | "up" => Ok(FlowCommand::Home),
            "dismiss" => Ok(FlowCommand::DismissOutside),
            other => match other.strip_prefix("goto:") {
                Some(index) => index
                    .parse::<usize>()
                    .map(|index| FlowCommand::SelectPage { index })
                    .map_err(|_| FlowError::UnknownCommand(s.to_string())),
                None => Err(FlowError::UnknownCommand(s.to_string())),
            },
        }
    }
}

/// Per-command result reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResponse {
    /// Current page changed
    Moved { from: usize, to: usize },
    /// Movement refused at a boundary; nothing changed
    Rejected,
    /// Scroll progress forwarded to listeners
    Relayed,
    /// Flow reached its terminal outcome with this command
    Finished(FlowOutcome),
    /// Command arrived after the flow finished
    Ignored,
}
