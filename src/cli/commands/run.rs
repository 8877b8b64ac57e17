use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::BufRead;

use super::Command;
use welcome_flow::{
    CommandResponse, FlowCommand, FlowConfiguration, FlowListener, FlowOutcome,
    JsonFileCompletionStore, TextRenderer, WelcomeFlow, WelcomeLauncher,
};

/// Final report printed when a flow finishes
#[derive(Debug, Serialize)]
pub struct FlowReport {
    pub session_id: String,
    pub outcome: FlowOutcome,
    pub final_page: usize,
    pub finished_at: DateTime<Utc>,
}

/// Page indicator drawn in reading order, like the dots under a pager
struct ConsoleIndicator {
    total: usize,
    rtl: bool,
}

impl FlowListener for ConsoleIndicator {
    fn on_page_selected(&mut self, index: usize) {
        let position = if self.rtl { self.total - index } else { index + 1 };
        let dots: Vec<&str> = (1..=self.total)
            .map(|p| if p == position { "●" } else { "○" })
            .collect();
        println!("{}  ({}/{})", dots.join(" "), position, self.total);
    }
}

pub struct RunCommand {
    pub configuration: FlowConfiguration,
    pub store: JsonFileCompletionStore,
    pub commands: Option<Vec<String>>,
    pub force: bool,
}

impl RunCommand {
    pub fn new(configuration: FlowConfiguration, store: JsonFileCompletionStore) -> Self {
        Self {
            configuration,
            store,
            commands: None,
            force: false,
        }
    }

    pub fn with_commands(mut self, commands: Option<Vec<String>>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    fn start(&self) -> Result<Option<WelcomeFlow>> {
        let launcher = WelcomeLauncher::new(self.store.clone());
        let indicator: Box<dyn FlowListener> = Box::new(ConsoleIndicator {
            total: self.configuration.page_count(),
            rtl: self.configuration.is_rtl(),
        });

        if self.force {
            return Ok(Some(
                launcher.launch_forced(self.configuration.clone(), vec![indicator]),
            ));
        }
        Ok(launcher.launch(self.configuration.clone(), vec![indicator])?)
    }

    /// Apply one input token; returns true once the flow has finished
    fn step(&self, flow: &mut WelcomeFlow, renderer: &mut TextRenderer, token: &str) -> Result<bool> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(false);
        }

        let command = match token.parse::<FlowCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("⚠️  {}", e);
                return Ok(false);
            }
        };

        match flow.handle(command) {
            Ok(CommandResponse::Moved { .. }) => {
                println!("{}", flow.render_current(renderer)?);
            }
            Ok(CommandResponse::Rejected) => {
                println!("⛔ '{}' not possible on this page", token);
            }
            Ok(CommandResponse::Finished(outcome)) => {
                println!("🏁 Flow {}", outcome);
            }
            Ok(CommandResponse::Relayed) | Ok(CommandResponse::Ignored) => {}
            Err(e) => println!("⚠️  {}", e),
        }
        Ok(flow.is_finished())
    }

    fn report(&self, flow: &WelcomeFlow) -> Result<()> {
        match flow.outcome() {
            Some(outcome) => {
                let report = FlowReport {
                    session_id: flow.session_id().to_string(),
                    outcome: outcome.clone(),
                    final_page: flow.current_index(),
                    finished_at: Utc::now(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            None => {
                let (position, total) = flow.state().progress(flow.configuration());
                println!(
                    "⏸️  Flow '{}' still open on page {}/{}",
                    flow.configuration().identity_key(),
                    position,
                    total
                );
            }
        }
        Ok(())
    }
}

impl Command for RunCommand {
    fn execute(&self) -> Result<()> {
        let key = self.configuration.identity_key().to_string();
        let Some(mut flow) = self.start()? else {
            println!("✅ Flow '{}' already completed, nothing to show", key);
            println!("   Use --force to show it anyway or 'welcome-flow reset {}'", key);
            return Ok(());
        };

        let mut renderer = TextRenderer::new(40);
        println!("{}", flow.render_current(&mut renderer)?);

        match &self.commands {
            Some(commands) => {
                for token in commands {
                    if self.step(&mut flow, &mut renderer, token)? {
                        break;
                    }
                }
            }
            None => {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    if self.step(&mut flow, &mut renderer, &line?)? {
                        break;
                    }
                }
            }
        }

        self.report(&flow)
    }
}
