use anyhow::Result;

use welcome_flow::{FlowConfiguration, FlowDefinition, WelcomeFlowConfig};

pub mod inspect;
pub mod reset;
pub mod run;
pub mod status;

pub trait Command {
    fn execute(&self) -> Result<()>;
}

/// Load a flow definition by path or by name in the configured flows directory
pub fn load_flow(config: &WelcomeFlowConfig, flow: &str) -> Result<FlowConfiguration> {
    let path = config.flow_path(flow);
    let definition = FlowDefinition::load(&path)?;
    Ok(definition.into_configuration()?)
}
