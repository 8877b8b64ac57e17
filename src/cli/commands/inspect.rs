use anyhow::Result;

use super::Command;
use welcome_flow::{FlowConfiguration, NavigationController};

pub struct InspectCommand {
    pub configuration: FlowConfiguration,
}

impl InspectCommand {
    pub fn new(configuration: FlowConfiguration) -> Self {
        Self { configuration }
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> Result<()> {
        let config = &self.configuration;
        println!("📋 Flow '{}'", config.identity_key());
        println!("   Pages: {}", config.page_count());
        println!("   Orientation: {}", if config.is_rtl() { "rtl" } else { "ltr" });
        println!("   Can skip: {}", config.can_skip());
        println!("   Back navigates pages: {}", config.back_button_navigates_pages());
        println!("   Back skips: {}", config.back_button_skips());
        println!("   App bar back: {}", config.show_back_button_in_bar());
        if let Some(animation) = config.exit_animation() {
            println!("   Exit animation: {}", animation);
        }
        println!();

        // Walk the flow in reading order to show each page's controls
        let mut navigator = NavigationController::new(config.clone());
        loop {
            let index = navigator.current_index();
            let page = config.page_at(index)?;
            let controls = navigator.controls();
            println!(
                "   [{}] {:<16} {}",
                index,
                page.id,
                serde_json::to_string(&controls)?
            );
            if !navigator.advance() {
                break;
            }
        }
        Ok(())
    }
}
