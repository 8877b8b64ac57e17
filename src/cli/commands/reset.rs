use anyhow::Result;

use super::Command;
use welcome_flow::{JsonFileCompletionStore, WelcomeLauncher};

pub struct ResetCommand {
    pub store: JsonFileCompletionStore,
    pub key: String,
}

impl ResetCommand {
    pub fn new(store: JsonFileCompletionStore, key: String) -> Self {
        Self { store, key }
    }
}

impl Command for ResetCommand {
    fn execute(&self) -> Result<()> {
        let mut launcher = WelcomeLauncher::new(self.store.clone());
        if launcher.should_show(&self.key)? {
            println!("✅ {} was not completed - nothing to reset", self.key);
            return Ok(());
        }
        launcher.reset(&self.key)?;
        println!("🔄 {} reset - it will show again on next run", self.key);
        Ok(())
    }
}
