use anyhow::Result;

use super::Command;
use welcome_flow::{CompletionStore, JsonFileCompletionStore};

pub struct StatusCommand {
    pub store: JsonFileCompletionStore,
    pub key: Option<String>,
}

impl StatusCommand {
    pub fn new(store: JsonFileCompletionStore) -> Self {
        Self { store, key: None }
    }

    pub fn with_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }
}

impl Command for StatusCommand {
    fn execute(&self) -> Result<()> {
        match &self.key {
            Some(key) => {
                if self.store.get(key)? {
                    println!("✅ {} completed", key);
                } else {
                    println!("⏳ {} not completed", key);
                }
            }
            None => {
                let keys = self.store.completed_keys()?;
                if keys.is_empty() {
                    println!("📭 No completed flows in {}", self.store.path().display());
                } else {
                    println!("📋 Completed flows ({}):", keys.len());
                    for key in keys {
                        println!("   ✅ {}", key);
                    }
                }
            }
        }
        Ok(())
    }
}
