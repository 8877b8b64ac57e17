use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::FlowError;
use super::types::PageSpec;

const IDENTITY_KEY_PREFIX: &str = "welcome_screen_";

/// Immutable description of a welcome flow
///
/// Built once before the flow starts. All fields are read-only for the flow's
/// lifetime; construct through [`FlowConfiguration::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfiguration {
    identity_key: String,
    pages: Vec<PageSpec>,
    rtl: bool,
    can_skip: bool,
    back_button_navigates_pages: bool,
    back_button_skips: bool,
    show_back_button_in_bar: bool,
    show_previous_button: bool,
    exit_animation: Option<String>,
}

impl FlowConfiguration {
    pub fn builder(identity_key: impl Into<String>) -> FlowConfigurationBuilder {
        FlowConfigurationBuilder::new(identity_key)
    }

    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }

    pub fn pages(&self) -> &[PageSpec] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    pub fn can_skip(&self) -> bool {
        self.can_skip
    }

    pub fn back_button_navigates_pages(&self) -> bool {
        self.back_button_navigates_pages
    }

    pub fn back_button_skips(&self) -> bool {
        self.back_button_skips
    }

    pub fn show_back_button_in_bar(&self) -> bool {
        self.show_back_button_in_bar
    }

    pub fn show_previous_button(&self) -> bool {
        self.show_previous_button
    }

    pub fn exit_animation(&self) -> Option<&str> {
        self.exit_animation.as_deref()
    }

    /// Index of the page the flow starts on: 0, or the highest index in RTL
    pub fn first_page_index(&self) -> usize {
        if self.rtl {
            self.pages.len() - 1
        } else {
            0
        }
    }

    /// Index of the final page in reading order: the highest index, or 0 in RTL
    pub fn last_viewable_page_index(&self) -> usize {
        if self.rtl {
            0
        } else {
            self.pages.len() - 1
        }
    }

    pub fn page_at(&self, index: usize) -> Result<&PageSpec, FlowError> {
        self.pages.get(index).ok_or(FlowError::IndexOutOfRange {
            index,
            len: self.pages.len(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FlowConfigurationBuilder {
    identity_key: String,
    pages: Vec<PageSpec>,
    rtl: bool,
    can_skip: bool,
    back_button_navigates_pages: bool,
    back_button_skips: bool,
    show_back_button_in_bar: bool,
    show_previous_button: bool,
    exit_animation: Option<String>,
}

impl FlowConfigurationBuilder {
    pub fn new(identity_key: impl Into<String>) -> Self {
        Self {
            identity_key: identity_key.into(),
            pages: Vec::new(),
            rtl: false,
            can_skip: true,
            back_button_navigates_pages: true,
            back_button_skips: true,
            show_back_button_in_bar: false,
            show_previous_button: true,
            exit_animation: None,
        }
    }

    pub fn page(mut self, page: PageSpec) -> Self {
        self.pages.push(page);
        self
    }

    pub fn pages(mut self, pages: impl IntoIterator<Item = PageSpec>) -> Self {
        self.pages.extend(pages);
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn can_skip(mut self, can_skip: bool) -> Self {
        self.can_skip = can_skip;
        self
    }

    pub fn back_button_navigates_pages(mut self, navigates: bool) -> Self {
        self.back_button_navigates_pages = navigates;
        self
    }

    pub fn back_button_skips(mut self, skips: bool) -> Self {
        self.back_button_skips = skips;
        self
    }

    pub fn show_back_button_in_bar(mut self, show: bool) -> Self {
        self.show_back_button_in_bar = show;
        self
    }

    pub fn show_previous_button(mut self, show: bool) -> Self {
        self.show_previous_button = show;
        self
    }

    pub fn exit_animation(mut self, animation: impl Into<String>) -> Self {
        self.exit_animation = Some(animation.into());
        self
    }

    pub fn build(self) -> Result<FlowConfiguration, FlowError> {
        if self.identity_key.trim().is_empty() {
            return Err(FlowError::InvalidIdentityKey);
        }
        if self.pages.is_empty() {
            return Err(FlowError::EmptyFlow {
                key: self.identity_key,
            });
        }

        Ok(FlowConfiguration {
            identity_key: self.identity_key,
            pages: self.pages,
            rtl: self.rtl,
            can_skip: self.can_skip,
            back_button_navigates_pages: self.back_button_navigates_pages,
            back_button_skips: self.back_button_skips,
            show_back_button_in_bar: self.show_back_button_in_bar,
            show_previous_button: self.show_previous_button,
            exit_animation: self.exit_animation,
        })
    }
}

/// Derive a stable identity key from a flow name
///
/// Non-alphanumeric runs collapse to a single underscore, so
/// `"Intro Tour"` becomes `welcome_screen_intro_tour`.
pub fn identity_key_for(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    format!("{}{}", IDENTITY_KEY_PREFIX, slug)
}

/// On-disk flow definition (TOML)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlowDefinition {
    /// Human readable flow name, used to derive the key when none is given
    pub name: String,
    /// Explicit identity key
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub rtl: bool,
    #[serde(default = "default_true")]
    pub can_skip: bool,
    #[serde(default = "default_true")]
    pub back_button_navigates_pages: bool,
    #[serde(default = "default_true")]
    pub back_button_skips: bool,
    #[serde(default)]
    pub show_back_button_in_bar: bool,
    #[serde(default = "default_true")]
    pub show_previous_button: bool,
    #[serde(default)]
    pub exit_animation: Option<String>,
    #[serde(default)]
    pub pages: Vec<PageSpec>,
}

fn default_true() -> bool {
    true
}

impl FlowDefinition {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read flow definition {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid flow definition {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn identity_key(&self) -> String {
        match &self.key {
            Some(key) => key.clone(),
            None => identity_key_for(&self.name),
        }
    }

    pub fn into_configuration(self) -> Result<FlowConfiguration, FlowError> {
        let mut builder = FlowConfiguration::builder(self.identity_key())
            .pages(self.pages)
            .rtl(self.rtl)
            .can_skip(self.can_skip)
            .back_button_navigates_pages(self.back_button_navigates_pages)
            .back_button_skips(self.back_button_skips)
            .show_back_button_in_bar(self.show_back_button_in_bar)
            .show_previous_button(self.show_previous_button);
        if let Some(animation) = self.exit_animation {
            builder = builder.exit_animation(animation);
        }
        builder.build()
    }
}
