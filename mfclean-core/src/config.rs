//! Configuration management for `mfclean-core`.
//!
//! This module defines the data structures for cleaning rules. The rule table
//! ships embedded in the binary and is parsed from YAML at startup; it is
//! validated on load so a broken table fails loudly instead of silently
//! skipping markers.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A single pattern-to-replacement substitution step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CleanRule {
    /// Unique identifier for the rule (e.g., "dunder_marker").
    pub name: String,
    /// Human-readable description of what the rule removes.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// Literal replacement text. `$` is not expanded.
    pub replace_with: String,
    /// If true, `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Hash for CleanRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.pattern.hash(state);
        self.replace_with.hash(state);
        self.multiline.hash(state);
        self.enabled.hash(state);
    }
}

impl Default for CleanRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: None,
            replace_with: String::new(),
            multiline: true,
            enabled: None,
        }
    }
}

impl CleanRule {
    /// Rules are active unless explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// The ordered rule table.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Hash)]
pub struct CleanConfig {
    /// Rules in application order.
    pub rules: Vec<CleanRule>,
}

/// How many times a rule fired during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
}

impl CleanConfig {
    /// Loads the built-in marker rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        Self::from_yaml_str(default_yaml).context("Failed to parse default rules")
    }

    /// Parses and validates a rule table.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: CleanConfig = serde_yml::from_str(text)?;
        validate_rules(&config.rules)?;
        debug!("Loaded {} rules.", config.rules.len());
        Ok(config)
    }

    /// Returns the rule with the given name, if present.
    pub fn rule(&self, name: &str) -> Option<&CleanRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Returns a copy of the table holding only the named rule.
    ///
    /// Used to exercise a single rule in isolation.
    pub fn only(&self, name: &str) -> Result<Self> {
        let rule = self
            .rule(name)
            .cloned()
            .ok_or_else(|| anyhow!("Rule '{}' does not exist.", name))?;
        Ok(Self { rules: vec![rule] })
    }
}

/// Validates rule integrity: unique non-empty names, compilable patterns.
fn validate_rules(rules: &[CleanRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        let pattern = match &rule.pattern {
            Some(p) => p,
            None => {
                errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                continue;
            }
        };

        if pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        if let Err(e) = Regex::new(pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
        }
    }

    if !errors.is_empty() {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    } else {
        Ok(())
    }
}
