// mfclean-core/src/engines/regex_engine.rs
//! A `CleaningEngine` implementation that applies the compiled rules as a
//! left fold: each rule's output is the next rule's input.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use crate::config::{CleanConfig, RuleSummaryItem};
use crate::engine::CleaningEngine;
use crate::rules::compiler::{get_or_compile_rules, CompiledRules};

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: Arc<CompiledRules>,
    config: CleanConfig,
}

impl RegexEngine {
    pub fn new(config: CleanConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile cleaning rules for RegexEngine")?;

        Ok(Self {
            compiled_rules,
            config,
        })
    }

    /// Builds an engine over the embedded marker rules.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(CleanConfig::load_default_rules()?)
    }
}

impl CleaningEngine for RegexEngine {
    fn clean(&self, content: &str, source_id: &str) -> Result<(String, Vec<RuleSummaryItem>)> {
        let mut summary = Vec::new();

        let cleaned = self
            .compiled_rules
            .rules
            .iter()
            .fold(content.to_string(), |text, rule| {
                let (next, occurrences) = rule.apply_counted(&text);
                if occurrences > 0 {
                    debug!(
                        "Rule '{}' matched {} time(s) in {}.",
                        rule.name, occurrences, source_id
                    );
                    summary.push(RuleSummaryItem {
                        rule_name: rule.name.clone(),
                        occurrences,
                    });
                }
                next
            });

        debug!(
            "Cleaned {}. Original length: {}, cleaned length: {}",
            source_id,
            content.len(),
            cleaned.len()
        );
        Ok((cleaned, summary))
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_rules(&self) -> &CleanConfig {
        &self.config
    }
}
