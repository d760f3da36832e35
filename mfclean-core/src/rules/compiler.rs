//! compiler.rs - Manages the compilation and caching of cleaning rules.
//!
//! This module converts a `CleanConfig` into `CompiledRules`, preserving the
//! declared rule order. Compiled sets are kept in a global, shared cache so
//! repeated engine construction in one process does not recompile patterns.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{NoExpand, Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{CleanConfig, CleanRule, MAX_PATTERN_LENGTH};
use crate::errors::CleanError;

/// A single compiled cleaning rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Literal text substituted for every match.
    pub replace_with: String,
    /// The unique name of the rule.
    pub name: String,
}

impl CompiledRule {
    /// Replaces every match in `text`, returning the new text and the match count.
    pub fn apply_counted(&self, text: &str) -> (String, usize) {
        let occurrences = self.regex.find_iter(text).count();
        if occurrences == 0 {
            return (text.to_string(), 0);
        }
        let replaced = self
            .regex
            .replace_all(text, NoExpand(&self.replace_with))
            .into_owned();
        (replaced, occurrences)
    }

    /// Replaces every match in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.apply_counted(text).0
    }
}

/// The ordered collection of compiled rules.
#[derive(Debug)]
pub struct CompiledRules {
    /// Rules in application order.
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Looks up a compiled rule by name.
    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

lazy_static! {
    /// Process-wide cache of compiled rule sets, keyed by a hash of the `CleanConfig`.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `CleanConfig` to create a cache key.
///
/// Order is significant, so rules are hashed as declared.
fn hash_config(config: &CleanConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `CleanRule`s into `CompiledRules`, keeping their order.
///
/// Disabled rules are skipped. All compilation failures are collected and
/// reported together.
pub fn compile_rules(rules_to_compile: Vec<CleanRule>) -> Result<CompiledRules, CleanError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        if !rule.is_enabled() {
            debug!("Rule '{}' is disabled; skipping.", &rule.name);
            continue;
        }

        let pattern = match rule.pattern.as_ref() {
            Some(pattern) => pattern,
            None => {
                warn!("Rule '{}' has no pattern.", &rule.name);
                compilation_errors.push(CleanError::MissingPattern(rule.name));
                continue;
            }
        };

        if pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(CleanError::PatternLengthExceeded(
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(pattern)
            .multi_line(rule.multiline)
            .size_limit(10 * (1 << 20))
            .build();

        match regex_result {
            Ok(regex) => {
                log::debug!(
                    target: "mfclean_core::rules",
                    "Rule '{}' compiled successfully.",
                    &rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                });
            }
            Err(e) => {
                compilation_errors.push(CleanError::RuleCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(CleanError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}

/// Gets a `CompiledRules` instance from the cache or compiles it if not found.
pub fn get_or_compile_rules(config: &CleanConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_RULES_CACHE
            .read()
            .map_err(|_| anyhow!("compiled rule cache lock poisoned"))?;
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled_arc = Arc::new(compile_rules(config.rules.clone())?);

    COMPILED_RULES_CACHE
        .write()
        .map_err(|_| anyhow!("compiled rule cache lock poisoned"))?
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled_arc)
}
