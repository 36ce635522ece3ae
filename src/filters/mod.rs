//! Channel filter resolution
//!
//! Turns a raw filter payload into a [`FilterSpec`]. The payload comes from
//! whatever file or endpoint the caller loaded it from; this module only
//! cares about its shape. Malformed entries are skipped with a warning, not
//! fatal: the merge always proceeds with whatever resolved cleanly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Per-channel rule in advanced mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelRule {
    /// When set, the channel is only accepted from this source document.
    pub source_file: Option<String>,
    /// Identifier the channel is published under in the merged output.
    pub output_id: Option<String>,
    /// Replaces every icon on the channel with this one.
    pub icon: Option<String>,
}

/// Which channels get merged, and under which rules.
///
/// A tagged variant instead of the flag-plus-parallel-maps shape: an
/// accept-all filter cannot also carry rules, and a simple set cannot carry
/// source bindings.
#[derive(Debug, Clone, Default)]
pub enum FilterSpec {
    /// No filtering: every channel from every source is accepted.
    #[default]
    AcceptAll,
    /// Inclusion is plain set membership.
    Simple(HashSet<String>),
    /// Per-channel rules with optional source bindings and overrides.
    Advanced(HashMap<String, ChannelRule>),
}

impl FilterSpec {
    pub fn includes(&self, channel_id: &str) -> bool {
        match self {
            FilterSpec::AcceptAll => true,
            FilterSpec::Simple(ids) => ids.contains(channel_id),
            FilterSpec::Advanced(rules) => rules.contains_key(channel_id),
        }
    }

    pub fn rule(&self, channel_id: &str) -> Option<&ChannelRule> {
        match self {
            FilterSpec::Advanced(rules) => rules.get(channel_id),
            _ => None,
        }
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self, FilterSpec::Advanced(_))
    }

    /// Number of channel identifiers the filter names explicitly.
    pub fn len(&self) -> usize {
        match self {
            FilterSpec::AcceptAll => 0,
            FilterSpec::Simple(ids) => ids.len(),
            FilterSpec::Advanced(rules) => rules.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolved filter payload: the channel spec plus the source-document table.
///
/// The source table maps a logical document name to its fetch location; the
/// engine never fetches anything itself and only uses the names as
/// provenance keys, but callers that do the downloading want the URLs back.
#[derive(Debug, Clone, Default)]
pub struct ResolvedFilter {
    pub spec: FilterSpec,
    pub sources: HashMap<String, String>,
}

/// Resolve a JSON filter payload.
///
/// Accepted shapes:
/// - absent / null / empty -> accept-all
/// - `["id1", "id2"]` -> simple
/// - `{"channels": ["id1", "id2"]}` -> simple
/// - `{"channels": {"id": "source.xml" | {rule...}}}` -> advanced
/// - any other object whose values are all strings -> simple over the values
///
/// A top-level `"sources"` table (name -> url, or name -> `{"url": ...}`) is
/// resolved alongside whichever channel shape is present.
pub fn resolve(payload: Option<&Value>) -> ResolvedFilter {
    let value = match payload {
        Some(v) if !v.is_null() => v,
        _ => {
            debug!("no filter payload, accepting all channels");
            return ResolvedFilter::default();
        }
    };

    let mut resolved = ResolvedFilter::default();

    if let Some(obj) = value.as_object() {
        if let Some(sources) = obj.get("sources") {
            resolved.sources = resolve_sources(sources);
        }
    }

    resolved.spec = match value {
        Value::Array(items) => resolve_id_list(items),
        Value::Object(obj) => match obj.get("channels") {
            Some(Value::Array(items)) => resolve_id_list(items),
            Some(Value::Object(rules)) => resolve_rules(rules),
            Some(other) => {
                warn!("unrecognized 'channels' shape ({other}), accepting all channels");
                FilterSpec::AcceptAll
            }
            None => {
                // No 'channels' key: accept an object whose values are all
                // channel id strings.
                let values: Vec<&Value> =
                    obj.iter().filter(|(k, _)| *k != "sources").map(|(_, v)| v).collect();
                if !values.is_empty() && values.iter().all(|v| v.is_string()) {
                    FilterSpec::Simple(
                        values
                            .iter()
                            .filter_map(|v| v.as_str())
                            .map(str::to_string)
                            .collect(),
                    )
                } else {
                    if resolved.sources.is_empty() {
                        warn!("filter payload has no usable channel list, accepting all channels");
                    }
                    FilterSpec::AcceptAll
                }
            }
        },
        other => {
            warn!("unrecognized filter payload ({other}), accepting all channels");
            FilterSpec::AcceptAll
        }
    };

    log_resolution(&resolved.spec);
    resolved
}

/// Resolve a plain-text payload: one channel id per line, blank lines
/// ignored. Payloads that fail JSON parsing get routed here by callers.
pub fn resolve_text(content: &str) -> ResolvedFilter {
    let ids: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let spec = if ids.is_empty() {
        FilterSpec::AcceptAll
    } else {
        FilterSpec::Simple(ids)
    };
    log_resolution(&spec);
    ResolvedFilter {
        spec,
        sources: HashMap::new(),
    }
}

fn resolve_id_list(items: &[Value]) -> FilterSpec {
    let mut ids = HashSet::new();
    for item in items {
        match item.as_str() {
            Some(id) if !id.trim().is_empty() => {
                ids.insert(id.trim().to_string());
            }
            _ => warn!("skipping non-string channel filter entry: {item}"),
        }
    }
    if ids.is_empty() {
        FilterSpec::AcceptAll
    } else {
        FilterSpec::Simple(ids)
    }
}

fn resolve_rules(entries: &serde_json::Map<String, Value>) -> FilterSpec {
    let mut rules = HashMap::new();
    for (channel_id, entry) in entries {
        match entry {
            // String shorthand binds the channel to one source document.
            Value::String(source) => {
                rules.insert(
                    channel_id.clone(),
                    ChannelRule {
                        source_file: Some(source.clone()),
                        ..Default::default()
                    },
                );
            }
            Value::Object(_) => match serde_json::from_value::<ChannelRule>(entry.clone()) {
                Ok(rule) => {
                    rules.insert(channel_id.clone(), rule);
                }
                Err(e) => warn!("skipping invalid rule for channel '{channel_id}': {e}"),
            },
            other => {
                warn!("skipping invalid rule for channel '{channel_id}': expected string or object, got {other}");
            }
        }
    }
    FilterSpec::Advanced(rules)
}

fn resolve_sources(value: &Value) -> HashMap<String, String> {
    let mut sources = HashMap::new();
    let Some(entries) = value.as_object() else {
        warn!("'sources' is not an object, ignoring");
        return sources;
    };
    for (name, entry) in entries {
        match entry {
            Value::String(url) => {
                sources.insert(name.clone(), url.clone());
            }
            // Older payloads wrap the URL in an object with a compression
            // flag; compression is auto-detected downstream, so only the URL
            // survives.
            Value::Object(obj) => match obj.get("url").and_then(|u| u.as_str()) {
                Some(url) => {
                    sources.insert(name.clone(), url.to_string());
                }
                None => warn!("source '{name}' has no url, skipping"),
            },
            _ => warn!("invalid source configuration for '{name}', skipping"),
        }
    }
    debug!("resolved {} source configurations", sources.len());
    sources
}

fn log_resolution(spec: &FilterSpec) {
    match spec {
        FilterSpec::AcceptAll => debug!("filter resolved: accept-all"),
        FilterSpec::Simple(ids) => debug!("filter resolved: {} channel ids", ids.len()),
        FilterSpec::Advanced(rules) => {
            debug!("filter resolved: {} channel rules", rules.len())
        }
    }
}
