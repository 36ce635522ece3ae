//! Per-channel customization
//!
//! Rewrites an accepted channel record for the merged output: identifier
//! override, icon override, and unconditional display-name stripping (locale
//! display names never propagate; the consumer supplies its own). Identifier
//! remaps are recorded so programme references get rewritten consistently.

use std::collections::HashMap;

use crate::filters::ChannelRule;
use crate::models::{Channel, Icon};

#[derive(Debug, Default)]
pub struct ChannelCustomizer {
    remap: HashMap<String, String>,
}

impl ChannelCustomizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the stored channel and its effective output identifier.
    pub fn customize(&mut self, channel: &Channel, rule: Option<&ChannelRule>) -> (Channel, String) {
        let output_id = rule
            .and_then(|r| r.output_id.clone())
            .unwrap_or_else(|| channel.id.clone());

        let icons = match rule.and_then(|r| r.icon.as_deref()) {
            // An icon override discards the originals and emits exactly one.
            Some(src) => vec![Icon::new(src)],
            None => channel.icons.clone(),
        };

        if output_id != channel.id {
            self.remap.insert(channel.id.clone(), output_id.clone());
        }

        let customized = Channel {
            id: output_id.clone(),
            display_names: Vec::new(),
            icons,
            extra: channel.extra.clone(),
        };
        (customized, output_id)
    }

    /// Rewrite a programme's channel reference through the recorded remaps.
    pub fn resolve_ref(&self, channel_id: &str) -> String {
        self.remap
            .get(channel_id)
            .cloned()
            .unwrap_or_else(|| channel_id.to_string())
    }
}
