//! Source provenance tracking
//!
//! Records which channels were requested from each source document (via
//! advanced-mode bindings) versus which were actually observed there, and
//! reports the difference. Purely diagnostic: a missing channel never stops
//! the merge.

use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

use crate::config::BindingConfig;
use crate::models::{MissingChannel, MissingChannelReport};

#[derive(Debug, Default)]
pub struct ProvenanceTracker {
    binding: BindingConfig,
    /// Bound source name -> channel id -> configured output id (if any).
    requested: BTreeMap<String, BTreeMap<String, Option<String>>>,
    /// Actual document name -> channel ids seen in it.
    observed: HashMap<String, HashSet<String>>,
}

impl ProvenanceTracker {
    pub fn new(binding: BindingConfig) -> Self {
        Self {
            binding,
            ..Default::default()
        }
    }

    /// Record that a channel was requested from a bound source.
    pub fn request(&mut self, source: &str, channel_id: &str, output_id: Option<&str>) {
        self.requested
            .entry(source.to_string())
            .or_default()
            .insert(channel_id.to_string(), output_id.map(str::to_string));
    }

    /// Record that a channel id was seen in a source document. Every channel
    /// counts, filtered or not: the requested side is compared against what
    /// the document actually contained.
    pub fn observe(&mut self, document: &str, channel_id: &str) {
        self.observed
            .entry(document.to_string())
            .or_default()
            .insert(channel_id.to_string());
    }

    /// Does a source binding accept this document?
    ///
    /// A binding matches the exact document name, or the document stem plus
    /// any accepted suffix. Providers are not consistent about whether the
    /// configured name carries an extension.
    pub fn binding_matches(&self, bound: &str, document: &str) -> bool {
        if bound == document {
            return true;
        }
        let stem = match document.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => document,
        };
        self.binding
            .accepted_suffixes
            .iter()
            .any(|suffix| bound == format!("{stem}{suffix}"))
    }

    /// Requested-minus-observed for one bound source, sorted.
    pub fn missing(&self, source: &str) -> Vec<String> {
        let Some(requested) = self.requested.get(source) else {
            return Vec::new();
        };
        requested
            .keys()
            .filter(|id| !self.was_observed(source, id))
            .cloned()
            .collect()
    }

    /// Missing-channel report across every bound source, sorted by source
    /// name and channel id. Sources with nothing missing are omitted.
    pub fn report(&self) -> Vec<MissingChannelReport> {
        let mut reports = Vec::new();
        for (source, requested) in &self.requested {
            let channels: Vec<MissingChannel> = requested
                .iter()
                .filter(|(id, _)| !self.was_observed(source, id))
                .map(|(id, output_id)| MissingChannel {
                    channel_id: id.clone(),
                    output_id: output_id
                        .as_ref()
                        .filter(|out| *out != id)
                        .cloned(),
                })
                .collect();
            if !channels.is_empty() {
                debug!(
                    "source '{}' is missing {} requested channel(s)",
                    source,
                    channels.len()
                );
                reports.push(MissingChannelReport {
                    source: source.clone(),
                    channels,
                });
            }
        }
        reports
    }

    fn was_observed(&self, source: &str, channel_id: &str) -> bool {
        self.observed.iter().any(|(document, ids)| {
            self.binding_matches(source, document) && ids.contains(channel_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ProvenanceTracker {
        ProvenanceTracker::new(BindingConfig::default())
    }

    #[test]
    fn test_missing_channel_is_reported() {
        let mut t = tracker();
        t.request("uk.xml", "BBC1", None);
        t.observe("uk.xml", "BBC2");
        assert_eq!(t.missing("uk.xml"), vec!["BBC1".to_string()]);
    }

    #[test]
    fn test_observed_channel_is_not_missing() {
        let mut t = tracker();
        t.request("uk.xml", "BBC1", None);
        t.observe("uk.xml", "BBC1");
        assert!(t.missing("uk.xml").is_empty());
        assert!(t.report().is_empty());
    }

    #[test]
    fn test_binding_matches_stem_form() {
        let t = tracker();
        assert!(t.binding_matches("uk.xml", "uk.xml"));
        assert!(t.binding_matches("uk.xml", "uk"));
        assert!(!t.binding_matches("uk.xml", "nz.xml"));
    }

    #[test]
    fn test_report_is_sorted_and_annotated() {
        let mut t = tracker();
        t.request("b.xml", "Zeta", Some("Z-Out"));
        t.request("b.xml", "Alpha", None);
        t.request("a.xml", "One", Some("One"));
        t.observe("a.xml", "Unrelated");

        let report = t.report();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].source, "a.xml");
        // Output id equal to the channel id is not worth annotating.
        assert_eq!(report[0].channels[0].output_id, None);
        assert_eq!(report[1].source, "b.xml");
        let ids: Vec<&str> = report[1]
            .channels
            .iter()
            .map(|c| c.channel_id.as_str())
            .collect();
        assert_eq!(ids, vec!["Alpha", "Zeta"]);
        assert_eq!(report[1].channels[1].output_id.as_deref(), Some("Z-Out"));
    }

    #[test]
    fn test_unknown_source_has_nothing_missing() {
        let t = tracker();
        assert!(t.missing("never-bound.xml").is_empty());
    }
}
