//! Merge orchestration
//!
//! [`MergeAssembler`] drives the whole normalization run: documents are
//! ingested one at a time in caller order, each channel is filtered,
//! customized, and recorded, each programme is normalized through the
//! description miner and genre mapper, and `finalize()` emits the sorted,
//! deduplicated output.
//!
//! Ingestion order matters. Channel accumulation is first-writer-wins, so
//! the first document to supply a channel id owns its record.

pub mod customizer;
pub mod provenance;

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::MergeConfig;
use crate::filters::{FilterSpec, ResolvedFilter};
use crate::mining::{map_genre, DescriptionMiner};
use crate::models::{
    Channel, LocalizedText, MissingChannelReport, NormalizedDocument, Programme, Rating,
    XmltvDocument,
};
use crate::utils::clean_title;
use customizer::ChannelCustomizer;
use provenance::ProvenanceTracker;

pub struct MergeAssembler {
    filter: FilterSpec,
    config: MergeConfig,
    miner: DescriptionMiner,
    customizer: ChannelCustomizer,
    provenance: ProvenanceTracker,
    /// Accumulated channels keyed by output id; the BTreeMap keeps the final
    /// channel order sorted without a separate pass.
    channels: BTreeMap<String, Channel>,
    programmes: Vec<Programme>,
}

impl MergeAssembler {
    pub fn new(resolved: ResolvedFilter, config: MergeConfig) -> Self {
        let mut provenance = ProvenanceTracker::new(config.binding.clone());

        // Every source-bound rule is a provenance request: we expect to see
        // that channel in that document.
        if let FilterSpec::Advanced(rules) = &resolved.spec {
            for (channel_id, rule) in rules {
                if let Some(source) = &rule.source_file {
                    provenance.request(source, channel_id, rule.output_id.as_deref());
                }
            }
        }

        Self {
            filter: resolved.spec,
            miner: DescriptionMiner::new(config.mining.clone()),
            customizer: ChannelCustomizer::new(),
            provenance,
            config,
            channels: BTreeMap::new(),
            programmes: Vec::new(),
        }
    }

    pub fn with_defaults(resolved: ResolvedFilter) -> Self {
        Self::new(resolved, MergeConfig::default())
    }

    /// Ingest one parsed source document under its logical name.
    pub fn ingest(&mut self, source_name: &str, document: &XmltvDocument) {
        let mut channels_accepted = 0usize;
        let mut programmes_accepted = 0usize;

        for channel in &document.channels {
            // Observation is unconditional: the provenance report compares
            // requests against everything the document contained.
            self.provenance.observe(source_name, &channel.id);

            if !self.filter.includes(&channel.id) {
                continue;
            }
            let rule = self.filter.rule(&channel.id);
            if !self.accepted_from(source_name, rule) {
                debug!(
                    "channel '{}' is bound to another source, skipping in '{}'",
                    channel.id, source_name
                );
                continue;
            }

            let (customized, output_id) = self.customizer.customize(channel, rule);
            // First writer wins: a later document never overwrites an
            // already-accepted channel record.
            self.channels.entry(output_id).or_insert(customized);
            channels_accepted += 1;
        }

        for programme in &document.programmes {
            if !self.filter.includes(&programme.channel) {
                continue;
            }
            if !self.accepted_from(source_name, self.filter.rule(&programme.channel)) {
                continue;
            }
            let normalized = self.normalize_programme(programme);
            self.programmes.push(normalized);
            programmes_accepted += 1;
        }

        info!(
            "ingested '{}': {} channels and {} programmes accepted",
            source_name, channels_accepted, programmes_accepted
        );
    }

    /// Missing-channel diagnostics accumulated so far. Informational only;
    /// callers surface it and merge regardless.
    pub fn missing_channel_report(&self) -> Vec<MissingChannelReport> {
        self.provenance.report()
    }

    /// Sort and emit the merged document.
    pub fn finalize(self) -> NormalizedDocument {
        let channels: Vec<Channel> = self.channels.into_values().collect();

        let mut programmes = self.programmes;
        // Stable sort: programmes with equal (start, channel) keep their
        // ingestion order.
        programmes.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| a.channel.cmp(&b.channel))
        });

        info!(
            "finalized merge: {} channels, {} programmes",
            channels.len(),
            programmes.len()
        );

        NormalizedDocument {
            generator_name: self.config.generator.name.clone(),
            generator_url: self.config.generator.url.clone(),
            generated_at: Utc::now(),
            channels,
            programmes,
        }
    }

    /// Source-binding check: a channel bound to a specific document is never
    /// accepted from any other, even on an id collision.
    fn accepted_from(&self, source_name: &str, rule: Option<&crate::filters::ChannelRule>) -> bool {
        match rule.and_then(|r| r.source_file.as_deref()) {
            Some(bound) => self.provenance.binding_matches(bound, source_name),
            None => true,
        }
    }

    fn normalize_programme(&self, programme: &Programme) -> Programme {
        let mut out = programme.clone();

        out.channel = self.customizer.resolve_ref(&programme.channel);
        // Programme poster icons break several PVR frontends; always drop.
        out.icons.clear();

        if let Some(title) = &mut out.title {
            title.value = clean_title(&title.value);
        }

        let mined = out.description.as_ref().map(|desc| {
            let (cleaned, info) = self.miner.mine(&desc.value);
            let cleaned = (!cleaned.is_empty())
                .then(|| LocalizedText {
                    value: cleaned,
                    lang: desc.lang.clone(),
                });
            (cleaned, info)
        });

        if let Some((cleaned, info)) = mined {
            out.description = cleaned;

            if out.categories.is_empty() {
                if let Some(genre) = &info.genre {
                    out.categories
                        .push(LocalizedText::with_lang(map_genre(genre), "en"));
                }
            }
            if out.episode_num.is_none() && out.date.is_none() {
                if let Some(year) = &info.year {
                    out.date = Some(year.clone());
                }
            }
            if !info.credits.is_empty() {
                out.credits = Some(info.credits);
            }
            if out.rating.is_none() {
                if let Some(value) = &info.rating {
                    out.rating = Some(Rating {
                        system: None,
                        value: value.clone(),
                    });
                }
            }
        }

        // Explicit categories are mapped in place onto the canonical
        // vocabulary; mapped genres are published as English.
        for category in &mut out.categories {
            let mapped = map_genre(&category.value);
            if mapped != category.value {
                category.lang = Some("en".to_string());
            }
            category.value = mapped;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters;
    use serde_json::json;

    fn doc(channels: &[&str], programmes: &[(&str, &str, &str)]) -> XmltvDocument {
        XmltvDocument {
            channels: channels.iter().map(|id| Channel::new(*id)).collect(),
            programmes: programmes
                .iter()
                .map(|(start, channel, title)| Programme {
                    start: start.to_string(),
                    channel: channel.to_string(),
                    title: Some(LocalizedText::new(*title)),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_first_writer_wins_on_channel_collision() {
        let payload = json!(["X", "Y", "Z"]);
        let mut assembler =
            MergeAssembler::with_defaults(filters::resolve(Some(&payload)));

        let mut a = doc(&["X", "Y"], &[]);
        a.channels[1].icons.push(crate::models::Icon::new("from-a.png"));
        let mut b = doc(&["Y", "Z"], &[]);
        b.channels[0].icons.push(crate::models::Icon::new("from-b.png"));

        assembler.ingest("a.xml", &a);
        assembler.ingest("b.xml", &b);
        let merged = assembler.finalize();

        let ids: Vec<&str> = merged.channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["X", "Y", "Z"]);
        let y = merged.channels.iter().find(|c| c.id == "Y").unwrap();
        assert_eq!(y.icons[0].src, "from-a.png");
    }

    #[test]
    fn test_programmes_sorted_by_start_then_channel() {
        let mut assembler = MergeAssembler::with_defaults(ResolvedFilter::default());
        assembler.ingest(
            "a.xml",
            &doc(
                &["B", "A"],
                &[
                    ("20240101200000", "B", "late-b"),
                    ("20240101180000", "B", "early-b"),
                    ("20240101200000", "A", "late-a"),
                ],
            ),
        );
        let merged = assembler.finalize();
        let order: Vec<(&str, &str)> = merged
            .programmes
            .iter()
            .map(|p| (p.start.as_str(), p.channel.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("20240101180000", "B"),
                ("20240101200000", "A"),
                ("20240101200000", "B"),
            ]
        );
    }

    #[test]
    fn test_source_binding_rejects_other_documents() {
        let payload = json!({"channels": {"BBC1": "uk.xml"}});
        let mut assembler =
            MergeAssembler::with_defaults(filters::resolve(Some(&payload)));

        // Same id shows up in an unrelated document: must not be accepted.
        assembler.ingest("other.xml", &doc(&["BBC1"], &[("20240101060000", "BBC1", "x")]));
        assembler.ingest("uk.xml", &doc(&["BBC1"], &[("20240101070000", "BBC1", "y")]));
        let merged = assembler.finalize();

        assert_eq!(merged.channels.len(), 1);
        assert_eq!(merged.programmes.len(), 1);
        assert_eq!(merged.programmes[0].start, "20240101070000");
    }

    #[test]
    fn test_missing_requested_channel_is_reported() {
        let payload = json!({"channels": {"BBC1": {"source_file": "uk.xml"}}});
        let mut assembler =
            MergeAssembler::with_defaults(filters::resolve(Some(&payload)));
        assembler.ingest("uk.xml", &doc(&["BBC2"], &[]));

        let report = assembler.missing_channel_report();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].source, "uk.xml");
        assert_eq!(report[0].channels[0].channel_id, "BBC1");

        // Diagnostic only: finalize still succeeds.
        let merged = assembler.finalize();
        assert!(merged.channels.is_empty());
    }

    #[test]
    fn test_output_id_remap_rewrites_programme_refs() {
        let payload = json!({"channels": {"tve1.es": {"output_id": "La1"}}});
        let mut assembler =
            MergeAssembler::with_defaults(filters::resolve(Some(&payload)));
        assembler.ingest(
            "es.xml",
            &doc(&["tve1.es"], &[("20240101100000", "tve1.es", "telediario")]),
        );
        let merged = assembler.finalize();
        assert_eq!(merged.channels[0].id, "La1");
        assert_eq!(merged.programmes[0].channel, "La1");
    }

    #[test]
    fn test_programme_icons_always_stripped() {
        let mut assembler = MergeAssembler::with_defaults(ResolvedFilter::default());
        let mut document = doc(&["A"], &[("20240101100000", "A", "t")]);
        document.programmes[0]
            .icons
            .push(crate::models::Icon::new("poster.png"));
        assembler.ingest("a.xml", &document);
        let merged = assembler.finalize();
        assert!(merged.programmes[0].icons.is_empty());
    }

    #[test]
    fn test_mined_facts_are_synthesized() {
        let mut assembler = MergeAssembler::with_defaults(ResolvedFilter::default());
        let mut document = doc(&["A"], &[("20240101220000", "A", "film")]);
        document.programmes[0].description = Some(LocalizedText::with_lang(
            "Cine/Acción | 2019 | +16\n· Un thriller trepidante en la gran ciudad. Reparto: Juan Pérez",
            "es",
        ));
        assembler.ingest("a.xml", &document);
        let merged = assembler.finalize();

        let p = &merged.programmes[0];
        assert_eq!(p.categories, vec![LocalizedText::with_lang("Action", "en")]);
        assert_eq!(p.date.as_deref(), Some("2019"));
        assert_eq!(p.rating.as_ref().unwrap().value, "+16");
        assert_eq!(
            p.credits.as_ref().unwrap().names_for("actor"),
            Some(&["Juan Pérez".to_string()][..])
        );
        assert_eq!(
            p.description.as_ref().unwrap().value,
            "Un thriller trepidante en la gran ciudad"
        );
        assert_eq!(p.description.as_ref().unwrap().lang.as_deref(), Some("es"));
    }

    #[test]
    fn test_existing_categories_mapped_in_place() {
        let mut assembler = MergeAssembler::with_defaults(ResolvedFilter::default());
        let mut document = doc(&["A"], &[("20240101220000", "A", "doc")]);
        document.programmes[0]
            .categories
            .push(LocalizedText::with_lang("Información/Reportaje", "es"));
        assembler.ingest("a.xml", &document);
        let merged = assembler.finalize();
        assert_eq!(
            merged.programmes[0].categories,
            vec![LocalizedText::with_lang("Documentary", "en")]
        );
    }

    #[test]
    fn test_explicit_rating_is_not_overwritten() {
        let mut assembler = MergeAssembler::with_defaults(ResolvedFilter::default());
        let mut document = doc(&["A"], &[("20240101220000", "A", "t")]);
        document.programmes[0].rating = Some(Rating {
            system: Some("MPAA".to_string()),
            value: "PG-13".to_string(),
        });
        document.programmes[0].description =
            Some(LocalizedText::new("Drama | 2001 | +12"));
        assembler.ingest("a.xml", &document);
        let merged = assembler.finalize();
        assert_eq!(merged.programmes[0].rating.as_ref().unwrap().value, "PG-13");
    }
}
