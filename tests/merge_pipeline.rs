//! End-to-end merge pipeline tests: XMLTV text in, normalized document out.

use serde_json::json;
use xmltv_merge::{filters, ingest, MergeAssembler};

const SOURCE_A: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tv>
  <channel id="X">
    <display-name lang="en">Channel X</display-name>
    <icon src="http://a.example/x.png"/>
  </channel>
  <channel id="Y">
    <display-name lang="en">Channel Y from A</display-name>
    <icon src="http://a.example/y.png"/>
  </channel>
  <programme start="20240101200000 +0000" stop="20240101210000 +0000" channel="X">
    <title lang="es">La gran noche</title>
    <desc lang="es">Cine/Acción | 2019 | +16
&#183; Un agente retirado vuelve al servicio para un &#250;ltimo encargo. Reparto: Juan P&#233;rez, Ana L&#243;pez
Direcci&#243;n: Luis Garc&#237;a</desc>
    <icon src="http://a.example/poster.jpg"/>
  </programme>
  <programme start="20240101180000 +0000" stop="20240101200000 +0000" channel="Y">
    <title>Evening News</title>
    <category lang="es">Informaci&#243;n/Informativo</category>
  </programme>
</tv>"#;

const SOURCE_B: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tv>
  <channel id="Y">
    <display-name>Channel Y from B</display-name>
    <icon src="http://b.example/y.png"/>
  </channel>
  <channel id="Z">
    <display-name>Channel Z</display-name>
  </channel>
  <programme start="20240101180000 +0000" stop="20240101190000 +0000" channel="Z">
    <title>Documentary Hour</title>
  </programme>
  <programme start="20240101170000 +0000" stop="20240101180000 +0000" channel="Y">
    <title>Afternoon Show</title>
  </programme>
</tv>"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn merge_simple() -> xmltv_merge::NormalizedDocument {
    init_tracing();
    let a = ingest::parse_xmltv(SOURCE_A).unwrap();
    let b = ingest::parse_xmltv(SOURCE_B).unwrap();
    let payload = json!(["X", "Y", "Z"]);

    let mut assembler = MergeAssembler::with_defaults(filters::resolve(Some(&payload)));
    assembler.ingest("a.xml", &a);
    assembler.ingest("b.xml", &b);
    assembler.finalize()
}

#[test]
fn merges_channels_first_writer_wins() {
    let merged = merge_simple();

    let ids: Vec<&str> = merged.channels.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["X", "Y", "Z"]);

    // Y appeared in both documents; the record from a.xml (ingested first)
    // is retained, untouched by b.xml.
    let y = merged.channels.iter().find(|c| c.id == "Y").unwrap();
    assert_eq!(y.icons[0].src, "http://a.example/y.png");

    // Display names never propagate to the output.
    assert!(merged.channels.iter().all(|c| c.display_names.is_empty()));
}

#[test]
fn programmes_are_sorted_and_normalized() {
    let merged = merge_simple();

    // Ordering invariant: (start, channel) is non-decreasing.
    let keys: Vec<(&str, &str)> = merged
        .programmes
        .iter()
        .map(|p| (p.start.as_str(), p.channel.as_str()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(merged.programmes.len(), 4);

    // The mined programme got its facts promoted into structured fields.
    let film = merged
        .programmes
        .iter()
        .find(|p| p.channel == "X")
        .unwrap();
    assert_eq!(film.categories[0].value, "Action");
    assert_eq!(film.categories[0].lang.as_deref(), Some("en"));
    assert_eq!(film.date.as_deref(), Some("2019"));
    assert_eq!(film.rating.as_ref().unwrap().value, "+16");
    let credits = film.credits.as_ref().unwrap();
    assert_eq!(
        credits.names_for("actor"),
        Some(&["Juan Pérez".to_string(), "Ana López".to_string()][..])
    );
    assert_eq!(
        credits.names_for("director"),
        Some(&["Luis García".to_string()][..])
    );
    assert_eq!(
        film.description.as_ref().unwrap().value,
        "Un agente retirado vuelve al servicio para un último encargo"
    );
    // Programme poster icons are always removed.
    assert!(film.icons.is_empty());

    // The explicit Spanish category got mapped in place.
    let news = merged
        .programmes
        .iter()
        .find(|p| p.channel == "Y" && p.start.starts_with("20240101180000"))
        .unwrap();
    assert_eq!(news.categories[0].value, "News");
}

#[test]
fn merge_is_deterministic() {
    let first = merge_simple();
    let second = merge_simple();

    let order =
        |d: &xmltv_merge::NormalizedDocument| -> (Vec<String>, Vec<(String, String)>) {
            (
                d.channels.iter().map(|c| c.id.clone()).collect(),
                d.programmes
                    .iter()
                    .map(|p| (p.start.clone(), p.channel.clone()))
                    .collect(),
            )
        };
    assert_eq!(order(&first), order(&second));
    assert_eq!(first.channels, second.channels);
    assert_eq!(first.programmes, second.programmes);
}

#[test]
fn advanced_mode_binds_sources_and_remaps_ids() {
    let a = ingest::parse_xmltv(SOURCE_A).unwrap();
    let b = ingest::parse_xmltv(SOURCE_B).unwrap();
    let payload = json!({
        "sources": {
            "a.xml": "https://epg.example/a.xml.gz",
            "b.xml": "https://epg.example/b.xml",
        },
        "channels": {
            // Y only from b.xml, renamed in the output.
            "Y": {"source_file": "b.xml", "output_id": "Y-HD", "icon": "http://cdn/y.png"},
            // Requested from a.xml but that document does not carry it.
            "BBC1": {"source_file": "a.xml", "output_id": "BBC One"},
            "X": {},
        }
    });

    let resolved = filters::resolve(Some(&payload));
    assert_eq!(resolved.sources.len(), 2);

    let mut assembler = MergeAssembler::with_defaults(resolved);
    assembler.ingest("a.xml", &a);
    assembler.ingest("b.xml", &b);

    let report = assembler.missing_channel_report();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].source, "a.xml");
    assert_eq!(report[0].channels[0].channel_id, "BBC1");
    assert_eq!(report[0].channels[0].output_id.as_deref(), Some("BBC One"));

    let merged = assembler.finalize();
    let ids: Vec<&str> = merged.channels.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["X", "Y-HD"]);

    // Y's record comes from b.xml despite a.xml being ingested first, and
    // carries the configured icon override.
    let y = merged.channels.iter().find(|c| c.id == "Y-HD").unwrap();
    assert_eq!(y.icons.len(), 1);
    assert_eq!(y.icons[0].src, "http://cdn/y.png");

    // Only Y programmes from b.xml survive, with the reference rewritten.
    let y_programmes: Vec<_> = merged
        .programmes
        .iter()
        .filter(|p| p.channel == "Y-HD")
        .collect();
    assert_eq!(y_programmes.len(), 1);
    assert_eq!(y_programmes[0].start, "20240101170000 +0000");
}

#[test]
fn missing_provenance_does_not_block_finalize() {
    let payload = json!({"channels": {"BBC1": {"source_file": "uk.xml"}}});
    let mut assembler = MergeAssembler::with_defaults(filters::resolve(Some(&payload)));
    assembler.ingest(
        "uk.xml",
        &ingest::parse_xmltv(r#"<tv><channel id="BBC2"/></tv>"#).unwrap(),
    );

    let report = assembler.missing_channel_report();
    assert_eq!(report[0].channels[0].channel_id, "BBC1");

    let merged = assembler.finalize();
    assert!(merged.channels.is_empty());
    assert!(merged.programmes.is_empty());
}

#[test]
fn channel_inventory_lists_all_documents() {
    let a = ingest::parse_xmltv(SOURCE_A).unwrap();
    let b = ingest::parse_xmltv(SOURCE_B).unwrap();
    let listings = ingest::list_available_channels([("a.xml", &a), ("b.xml", &b)]);

    let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["X", "Y", "Z"]);

    let y = listings.iter().find(|l| l.id == "Y").unwrap();
    assert_eq!(y.source, "b.xml");
    assert_eq!(y.display_names, vec!["Channel Y from B".to_string()]);
}
