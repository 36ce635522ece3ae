//! Free-text description mining
//!
//! EPG providers pack genre, year, age rating, and credits into the prose
//! description instead of the structured XMLTV fields. This module pulls
//! those facts back out with ordered, line-local heuristics and returns the
//! remaining prose as a cleaned description.
//!
//! The rules are evaluated per line, first match wins, in this order:
//! metadata-label lines, pipe-delimited header lines, bullet prose lines.
//! That ordering is load-bearing: a line can satisfy several patterns at
//! once, and the heuristics favor precision (drop an ambiguous line) over
//! recall.

pub mod genre_map;
pub(crate) mod genre_table;

pub use genre_map::map_genre;

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::config::MiningConfig;
use crate::models::{Credits, ExtractedInfo};

/// Bullet marker some providers prefix content lines with.
const BULLET: char = '·';

/// Labels that mark a line as technical metadata rather than prose.
const METADATA_LABELS: &[&str] = &[
    "país:",
    "country:",
    "título original:",
    "original title:",
    "dirección:",
    "direction:",
    "reparto:",
    "cast:",
    "guion:",
    "guión:",
    "script:",
    "música:",
    "music:",
    "producción:",
    "production:",
    "productora:",
    "producer:",
    "productor ejecutivo:",
    "realización:",
    "realizacion:",
    "presenta:",
    "presents:",
];

/// Plausible production year inside a pipe-delimited header field.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid year regex"));

/// Trailing vote-count annotation appended by rating aggregators.
static VOTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:votos|votes):\s*\d+.*$").expect("valid votes regex")
});

/// Metadata label embedded mid-line in otherwise descriptive content.
static EMBEDDED_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:realizaci[oó]n:|producci[oó]n:|productora:|productor ejecutivo:",
        r"|gui[oó]n:|m[uú]sica:|reparto:|cast:|direcci[oó]n:|direction:)"
    ))
    .expect("valid embedded label regex")
});

/// Credit label -> captured name list. The capture runs to the end of the
/// sentence: it stops at a period followed by an uppercase letter so that
/// abbreviated names survive.
static CREDIT_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    let capture = r"\s*([^.]*(?:\.[^A-Z][^.]*)*)";
    [
        ("director", r"(?i)(?:direcci[oó]n|direction):"),
        ("presenter", r"(?i)(?:presenta|presents):"),
        ("actor", r"(?i)(?:reparto|cast):"),
        ("producer", r"(?i)(?:producci[oó]n|production):"),
    ]
    .into_iter()
    .map(|(role, label)| {
        (
            role,
            Regex::new(&format!("{label}{capture}")).expect("valid credit regex"),
        )
    })
    .collect()
});

/// Line-oriented heuristic extractor for description bodies.
pub struct DescriptionMiner {
    config: MiningConfig,
}

impl DescriptionMiner {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    /// Mine a raw description body.
    ///
    /// Returns the cleaned prose (possibly empty, which is a valid result
    /// meaning "no usable description") and whatever facts were extracted.
    pub fn mine(&self, text: &str) -> (String, ExtractedInfo) {
        let mut info = ExtractedInfo::default();
        let mut kept: Vec<String> = Vec::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let (bullet, content) = match line.strip_prefix(BULLET) {
                Some(rest) => (true, rest.trim()),
                None => (false, line),
            };

            // Rule 1: metadata-label lines feed credits and never reach the
            // body. Bare lines with a label mid-line are metadata too; we
            // still harvest any credit labels before discarding them.
            if starts_with_label(content) || (!bullet && contains_label(content)) {
                extract_credits(content, &mut info.credits);
                trace!("dropped metadata line: {content}");
                continue;
            }

            // Rule 2: pipe-delimited header (pipe plus at least one digit).
            if content.contains('|') && content.chars().any(|c| c.is_ascii_digit()) {
                parse_pipe_header(content, &mut info);
                continue;
            }

            // Rule 3: bullet prose. Anything else is noise.
            if !bullet {
                continue;
            }
            if content.chars().count() < self.config.min_content_length {
                continue;
            }

            let mut content = content.to_string();
            if let Some(m) = EMBEDDED_LABEL_RE.find(&content) {
                // The truncated tail may still carry credits.
                let tail = content[m.start()..].to_string();
                extract_credits(&tail, &mut info.credits);
                content.truncate(m.start());
                content = content
                    .trim_end()
                    .trim_end_matches([';', '.', ','])
                    .trim_end()
                    .to_string();
            }
            let content = VOTES_RE.replace(&content, "").trim().to_string();
            if !content.is_empty() {
                kept.push(content);
            }
        }

        let cleaned = kept.join(" ");
        let cleaned = VOTES_RE.replace(&cleaned, "").trim().to_string();
        (cleaned, info)
    }
}

impl Default for DescriptionMiner {
    fn default() -> Self {
        Self::new(MiningConfig::default())
    }
}

fn starts_with_label(content: &str) -> bool {
    let lowered = content.to_lowercase();
    METADATA_LABELS.iter().any(|label| lowered.starts_with(label))
}

fn contains_label(content: &str) -> bool {
    let lowered = content.to_lowercase();
    METADATA_LABELS.iter().any(|label| lowered.contains(label))
}

fn extract_credits(text: &str, credits: &mut Credits) {
    for (role, re) in CREDIT_RES.iter() {
        if let Some(m) = re.captures(text).and_then(|caps| caps.get(1)) {
            for name in m.as_str().split(',') {
                let name = name.trim();
                if !name.is_empty() {
                    credits.add(role, name);
                }
            }
        }
    }
}

/// Parse one `Genre | Year | Rating`-style header line.
///
/// All three facts are first-match-wins across the whole description: a
/// second header line never overrides an already-captured value.
fn parse_pipe_header(line: &str, info: &mut ExtractedInfo) {
    for (i, part) in line.split('|').enumerate() {
        let part = part.trim();
        if info.year.is_none() {
            if let Some(m) = YEAR_RE.find(part) {
                info.year = Some(m.as_str().to_string());
            }
        }
        if info.rating.is_none()
            && part.contains('+')
            && part.chars().any(|c| c.is_ascii_digit())
        {
            info.rating = Some(part.to_string());
        }
        if i == 0
            && info.genre.is_none()
            && !part.is_empty()
            && !part.contains('+')
            && !part.chars().any(|c| c.is_ascii_digit())
        {
            info.genre = Some(part.to_string());
        }
    }
}
