use regex::Regex;
use std::sync::LazyLock;

/// Trailing `- Stag. N Ep. M` season markers some Italian providers append.
static STAG_EP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*-\s*Stag\.\s*\d+\s*Ep\.\s*\d+\s*$").expect("valid title regex")
});

/// Trailing `T1 E5` style season/episode markers.
static SEASON_EP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*T\d+\s*E\d+\s*$").expect("valid title regex"));

/// Clean a programme title: season/episode markers belong in episode-num,
/// not the title.
pub fn clean_title(title: &str) -> String {
    let title = title.trim();
    let title = STAG_EP_RE.replace(title, "");
    let title = SEASON_EP_RE.replace(&title, "");
    title.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("I Delitti del BarLume - Stag. 3 Ep. 2"), "I Delitti del BarLume");
        assert_eq!(clean_title("La Casa de Papel T2 E8"), "La Casa de Papel");
        assert_eq!(clean_title("  Telediario  "), "Telediario");
        assert_eq!(clean_title("Normal Title"), "Normal Title");
    }
}
