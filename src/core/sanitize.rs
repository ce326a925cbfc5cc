// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Header text with decorations dropped: keeps letters, digits, `_` and
/// (collapsed) spaces, lowercased. "RTFx ⬆️️" and "rtfx" both become "rtfx".
pub fn header_key(s: &str) -> String {
    let kept: String = s.chars()
        .map(|ch| if ch.is_alphanumeric() || ch == '_' { ch } else { ' ' })
        .collect();
    normalize_ws(&kept).to_lowercase()
}

/// "LS Clean" → "ls_clean"
pub fn dataset_split(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Cells the leaderboard uses for "no value".
pub fn is_placeholder(cell: &str) -> bool {
    let t = cell.trim();
    t.is_empty() || t == "-" || t == "nan"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_key_drops_arrows_and_selectors() {
        assert_eq!(header_key("RTFx \u{2B06}\u{FE0F}\u{FE0F}"), "rtfx");
        assert_eq!(header_key("Average WER \u{2B07}\u{FE0F}"), "average wer");
        assert_eq!(header_key("  LS   Other "), "ls other");
        assert_eq!(header_key("average_wer"), "average_wer");
    }

    #[test]
    fn split_is_snake_lowercase() {
        assert_eq!(dataset_split("LS Clean"), "ls_clean");
        assert_eq!(dataset_split("SPGISpeech"), "spgispeech");
    }

    #[test]
    fn placeholders() {
        for p in ["", " ", "-", "nan"] {
            assert!(is_placeholder(p), "{p:?}");
        }
        assert!(!is_placeholder("0"));
        assert!(!is_placeholder("NaN model"));
    }
}
