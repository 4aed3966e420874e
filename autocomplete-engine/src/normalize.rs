//! Text normalization used for option matching

use unicode_normalization::UnicodeNormalization;

/// Apply NFKC normalization to text.
///
/// Folds compatibility forms so that full-width input typed through an IME
/// (`Ｆｒａｎｃｅ`, `１２`) matches the half-width text stored in option lists.
pub fn normalize_nfkc(text: &str) -> String {
    text.nfkc().collect()
}

/// Key used for case-insensitive matching: NFKC followed by lowercasing.
pub fn fold_for_match(text: &str) -> String {
    normalize_nfkc(text).to_lowercase()
}

/// Strip `prefix` from the start of `text`, comparing lowercased forms.
///
/// Returns the rest of `text` after the shortest leading run of characters
/// whose lowercase form equals the lowercased prefix. Characters that
/// lowercase to several code points (`İ` to `i̇`) are matched whole.
pub fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let target: String = prefix.chars().flat_map(char::to_lowercase).collect();
    if target.is_empty() {
        return Some(text);
    }
    let mut folded = String::with_capacity(target.len());
    for (i, ch) in text.char_indices() {
        folded.extend(ch.to_lowercase());
        if !target.starts_with(folded.as_str()) {
            return None;
        }
        if folded.len() == target.len() {
            return Some(&text[i + ch.len_utf8()..]);
        }
    }
    None
}

/// Case-insensitive prefix test on lowercased text, without NFKC.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    strip_prefix_ignore_case(text, prefix).is_some()
}
