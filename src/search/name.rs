//! Case- and accent-insensitive card name matching.

/// Fold a character for name comparison: ASCII letters become upper case
/// and the accented vowels the keyword box cannot type become plain
/// `E`/`I`.
fn fold(c: char) -> char {
    match c {
        'a'..='z' => c.to_ascii_uppercase(),
        '\u{e8}'..='\u{eb}' => 'E',
        '\u{ee}'..='\u{ef}' => 'I',
        _ => c,
    }
}

/// Whether `haystack` contains `needle`, ignoring ASCII case and folding
/// a few accented vowels.
///
/// An empty needle always matches; a missing haystack never matches a
/// non-empty needle.
///
/// ```
/// use ccg_deckbuilder::search::card_name_contains;
///
/// assert!(card_name_contains(Some("Blue-Eyes White Dragon"), "blue"));
/// assert!(card_name_contains(Some("Pokémon"), "POKEMON"));
/// assert!(!card_name_contains(None, "x"));
/// ```
#[must_use]
pub fn card_name_contains(haystack: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let Some(haystack) = haystack else {
        return false;
    };
    let hay: Vec<char> = haystack.chars().map(fold).collect();
    let pattern: Vec<char> = needle.chars().map(fold).collect();

    let mut i = 0;
    let mut j = 0;
    while i < hay.len() {
        if hay[i] == pattern[j] {
            j += 1;
            if j == pattern.len() {
                return true;
            }
        } else {
            i -= j;
            j = 0;
        }
        i += 1;
    }
    false
}
