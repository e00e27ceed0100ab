//! Static vocabularies shared by the extraction and combination passes

/// Frequently used passwords
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "admin", "user", "login", "welcome", "qwerty", "asdf",
    "master", "root", "guest", "test", "secret", "access", "security",
];

/// Years paired with every base word in the date pass
pub const YEARS: &[&str] = &["2020", "2021", "2022", "2023", "2024", "2025"];

/// Single-character affixes
pub const SPECIAL_CHARS: &[&str] = &["!", "@", "#", "$", "%", "^", "&", "*", "?", "~"];

/// Numeric affixes, most common first
pub const NUMBERS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "00", "01", "02", "03", "10", "11", "12", "99", "123", "321",
];

pub const SEASONS: &[&str] = &["spring", "summer", "autumn", "winter", "fall"];

pub const COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "purple", "orange", "pink", "brown",
];

pub const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdf", "zxcv", "1234", "4321", "abcd", "xyz"];

pub const BRAND_NAMES: &[&str] = &[
    "apple", "google", "microsoft", "facebook", "amazon", "netflix", "spotify",
];

/// Leet-speak substitutions, matched against the lowercased character
pub const LEET_MAP: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('l', '1'),
    ('g', '9'),
    ('z', '2'),
];

/// Substitute for a single character, if the table has one
pub fn leet_substitute(ch: char) -> Option<char> {
    let lower = ch.to_ascii_lowercase();
    LEET_MAP
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| *to)
}

/// Apply the substitution table to every character of `text`
pub fn to_leet_speak(text: &str) -> String {
    text.chars()
        .map(|ch| leet_substitute(ch).unwrap_or(ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leet_speak() {
        assert_eq!(to_leet_speak("alex"), "413x");
        assert_eq!(to_leet_speak("Gizmo"), "912m0");
        assert_eq!(to_leet_speak("STEEL"), "57331");
        assert_eq!(to_leet_speak("buddy!"), "buddy!");
    }

    #[test]
    fn test_vocabularies_have_no_duplicates() {
        for table in [
            COMMON_PASSWORDS,
            YEARS,
            SPECIAL_CHARS,
            NUMBERS,
            SEASONS,
            COLORS,
            KEYBOARD_PATTERNS,
            BRAND_NAMES,
        ] {
            let mut sorted = table.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), table.len());
        }
    }
}
