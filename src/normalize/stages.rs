use crate::patterns;

/// Words kept lower-case in canonical labels.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "and", "at", "by", "for", "in", "of", "on", "or", "the", "to", "via", "with",
];

/// Canonical mixed-case rendering: every word is lower-cased and
/// re-capitalized on its first letter; function words stay lower-case.
/// ASCII casing only, so the result is locale-independent.
pub(crate) fn capitalize_label(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word = String::new();
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            word.push(c);
        } else {
            flush_word(&mut out, &mut word);
            out.push(c);
        }
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    let lower = word.to_ascii_lowercase();
    if FUNCTION_WORDS.contains(&lower.as_str()) {
        out.push_str(&lower);
    } else {
        let mut capitalized = false;
        for c in lower.chars() {
            if !capitalized && c.is_ascii_alphabetic() {
                out.push(c.to_ascii_uppercase());
                capitalized = true;
            } else {
                out.push(c);
            }
        }
    }
    word.clear();
}

/// Restores surname capitalization after a "Mc" prefix, e.g. "Mcdonald" ->
/// "McDonald".
pub(crate) fn fix_mc_case(raw: &str) -> String {
    patterns::MC_PREFIX
        .replace_all(raw, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
        })
        .into_owned()
}

/// Rewrites street-type abbreviation variants ("St.", "AV") to their
/// canonical rendering. Spelled-out street types pass through.
pub(crate) fn clean_street_types(raw: &str) -> String {
    patterns::STREET_TYPES
        .iter()
        .fold(raw.to_string(), |label, pattern| pattern.apply(&label))
}

/// Canonicalizes numeric tokens: ordinal suffixes are lower-cased and
/// zero-padding is stripped.
pub(crate) fn clean_numbers(raw: &str) -> String {
    let label = patterns::ORDINAL_SUFFIX.replace_all(raw, |caps: &regex::Captures<'_>| {
        format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
    });
    patterns::LEADING_ZEROS
        .replace_all(&label, "${1}")
        .into_owned()
}

/// Final cleanup: drops brackets left empty by earlier stages, collapses
/// whitespace runs and trims dangling separators from both ends.
pub(crate) fn clean_label(raw: &str) -> String {
    let label = patterns::EMPTY_BRACKETS.apply(raw);
    let label = patterns::MULTIPLE_WHITESPACE.apply(&label);
    patterns::EDGE_SEPARATORS.apply(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_smashes_shouting_case() {
        assert_eq!(capitalize_label("MAIN STREET STATION"), "Main Street Station");
        assert_eq!(capitalize_label("broadview station"), "Broadview Station");
    }

    #[test]
    fn capitalize_keeps_function_words_lowercase() {
        assert_eq!(capitalize_label("JANE AND FINCH"), "Jane and Finch");
        assert_eq!(capitalize_label("UNIVERSITY OF TORONTO"), "University of Toronto");
    }

    #[test]
    fn capitalize_handles_punctuated_words() {
        assert_eq!(capitalize_label("D'ARCY ST."), "D'Arcy St.");
    }

    #[test]
    fn mc_prefix_recovers_surname_casing() {
        assert_eq!(fix_mc_case("Mcdonald"), "McDonald");
        assert_eq!(fix_mc_case("Mccowan Station"), "McCowan Station");
        assert_eq!(fix_mc_case("Machine Shop"), "Machine Shop");
    }

    #[test]
    fn numbers_lowercase_ordinals_and_strip_zero_padding() {
        assert_eq!(clean_numbers("3Rd Street"), "3rd Street");
        assert_eq!(clean_numbers("Route 007"), "Route 7");
        assert_eq!(clean_numbers("Platform 10"), "Platform 10");
    }

    #[test]
    fn street_types_canonicalize_abbreviation_variants() {
        assert_eq!(clean_street_types("Main St."), "Main St");
        assert_eq!(clean_street_types("Spadina Av"), "Spadina Ave");
        assert_eq!(clean_street_types("Lake Shore Blvd."), "Lake Shore Blvd");
        assert_eq!(clean_street_types("Main Street"), "Main Street");
    }

    #[test]
    fn label_cleanup_trims_dangling_separators() {
        assert_eq!(clean_label("  Downtown -  "), "Downtown");
        assert_eq!(clean_label("Kennedy ()"), "Kennedy");
        assert_eq!(clean_label("- Queen / -"), "Queen");
    }
}
