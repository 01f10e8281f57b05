use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A compiled match-and-optionally-replace rule. Matching is always
/// case-insensitive; the replacement template may reference capture groups
/// by position. Patterns are built once into lazy statics and shared
/// read-only across concurrent invocations.
pub struct Pattern {
    regex: Regex,
    replacement: &'static str,
}

impl Pattern {
    /// Compiles a rule. A malformed expression aborts at first use: pattern
    /// construction is a startup concern, never a per-record one.
    fn new(expression: &str, replacement: &'static str) -> Self {
        let regex = RegexBuilder::new(expression)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("pattern '{expression}' must compile: {e}"));
        Self { regex, replacement }
    }

    /// Applies the rule globally, substituting every match.
    pub fn apply(&self, raw: &str) -> String {
        self.regex.replace_all(raw, self.replacement).into_owned()
    }

    pub fn is_match(&self, raw: &str) -> bool {
        self.regex.is_match(raw)
    }
}

/// Whole-word-bounded removal of a boilerplate phrase, keeping the boundary
/// characters themselves.
fn clean_words(phrase: &str) -> Pattern {
    Pattern::new(
        &format!(r"(^|\W){}(\W|$)", regex::escape(phrase)),
        "${1}${2}",
    )
}

/// Full-string marker for trips that never carry riders, with or without
/// the parentheses some source feeds wrap around it.
pub static NOT_IN_SERVICE: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(r"^\(?not in service\)?$", ""));

/// A headsign whose entire text is one of the four cardinal directions.
pub static DIRECTION_ONLY: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(r"^(?:east|west|north|south)$", ""));

/// Line-designator prefix marking a line-level label rather than a
/// destination.
pub const LINE_PREFIX: &str = "L ";

/// Compound structural trim for trip headsigns: optional direction-word
/// prefix, optional numeric route code (with optional single-letter
/// suffix), then an optional "to"/"towards" marker after which only the
/// destination text is kept. Either the whole shape matches or the label
/// passes through verbatim.
pub static STRUCTURAL_TRIM: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(
        r"^(?:[a-z]+ - )?(?:\d+(?:/\d+)?)?(?:[a-z] )?(?:(?:.*\s)?(?:towards|to))? (.*)$",
        "${1}",
    )
});

/// Trailing "extra fare required ..." clause, with an optional " -" lead-in.
pub static ENDS_EXTRA_FARE_REQUIRED: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(r"(?: -)? extra fare required .*$", ""));

pub static REPLACEMENT_BUS: Lazy<Pattern> = Lazy::new(|| clean_words("replacement bus"));
pub static SHORT_TURN: Lazy<Pattern> = Lazy::new(|| clean_words("short turn"));
pub static BLUE_NIGHT: Lazy<Pattern> = Lazy::new(|| clean_words("blue night"));

/// Trailing "via <x>" clause on a trip headsign.
pub static REMOVE_VIA: Lazy<Pattern> = Lazy::new(|| Pattern::new(r" via .*$", ""));

/// "@" spoken as "at", swallowing surrounding whitespace.
pub static CLEAN_AT: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\s*@\s*", " at "));

/// "&" spoken as "and", swallowing surrounding whitespace.
pub static CLEAN_AND: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\s*&\s*", " and "));

/// Trailing "towards <x>" clause on a stop name.
pub static ENDS_WITH_TOWARDS: Lazy<Pattern> = Lazy::new(|| Pattern::new(r" towards .*$", ""));

/// The standalone word "side", boundary characters preserved.
pub static SIDE: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"(^|\W)side(\W|$)", "${1}${2}"));

/// Bracketed bound annotations such as "(EB)" or "[northbound]".
pub static BOUNDS: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(
        r"\s*[(\[](?:(?:east|west|north|south) ?bound|eb|wb|nb|sb)[)\]]",
        "",
    )
});

/// Keeps a leading 4-5 letter direction word, dropping the " - ..." tail
/// that follows it on direction-level headsigns.
pub static DIRECTION_DASH_SUFFIX: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(r"^([a-z]{4,5}) - .*$", "${1}"));

/// "Mc" prefix inside an already-capitalized label; the casing-fix stage
/// re-uppercases the captured letter.
pub static MC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Mc)([a-z])").expect("Mc prefix pattern"));

/// Ordinal suffix glued to a number, any casing.
pub static ORDINAL_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\b(\d+)(st|nd|rd|th)\b")
        .case_insensitive(true)
        .build()
        .expect("ordinal suffix pattern")
});

/// Zero-padded numeric token.
pub static LEADING_ZEROS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b0+(\d)").expect("leading zeros pattern"));

/// Street-type abbreviation variants, each rewriting to its canonical
/// rendering. Spelled-out street types are left untouched.
pub static STREET_TYPES: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::new(r"\bst\.", "St"),
        Pattern::new(r"\bave\.", "Ave"),
        Pattern::new(r"\bav\b\.?", "Ave"),
        Pattern::new(r"\bblvd\.", "Blvd"),
        Pattern::new(r"\brd\.", "Rd"),
        Pattern::new(r"\bdr\.", "Dr"),
        Pattern::new(r"\bhwy\.", "Hwy"),
        Pattern::new(r"\bpkwy\.", "Pkwy"),
        Pattern::new(r"\bpky\b", "Pkwy"),
        Pattern::new(r"\bsq\.", "Sq"),
        Pattern::new(r"\bterr\.", "Terr"),
        Pattern::new(r"\bpl\.", "Pl"),
        Pattern::new(r"\bln\.", "Ln"),
        Pattern::new(r"\bct\.", "Ct"),
        Pattern::new(r"\bcir\.", "Cir"),
    ]
});

/// Collapses runs of whitespace to a single space.
pub static MULTIPLE_WHITESPACE: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\s+", " "));

/// Brackets left empty by earlier phrase removals.
pub static EMPTY_BRACKETS: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\(\s*\)|\[\s*\]", ""));

/// Separators left dangling at either end of a label.
pub static EDGE_SEPARATORS: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(r"^[\s,;:/-]+|[\s,;:/-]+$", ""));
