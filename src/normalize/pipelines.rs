use once_cell::sync::Lazy;
use regex::RegexBuilder;
use tracing::warn;

use super::stages;
use super::{CleaningPipeline, CleaningStage};
use crate::domain::{Route, StopTime, Trip};
use crate::patterns;

/// Trip headsigns carry the most boilerplate; the structural and phrase
/// removals run first so the casing and token stages see plain text.
pub static TRIP_HEADSIGN: Lazy<CleaningPipeline> = Lazy::new(|| {
    CleaningPipeline::new(
        "trip_headsign",
        vec![
            CleaningStage::rewrite("structural_trim", &patterns::STRUCTURAL_TRIM),
            CleaningStage::rewrite("extra_fare", &patterns::ENDS_EXTRA_FARE_REQUIRED),
            CleaningStage::rewrite("replacement_bus", &patterns::REPLACEMENT_BUS),
            CleaningStage::rewrite("short_turn", &patterns::SHORT_TURN),
            CleaningStage::rewrite("blue_night", &patterns::BLUE_NIGHT),
            CleaningStage::rewrite("via_clause", &patterns::REMOVE_VIA),
            CleaningStage::transform("capitalize", stages::capitalize_label),
            CleaningStage::transform("mc_case", stages::fix_mc_case),
            CleaningStage::rewrite("at_symbol", &patterns::CLEAN_AT),
            CleaningStage::rewrite("and_symbol", &patterns::CLEAN_AND),
            CleaningStage::transform("street_types", stages::clean_street_types),
            CleaningStage::transform("numbers", stages::clean_numbers),
            CleaningStage::transform("cleanup", stages::clean_label),
        ],
    )
});

pub static STOP_NAME: Lazy<CleaningPipeline> = Lazy::new(|| {
    CleaningPipeline::new(
        "stop_name",
        vec![
            CleaningStage::rewrite("towards_clause", &patterns::ENDS_WITH_TOWARDS),
            CleaningStage::transform("capitalize", stages::capitalize_label),
            CleaningStage::rewrite("at_symbol", &patterns::CLEAN_AT),
            CleaningStage::rewrite("side_word", &patterns::SIDE),
            CleaningStage::rewrite("bounds", &patterns::BOUNDS),
            CleaningStage::transform("mc_case", stages::fix_mc_case),
            CleaningStage::transform("street_types", stages::clean_street_types),
            CleaningStage::transform("numbers", stages::clean_numbers),
            CleaningStage::transform("cleanup", stages::clean_label),
        ],
    )
});

pub static ROUTE_LONG_NAME: Lazy<CleaningPipeline> = Lazy::new(|| {
    CleaningPipeline::new(
        "route_long_name",
        vec![
            CleaningStage::transform("capitalize", stages::capitalize_label),
            CleaningStage::transform("cleanup", stages::clean_label),
        ],
    )
});

/// Canonicalizes a trip headsign.
pub fn clean_trip_headsign(raw: &str) -> String {
    TRIP_HEADSIGN.clean(raw)
}

/// Canonicalizes a stop name.
pub fn clean_stop_name(raw: &str) -> String {
    STOP_NAME.clean(raw)
}

/// Canonicalizes a route long name.
pub fn clean_route_long_name(raw: &str) -> String {
    ROUTE_LONG_NAME.clean(raw)
}

/// Strips the leading route-code / route-long-name prefix from a per-stop
/// headsign, keeping the destination text. The pattern is built per call
/// from the route's long name; with an empty long name it degenerates to
/// the numeric code prefix. Returns the input unchanged when no prefix
/// matches.
pub fn extract_destination(route_long_name: &str, raw: &str) -> String {
    let mut expression = String::from(r"^(?:\d+(?:/\d+)?)?(?:[a-z] )?");
    let route_long_name = route_long_name.trim();
    if !route_long_name.is_empty() {
        let tolerant = regex::escape(route_long_name).replace(' ', r"\s+");
        expression.push_str(&format!(r"(?:\s*{tolerant}\s*)?"));
    }
    match RegexBuilder::new(&expression).case_insensitive(true).build() {
        Ok(prefix) => prefix.replace(raw, "").into_owned(),
        Err(e) => {
            warn!(route_long_name, error = %e, "stop-headsign prefix pattern failed to build");
            raw.to_string()
        }
    }
}

/// Cleans a per-stop headsign: the structural extractor runs first, then
/// the trip-headsign pipeline finishes the label.
pub fn clean_stop_head_sign(route: &Route, _trip: &Trip, _stop_time: &StopTime, raw: &str) -> String {
    let stripped = extract_destination(route.long_name_or_default(), raw);
    TRIP_HEADSIGN.clean(&stripped)
}
