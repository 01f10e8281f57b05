use crate::patterns;

use super::stages;

/// Picks the authoritative headsign between two candidates observed for
/// trips sharing one logical direction. Returns `None` when neither should
/// win and the caller keeps its current headsign.
///
/// The two tie-break rules have opposite polarity and must stay that way:
/// an "L "-prefixed candidate loses to the other candidate, while a bare
/// cardinal-direction candidate wins over the other candidate.
pub fn select_direction_head_sign(
    head_sign1: Option<&str>,
    head_sign2: Option<&str>,
) -> Option<String> {
    if head_sign1 == head_sign2 {
        return None; // nothing to disambiguate
    }
    let line_marker1 = head_sign1.is_some_and(|h| h.starts_with(patterns::LINE_PREFIX));
    let line_marker2 = head_sign2.is_some_and(|h| h.starts_with(patterns::LINE_PREFIX));
    if line_marker1 != line_marker2 {
        let winner = if line_marker1 { head_sign2 } else { head_sign1 };
        return winner.map(str::to_string);
    }
    let direction_only1 = head_sign1.is_some_and(|h| patterns::DIRECTION_ONLY.is_match(h.trim()));
    let direction_only2 = head_sign2.is_some_and(|h| patterns::DIRECTION_ONLY.is_match(h.trim()));
    if direction_only1 && !direction_only2 {
        return head_sign1.map(str::to_string);
    }
    if direction_only2 && !direction_only1 {
        return head_sign2.map(str::to_string);
    }
    None
}

/// Cleans a direction-level headsign: keeps the leading 4-5 letter
/// direction word when a " - ..." tail follows it, then canonicalizes the
/// casing. The direction id and stop-name origin flag belong to the
/// orchestrator-facing signature and do not influence the cleaning.
pub fn clean_direction_headsign(_direction_id: u8, _from_stop_name: bool, raw: &str) -> String {
    let label = patterns::DIRECTION_DASH_SUFFIX.apply(raw);
    let label = stages::capitalize_label(&label);
    stages::clean_label(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_candidates_are_left_alone() {
        assert_eq!(
            select_direction_head_sign(Some("Main St"), Some("Main St")),
            None
        );
        assert_eq!(select_direction_head_sign(None, None), None);
    }

    #[test]
    fn line_marker_candidate_loses() {
        assert_eq!(
            select_direction_head_sign(Some("L East"), Some("West")).as_deref(),
            Some("West")
        );
        assert_eq!(
            select_direction_head_sign(Some("West"), Some("L East")).as_deref(),
            Some("West")
        );
        assert_eq!(select_direction_head_sign(Some("L East"), Some("L West")), None);
    }

    #[test]
    fn bare_cardinal_direction_wins() {
        assert_eq!(
            select_direction_head_sign(Some("East"), Some("Main Street Station")).as_deref(),
            Some("East")
        );
        assert_eq!(
            select_direction_head_sign(Some("Main Street Station"), Some("East")).as_deref(),
            Some("East")
        );
        assert_eq!(select_direction_head_sign(Some("East"), Some("West")), None);
    }

    #[test]
    fn absent_candidates_yield_no_decision() {
        assert_eq!(
            select_direction_head_sign(Some("Main Street Station"), None),
            None
        );
        assert_eq!(
            select_direction_head_sign(Some("East"), None).as_deref(),
            Some("East")
        );
    }

    #[test]
    fn direction_headsign_keeps_leading_direction_word() {
        assert_eq!(
            clean_direction_headsign(0, false, "EAST - Broadview Station"),
            "East"
        );
        assert_eq!(clean_direction_headsign(1, true, "East"), "East");
        assert_eq!(
            clean_direction_headsign(0, false, "EB - Broadview Station"),
            "Eb - Broadview Station"
        );
    }
}
