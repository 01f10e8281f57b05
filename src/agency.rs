use crate::config::AgencyConfig;
use crate::domain::{Route, Stop, StopTime, Trip};
use crate::{exclusion, normalize};

/// The fixed points of customization an agency brings to record
/// processing: exclusion predicates, label cleaners and direction
/// selection. Every method has a documented default so an orchestrator can
/// drive any agency through the same code path.
pub trait AgencyNormalizer {
    /// Rider-facing agency name.
    fn agency_name(&self) -> &str {
        "Agency"
    }

    /// Whether the orchestrator should derive one canonical headsign per
    /// logical direction.
    fn direction_finder_enabled(&self) -> bool {
        false
    }

    fn default_route_id_enabled(&self) -> bool {
        false
    }

    fn use_route_short_name_for_route_id(&self) -> bool {
        false
    }

    fn default_route_long_name_enabled(&self) -> bool {
        false
    }

    /// Default: keep every trip.
    fn exclude_trip(&self, _trip: &Trip) -> bool {
        false
    }

    /// Default: keep every stop time.
    fn exclude_stop_time(&self, _stop_time: &StopTime) -> bool {
        false
    }

    /// Default: keep every stop.
    fn exclude_stop(&self, _stop: &Stop) -> bool {
        false
    }

    /// Default: the raw label is already canonical.
    fn clean_trip_headsign(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn clean_stop_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn clean_route_long_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Default: a per-stop headsign cleans like a trip headsign.
    fn clean_stop_head_sign(
        &self,
        _route: &Route,
        _trip: &Trip,
        _stop_time: &StopTime,
        raw: &str,
    ) -> String {
        self.clean_trip_headsign(raw)
    }

    /// Default: no decision between conflicting direction headsigns.
    fn select_direction_head_sign(
        &self,
        _head_sign1: Option<&str>,
        _head_sign2: Option<&str>,
    ) -> Option<String> {
        None
    }

    /// Default: the raw direction headsign is already canonical.
    fn clean_direction_headsign(
        &self,
        _direction_id: u8,
        _from_stop_name: bool,
        raw: &str,
    ) -> String {
        raw.to_string()
    }
}

/// Base behavior used when an agency has no customization of its own.
#[derive(Debug, Default)]
pub struct DefaultAgencyNormalizer;

impl AgencyNormalizer for DefaultAgencyNormalizer {}

/// The surface-network rule set: full label cleaning, out-of-service and
/// duplicate-record exclusion, and direction-headsign selection, layered
/// over a base normalizer whose own exclusion rules keep applying.
pub struct SurfaceAgencyNormalizer<B: AgencyNormalizer = DefaultAgencyNormalizer> {
    config: AgencyConfig,
    base: B,
}

impl SurfaceAgencyNormalizer<DefaultAgencyNormalizer> {
    pub fn new(config: AgencyConfig) -> Self {
        Self::with_base(config, DefaultAgencyNormalizer)
    }
}

impl<B: AgencyNormalizer> SurfaceAgencyNormalizer<B> {
    pub fn with_base(config: AgencyConfig, base: B) -> Self {
        Self { config, base }
    }

    pub fn config(&self) -> &AgencyConfig {
        &self.config
    }
}

impl<B: AgencyNormalizer> AgencyNormalizer for SurfaceAgencyNormalizer<B> {
    fn agency_name(&self) -> &str {
        &self.config.agency_name
    }

    fn direction_finder_enabled(&self) -> bool {
        self.config.direction_finder_enabled
    }

    fn default_route_id_enabled(&self) -> bool {
        self.config.default_route_id_enabled
    }

    fn use_route_short_name_for_route_id(&self) -> bool {
        self.config.use_route_short_name_for_route_id
    }

    fn default_route_long_name_enabled(&self) -> bool {
        self.config.default_route_long_name_enabled
    }

    fn exclude_trip(&self, trip: &Trip) -> bool {
        exclusion::exclude_trip(trip, |trip| self.base.exclude_trip(trip))
    }

    fn exclude_stop_time(&self, stop_time: &StopTime) -> bool {
        exclusion::exclude_stop_time(stop_time, |stop_time| {
            self.base.exclude_stop_time(stop_time)
        })
    }

    fn exclude_stop(&self, stop: &Stop) -> bool {
        exclusion::exclude_stop(stop, |stop| self.base.exclude_stop(stop))
    }

    fn clean_trip_headsign(&self, raw: &str) -> String {
        normalize::clean_trip_headsign(raw)
    }

    fn clean_stop_name(&self, raw: &str) -> String {
        normalize::clean_stop_name(raw)
    }

    fn clean_route_long_name(&self, raw: &str) -> String {
        normalize::clean_route_long_name(raw)
    }

    fn clean_stop_head_sign(
        &self,
        route: &Route,
        trip: &Trip,
        stop_time: &StopTime,
        raw: &str,
    ) -> String {
        normalize::clean_stop_head_sign(route, trip, stop_time, raw)
    }

    fn select_direction_head_sign(
        &self,
        head_sign1: Option<&str>,
        head_sign2: Option<&str>,
    ) -> Option<String> {
        normalize::select_direction_head_sign(head_sign1, head_sign2)
    }

    fn clean_direction_headsign(
        &self,
        direction_id: u8,
        from_stop_name: bool,
        raw: &str,
    ) -> String {
        normalize::clean_direction_headsign(direction_id, from_stop_name, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ExcludeEverything;

    impl AgencyNormalizer for ExcludeEverything {
        fn exclude_trip(&self, _trip: &Trip) -> bool {
            true
        }
    }

    #[test]
    fn surface_normalizer_layers_over_its_base() {
        let normalizer =
            SurfaceAgencyNormalizer::with_base(AgencyConfig::default(), ExcludeEverything);
        let trip = Trip {
            trip_headsign: "Broadview Station".to_string(),
            ..Default::default()
        };
        // The local rule keeps the trip, so the base decision wins.
        assert!(normalizer.exclude_trip(&trip));
    }

    #[test]
    fn surface_normalizer_cleans_labels() {
        let normalizer = SurfaceAgencyNormalizer::new(AgencyConfig::default());
        assert_eq!(
            normalizer.clean_trip_headsign("Downtown - Short Turn"),
            "Downtown"
        );
        assert_eq!(normalizer.clean_route_long_name("QUEEN"), "Queen");
        assert_eq!(
            normalizer.clean_direction_headsign(0, false, "EAST - Broadview Station"),
            "East"
        );
    }

    #[test]
    fn defaults_pass_labels_through() {
        let base = DefaultAgencyNormalizer;
        assert_eq!(base.clean_trip_headsign("  RAW  "), "  RAW  ");
        assert!(!base.exclude_trip(&Trip::default()));
        assert_eq!(base.select_direction_head_sign(Some("East"), None), None);
    }
}
