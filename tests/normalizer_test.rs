use anyhow::Result;
use serde_json::json;
use std::io::Write;

use transit_normalizer::{
    clean_stop_head_sign, clean_stop_name, clean_trip_headsign, select_direction_head_sign,
    AgencyConfig, AgencyNormalizer, Route, Stop, StopTime, SurfaceAgencyNormalizer, Trip,
};

#[test]
fn records_flow_from_reader_shapes_through_the_normalizer() -> Result<()> {
    let trip: Trip = serde_json::from_value(json!({
        "trip_id": "T1",
        "route_id": "501",
        "direction_id": 0,
        "trip_headsign": "501 Queen to Neville Park via Kingston Rd"
    }))?;

    let normalizer = SurfaceAgencyNormalizer::new(AgencyConfig::default());
    assert!(!normalizer.exclude_trip(&trip));
    assert_eq!(
        normalizer.clean_trip_headsign(trip.headsign_or_default()),
        "Neville Park"
    );
    Ok(())
}

#[test]
fn out_of_service_and_duplicate_records_are_dropped() -> Result<()> {
    let normalizer = SurfaceAgencyNormalizer::new(AgencyConfig::default());

    let trip: Trip = serde_json::from_value(json!({ "trip_headsign": "(Not In Service)" }))?;
    assert!(normalizer.exclude_trip(&trip));

    let stop_time: StopTime = serde_json::from_value(json!({
        "trip_id": "T1",
        "stop_id": "S1",
        "stop_sequence": 4,
        "stop_headsign": "not in service"
    }))?;
    assert!(normalizer.exclude_stop_time(&stop_time));

    let duplicate: Stop = serde_json::from_value(json!({
        "stop_id": "12345",
        "stop_code": "12345"
    }))?;
    assert!(normalizer.exclude_stop(&duplicate));

    let kept: Stop = serde_json::from_value(json!({
        "stop_id": "12345",
        "stop_code": "ABC",
        "stop_name": "MAIN ST. NORTH SIDE"
    }))?;
    assert!(!normalizer.exclude_stop(&kept));
    assert_eq!(normalizer.clean_stop_name(kept.name_or_default()), "Main St North");
    Ok(())
}

#[test]
fn stop_headsigns_lose_their_route_prefix() {
    let route = Route {
        route_long_name: "Main Street".to_string(),
        ..Default::default()
    };
    let cleaned = clean_stop_head_sign(
        &route,
        &Trip::default(),
        &StopTime::default(),
        "12A Main Street - Downtown",
    );
    assert_eq!(cleaned, "Downtown");
}

#[test]
fn cleaning_is_idempotent_across_pipelines() {
    let headsigns = [
        "12A East - 123 to Main Street Station",
        "Downtown - Short Turn",
        "501 Blue Night Queen",
        "KING @ SPADINA",
    ];
    for raw in headsigns {
        let once = clean_trip_headsign(raw);
        assert_eq!(clean_trip_headsign(&once), once, "trip headsign: {raw}");
    }

    let stop_names = ["MAIN ST. NORTH SIDE towards Downtown", "KING ST (EB)"];
    for raw in stop_names {
        let once = clean_stop_name(raw);
        assert_eq!(clean_stop_name(&once), once, "stop name: {raw}");
    }
}

#[test]
fn direction_selection_matches_the_documented_tie_breaks() {
    assert_eq!(
        select_direction_head_sign(Some("L East"), Some("West")).as_deref(),
        Some("West")
    );
    assert_eq!(
        select_direction_head_sign(Some("East"), Some("Main Street Station")).as_deref(),
        Some("East")
    );
    assert_eq!(select_direction_head_sign(Some("East"), Some("West")), None);
    assert_eq!(select_direction_head_sign(Some("Main St"), Some("Main St")), None);
}

#[test]
fn logging_initialization_is_reentrant() {
    transit_normalizer::logging::init_logging();
    // A second call must not panic or replace the global subscriber.
    transit_normalizer::logging::init_logging();
}

#[test]
fn config_profile_feeds_the_strategy_object() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "agency_name = \"Metro Transit\"")?;
    writeln!(file, "use_route_short_name_for_route_id = false")?;

    let config = AgencyConfig::load(file.path())?;
    let normalizer = SurfaceAgencyNormalizer::new(config);
    assert_eq!(normalizer.agency_name(), "Metro Transit");
    assert!(!normalizer.use_route_short_name_for_route_id());
    assert!(normalizer.direction_finder_enabled());
    Ok(())
}
