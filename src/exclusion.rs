use crate::domain::{Stop, StopTime, Trip};
use crate::patterns;

/// Marker headsign for trips that never carry riders. The whole (trimmed)
/// field has to match; "Not In Service Express" is a real destination.
pub fn is_not_in_service(headsign: &str) -> bool {
    patterns::NOT_IN_SERVICE.is_match(headsign.trim())
}

/// A stop whose identifier and rider-facing code collide is a duplicate
/// placeholder injected by an upstream merge of multiple source feeds.
pub fn is_duplicate_stop(stop: &Stop) -> bool {
    stop.stop_id == stop.stop_code
}

/// Excludes a trip whose headsign marks it out of service; otherwise
/// defers to the caller-supplied base decision.
pub fn exclude_trip<F>(trip: &Trip, base: F) -> bool
where
    F: FnOnce(&Trip) -> bool,
{
    if is_not_in_service(trip.headsign_or_default()) {
        return true;
    }
    base(trip)
}

/// Excludes a stop time whose own headsign marks it out of service; a stop
/// time may carry a different headsign than its parent trip.
pub fn exclude_stop_time<F>(stop_time: &StopTime, base: F) -> bool
where
    F: FnOnce(&StopTime) -> bool,
{
    if is_not_in_service(stop_time.stop_headsign_or_default()) {
        return true;
    }
    base(stop_time)
}

/// Excludes duplicate stops; otherwise defers to the base decision.
pub fn exclude_stop<F>(stop: &Stop, base: F) -> bool
where
    F: FnOnce(&Stop) -> bool,
{
    if is_duplicate_stop(stop) {
        return true;
    }
    base(stop)
}
