// Ordered label-cleaning mechanism shared by the trip-headsign, stop-name
// and route-long-name pipelines.

pub mod direction;
pub mod pipelines;
pub(crate) mod stages;

pub use direction::{clean_direction_headsign, select_direction_head_sign};
pub use pipelines::{
    clean_route_long_name, clean_stop_head_sign, clean_stop_name, clean_trip_headsign,
    extract_destination,
};

use tracing::trace;

use crate::patterns::Pattern;

enum StageAction {
    /// Global pattern substitution.
    Rewrite(&'static Pattern),
    /// Word-based transform a single substitution cannot express.
    Transform(fn(&str) -> String),
}

/// One transformation applied to a label on its way to canonical form.
/// Stateless: the same input always produces the same output.
pub struct CleaningStage {
    name: &'static str,
    action: StageAction,
}

impl CleaningStage {
    pub(crate) fn rewrite(name: &'static str, pattern: &'static Pattern) -> Self {
        Self {
            name,
            action: StageAction::Rewrite(pattern),
        }
    }

    pub(crate) fn transform(name: &'static str, transform: fn(&str) -> String) -> Self {
        Self {
            name,
            action: StageAction::Transform(transform),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, label: &str) -> String {
        match &self.action {
            StageAction::Rewrite(pattern) => pattern.apply(label),
            StageAction::Transform(transform) => transform(label),
        }
    }
}

/// An ordered chain of cleaning stages. Stage order is significant and
/// fixed: boilerplate removal runs before case normalization, which runs
/// before the final cleanup.
pub struct CleaningPipeline {
    name: &'static str,
    stages: Vec<CleaningStage>,
}

impl CleaningPipeline {
    pub(crate) fn new(name: &'static str, stages: Vec<CleaningStage>) -> Self {
        Self { name, stages }
    }

    /// Runs the full stage chain over one raw label. Total: a label no
    /// stage matches comes back unchanged, and nothing here can fail.
    pub fn clean(&self, raw: &str) -> String {
        let mut label = raw.to_string();
        for stage in &self.stages {
            let rewritten = stage.apply(&label);
            if rewritten != label {
                trace!(
                    pipeline = self.name,
                    stage = stage.name,
                    from = %label,
                    to = %rewritten,
                    "stage rewrote label"
                );
            }
            label = rewritten;
        }
        label
    }

    /// Declared stage order, mostly for tests.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name).collect()
    }
}
