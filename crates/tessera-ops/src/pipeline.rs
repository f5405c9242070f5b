//! Pipeline validation and sequential execution.
//!
//! [`Pipeline::new`] runs once at startup to check the stage list for
//! structural errors against a fixed grid side; [`Pipeline::run`] then
//! applies the stages in order, capturing a snapshot after each one.
//! Structural problems surface before any cell is touched.

use indexmap::{IndexMap, IndexSet};
use tessera_core::Grid;

use crate::restoration::{Restoration, RestorationError};

use std::error::Error;
use std::fmt;

// ── Run report ─────────────────────────────────────────────────────

/// Insertion-ordered per-stage snapshots from a pipeline run.
///
/// Stage names are unique (enforced at pipeline construction), so each
/// stage maps to exactly one snapshot of the grid taken right after
/// that stage applied.
#[derive(Clone, Debug)]
pub struct RunReport {
    snapshots: IndexMap<String, Grid>,
}

impl RunReport {
    /// The grid as it stood right after the named stage.
    pub fn stage(&self, name: &str) -> Option<&Grid> {
        self.snapshots.get(name)
    }

    /// All `(stage name, snapshot)` pairs in execution order.
    pub fn stages(&self) -> impl Iterator<Item = (&str, &Grid)> {
        self.snapshots.iter().map(|(name, grid)| (name.as_str(), grid))
    }

    /// The snapshot taken after the final stage.
    pub fn final_grid(&self) -> Option<&Grid> {
        self.snapshots.last().map(|(_, grid)| grid)
    }

    /// Number of stages that ran.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the report covers zero stages.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from pipeline validation and execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// No restorations registered.
    EmptyPipeline,

    /// Two stages share a name, so snapshots could not be told apart.
    DuplicateStage {
        /// The contested stage name.
        name: String,
    },

    /// A stage's configuration does not fit the pipeline's grid side.
    StageInvalid {
        /// Name of the misconfigured stage.
        stage: String,
        /// The underlying restoration error.
        reason: RestorationError,
    },

    /// The grid handed to `run` has a different side than the pipeline
    /// was validated against.
    SideMismatch {
        /// The side the pipeline was validated against.
        expected: usize,
        /// The side of the grid handed in.
        actual: usize,
    },

    /// A stage returned an error during execution.
    StageFailed {
        /// Name of the failing stage.
        stage: String,
        /// The underlying restoration error.
        reason: RestorationError,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no restorations"),
            Self::DuplicateStage { name } => {
                write!(f, "duplicate stage name '{name}'")
            }
            Self::StageInvalid { stage, reason } => {
                write!(f, "stage '{stage}' rejected at validation: {reason}")
            }
            Self::SideMismatch { expected, actual } => {
                write!(
                    f,
                    "pipeline validated for side {expected}, got a grid of side {actual}"
                )
            }
            Self::StageFailed { stage, reason } => {
                write!(f, "stage '{stage}' failed: {reason}")
            }
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StageInvalid { reason, .. } | Self::StageFailed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

// ── Pipeline ───────────────────────────────────────────────────────

/// A validated, ordered list of restorations bound to one grid side.
#[must_use]
pub struct Pipeline {
    stages: Vec<Box<dyn Restoration>>,
    side: usize,
}

impl Pipeline {
    /// Validate a stage list against a grid side.
    ///
    /// Checks performed (all at construction, not per run):
    ///
    /// 1. Stage list is non-empty.
    /// 2. Stage names are unique.
    /// 3. Each stage's [`Restoration::validate`] accepts `side`.
    ///
    /// # Errors
    ///
    /// Returns the first violated check as a [`PipelineError`].
    pub fn new(stages: Vec<Box<dyn Restoration>>, side: usize) -> Result<Self, PipelineError> {
        if stages.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }

        let mut seen: IndexSet<String> = IndexSet::with_capacity(stages.len());
        for stage in &stages {
            if !seen.insert(stage.name().to_string()) {
                return Err(PipelineError::DuplicateStage {
                    name: stage.name().to_string(),
                });
            }
        }

        for stage in &stages {
            stage
                .validate(side)
                .map_err(|reason| PipelineError::StageInvalid {
                    stage: stage.name().to_string(),
                    reason,
                })?;
        }

        Ok(Self { stages, side })
    }

    /// The grid side this pipeline was validated against.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has zero stages. Always `false` after
    /// successful validation; provided to pair with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Apply all stages in order, snapshotting the grid after each.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::SideMismatch`] for a grid of the wrong
    /// side, or [`PipelineError::StageFailed`] wrapping the first stage
    /// error. The grid retains all mutations applied before the failure.
    pub fn run(&self, grid: &mut Grid) -> Result<RunReport, PipelineError> {
        let mut snapshots = IndexMap::with_capacity(self.stages.len());
        self.run_with(grid, |stage, snapshot| {
            snapshots.insert(stage.to_string(), snapshot.clone());
        })?;
        Ok(RunReport { snapshots })
    }

    /// Apply all stages in order, invoking `observer` with the stage
    /// name and current grid after each stage instead of snapshotting.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_with(
        &self,
        grid: &mut Grid,
        mut observer: impl FnMut(&str, &Grid),
    ) -> Result<(), PipelineError> {
        if grid.side() != self.side {
            return Err(PipelineError::SideMismatch {
                expected: self.side,
                actual: grid.side(),
            });
        }

        for stage in &self.stages {
            stage
                .apply(grid)
                .map_err(|reason| PipelineError::StageFailed {
                    stage: stage.name().to_string(),
                    reason,
                })?;
            observer(stage.name(), grid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sets every cell to a constant value. Local to these tests.
    struct ConstFill {
        name: String,
        value: i64,
    }

    impl ConstFill {
        fn new(name: impl Into<String>, value: i64) -> Self {
            Self {
                name: name.into(),
                value,
            }
        }
    }

    impl Restoration for ConstFill {
        fn name(&self) -> &str {
            &self.name
        }

        fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
            grid.fill(self.value);
            Ok(())
        }
    }

    /// Fails deterministically on every application. Local to these tests.
    struct FailingRestoration {
        name: String,
    }

    impl FailingRestoration {
        fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }
    }

    impl Restoration for FailingRestoration {
        fn name(&self) -> &str {
            &self.name
        }

        fn apply(&self, _grid: &mut Grid) -> Result<(), RestorationError> {
            Err(RestorationError::ExecutionFailed {
                reason: format!("'{}' always fails", self.name),
            })
        }
    }

    /// Adds one to every cell. Local to these tests.
    struct IncrementAll;

    impl Restoration for IncrementAll {
        fn name(&self) -> &str {
            "IncrementAll"
        }

        fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
            let side = grid.side();
            for r in 0..side {
                for c in 0..side {
                    grid[(r, c)] += 1;
                }
            }
            Ok(())
        }
    }

    /// Validates only against a specific side.
    struct NeedsSide(usize);

    impl Restoration for NeedsSide {
        fn name(&self) -> &str {
            "NeedsSide"
        }

        fn validate(&self, side: usize) -> Result<(), RestorationError> {
            if side == self.0 {
                Ok(())
            } else {
                Err(RestorationError::ExecutionFailed {
                    reason: format!("requires side {}, pipeline has {side}", self.0),
                })
            }
        }

        fn apply(&self, _grid: &mut Grid) -> Result<(), RestorationError> {
            Ok(())
        }
    }

    #[test]
    fn empty_pipeline_rejected() {
        let result = Pipeline::new(vec![], 3);
        assert!(matches!(result, Err(PipelineError::EmptyPipeline)));
    }

    #[test]
    fn duplicate_stage_names_rejected() {
        let result = Pipeline::new(
            vec![Box::new(IncrementAll), Box::new(IncrementAll)],
            3,
        );
        match result {
            Err(PipelineError::DuplicateStage { name }) => {
                assert_eq!(name, "IncrementAll");
            }
            other => panic!("expected DuplicateStage, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn stage_validation_runs_at_construction() {
        let result = Pipeline::new(vec![Box::new(NeedsSide(4))], 3);
        match result {
            Err(PipelineError::StageInvalid { stage, .. }) => {
                assert_eq!(stage, "NeedsSide");
            }
            other => panic!("expected StageInvalid, got {:?}", other.map(|_| ())),
        }

        assert!(Pipeline::new(vec![Box::new(NeedsSide(3))], 3).is_ok());
    }

    #[test]
    fn run_rejects_wrong_side() {
        let pipeline = Pipeline::new(vec![Box::new(IncrementAll)], 3).unwrap();
        let mut grid = Grid::filled(4, 0);
        let result = pipeline.run(&mut grid);
        assert!(matches!(
            result,
            Err(PipelineError::SideMismatch {
                expected: 3,
                actual: 4,
            })
        ));
        // The grid must be untouched.
        assert!(grid.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn snapshots_arrive_in_stage_order() {
        let pipeline = Pipeline::new(
            vec![Box::new(IncrementAll), Box::new(ConstFill::new("fill_nines", 9))],
            2,
        )
        .unwrap();

        let mut grid = Grid::filled(2, 0);
        let report = pipeline.run(&mut grid).unwrap();

        assert_eq!(report.len(), 2);
        let order: Vec<&str> = report.stages().map(|(name, _)| name).collect();
        assert_eq!(order, ["IncrementAll", "fill_nines"]);

        assert_eq!(report.stage("IncrementAll").unwrap().as_slice(), &[1, 1, 1, 1]);
        assert_eq!(report.stage("fill_nines").unwrap().as_slice(), &[9, 9, 9, 9]);
        assert_eq!(report.final_grid().unwrap(), &grid);
    }

    #[test]
    fn observer_sees_every_stage() {
        let pipeline = Pipeline::new(
            vec![Box::new(IncrementAll), Box::new(ConstFill::new("fill_fives", 5))],
            2,
        )
        .unwrap();

        let mut grid = Grid::filled(2, 0);
        let mut seen = Vec::new();
        pipeline
            .run_with(&mut grid, |stage, snapshot| {
                seen.push((stage.to_string(), snapshot[(0, 0)]));
            })
            .unwrap();

        assert_eq!(seen, [("IncrementAll".to_string(), 1), ("fill_fives".to_string(), 5)]);
    }

    #[test]
    fn stage_failure_wraps_stage_name() {
        let pipeline = Pipeline::new(
            vec![
                Box::new(IncrementAll),
                Box::new(FailingRestoration::new("cracked_tile")),
            ],
            2,
        )
        .unwrap();

        let mut grid = Grid::filled(2, 0);
        let result = pipeline.run(&mut grid);
        match result {
            Err(PipelineError::StageFailed { stage, .. }) => {
                assert_eq!(stage, "cracked_tile");
            }
            other => panic!("expected StageFailed, got {:?}", other.map(|_| ())),
        }
        // Mutations before the failure are retained.
        assert_eq!(grid.as_slice(), &[1, 1, 1, 1]);
    }
}
