//! Per-query outcomes collected while the probe runs

use tableprobe_client::{ClientError, ProductSummary};

/// The three queries, in the order they are always attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
    Products,
    Categories,
    ActiveProducts,
}

impl ProbeStep {
    pub fn label(&self) -> &'static str {
        match self {
            ProbeStep::Products => "products",
            ProbeStep::Categories => "categories",
            ProbeStep::ActiveProducts => "active products",
        }
    }
}

/// What a single query produced: rows or a reported error, never both.
#[derive(Debug)]
pub enum StepOutcome {
    Rows {
        count: usize,
        first: Option<ProductSummary>,
    },
    Failed(ClientError),
}

#[derive(Debug)]
pub struct StepReport {
    pub step: ProbeStep,
    pub outcome: StepOutcome,
}

/// Ordered record of every query the probe attempted.
#[derive(Debug, Default)]
pub struct ProbeReport {
    pub steps: Vec<StepReport>,
}

impl ProbeReport {
    pub(crate) fn push(&mut self, step: ProbeStep, outcome: StepOutcome) {
        self.steps.push(StepReport { step, outcome });
    }

    /// Number of queries attempted, successful or not.
    pub fn attempted(&self) -> usize {
        self.steps.len()
    }

    /// True when every attempted query returned rows (possibly zero).
    pub fn all_passed(&self) -> bool {
        self.steps
            .iter()
            .all(|s| matches!(s.outcome, StepOutcome::Rows { .. }))
    }

    pub fn outcome(&self, step: ProbeStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| s.step == step).map(|s| &s.outcome)
    }
}
