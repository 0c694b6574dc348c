use serde::Serialize;

/// One line item of a recommended allocation. The `allocation` field is a
/// percentage rendered for display ("50%"); the service never does arithmetic
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioEntry {
    pub instrument: &'static str,
    pub allocation: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    pub description: &'static str,
    pub portfolio: &'static [PortfolioEntry],
}
