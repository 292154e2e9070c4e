/// Errors returned by selective analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// A requested rule name is not one of `r1`, `r2`, `r3`.
    #[error("unknown rule '{0}' (valid: r1, r2, r3)")]
    UnknownRule(String),
}
