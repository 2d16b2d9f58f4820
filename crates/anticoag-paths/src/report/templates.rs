//! Sentence templates for path reporting.

/// Console header printed above the path sentences.
pub const HEADER: &str = "Intuitive Presentation of Results:";

/// Template for one regression path.
/// Placeholders: `{target}`, `{predictor}`, `{estimate}`, `{p}`.
pub const INFLUENCE: &str =
    "{target} is influenced by {predictor} with an estimate of {estimate} (p={p})";

/// Render the influence template. The estimate is shown with two decimals,
/// the p-value with four.
pub fn render(target: &str, predictor: &str, estimate: f64, p_value: f64) -> String {
    INFLUENCE
        .replace("{target}", target)
        .replace("{predictor}", predictor)
        .replace("{estimate}", &format!("{estimate:.2}"))
        .replace("{p}", &format!("{p_value:.4}"))
}
