//! Equation rendering for the breakdown panel.
//!
//! The panel always shows the plain-text lines; mathematical typesetting
//! is a best-effort collaborator behind the [`Typesetter`] seam. When it
//! is missing or fails, the absence is logged and the plain text stands
//! on its own.

use serde::Serialize;

use crate::decomposition::EquationBreakdown;

/// Best-effort markup renderer (MathJax on the web host, nothing on
/// native). Implementations turn LaTeX source into display markup.
pub trait Typesetter {
    fn typeset(&self, source: &str) -> Result<String, TypesetError>;
}

/// Failure of the optional typesetting collaborator. Never fatal.
#[derive(Debug, Clone, thiserror::Error)]
#[error("typesetter failed: {reason}")]
pub struct TypesetError {
    pub reason: String,
}

/// The breakdown as the host displays it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEquation {
    /// Plain-text lines, always present.
    pub lines: Vec<String>,
    /// LaTeX source for a host-side typesetter.
    pub latex: String,
    /// Typeset markup, when a collaborator produced it.
    pub markup: Option<String>,
}

/// The seven display lines: the identity, the instantiated sums, and the
/// four term values.
#[must_use]
pub fn plain_lines(eq: &EquationBreakdown) -> Vec<String> {
    vec![
        "(a+b)³ = a³ + 3a²b + 3ab² + b³".to_owned(),
        format!("{} + {} = {}", eq.a, eq.b, eq.sum),
        format!("({}+{})³ = {}", eq.a, eq.b, eq.total),
        format!("a³ = {}", eq.a_cubed),
        format!("b³ = {}", eq.b_cubed),
        format!("3a²b = {}", eq.three_a_squared_b),
        format!("3ab² = {}", eq.three_ab_squared),
    ]
}

/// LaTeX source for the same lines.
#[must_use]
pub fn latex_source(eq: &EquationBreakdown) -> String {
    format!(
        "\\begin{{aligned}}\
         (a+b)^3 &= a^3 + 3a^2b + 3ab^2 + b^3 \\\\ \
         {a} + {b} &= {sum} \\\\ \
         ({a}+{b})^3 &= {total} \\\\ \
         a^3 &= {a3} \\\\ \
         b^3 &= {b3} \\\\ \
         3a^2b &= {a2b} \\\\ \
         3ab^2 &= {ab2}\
         \\end{{aligned}}",
        a = eq.a,
        b = eq.b,
        sum = eq.sum,
        total = eq.total,
        a3 = eq.a_cubed,
        b3 = eq.b_cubed,
        a2b = eq.three_a_squared_b,
        ab2 = eq.three_ab_squared,
    )
}

/// Render the breakdown, consulting the typesetter when one is present.
/// A missing or failing typesetter only downgrades `markup` to `None`.
pub fn render_breakdown(
    eq: &EquationBreakdown,
    typesetter: Option<&dyn Typesetter>,
) -> RenderedEquation {
    let latex = latex_source(eq);
    let markup = match typesetter {
        Some(typesetter) => match typesetter.typeset(&latex) {
            Ok(markup) => Some(markup),
            Err(err) => {
                log::warn!("typesetting failed, showing plain text only: {err}");
                None
            }
        },
        None => {
            log::debug!("no typesetter available, showing plain text only");
            None
        }
    };

    RenderedEquation {
        lines: plain_lines(eq),
        latex,
        markup,
    }
}
