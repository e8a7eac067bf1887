//! Exacte gehele-getallenrekening voor de termen van (a+b)³.

use serde::Serialize;

use super::Parameters;

/// De afgeleide scalars die naast de visualisatie worden getoond. Alle
/// waarden zijn exacte `u64`-resultaten; er komt geen drijvende komma
/// aan te pas, zodat de identiteit a³ + 3a²b + 3ab² + b³ = (a+b)³ voor
/// elk parameterpaar precies opgaat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquationBreakdown {
    pub a: u64,
    pub b: u64,
    pub a_cubed: u64,
    pub b_cubed: u64,
    pub three_a_squared_b: u64,
    pub three_ab_squared: u64,
    /// a + b.
    pub sum: u64,
    /// (a + b)³.
    pub total: u64,
}

impl EquationBreakdown {
    #[must_use]
    pub fn new(params: Parameters) -> Self {
        let a = u64::from(params.a());
        let b = u64::from(params.b());

        Self {
            a,
            b,
            a_cubed: a * a * a,
            b_cubed: b * b * b,
            three_a_squared_b: 3 * a * a * b,
            three_ab_squared: 3 * a * b * b,
            sum: a + b,
            total: (a + b).pow(3),
        }
    }

    /// Som van de vier termen; per constructie gelijk aan `total`.
    #[must_use]
    pub const fn term_sum(&self) -> u64 {
        self.a_cubed + self.b_cubed + self.three_a_squared_b + self.three_ab_squared
    }
}

#[cfg(test)]
mod tests {
    use super::EquationBreakdown;
    use crate::decomposition::Parameters;

    #[test]
    fn unit_breakdown() {
        let eq = EquationBreakdown::new(Parameters::new(1, 1).unwrap());
        assert_eq!(eq.a_cubed, 1);
        assert_eq!(eq.b_cubed, 1);
        assert_eq!(eq.three_a_squared_b, 3);
        assert_eq!(eq.three_ab_squared, 3);
        assert_eq!(eq.sum, 2);
        assert_eq!(eq.total, 8);
    }

    #[test]
    fn worked_example() {
        let eq = EquationBreakdown::new(Parameters::new(5, 1).unwrap());
        assert_eq!(eq.a_cubed, 125);
        assert_eq!(eq.b_cubed, 1);
        assert_eq!(eq.three_a_squared_b, 75);
        assert_eq!(eq.three_ab_squared, 15);
        assert_eq!(eq.total, 216);
        assert_eq!(eq.term_sum(), eq.total);
    }

    #[test]
    fn identity_holds_exactly_for_the_slider_range() {
        for a in 1..=10 {
            for b in 1..=10 {
                let eq = EquationBreakdown::new(Parameters::new(a, b).unwrap());
                assert_eq!(eq.term_sum(), eq.total, "identiteit faalt voor ({a},{b})");
            }
        }
    }
}
