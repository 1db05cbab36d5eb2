use super::ApproxEq;

impl ApproxEq for f64 {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // `inf == inf`, `-inf == -inf`, `inf != -inf`, `NaN != anything`
            return self == other;
        }

        (self - other).abs() <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let largest = self.abs().max(other.abs());
        (self - other).abs() <= largest * rel_tolerance
    }
}

impl ApproxEq for [f64] {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }
}
