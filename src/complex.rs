use std::cmp::Ordering;
use std::fmt;

/// Complex number used as a sample tree payload.
///
/// Equality compares both components, ordering compares magnitudes. Two
/// distinct numbers on the same circle are therefore unequal but neither is
/// greater; heap order keeps them in depth-first order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imag(&self) -> f64 {
        self.imag
    }

    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real && self.imag == other.imag
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}i", self.real, self.imag)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imag): (f64, f64)) -> Self {
        Self::new(real, imag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_3_4i_when_magnitude_then_is_5() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn given_same_magnitude_when_compared_then_unequal_but_not_ordered() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(4.0, 3.0);
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert!(Complex::new(1.0, 1.0) < a);
    }

    #[test]
    fn given_complex_when_displayed_then_uses_sum_notation() {
        assert_eq!(Complex::new(1.5, 2.0).to_string(), "1.5+2i");
    }
}
