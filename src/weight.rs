use std::fmt;

/// Access to a weight attached to an edge payload.
pub trait Weight {
    type Value;

    fn weight(&self) -> &Self::Value;
}

/// An edge payload that carries nothing but a weight.
///
/// Use `Weighted<Option<W>>` when an edge may exist without a weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weighted<W>(W);

impl<W> Weighted<W> {
    pub fn new(weight: W) -> Self {
        Weighted(weight)
    }

    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W> Weight for Weighted<W> {
    type Value = W;

    fn weight(&self) -> &W {
        &self.0
    }
}

impl<W> From<W> for Weighted<W> {
    fn from(weight: W) -> Self {
        Weighted(weight)
    }
}

impl<W: fmt::Display> fmt::Display for Weighted<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<P: Weight<Value = f64>>(payloads: &[P]) -> f64 {
        payloads.iter().map(|p| *p.weight()).sum()
    }

    #[test]
    fn test_weight_accessor() {
        let w = Weighted::new(-2.0);
        assert_eq!(*w.weight(), -2.0);
        assert_eq!(total(&[Weighted::new(1.5), Weighted::new(0.5)]), 2.0);
    }

    #[test]
    fn test_missing_weight() {
        let w: Weighted<Option<f64>> = Weighted::new(None);
        assert_eq!(*w.weight(), None);
        assert_ne!(w, Weighted::new(Some(0.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Weighted::new(0.6).to_string(), "0.6");
    }
}
