/// An IEEE double admitted into the bencode value model.
///
/// The inner value is private; the only way to build one is through
/// `FiniteFloat::new` (or `TryFrom<f64>`), which rejects NaN and both
/// infinities. This keeps `encode` total.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteFloat(pub(crate) f64);
