/// Maximum number of decimal digits the magnitude of a value may occupy.
///
/// The cap travels with each value and is re-checked whenever an operation
/// finalizes a result. Arithmetic between values of different widths
/// produces a result bound by [`Width::combine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// At most this many decimal digits. Zero admits nothing, so callers
    /// normally start at one.
    Fixed(u32),
    /// No cap; the value grows as needed.
    Unlimited,
}

impl Width {
    /// Width of a result produced from operands of widths `self` and
    /// `other`: the wider of the two, with `Unlimited` absorbing everything.
    pub fn combine(self, other: Width) -> Width {
        match (self, other) {
            (Width::Unlimited, _) | (_, Width::Unlimited) => Width::Unlimited,
            (Width::Fixed(a), Width::Fixed(b)) => Width::Fixed(a.max(b)),
        }
    }

    /// Whether a magnitude of `digits` decimal digits fits under this cap.
    pub fn admits(self, digits: u64) -> bool {
        match self {
            Width::Unlimited => true,
            Width::Fixed(limit) => digits <= u64::from(limit),
        }
    }
}
