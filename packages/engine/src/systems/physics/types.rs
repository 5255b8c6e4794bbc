use std::ops::Add;

/// Pair counts from one force phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForceTally {
    /// Pairs examined (neighbor-cell candidates, `j != i`)
    pub candidates: u64,
    /// Pairs within cutoff that contributed a force
    pub interactions: u64,
}

impl Add for ForceTally {
    type Output = ForceTally;

    #[inline]
    fn add(self, other: ForceTally) -> ForceTally {
        ForceTally {
            candidates: self.candidates + other.candidates,
            interactions: self.interactions + other.interactions,
        }
    }
}
