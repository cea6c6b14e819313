use thiserror::Error;

/// A star rating from 0 (unrated) up to 5.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("rating {0} is out of range")]
pub struct RatingOutOfRange(pub i64);

impl Rating {
    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn new(val: u8) -> Self {
        let new = Self(val);
        debug_assert!(new.is_valid());
        new
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Renders the rating as filled and empty stars.
    pub fn stars(self) -> String {
        let filled = usize::from(self.0.min(Self::max().0));
        let empty = usize::from(Self::max().0) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        u8::try_from(from)
            .ok()
            .map(Self)
            .filter(|r| r.is_valid())
            .ok_or(RatingOutOfRange(from))
    }
}

impl From<Rating> for u8 {
    fn from(from: Rating) -> Self {
        from.0
    }
}
