/// A single rating on the platform's 1..=5 star scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StarRating(f64);

impl StarRating {
    pub const fn min() -> Self {
        Self(1.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn new<V: Into<f64>>(val: V) -> Self {
        Self(val.into()).clamp()
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// Rounded to one decimal place, the platform's display precision.
    pub fn rounded(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }
}

impl From<f64> for StarRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<StarRating> for f64 {
    fn from(from: StarRating) -> Self {
        from.0
    }
}

/// A 0..=100 sentiment value as produced by the feedback analysis.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct SentimentScore(u8);

impl SentimentScore {
    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(100)
    }

    /// Clamps arbitrary integers into the valid range instead of rejecting
    /// them. Out-of-range values can only originate from the analysis
    /// provider, not from user input.
    pub fn clamped(val: i64) -> Self {
        Self(val.clamp(i64::from(Self::min().0), i64::from(Self::max().0)) as u8)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<SentimentScore> for u8 {
    fn from(from: SentimentScore) -> Self {
        from.0
    }
}

impl From<SentimentScore> for i64 {
    fn from(from: SentimentScore) -> Self {
        i64::from(from.0)
    }
}

// A 5-star rating expressed on the analysis's percentage scale.
impl From<StarRating> for SentimentScore {
    fn from(from: StarRating) -> Self {
        Self::clamped((from.clamp().0 * 20.0).round() as i64)
    }
}

// Inverse of the above; clamping guards against out-of-range
// analysis output. Rounds to one decimal place in integer tenths,
// so that e.g. 87 maps to 4.4 and not to a truncated 4.3.
impl From<SentimentScore> for StarRating {
    fn from(from: SentimentScore) -> Self {
        let tenths = (i64::from(from.0) + 1) / 2;
        StarRating(tenths as f64 / 10.0).clamp()
    }
}

/// Mean of star ratings, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRating(f64);

impl AvgRating {
    pub fn clamp(self) -> Self {
        Self(
            self.0
                .max(StarRating::min().0)
                .min(StarRating::max().0),
        )
    }
}

impl From<f64> for AvgRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRating> for f64 {
    fn from(from: AvgRating) -> Self {
        from.0
    }
}

impl From<StarRating> for AvgRating {
    fn from(from: StarRating) -> Self {
        Self(from.0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: f64,
    cnt: usize,
}

impl AvgRatingBuilder {
    pub fn add(&mut self, val: StarRating) {
        debug_assert!(val.is_valid());
        self.acc += val.0;
        self.cnt += 1;
    }

    pub fn count(&self) -> usize {
        self.cnt
    }

    pub fn build(self) -> Option<AvgRating> {
        if self.cnt > 0 {
            Some(
                AvgRating::from(StarRating::from(self.acc / self.cnt as f64).rounded().0).clamp(),
            )
        } else {
            None
        }
    }
}

impl std::ops::AddAssign<StarRating> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: StarRating) {
        self.add(rhs);
    }
}

/// Accumulated reputation penalty in stars, subtracted from a guide's
/// public average rating.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RatingPenalty(f64);

impl RatingPenalty {
    pub const fn none() -> Self {
        Self(0.0)
    }

    pub fn from_stars(stars: f64) -> Self {
        debug_assert!(stars >= 0.0);
        Self(stars.max(0.0))
    }

    pub fn as_stars(self) -> f64 {
        self.0
    }
}

impl std::ops::Add for RatingPenalty {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for RatingPenalty {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
