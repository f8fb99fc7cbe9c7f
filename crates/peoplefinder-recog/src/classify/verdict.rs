//! Classification verdicts

use std::fmt;

/// Minimum in-range landmark count for [`Verdict::Pedestrian`]
pub const PEDESTRIAN_SCORE: usize = 7;

/// Minimum in-range landmark count for [`Verdict::Something`]
pub const SOMETHING_SCORE: usize = 3;

/// Three-way outcome of classifying one silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// At least 7 landmarks in range
    Pedestrian,
    /// 3 to 6 landmarks in range
    Something,
    /// Fewer than 3 landmarks in range
    Noise,
}

impl Verdict {
    /// Map an in-range landmark count to a verdict.
    pub fn from_score(score: usize) -> Self {
        if score >= PEDESTRIAN_SCORE {
            Verdict::Pedestrian
        } else if score >= SOMETHING_SCORE {
            Verdict::Something
        } else {
            Verdict::Noise
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pedestrian => "Pedestrian",
            Verdict::Something => "Something",
            Verdict::Noise => "Noise",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_thresholds() {
        assert_eq!(Verdict::from_score(11), Verdict::Pedestrian);
        assert_eq!(Verdict::from_score(7), Verdict::Pedestrian);
        assert_eq!(Verdict::from_score(6), Verdict::Something);
        assert_eq!(Verdict::from_score(3), Verdict::Something);
        assert_eq!(Verdict::from_score(2), Verdict::Noise);
        assert_eq!(Verdict::from_score(0), Verdict::Noise);
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::Pedestrian.to_string(), "Pedestrian");
        assert_eq!(format!("{}", Verdict::Noise), "Noise");
    }
}
