use std::fmt::Debug;
use std::ops::Neg;

/// A value on a game's shared evaluation axis.
///
/// The axis is totally ordered and negatable. `MIN` and `MAX` bound every
/// value a game can produce and serve as the initial alpha-beta window;
/// neither is itself an achievable evaluation.
pub trait Evaluation:
    Sized + Send + Sync + Debug + Default + Clone + Copy + PartialEq + Eq + PartialOrd + Ord + Neg<Output = Self>
{
    const MIN: Self;
    const MAX: Self;
}

/// The band reserved for heuristic estimates: strictly inside the
/// win/loss magnitudes, so a cutoff estimate can never be mistaken for a
/// terminal outcome by the pruning or table-reuse logic.
pub const HEURISTIC_MAX: i32 = Score::WIN.0 - 1;

/// Integer evaluation with a closed terminal scale.
///
/// Terminal outcomes are `WIN`/`DRAW`/`LOSS` for the maximizing side of the
/// axis; heuristic estimates are clamped into `(-WIN, WIN)` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(pub i32);

impl Score {
    pub const WIN: Score = Score(1_000);
    pub const DRAW: Score = Score(0);
    pub const LOSS: Score = Score(-1_000);

    /// Clamp a raw heuristic estimate into the non-terminal band.
    #[inline]
    pub fn heuristic(value: i32) -> Score {
        Score(value.clamp(-HEURISTIC_MAX, HEURISTIC_MAX))
    }

    /// Whether this value is a terminal win or loss magnitude.
    #[inline]
    pub fn is_decisive(self) -> bool {
        self.0 <= Score::LOSS.0 || self.0 >= Score::WIN.0
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl Evaluation for Score {
    // i32::MIN would overflow under negation.
    const MIN: Score = Score(-i32::MAX);
    const MAX: Score = Score(i32::MAX);
}

crate::impl_display_from_debug!(Score);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_band_is_strictly_inside_terminal_scale() {
        assert!(Score::heuristic(i32::MAX) < Score::WIN);
        assert!(Score::heuristic(i32::MIN) > Score::LOSS);
        assert_eq!(Score::heuristic(42), Score(42));
    }

    #[test]
    fn window_bounds_are_not_achievable_values() {
        assert!(Score::MIN < Score::LOSS);
        assert!(Score::MAX > Score::WIN);
        assert_eq!(-Score::MIN, Score::MAX);
    }

    #[test]
    fn decisive_values() {
        assert!(Score::WIN.is_decisive());
        assert!(Score::LOSS.is_decisive());
        assert!(!Score::DRAW.is_decisive());
        assert!(!Score::heuristic(999).is_decisive());
    }
}
