//! Quality thresholds for recommendation lists.
//!
//! A threshold is a (minimum vote average, minimum vote count, poster
//! required) triple. Each upstream source gets its own bar:
//!
//! | source               | avg  | votes | poster |
//! |----------------------|------|-------|--------|
//! | recommendations      | 6.0  | 100   | yes    |
//! | genre backfill       | 6.5  | 200   | yes    |
//! | similar (fallback)   | 5.5  | 50    | yes    |

use movie_data::MovieSummary;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityThreshold {
    pub min_vote_average: f32,
    pub min_vote_count: u32,
    pub require_poster: bool,
}

impl QualityThreshold {
    pub const RECOMMENDATIONS: QualityThreshold = QualityThreshold {
        min_vote_average: 6.0,
        min_vote_count: 100,
        require_poster: true,
    };

    pub const GENRE_BACKFILL: QualityThreshold = QualityThreshold {
        min_vote_average: 6.5,
        min_vote_count: 200,
        require_poster: true,
    };

    pub const SIMILAR_FALLBACK: QualityThreshold = QualityThreshold {
        min_vote_average: 5.5,
        min_vote_count: 50,
        require_poster: true,
    };

    pub fn new(min_vote_average: f32, min_vote_count: u32, require_poster: bool) -> Self {
        Self {
            min_vote_average,
            min_vote_count,
            require_poster,
        }
    }

    /// Whether `movie` clears every part of the bar (bounds are inclusive)
    pub fn accepts(&self, movie: &MovieSummary) -> bool {
        movie.vote_average >= self.min_vote_average
            && movie.vote_count >= self.min_vote_count
            && (!self.require_poster || movie.has_poster())
    }
}

impl fmt::Display for QualityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg>={:.1} votes>={}{}",
            self.min_vote_average,
            self.min_vote_count,
            if self.require_poster { " poster" } else { "" }
        )
    }
}
