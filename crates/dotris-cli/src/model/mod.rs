pub use self::high_scores::*;

mod high_scores;
