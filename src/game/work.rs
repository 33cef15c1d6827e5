use std::ops::Range;

use rand::Rng;

pub const JOBS: [&str; 7] = [
    "developer",
    "designer",
    "teacher",
    "chef",
    "driver",
    "artist",
    "musician",
];
pub const REWARD_RANGE: Range<i64> = 200..700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDraw {
    pub job: &'static str,
    pub reward: i64,
}

impl WorkDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            job: JOBS[rng.random_range(0..JOBS.len())],
            reward: rng.random_range(REWARD_RANGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn reward_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let draw = WorkDraw::roll(&mut rng);
            assert!(REWARD_RANGE.contains(&draw.reward));
            assert!(JOBS.contains(&draw.job));
        }
    }
}
