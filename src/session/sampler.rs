use rand::Rng;

/// Number of questions drawn for one play-through.
pub const QUESTIONS_PER_SESSION: usize = 10;

/// Draw up to `count` distinct elements of `bank` in uniformly random order.
///
/// Banks smaller than `count` are returned whole, shuffled. `bank` itself is
/// left untouched.
pub fn sample<T: Clone, R: Rng>(bank: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut drawn = bank.to_vec();

    // Fisher-Yates shuffle
    for i in (1..drawn.len()).rev() {
        let j = rng.gen_range(0..=i);
        drawn.swap(i, j);
    }

    drawn.truncate(count);
    drawn
}
