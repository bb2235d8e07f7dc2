use rand::Rng;
use rand::seq::SliceRandom;

/// `count` distinct indices drawn uniformly from `0..pool_size` without `exclude`
pub fn distinct_indices<R: Rng + ?Sized>(
	exclude: usize,
	count: usize,
	pool_size: usize,
	rng: &mut R,
) -> Vec<usize> {
	debug_assert!(count <= pool_size.saturating_sub(1));
	let mut idxs: Vec<usize> = (0..pool_size).filter(|&i| i != exclude).collect();
	idxs.shuffle(rng);
	idxs.truncate(count);
	idxs
}
