//! Data generation utilities for testing.
//!
//! Every generator here produces set-id sequences: non-decreasing values where each
//! value is the index of the first row of its run, so `value[i] <= i` always holds.

/// Generates a random set-id column of `len` rows.
///
/// Each row after the first starts a new set with probability `new_set_probability`
/// (clamped to `[0, 1]`). The output is fully determined by `seed`.
pub fn generate_set_ids(len: usize, new_set_probability: f64, seed: u64) -> Vec<u32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let probability = new_set_probability.clamp(0.0, 1.0);
    let mut values = Vec::with_capacity(len);
    let mut current = 0u32;
    for row in 0..len {
        if row > 0 && rng.f64() < probability {
            current = row as u32;
        }
        values.push(current);
    }
    values
}

/// Builds a set-id column from the lengths of its consecutive sets.
///
/// Zero-length runs are skipped.
///
/// ```
/// use tracecol_testkit::data_gen::set_ids_from_run_lengths;
///
/// assert_eq!(set_ids_from_run_lengths(&[2, 3, 1]), vec![0, 0, 2, 2, 2, 5]);
/// ```
pub fn set_ids_from_run_lengths(runs: &[usize]) -> Vec<u32> {
    let mut values = Vec::with_capacity(runs.iter().sum());
    for &run in runs {
        let id = values.len() as u32;
        values.extend(std::iter::repeat_n(id, run));
    }
    values
}

/// Picks `count` random row positions in `[0, len)`, with repetitions and in no
/// particular order.
pub fn random_rows(rng: &mut fastrand::Rng, len: u32, count: usize) -> Vec<u32> {
    if len == 0 {
        return Vec::new();
    }
    (0..count).map(|_| rng.u32(0..len)).collect()
}

/// Returns `rows` shuffled deterministically.
pub fn shuffled(rows: &[u32], seed: u64) -> Vec<u32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut rows = rows.to_vec();
    rng.shuffle(&mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::{generate_set_ids, random_rows, set_ids_from_run_lengths, shuffled};

    fn is_set_id_sequence(values: &[u32]) -> bool {
        values.iter().enumerate().all(|(i, &v)| v as usize <= i)
            && values.windows(2).all(|w| w[0] <= w[1])
            && values.iter().enumerate().all(|(i, &v)| v as usize == i || values[i - 1] == v)
    }

    #[test]
    fn test_generated_sequences_conform() {
        for seed in 0..20 {
            for probability in [0.0, 0.05, 0.5, 1.0] {
                let values = generate_set_ids(500, probability, seed);
                assert_eq!(values.len(), 500);
                assert!(is_set_id_sequence(&values), "seed {seed} p {probability}");
            }
        }
    }

    #[test]
    fn test_generation_extremes() {
        assert!(generate_set_ids(100, 0.0, 1).iter().all(|&v| v == 0));
        assert_eq!(
            generate_set_ids(100, 1.0, 1),
            (0..100u32).collect::<Vec<_>>()
        );
        assert!(generate_set_ids(0, 0.5, 1).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_set_ids(300, 0.1, 42), generate_set_ids(300, 0.1, 42));
    }

    #[test]
    fn test_run_lengths() {
        assert_eq!(set_ids_from_run_lengths(&[]), Vec::<u32>::new());
        assert_eq!(set_ids_from_run_lengths(&[1, 0, 2]), vec![0, 1, 1]);
        assert!(is_set_id_sequence(&set_ids_from_run_lengths(&[3, 1, 4, 1, 5])));
    }

    #[test]
    fn test_random_rows() {
        let mut rng = fastrand::Rng::with_seed(3);
        let rows = random_rows(&mut rng, 10, 100);
        assert_eq!(rows.len(), 100);
        assert!(rows.iter().all(|&r| r < 10));
        assert!(random_rows(&mut rng, 0, 10).is_empty());

        let mut sorted = shuffled(&rows, 5);
        sorted.sort_unstable();
        let mut expected = rows.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }
}
