use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex};

/// Sparse density for generated graphs.
pub const SPARSE_EDGE_PROBABILITY: f64 = 0.1;
/// Dense density for generated graphs.
pub const DENSE_EDGE_PROBABILITY: f64 = 0.7;

/// A seeded generator for random test data.
///
/// Uses the xoshiro256** PRNG; construct with a fixed seed to replay a run.
///
/// # Examples
///
/// ```
/// use algolab_util::Fuzzer;
///
/// let fuzzer = Fuzzer::from_seed_u64(42);
/// let n = fuzzer.random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// ```
pub struct Fuzzer {
    /// The seed the PRNG was initialized with.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a fuzzer with an optional seed; without one, a random seed is
    /// drawn from `OsRng` (and remains readable via [`Fuzzer::seed`]).
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Convenience constructor for test matrices keyed by a single integer.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self::new(Some(bytes))
    }

    /// Random integer in `[min, max]` (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(min..=max)
    }

    /// Bernoulli draw.
    pub fn chance(&self, p: f64) -> bool {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_bool(p)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, values: &'a [T]) -> &'a T {
        let idx = self.random_int(0, values.len() as i64 - 1) as usize;
        &values[idx]
    }

    /// `count` distinct values sampled from `[min, max]`, in random order.
    ///
    /// Panics if the range holds fewer than `count` values.
    pub fn sample_distinct(&self, min: i64, max: i64, count: usize) -> Vec<i64> {
        let mut pool: Vec<i64> = (min..=max).collect();
        assert!(
            count <= pool.len(),
            "cannot sample {count} distinct values from [{min}, {max}]"
        );
        let mut rng = self.rng.lock().unwrap();
        for i in 0..count {
            let j = rng.gen_range(i..pool.len());
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    }

    /// Random integer array of `len` values in `[min, max]` (repeats allowed).
    pub fn random_array(&self, len: usize, min: i64, max: i64) -> Vec<i64> {
        (0..len).map(|_| self.random_int(min, max)).collect()
    }

    /// Undirected Erdős–Rényi edge list over nodes `"0" .. "n-1"`: each
    /// unordered pair joins with probability `p`, weight drawn from
    /// `[weight_min, weight_max]`.
    pub fn random_edges(
        &self,
        nodes: usize,
        p: f64,
        weight_min: i64,
        weight_max: i64,
    ) -> Vec<(String, String, f64)> {
        let mut edges = Vec::new();
        for i in 0..nodes {
            for j in (i + 1)..nodes {
                if self.chance(p) {
                    let w = self.random_int(weight_min, weight_max) as f64;
                    edges.push((i.to_string(), j.to_string(), w));
                }
            }
        }
        edges
    }

    /// Like [`Fuzzer::random_edges`] but guaranteed connected: a random
    /// spanning path is laid down first, then extra edges per `p`.
    pub fn random_connected_edges(
        &self,
        nodes: usize,
        p: f64,
        weight_min: i64,
        weight_max: i64,
    ) -> Vec<(String, String, f64)> {
        if nodes == 0 {
            return Vec::new();
        }
        let order = self.sample_distinct(0, nodes as i64 - 1, nodes);
        let mut edges = Vec::new();
        for w in order.windows(2) {
            let weight = self.random_int(weight_min, weight_max) as f64;
            edges.push((w[0].to_string(), w[1].to_string(), weight));
        }
        for i in 0..nodes {
            for j in (i + 1)..nodes {
                if self.chance(p) {
                    let w = self.random_int(weight_min, weight_max) as f64;
                    edges.push((i.to_string(), j.to_string(), w));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = Fuzzer::from_seed_u64(7);
        let b = Fuzzer::from_seed_u64(7);
        let xs: Vec<i64> = (0..32).map(|_| a.random_int(0, 1000)).collect();
        let ys: Vec<i64> = (0..32).map(|_| b.random_int(0, 1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn sample_distinct_has_no_repeats() {
        let f = Fuzzer::from_seed_u64(1);
        let mut values = f.sample_distinct(1, 99, 10);
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (1..=99).contains(v)));
    }

    #[test]
    fn connected_edges_touch_every_node() {
        let f = Fuzzer::from_seed_u64(3);
        let edges = f.random_connected_edges(12, SPARSE_EDGE_PROBABILITY, 1, 9);
        let mut seen = std::collections::HashSet::new();
        for (u, v, _) in &edges {
            seen.insert(u.clone());
            seen.insert(v.clone());
        }
        assert_eq!(seen.len(), 12);
    }
}
