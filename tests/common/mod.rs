//! Shared fixtures for integration tests.

use prepflow::{Difficulty, Pool};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Installs the test subscriber once per process. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    init_tracing();
    ChaCha8Rng::seed_from_u64(seed)
}

/// 2 Easy, 2 Medium, 2 Hard questions for one role/type combination.
pub fn balanced_pool() -> Pool {
    let pool = Pool::new(
        "Data Scientist",
        "Technical",
        vec![
            (
                "List python data types",
                "Integers, floats, strings, lists, tuples and dictionaries.",
            ),
            (
                "List python string methods",
                "Common methods include upper, lower, strip, split and join.",
            ),
            (
                "Explain gradient descent optimization",
                "Gradient descent is an optimization algorithm that minimizes \
                 the loss function by iteratively updating model weights",
            ),
            (
                "Explain sql joins",
                "Joins combine rows from two tables using a related column.",
            ),
            (
                "Why does gradient descent converge",
                "On convex loss surfaces every step reduces the loss until a minimum.",
            ),
            (
                "Compare sql and nosql databases",
                "Relational schemas trade flexibility for integrity guarantees.",
            ),
        ],
    );

    assert_eq!(pool.tier_members(Difficulty::Easy).len(), 2);
    assert_eq!(pool.tier_members(Difficulty::Medium).len(), 2);
    assert_eq!(pool.tier_members(Difficulty::Hard).len(), 2);

    pool
}
