use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64StarStar;

/// The rng used for reproducible games and tests, always seeded the same way.
pub fn consistent_rng() -> Xoroshiro64StarStar {
    seeded_rng(0)
}

pub fn seeded_rng(seed: u64) -> Xoroshiro64StarStar {
    Xoroshiro64StarStar::seed_from_u64(seed)
}
