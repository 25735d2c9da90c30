use proptest::collection::vec;
use proptest::prelude::*;
use randkit::isaac::RAND_SIZE;
use randkit::rand_core::{RngCore, SeedableRng};
use randkit::xoshiro::rotl;
use randkit::{Isaac64, MersenneTwister64, Prng, SplitMix64, Xoshiro256StarStar};

fn take<R: RngCore>(rng: &mut R, n: usize) -> Vec<u64> {
    (0..n).map(|_| rng.next_u64()).collect()
}

proptest! {
    #[test]
    fn rotl_inverts(x in any::<u64>(), k in 1u32..64) {
        prop_assert_eq!(rotl(rotl(x, k), 64 - k), x);
        prop_assert_eq!(rotl(x, k), x.rotate_left(k));
    }

    #[test]
    fn splitmix_is_deterministic(seed in any::<u64>()) {
        let mut a = SplitMix64::new(seed);
        let mut b = SplitMix64::new(seed);
        prop_assert_eq!(take(&mut a, 64), take(&mut b, 64));
    }

    #[test]
    fn xoshiro_is_deterministic(seed in any::<[u64; 4]>()) {
        let mut a = Xoshiro256StarStar::new(seed);
        let mut b = Xoshiro256StarStar::new(seed);
        prop_assert_eq!(take(&mut a, 64), take(&mut b, 64));
    }

    #[test]
    fn twister_is_deterministic_across_twists(seed in any::<u64>()) {
        let mut a = MersenneTwister64::new(seed);
        let mut b = MersenneTwister64::seed_from_u64(seed);
        prop_assert_eq!(take(&mut a, 700), take(&mut b, 700));
    }

    #[test]
    fn isaac_is_deterministic_across_batches(seed in vec(any::<u64>(), 0..300)) {
        let mut a = Isaac64::new(&seed);
        let mut b = Isaac64::from_seed_words(&seed);
        prop_assert_eq!(take(&mut a, 600), take(&mut b, 600));
    }

    #[test]
    fn isaac_pads_short_seeds(seed in vec(any::<u64>(), 0..RAND_SIZE)) {
        let mut padded = seed.clone();
        padded.resize(RAND_SIZE, 0);
        let mut a = Isaac64::new(&seed);
        let mut b = Isaac64::new(&padded);
        prop_assert_eq!(take(&mut a, 300), take(&mut b, 300));
    }

    #[test]
    fn isaac_truncates_long_seeds(seed in vec(any::<u64>(), RAND_SIZE + 1..400)) {
        let mut a = Isaac64::new(&seed);
        let mut b = Isaac64::new(&seed[..RAND_SIZE]);
        prop_assert_eq!(take(&mut a, 300), take(&mut b, 300));
    }

    #[test]
    fn xoshiro_word_seed_is_normalized(seed in vec(any::<u64>(), 0..8)) {
        let mut words = [0u64; 4];
        let n = seed.len().min(4);
        words[..n].copy_from_slice(&seed[..n]);
        prop_assert_eq!(
            Xoshiro256StarStar::from_seed_words(&seed),
            Xoshiro256StarStar::new(words)
        );
    }

    #[test]
    fn byte_streams_follow_word_streams(seed in any::<u64>(), words in 0usize..8) {
        let mut by_word = MersenneTwister64::new(seed);
        let mut by_byte = MersenneTwister64::new(seed);
        let mut buf = vec![0u8; words * 8];
        by_byte.fill_bytes(&mut buf);

        let expected: Vec<u8> = take(&mut by_word, words)
            .into_iter()
            .flat_map(u64::to_le_bytes)
            .collect();
        prop_assert_eq!(buf, expected);
    }
}
