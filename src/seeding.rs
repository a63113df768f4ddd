//! State initialization: integer seed, array seed and period certification.
//!
//! Both seeding procedures overwrite the whole state array and finish with
//! [`period_certification`], which guarantees the generator reaches the full
//! 2^MEXP - 1 period.

use crate::params::Params;
use crate::utils::w128::{Flat32, W128};

/// Multiplier of the linear recurrence used by [`init_gen_rand`].
const INIT_MULT: u32 = 1812433253;

/// Byte every state byte is set to before array seeding.
const ARRAY_FILL_BYTE: u8 = 0x8b;

#[inline]
fn func1(x: u32) -> u32 {
    (x ^ (x >> 27)).wrapping_mul(1664525)
}

#[inline]
fn func2(x: u32) -> u32 {
    (x ^ (x >> 27)).wrapping_mul(1566083941)
}

/// Lag between the two mixed slots, chosen from the state size in 32-bit words.
fn lag_for(size: usize) -> usize {
    if size >= 623 {
        11
    } else if size >= 68 {
        7
    } else if size >= 39 {
        5
    } else {
        3
    }
}

/// Seeds the state from a single 32-bit integer.
pub(crate) fn init_gen_rand(p: &Params, state: &mut [W128], seed: u32) {
    {
        let mut flat = Flat32(&mut *state);
        flat.set(0, seed);
        for i in 1..flat.len() {
            let prev = flat.get(i - 1);
            flat.set(
                i,
                INIT_MULT
                    .wrapping_mul(prev ^ (prev >> 30))
                    .wrapping_add(i as u32),
            );
        }
    }
    period_certification(p, state);
}

/// Seeds the state from an arbitrary-length key, which may be empty.
pub(crate) fn init_by_array(p: &Params, state: &mut [W128], key: &[u32]) {
    state.fill(W128::filled(ARRAY_FILL_BYTE));
    {
        let mut flat = Flat32(&mut *state);
        let size = flat.len();
        let lag = lag_for(size);
        let mid = (size - lag) / 2;
        let count = (key.len() + 1).max(size);

        let mut r = func1(flat.get(0) ^ flat.get(mid) ^ flat.get(size - 1));
        flat.add(mid, r);
        r = r.wrapping_add(key.len() as u32);
        flat.add(mid + lag, r);
        flat.set(0, r);

        // Slot 0 is done; `count - 1` additive steps follow, the first ones
        // consuming the key.
        let key_words = key.iter().copied().chain(std::iter::repeat(0));
        let mut i = 1;
        for extra in key_words.take(count - 1) {
            r = func1(flat.get(i) ^ flat.get((i + mid) % size) ^ flat.get((i + size - 1) % size));
            flat.add((i + mid) % size, r);
            r = r.wrapping_add(extra).wrapping_add(i as u32);
            flat.add((i + mid + lag) % size, r);
            flat.set(i, r);
            i = (i + 1) % size;
        }

        for _ in 0..size {
            r = func2(
                flat.get(i)
                    .wrapping_add(flat.get((i + mid) % size))
                    .wrapping_add(flat.get((i + size - 1) % size)),
            );
            flat.xor((i + mid) % size, r);
            r = r.wrapping_sub(i as u32);
            flat.xor((i + mid + lag) % size, r);
            flat.set(i, r);
            i = (i + 1) % size;
        }
    }
    period_certification(p, state);
}

/// Parity of `state[0]` masked by the parity vector; `true` means the
/// period is certified.
pub(crate) fn is_certified(p: &Params, first: &W128) -> bool {
    let mut inner = (0..4).fold(0u32, |acc, k| acc ^ (first.lane(k) & p.parity[k]));
    for shift in [16, 8, 4, 2, 1] {
        inner ^= inner >> shift;
    }
    inner & 1 == 1
}

/// Flips one bit of `state[0]` when the parity check fails.
///
/// The flipped bit is the lowest set bit of the first non-zero parity
/// word, in the matching lane. Returns `true` when a bit was flipped.
pub(crate) fn period_certification(p: &Params, state: &mut [W128]) -> bool {
    if is_certified(p, &state[0]) {
        return false;
    }
    for (k, &parity) in p.parity.iter().enumerate() {
        if parity != 0 {
            state[0].xor_lane(k, 1 << parity.trailing_zeros());
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;

    fn fresh(set: ParameterSet) -> Vec<W128> {
        vec![W128::default(); set.n()]
    }

    #[test]
    fn test_lag_table() {
        assert_eq!(lag_for(624), 11);
        assert_eq!(lag_for(623), 11);
        assert_eq!(lag_for(622), 7);
        assert_eq!(lag_for(68), 7);
        assert_eq!(lag_for(67), 5);
        assert_eq!(lag_for(39), 5);
        assert_eq!(lag_for(38), 3);
        assert_eq!(lag_for(20), 3);
    }

    #[test]
    fn test_func1_func2_wrap() {
        assert_eq!(func1(0), 0);
        assert_eq!(func1(1), 1664525);
        assert_eq!(func2(1), 1566083941);
        assert_eq!(
            func1(u32::MAX),
            (u32::MAX ^ (u32::MAX >> 27)).wrapping_mul(1664525)
        );
    }

    #[test]
    fn test_init_gen_rand_first_words() {
        let set = ParameterSet::P19937;
        let mut state = fresh(set);
        init_gen_rand(set.params(), &mut state, 1234);
        // 1234 fails the parity check, so bit 0 of lane 0 is flipped
        assert_eq!(state[0].u, [1235, 3159640283, 4062961311, 3954462607]);
    }

    #[test]
    fn test_init_gen_rand_no_fix_needed() {
        let set = ParameterSet::P19937;
        let mut state = fresh(set);
        init_gen_rand(set.params(), &mut state, 1);
        assert_eq!(state[0].lane(0), 1);
    }

    #[test]
    fn test_certification_flips_exactly_one_bit() {
        for set in ParameterSet::ALL {
            let p = set.params();
            let mut state = fresh(set);
            // All-zero parity: must be fixed
            assert!(!is_certified(p, &state[0]));
            assert!(period_certification(p, &mut state));
            assert!(is_certified(p, &state[0]));
            let flipped: u32 = state[0].u.iter().map(|w| w.count_ones()).sum();
            assert_eq!(flipped, 1);
            // Already certified: untouched
            let before = state[0];
            assert!(!period_certification(p, &mut state));
            assert_eq!(state[0], before);
        }
    }

    #[test]
    fn test_certification_after_integer_seeds() {
        for set in ParameterSet::ALL {
            for seed in 0..64u32 {
                let mut state = fresh(set);
                init_gen_rand(set.params(), &mut state, seed);
                assert!(
                    is_certified(set.params(), &state[0]),
                    "seed {} not certified for {:?}",
                    seed,
                    set
                );
            }
        }
    }

    #[test]
    fn test_certification_after_array_seeds() {
        let keys: [&[u32]; 5] = [
            &[],
            &[0],
            &[0x1234, 0x5678, 0x9abc, 0xdef0],
            &[u32::MAX; 7],
            &[1; 700],
        ];
        for set in ParameterSet::ALL {
            for key in keys {
                let mut state = fresh(set);
                init_by_array(set.params(), &mut state, key);
                assert!(is_certified(set.params(), &state[0]));
            }
        }
    }

    #[test]
    fn test_init_by_array_depends_on_key() {
        let set = ParameterSet::P607;
        let mut a = fresh(set);
        let mut b = fresh(set);
        init_by_array(set.params(), &mut a, &[1, 2, 3]);
        init_by_array(set.params(), &mut b, &[1, 2, 4]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_init_by_array_key_longer_than_state() {
        // Key length above N32 changes the iteration count; trailing key words must matter
        let set = ParameterSet::P607;
        let mut long_a: Vec<u32> = (0..40).collect();
        let mut a = fresh(set);
        init_by_array(set.params(), &mut a, &long_a);
        long_a[39] ^= 1;
        let mut b = fresh(set);
        init_by_array(set.params(), &mut b, &long_a);
        assert_ne!(a, b);
    }

    #[test]
    fn test_init_by_array_overwrites_previous_state() {
        let set = ParameterSet::P19937;
        let mut a = fresh(set);
        let mut b = fresh(set);
        init_gen_rand(set.params(), &mut b, 99);
        init_by_array(set.params(), &mut a, &[7, 8]);
        init_by_array(set.params(), &mut b, &[7, 8]);
        assert_eq!(a, b);
    }
}
