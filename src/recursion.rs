//! The SFMT recurrence and the two ways of running it.
//!
//! [`gen_rand_all`] regenerates the state array in place.
//! [`gen_rand_array`] runs the same recurrence into a caller-sized buffer of
//! at least `N` words and leaves the state equal to the last `N` words
//! produced, so that scalar generation continues the same stream.

use crate::params::Params;
use crate::utils::w128::W128;

/// One step of the recurrence: `r = a ^ (a << SL2) ^ ((b >> SR1) & MSK) ^ (c >> SR2) ^ (d << SL1)`.
///
/// The `SL2`/`SR2` shifts act on the whole 128-bit word; `SR1`/`SL1` and the
/// masks act per 32-bit lane.
#[inline]
pub(crate) fn do_recursion(p: &Params, a: W128, b: W128, c: W128, d: W128) -> W128 {
    let x = a.lshift(p.sl2);
    let y = c.rshift(p.sr2);
    W128::new(std::array::from_fn(|k| {
        a.u[k] ^ x.u[k] ^ ((b.u[k] >> p.sr1) & p.msk[k]) ^ y.u[k] ^ (d.u[k] << p.sl1)
    }))
}

/// Refills the whole state array in place.
pub(crate) fn gen_rand_all(p: &Params, state: &mut [W128]) {
    let n = state.len();
    let mut r1 = state[n - 2];
    let mut r2 = state[n - 1];

    for i in 0..(n - p.pos1) {
        state[i] = do_recursion(p, state[i], state[i + p.pos1], r1, r2);
        r1 = r2;
        r2 = state[i];
    }
    // Second operand wraps onto words already regenerated in this pass
    for i in (n - p.pos1)..n {
        state[i] = do_recursion(p, state[i], state[i + p.pos1 - n], r1, r2);
        r1 = r2;
        r2 = state[i];
    }
}

/// Fills `array` (at least `state.len()` words) with successive words of the
/// stream, then copies the last `N` of them back into `state`.
pub(crate) fn gen_rand_array(p: &Params, state: &mut [W128], array: &mut [W128]) {
    let n = state.len();
    let size = array.len();
    debug_assert!(size >= n, "bulk buffer of {} words is shorter than {}", size, n);

    let mut r1 = state[n - 2];
    let mut r2 = state[n - 1];

    for i in 0..(n - p.pos1) {
        array[i] = do_recursion(p, state[i], state[i + p.pos1], r1, r2);
        r1 = r2;
        r2 = array[i];
    }
    for i in (n - p.pos1)..n {
        array[i] = do_recursion(p, state[i], array[i + p.pos1 - n], r1, r2);
        r1 = r2;
        r2 = array[i];
    }
    // Past the first N words every operand comes from the buffer itself
    for i in n..size {
        array[i] = do_recursion(p, array[i - n], array[i + p.pos1 - n], r1, r2);
        r1 = r2;
        r2 = array[i];
    }

    state.copy_from_slice(&array[size - n..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;

    fn sample_state(n: usize) -> Vec<W128> {
        (0..n)
            .map(|i| {
                let i = i as u32;
                W128::new([
                    i.wrapping_mul(0x9E3779B9),
                    i ^ 0xDEADBEEF,
                    i.wrapping_add(0x01234567),
                    !i,
                ])
            })
            .collect()
    }

    #[test]
    fn test_do_recursion_zero_is_zero() {
        let p = ParameterSet::P19937.params();
        let z = W128::default();
        assert_eq!(do_recursion(p, z, z, z, z), z);
    }

    #[test]
    fn test_do_recursion_single_terms() {
        let p = ParameterSet::P19937.params();
        let z = W128::default();
        let ones = W128::new([u32::MAX; 4]);

        // b contributes only through the per-lane shift and mask
        let r = do_recursion(p, z, ones, z, z);
        for k in 0..4 {
            assert_eq!(r.u[k], (u32::MAX >> p.sr1) & p.msk[k]);
        }

        // d contributes only through the per-lane left shift
        let r = do_recursion(p, z, z, z, ones);
        assert_eq!(r.u, [u32::MAX << p.sl1; 4]);

        // c contributes through the 128-bit right shift
        let r = do_recursion(p, z, z, ones, z);
        assert_eq!(r, ones.rshift(p.sr2));

        // a contributes itself and its 128-bit left shift
        let a = W128::new([1, 0, 0, 0]);
        let r = do_recursion(p, a, z, z, z);
        assert_eq!(r.u, [0x101, 0, 0, 0]);
    }

    #[test]
    fn test_gen_rand_array_of_n_matches_gen_rand_all() {
        for set in ParameterSet::ALL {
            let p = set.params();
            let mut in_place = sample_state(set.n());
            let mut bulk_state = in_place.clone();
            let mut array = vec![W128::default(); set.n()];

            gen_rand_all(p, &mut in_place);
            gen_rand_array(p, &mut bulk_state, &mut array);

            assert_eq!(array, in_place);
            assert_eq!(bulk_state, in_place);
        }
    }

    #[test]
    fn test_gen_rand_array_long_matches_repeated_refills() {
        for set in ParameterSet::ALL {
            let p = set.params();
            let n = set.n();
            let size = 3 * n + 2;
            let mut state = sample_state(n);
            let mut reference_state = state.clone();
            let mut array = vec![W128::default(); size];

            gen_rand_array(p, &mut state, &mut array);

            let mut stream = Vec::with_capacity(5 * n);
            for _ in 0..5 {
                gen_rand_all(p, &mut reference_state);
                stream.extend_from_slice(&reference_state);
            }

            assert_eq!(&array[..], &stream[..size]);
            // The next refill continues the stream
            gen_rand_all(p, &mut state);
            assert_eq!(&state[..], &stream[size..size + n]);
        }
    }
}
