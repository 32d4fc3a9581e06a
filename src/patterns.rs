//! Input patterns for tests and benchmarks, plus helpers for viewing `i32`
//! data through the byte-stride interface. Values are limited to i32.

use std::cmp::Ordering;

use rand::prelude::*;

use once_cell::sync::OnceCell;

// --- Patterns ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = rand::rngs::StdRng::from(new_seed());

    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = size / saw_count.max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else if saw_directions[i] == 1 {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            unreachable!();
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

pub fn random_init_seed() -> u64 {
    // Fixed per process so failures reproduce; printed once by the tests.
    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
}

// --- Byte-stride helpers ---

/// Stride of one `i32` element.
pub const I32_STRIDE: usize = std::mem::size_of::<i32>();

/// Comparator over two `i32` elements viewed as native-endian bytes.
pub fn int_compare(a: &[u8], b: &[u8]) -> Ordering {
    let a = i32::from_ne_bytes(a.try_into().unwrap());
    let b = i32::from_ne_bytes(b.try_into().unwrap());

    a.cmp(&b)
}

/// Flattens `i32` values into the raw-byte form the engine operates on.
pub fn to_raw(vals: &[i32]) -> Vec<u8> {
    vals.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Reads raw bytes back as `i32` values.
pub fn from_raw(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks_exact(I32_STRIDE)
        .map(|c| i32::from_ne_bytes(c.try_into().unwrap()))
        .collect()
}

// --- Private ---

fn new_seed() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = rand::rngs::StdRng::from(new_seed());

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
