//! Sampling strategies for template selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of template indices.
///
/// Generators never call a random number generator directly; they ask a
/// sampler for an index into a candidate list.
pub trait Sampler {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform random sampler backed by a seedable RNG.
///
/// # Examples
///
/// ```
/// use menugram_templates::{RandomSampler, Sampler};
///
/// let mut a = RandomSampler::seeded(42);
/// let mut b = RandomSampler::seeded(42);
/// assert_eq!(a.pick(10), b.pick(10));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Sampler with a fixed seed; the same seed yields the same picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Sampler for RandomSampler {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Indices are reduced modulo the candidate count, so a sequence written for
/// one list stays valid for a shorter one.
///
/// # Examples
///
/// ```
/// use menugram_templates::{Sampler, SequenceSampler};
///
/// let mut sampler = SequenceSampler::new(vec![0, 5]);
/// assert_eq!(sampler.pick(3), 0);
/// assert_eq!(sampler.pick(3), 2);
/// assert_eq!(sampler.pick(3), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceSampler {
    indices: Vec<usize>,
    position: usize,
}

impl SequenceSampler {
    /// Sampler that returns `indices` in order, forever.
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }
}

impl Sampler for SequenceSampler {
    fn pick(&mut self, len: usize) -> usize {
        if self.indices.is_empty() || len == 0 {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position = (self.position + 1) % self.indices.len();
        index % len
    }
}

/// Pick one entry from a candidate list. An empty list yields `""`.
pub fn choose<S: Sampler + ?Sized>(sampler: &mut S, options: &[&'static str]) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let index = sampler.pick(options.len()) % options.len();
    options.get(index).copied().unwrap_or_default()
}
