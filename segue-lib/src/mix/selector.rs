//! Random walk over the interior segment pool.

use log::trace;
use rand::Rng;

use crate::error::MixError;
use crate::markers::{InteriorPool, Segment};

/// Picks interior segments uniformly at random, never the previous pick twice in a row.
#[derive(Debug, Clone)]
pub struct SegmentSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> SegmentSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw an index from `0..pool_len` excluding `previous`.
    ///
    /// # Errors
    /// [`MixError::NoAlternativeSegment`] whenever `pool_len < 2`, even on the
    /// first draw, since the walk cannot keep going past a single segment.
    pub fn pick_index(
        &mut self,
        pool_len: usize,
        previous: Option<usize>,
    ) -> Result<usize, MixError> {
        if pool_len < 2 {
            return Err(MixError::NoAlternativeSegment {
                pool_size: pool_len,
            });
        }

        let index = match previous.filter(|&p| p < pool_len) {
            Some(previous) => {
                // Draw from the pool minus one slot, then step over the excluded index.
                let draw = self.rng.gen_range(0..pool_len - 1);
                if draw >= previous {
                    draw + 1
                } else {
                    draw
                }
            }
            None => self.rng.gen_range(0..pool_len),
        };

        trace!("picked interior index {} (previous {:?})", index, previous);
        Ok(index)
    }

    /// Pick the next interior segment.
    pub fn pick_next(
        &mut self,
        pool: &InteriorPool,
        previous: Option<usize>,
    ) -> Result<(usize, Segment), MixError> {
        let index = self.pick_index(pool.len(), previous)?;
        let segment = pool
            .get(index)
            .cloned()
            .ok_or(MixError::NoAlternativeSegment {
                pool_size: pool.len(),
            })?;
        Ok((index, segment))
    }
}
