use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::measure::SizeMeasurer;
use crate::split::Splitter;

/// Cooperative cancellation flag, shared between a caller and a running
/// normalization. Checked at pass boundaries only, so partial merges are
/// never observed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Converges a fragment sequence into one where every fragment fits the
/// configured size range, or reports why it cannot.
///
/// Two ordered phases per round: a shrink pass splits oversized fragments,
/// then a grow pass merges undersized ones. Rounds repeat until a round
/// changes nothing; every loop is bounded by `max_passes`. Fragments that
/// cannot be brought within bounds (an oversized fragment the splitter
/// cannot divide, or a sole undersized fragment with no merge candidate)
/// are accepted as-is.
pub struct Normalizer<'a> {
    splitter: &'a dyn Splitter,
    measurer: &'a dyn SizeMeasurer,
    config: &'a ChunkerConfig,
}

impl<'a> Normalizer<'a> {
    #[must_use]
    pub fn new(
        splitter: &'a dyn Splitter,
        measurer: &'a dyn SizeMeasurer,
        config: &'a ChunkerConfig,
    ) -> Self {
        Self {
            splitter,
            measurer,
            config,
        }
    }

    /// Normalize without a cancellation signal.
    pub fn normalize(&self, fragments: Vec<String>) -> Result<Vec<String>> {
        self.normalize_with_cancel(fragments, &CancelToken::new())
    }

    /// Normalize, checking `cancel` at the top of every pass.
    pub fn normalize_with_cancel(
        &self,
        mut fragments: Vec<String>,
        cancel: &CancelToken,
    ) -> Result<Vec<String>> {
        if fragments.is_empty() {
            return Ok(fragments);
        }

        for round in 1..=self.config.max_passes {
            let shrunk = self.shrink(fragments.clone(), cancel)?;
            let grown = self.grow(shrunk.clone(), cancel)?;

            let settled = shrunk == fragments && grown == shrunk;
            fragments = grown;
            if settled {
                log::debug!("normalization settled after {round} round(s)");
                return Ok(fragments);
            }
        }

        Err(ChunkerError::Stalled {
            passes: self.config.max_passes,
        })
    }

    /// Split oversized fragments until none changes any more.
    ///
    /// A fragment whose split makes no progress (no pieces, or a single
    /// piece identical to the input) is irreducible and kept as-is.
    fn shrink(&self, mut fragments: Vec<String>, cancel: &CancelToken) -> Result<Vec<String>> {
        for _ in 0..self.config.max_passes {
            if cancel.is_canceled() {
                return Err(ChunkerError::Canceled);
            }

            let sizes = self.measurer.measure_all(&fragments)?;
            let mut next = Vec::with_capacity(fragments.len());
            let mut progressed = false;

            for (fragment, size) in fragments.into_iter().zip(sizes) {
                if size <= self.config.max_chunk_size {
                    next.push(fragment);
                    continue;
                }

                let pieces = self.splitter.split(&fragment);
                let reducible =
                    pieces.len() > 1 || pieces.first().is_some_and(|piece| piece != &fragment);
                if reducible {
                    progressed = true;
                    next.extend(pieces);
                } else {
                    log::warn!(
                        "keeping irreducible oversized fragment (size {size} > max {})",
                        self.config.max_chunk_size
                    );
                    next.push(fragment);
                }
            }

            fragments = next;
            if !progressed {
                return Ok(fragments);
            }
        }

        Err(ChunkerError::Stalled {
            passes: self.config.max_passes,
        })
    }

    /// Merge undersized fragments until every fragment meets the minimum
    /// or merging stops reducing the fragment count.
    fn grow(&self, mut fragments: Vec<String>, cancel: &CancelToken) -> Result<Vec<String>> {
        for _ in 0..self.config.max_passes {
            if cancel.is_canceled() {
                return Err(ChunkerError::Canceled);
            }

            let sizes = self.measurer.measure_all(&fragments)?;
            if sizes
                .iter()
                .all(|&size| size >= self.config.min_chunk_size)
            {
                return Ok(fragments);
            }

            if fragments.len() == 1 {
                log::warn!(
                    "keeping sole undersized fragment (no merge candidate, min {})",
                    self.config.min_chunk_size
                );
                return Ok(fragments);
            }

            let before = fragments.len();
            fragments = merge_undersized(fragments, &sizes, self.config.min_chunk_size);
            if fragments.len() == before {
                return Ok(fragments);
            }
        }

        Err(ChunkerError::Stalled {
            passes: self.config.max_passes,
        })
    }
}

/// One merge sweep: undersized fragments accumulate into a pending buffer
/// instead of being emitted; the buffer flushes onto the previous emitted
/// fragment at the next emission point, or leads the emitted fragment when
/// nothing was emitted yet. Leftovers at end of scan append to the last
/// emission or become the sole output.
fn merge_undersized(fragments: Vec<String>, sizes: &[usize], min_size: usize) -> Vec<String> {
    let mut pending = String::new();
    let mut emitted: Vec<String> = Vec::new();

    for (fragment, &size) in fragments.into_iter().zip(sizes) {
        if size < min_size {
            pending.push_str(&fragment);
            continue;
        }

        if !pending.is_empty() {
            if let Some(last) = emitted.last_mut() {
                last.push_str(&pending);
                pending.clear();
                emitted.push(fragment);
            } else {
                pending.push_str(&fragment);
                emitted.push(std::mem::take(&mut pending));
            }
        } else {
            emitted.push(fragment);
        }
    }

    if !pending.is_empty() {
        if let Some(last) = emitted.last_mut() {
            last.push_str(&pending);
        } else {
            emitted.push(pending);
        }
    }

    emitted
}
