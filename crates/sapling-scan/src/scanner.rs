//! Batch trial decryption
//!
//! A [`Scanner`] tries every output of a batch against every incoming
//! viewing key on a dedicated rayon pool and keeps the notes whose plaintext
//! version is allowed at the batch's height (ZIP-212).

use crate::compact::{try_decrypt_compact_output, CompactNote, CompactOutput};
use crate::Result;
use rayon::prelude::*;
use sapling_core::note::decrypt_note;
use sapling_core::{
    Error as CoreError, IncomingViewingKey, Note, NoteVersion, OutputDescription, SaplingContext,
};
use sapling_params::{Network, NetworkType, Zip212Enforcement};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Below this many outputs a batch is scanned on the calling thread.
const MIN_PARALLEL_OUTPUTS: usize = 256;

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Upper bound on trial-decryption threads
    pub max_parallel: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_parallel: num_cpus::get().max(1),
        }
    }
}

/// A note found in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedNote<N = Note> {
    /// Position of the output in the batch
    pub output_index: usize,
    /// Position of the matching key in the key list
    pub ivk_index: usize,
    /// The decrypted note
    pub note: N,
}

/// Parallel trial decryption over output batches
pub struct Scanner {
    ctx: Arc<SaplingContext>,
    network: Network,
    config: ScanConfig,
    threads: usize,
    pool: rayon::ThreadPool,
}

impl Scanner {
    /// Create a scanner with its own thread pool.
    pub fn new(ctx: Arc<SaplingContext>, network: NetworkType, config: ScanConfig) -> Result<Self> {
        let cpu_limit = num_cpus::get().max(1);
        let threads = std::cmp::min(config.max_parallel.max(1), cpu_limit);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("trial-decrypt-{}", i))
            .build()?;

        tracing::info!(
            "Scanner ready for {} with {} trial-decrypt threads",
            network,
            threads
        );

        Ok(Self {
            ctx,
            network: Network::from_type(network),
            config,
            threads,
            pool,
        })
    }

    /// Network whose activation heights drive ZIP-212 enforcement
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Configuration the scanner was built with
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Trial-decrypt threads in the pool, `max_parallel` capped at the CPU count
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Shared decryption context
    pub fn context(&self) -> &SaplingContext {
        &self.ctx
    }

    /// Trial-decrypt full outputs mined at `height`.
    ///
    /// Results are ordered by output index, then key index.
    pub fn scan_outputs(
        &self,
        height: u32,
        ivks: &[IncomingViewingKey],
        outputs: &[OutputDescription],
    ) -> Vec<ScannedNote> {
        let enforcement = Zip212Enforcement::at_height(&self.network, height);
        self.scan(ivks, outputs, |output_index, output| {
            self.scan_full_output(enforcement, ivks, output_index, output)
        })
    }

    /// Trial-decrypt compact outputs mined at `height`.
    pub fn scan_compact(
        &self,
        height: u32,
        ivks: &[IncomingViewingKey],
        outputs: &[CompactOutput],
    ) -> Vec<ScannedNote<CompactNote>> {
        let enforcement = Zip212Enforcement::at_height(&self.network, height);
        self.scan(ivks, outputs, |output_index, output| {
            let mut found = Vec::new();
            for (ivk_index, ivk) in ivks.iter().enumerate() {
                match try_decrypt_compact_output(&self.ctx, ivk, output) {
                    Ok(note) => {
                        if accepted(enforcement, note.version(), output_index) {
                            found.push(ScannedNote {
                                output_index,
                                ivk_index,
                                note,
                            });
                        }
                    }
                    Err(crate::Error::Core(e)) if e.is_recoverable() => {}
                    Err(e) => {
                        tracing::debug!(
                            "Skipping malformed compact output {}: {}",
                            output_index,
                            e
                        );
                        break;
                    }
                }
            }
            found
        })
    }

    fn scan_full_output(
        &self,
        enforcement: Zip212Enforcement,
        ivks: &[IncomingViewingKey],
        output_index: usize,
        output: &OutputDescription,
    ) -> Vec<ScannedNote> {
        let decoded = output.epk().and_then(|epk| Ok((epk, output.cmu()?)));
        let (epk, cmu) = match decoded {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!("Skipping malformed output {}: {}", output_index, e);
                return Vec::new();
            }
        };

        let mut found = Vec::new();
        for (ivk_index, ivk) in ivks.iter().enumerate() {
            match decrypt_note(&self.ctx, ivk, &epk, &cmu, &output.enc_ciphertext) {
                Ok(note) => {
                    if accepted(enforcement, note.version(), output_index) {
                        found.push(ScannedNote {
                            output_index,
                            ivk_index,
                            note,
                        });
                    }
                }
                Err(e) if e.is_recoverable() => {}
                Err(CoreError::UnsupportedVersion(v)) => {
                    tracing::warn!(
                        "Output {} has unsupported plaintext version {:#04x}",
                        output_index,
                        v
                    );
                }
                Err(e) => {
                    tracing::debug!(
                        "Skipping output {} for key {}: {} ({})",
                        output_index,
                        ivk_index,
                        e,
                        e.category()
                    );
                }
            }
        }
        found
    }

    fn scan<O, N, F>(
        &self,
        ivks: &[IncomingViewingKey],
        outputs: &[O],
        scan_one: F,
    ) -> Vec<ScannedNote<N>>
    where
        O: Sync,
        N: Send,
        F: Fn(usize, &O) -> Vec<ScannedNote<N>> + Sync,
    {
        if ivks.is_empty() || outputs.is_empty() {
            return Vec::new();
        }

        let scan_chunk = |start: usize, chunk: &[O]| -> Vec<ScannedNote<N>> {
            chunk
                .iter()
                .enumerate()
                .flat_map(|(i, output)| scan_one(start + i, output))
                .collect()
        };

        let chunk_size = match self.chunk_size(outputs.len()) {
            Some(size) => size,
            None => return scan_chunk(0, outputs),
        };

        // Chunks are collected in order, so results stay sorted by output index.
        self.pool.install(|| {
            outputs
                .par_chunks(chunk_size)
                .enumerate()
                .map(|(n, chunk)| scan_chunk(n * chunk_size, chunk))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        })
    }

    /// Chunk length for a parallel scan of `len` outputs, or `None` when the
    /// batch is scanned on the calling thread.
    fn chunk_size(&self, len: usize) -> Option<usize> {
        if self.threads == 1 || len < MIN_PARALLEL_OUTPUTS {
            return None;
        }
        let chunk_size = len.div_ceil(self.threads).max(MIN_PARALLEL_OUTPUTS);
        (len.div_ceil(chunk_size) > 1).then_some(chunk_size)
    }
}

fn accepted(enforcement: Zip212Enforcement, version: NoteVersion, output_index: usize) -> bool {
    if enforcement.accepts(version.leadbyte()) {
        return true;
    }
    tracing::warn!(
        "Dropping note in output {}: plaintext version {:?} not allowed ({:?})",
        output_index,
        version,
        enforcement
    );
    false
}
