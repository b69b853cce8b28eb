use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    compile::fingerprint::{FrameFingerprint, fingerprint_tree},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    scene::visual::VisualTree,
    session::reel::Reel,
};

/// Batch evaluation of a frame range into visual trees.
///
/// Every frame is a pure function of its index, so chunks can be evaluated on a worker pool
/// and still come back in frame order.
pub fn render_frames(
    reel: &Reel,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<Vec<VisualTree>> {
    render_frames_with_stats(reel, range, threading).map(|(frames, _)| frames)
}

/// Threading options for batch evaluation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderThreading {
    /// Evaluate chunks on a rayon pool when `true`.
    pub parallel: bool,
    /// Chunk size in frames (0 is treated as 1).
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Summary of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Chunks scheduled.
    pub chunks: u64,
    /// Frames whose tree differs from every earlier frame in the batch.
    pub frames_distinct: u64,
}

/// Evaluate `range` and report batch statistics.
#[tracing::instrument(skip(reel, threading), fields(start = range.start.0, end = range.end.0))]
pub fn render_frames_with_stats(
    reel: &Reel,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<(Vec<VisualTree>, RenderStats)> {
    check_range(reel, range)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut out = Vec::with_capacity(range.len_frames() as usize);
    let mut seen = HashSet::<FrameFingerprint>::new();
    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| ReelError::evaluation(format!("invalid chunk range: {e}")))?;
        let frames = match &pool {
            Some(pool) => render_chunk_parallel(reel, chunk, pool)?,
            None => render_chunk_sequential(reel, chunk)?,
        };
        tracing::debug!(start = chunk_start, end = chunk_end, "chunk evaluated");
        for tree in &frames {
            if seen.insert(fingerprint_tree(tree)) {
                stats.frames_distinct += 1;
            }
        }
        stats.frames_total += frames.len() as u64;
        stats.chunks += 1;
        out.extend(frames);
        chunk_start = chunk_end;
    }
    Ok((out, stats))
}

/// Fingerprint every frame in `range`, in order.
pub fn fingerprint_frames(
    reel: &Reel,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<Vec<FrameFingerprint>> {
    let frames = render_frames(reel, range, threading)?;
    Ok(frames.iter().map(fingerprint_tree).collect())
}

fn check_range(reel: &Reel, range: FrameRange) -> ReelResult<()> {
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > reel.total_frames() {
        return Err(ReelError::validation(format!(
            "render range end {} is past the reel end ({})",
            range.end.0,
            reel.total_frames()
        )));
    }
    Ok(())
}

fn render_chunk_sequential(reel: &Reel, chunk: FrameRange) -> ReelResult<Vec<VisualTree>> {
    (chunk.start.0..chunk.end.0)
        .map(|f| reel.frame_tree(f as i64))
        .collect()
}

fn render_chunk_parallel(
    reel: &Reel,
    chunk: FrameRange,
    pool: &rayon::ThreadPool,
) -> ReelResult<Vec<VisualTree>> {
    pool.install(|| {
        (chunk.start.0..chunk.end.0)
            .into_par_iter()
            .map(|f| reel.frame_tree(f as i64))
            .collect::<ReelResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
