//! Fan-out/join over disjoint row bands of a row-major buffer
//!
//! Each worker receives exclusive ownership of a contiguous run of rows via
//! `split_at_mut`, so no two workers can ever write the same element and no
//! locking is required. `std::thread::scope` provides the join point.

use std::ops::Range;

/// Number of workers to use by default: one per available core, at least one
pub fn worker_count() -> usize {
    num_cpus::get().max(1)
}

/// Split `rows` into at most `workers` contiguous, non-overlapping ranges
///
/// Ranges are returned in ascending order and together cover `0..rows`.
/// Earlier ranges receive one extra row when the split is uneven.
pub fn partition_rows(rows: usize, workers: usize) -> Vec<Range<usize>> {
    if rows == 0 {
        return Vec::new();
    }

    let workers = workers.clamp(1, rows);
    let rows_per_worker = rows / workers;
    let remainder = rows % workers;

    let mut bands = Vec::with_capacity(workers);
    let mut start = 0;
    for worker in 0..workers {
        let extra = usize::from(worker < remainder);
        let end = start + rows_per_worker + extra;
        bands.push(start..end);
        start = end;
    }
    bands
}

/// Run `work` once per band, each call owning only that band's rows
///
/// `buffer` is interpreted as rows of `row_len` elements. Bands must be
/// ascending and non-overlapping; rows between bands are left untouched and
/// bands that run past the end of the buffer are truncated. A single band runs
/// on the calling thread.
pub fn for_each_band<T, F>(buffer: &mut [T], row_len: usize, bands: &[Range<usize>], work: F)
where
    T: Send,
    F: Fn(Range<usize>, &mut [T]) + Sync,
{
    let chunks = split_bands(buffer, row_len, bands);

    if chunks.len() <= 1 {
        for (band, chunk) in chunks {
            work(band, chunk);
        }
        return;
    }

    let work = &work;
    std::thread::scope(|scope| {
        for (band, chunk) in chunks {
            scope.spawn(move || work(band, chunk));
        }
    });
}

fn split_bands<'a, T>(
    buffer: &'a mut [T],
    row_len: usize,
    bands: &[Range<usize>],
) -> Vec<(Range<usize>, &'a mut [T])> {
    let mut chunks = Vec::with_capacity(bands.len());
    let mut remaining = buffer;
    let mut consumed_rows = 0;

    for band in bands {
        if band.start < consumed_rows || band.is_empty() {
            continue;
        }

        let skip = (band.start - consumed_rows) * row_len;
        let Some((_, rest)) = std::mem::take(&mut remaining).split_at_mut_checked(skip) else {
            break;
        };

        let available_rows = if row_len == 0 { 0 } else { rest.len() / row_len };
        let rows = band.len().min(available_rows);
        let (chunk, tail) = rest.split_at_mut(rows * row_len);

        chunks.push((band.start..band.start + rows, chunk));
        remaining = tail;
        consumed_rows = band.start + rows;
    }

    chunks
}
