use anyhow::Result;
use serde::Serialize;
use std::io::BufRead;

use crate::io::fastq::FastqReader;

/// Per-cycle statistics for one read position (1-based cycle number).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleStat {
    pub cycle: usize,
    pub mean_q: f64,
    pub frac_n: f64,
}

#[derive(Default)]
struct CycleAcc {
    count: u64,
    q_sum: u64,
    n_count: u64,
}

/// Per-cycle mean Phred quality and N-base fraction over at most
/// `max_reads` reads. Reads of differing length extend the cycle vector;
/// cycles with no observations report 0.0 for both metrics.
pub fn cycle_stats<R: BufRead>(
    reader: &mut FastqReader<R>,
    max_reads: usize,
) -> Result<Vec<CycleStat>> {
    let mut acc: Vec<CycleAcc> = Vec::new();
    let mut reads = 0usize;

    while let Some(rec) = reader.next_record()? {
        reads += 1;
        if reads > max_reads {
            break;
        }

        if acc.len() < rec.seq.len() {
            acc.resize_with(rec.seq.len(), CycleAcc::default);
        }

        for (i, (&b, &q)) in rec.seq.iter().zip(rec.qual.iter()).enumerate() {
            let slot = &mut acc[i];
            slot.count += 1;
            // Phred+33; clamp below '!' to 0 instead of underflowing
            slot.q_sum += u64::from(q.saturating_sub(33));
            if b.to_ascii_uppercase() == b'N' {
                slot.n_count += 1;
            }
        }
    }

    log::debug!("aggregated {} cycles over {} reads", acc.len(), reads.min(max_reads));

    Ok(acc
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let (mean_q, frac_n) = if a.count > 0 {
                (a.q_sum as f64 / a.count as f64, a.n_count as f64 / a.count as f64)
            } else {
                (0.0, 0.0)
            };
            CycleStat { cycle: i + 1, mean_q, frac_n }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &[u8]) -> FastqReader<Cursor<&[u8]>> {
        FastqReader::new(Cursor::new(data))
    }

    #[test]
    fn stats_single_read() {
        // 'I' is Phred 40, '!' is Phred 0
        let data = b"@r1\nACGN\n+\nIII!\n";
        let stats = cycle_stats(&mut reader(data), 100).unwrap();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0], CycleStat { cycle: 1, mean_q: 40.0, frac_n: 0.0 });
        assert_eq!(stats[3], CycleStat { cycle: 4, mean_q: 0.0, frac_n: 1.0 });
    }

    #[test]
    fn stats_mixed_lengths() {
        let data = b"@r1\nAC\n+\nII\n@r2\nACGT\n+\nIIII\n";
        let stats = cycle_stats(&mut reader(data), 100).unwrap();
        assert_eq!(stats.len(), 4);
        // cycles 3 and 4 observed by one read only
        assert_eq!(stats[2].mean_q, 40.0);
        assert_eq!(stats[2].frac_n, 0.0);
    }

    #[test]
    fn stats_respects_max_reads() {
        let data = b"@r1\nNN\n+\nII\n@r2\nAA\n+\nII\n@r3\nAA\n+\nII\n";
        let stats = cycle_stats(&mut reader(data), 1).unwrap();
        assert_eq!(stats.len(), 2);
        // only the first (all-N) read counted
        assert_eq!(stats[0].frac_n, 1.0);
    }

    #[test]
    fn stats_lowercase_n_counted() {
        let data = b"@r1\nnA\n+\nII\n";
        let stats = cycle_stats(&mut reader(data), 100).unwrap();
        assert_eq!(stats[0].frac_n, 1.0);
        assert_eq!(stats[1].frac_n, 0.0);
    }

    #[test]
    fn stats_empty_input() {
        let stats = cycle_stats(&mut reader(b""), 100).unwrap();
        assert!(stats.is_empty());
    }
}
