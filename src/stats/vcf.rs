use anyhow::Result;
use serde::Serialize;
use std::io::BufRead;

use crate::io::vcf::VcfReader;

/// Variant tallies over one VCF: SNP/indel counts and the
/// transition/transversion breakdown of the SNPs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VcfStats {
    pub snp: u64,
    pub indel: u64,
    pub ti: u64,
    pub tv: u64,
}

impl VcfStats {
    /// Ti/Tv ratio; 0.0 when no transversions were seen.
    pub fn titv(&self) -> f64 {
        if self.tv == 0 {
            0.0
        } else {
            self.ti as f64 / self.tv as f64
        }
    }

    fn record(&mut self, ref_allele: &str, alt: &str) {
        let r = ref_allele.to_ascii_uppercase();
        for a in alt.split(',') {
            let a = a.to_ascii_uppercase();
            if r.len() == 1 && a.len() == 1 {
                self.snp += 1;
                if is_transition(&r, &a) {
                    self.ti += 1;
                } else {
                    self.tv += 1;
                }
            } else {
                self.indel += 1;
            }
        }
    }
}

fn is_transition(r: &str, a: &str) -> bool {
    matches!(
        (r, a),
        ("A", "G") | ("G", "A") | ("C", "T") | ("T", "C")
    )
}

/// Tally SNP/indel counts and Ti/Tv over every record in the reader.
/// Multi-allelic sites contribute one tally per comma-separated ALT.
pub fn vcf_stats<R: BufRead>(reader: &mut VcfReader<R>) -> Result<VcfStats> {
    let mut stats = VcfStats::default();
    let mut records = 0u64;
    while let Some(rec) = reader.next_record()? {
        records += 1;
        stats.record(&rec.ref_allele, &rec.alt);
    }
    log::debug!("tallied {} VCF records", records);
    Ok(stats)
}
