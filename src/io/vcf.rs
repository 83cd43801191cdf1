use anyhow::Result;
use std::io::BufRead;

#[derive(Debug, Clone)]
pub struct VcfRecord {
    pub chrom: String,
    pub pos: u64,
    pub id: String,
    pub ref_allele: String,
    pub alt: String,
}

/// Pull reader over VCF data lines. Header (`#`) lines, blank lines, lines
/// with fewer than 5 columns, and lines with a non-integer POS are skipped
/// rather than reported as errors.
pub struct VcfReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> VcfReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false }
    }

    pub fn next_record(&mut self) -> Result<Option<VcfRecord>> {
        if self.done {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                return Ok(None);
            }
            let line = self.buf.trim_end_matches(|c| c == '\n' || c == '\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut cols = line.split('\t');
            let chrom = match cols.next() {
                Some(c) => c,
                None => continue,
            };
            let pos_str = match cols.next() {
                Some(c) => c,
                None => continue,
            };
            let id = match cols.next() {
                Some(c) => c,
                None => continue,
            };
            let ref_allele = match cols.next() {
                Some(c) => c,
                None => continue,
            };
            let alt = match cols.next() {
                Some(c) => c,
                None => continue,
            };

            let pos: u64 = match pos_str.parse() {
                Ok(p) => p,
                Err(_) => continue,
            };

            return Ok(Some(VcfRecord {
                chrom: chrom.to_string(),
                pos,
                id: id.to_string(),
                ref_allele: ref_allele.to_string(),
                alt: alt.to_string(),
            }));
        }
    }
}

/// Open a VCF file and return a buffered reader over it.
pub fn open(path: &str) -> Result<VcfReader<std::io::BufReader<std::fs::File>>> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open VCF '{}': {}", path, e))?;
    Ok(VcfReader::new(std::io::BufReader::new(fh)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
##fileformat=VCFv4.2\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
chr1\t100\trs1\tA\tG\t.\tPASS\t.\n\
chr1\tbadpos\trs2\tC\tT\t.\tPASS\t.\n\
chr2\t200\t.\tAT\tA\t.\tPASS\t.\n\
short\tline\n\
\n\
chr2\t300\t.\tG\tC,T\t.\tPASS\t.\n";

    #[test]
    fn parse_sample_vcf() {
        let mut r = VcfReader::new(Cursor::new(SAMPLE.as_bytes()));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.chrom, "chr1");
        assert_eq!(r1.pos, 100);
        assert_eq!(r1.id, "rs1");
        assert_eq!(r1.ref_allele, "A");
        assert_eq!(r1.alt, "G");

        // bad-pos and short lines are skipped silently
        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.chrom, "chr2");
        assert_eq!(r2.pos, 200);
        assert_eq!(r2.ref_allele, "AT");

        let r3 = r.next_record().unwrap().unwrap();
        assert_eq!(r3.alt, "C,T");
        assert_eq!(r3.pos, 300);

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn empty_input_yields_no_records() {
        let mut r = VcfReader::new(Cursor::new(b"" as &[u8]));
        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn header_only_input_yields_no_records() {
        let data = b"##fileformat=VCFv4.2\n#CHROM\tPOS\n";
        let mut r = VcfReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().unwrap().is_none());
    }
}
