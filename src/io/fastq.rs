use anyhow::{anyhow, Result};
use std::io::BufRead;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false }
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done { return Ok(None); }

        // header line starting with '@'
        self.buf.clear();
        let mut n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { self.done = true; return Ok(None); }
        if !self.buf.starts_with('@') {
            return Err(anyhow!("FASTQ header not starting with '@'"));
        }
        let header = self.buf[1..].trim_end().to_string();
        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        // sequence line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { return Err(anyhow!("unexpected EOF after header")); }
        let seq = self.buf.trim_end().as_bytes().to_vec();

        // plus line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 || !self.buf.starts_with('+') { return Err(anyhow!("missing '+' line")); }

        // quality line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { return Err(anyhow!("missing quality line")); }
        let qual = self.buf.trim_end().as_bytes().to_vec();

        // If quality length is shorter than seq (line-wrapped seq not supported here), error
        if qual.len() != seq.len() { return Err(anyhow!("seq/qual length mismatch")); }

        Ok(Some(FastqRecord { id, desc, seq, qual }))
    }
}

/// Open a FASTQ file and return a buffered reader over it.
pub fn open(path: &str) -> Result<FastqReader<std::io::BufReader<std::fs::File>>> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open FASTQ '{}': {}", path, e))?;
    Ok(FastqReader::new(std::io::BufReader::new(fh)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fastq() {
        let data = b"@r1 lane1\nACGT\n+\nIIII\n@r2\nNNNN\n+r2\n!!!!\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "r1");
        assert_eq!(r1.desc.as_deref(), Some("lane1"));
        assert_eq!(r1.seq, b"ACGT");
        assert_eq!(r1.qual, b"IIII");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "r2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"NNNN");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn reject_bad_header() {
        let data = b"r1\nACGT\n+\nIIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }

    #[test]
    fn reject_missing_plus_line() {
        let data = b"@r1\nACGT\nIIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }

    #[test]
    fn reject_length_mismatch() {
        let data = b"@r1\nACGT\n+\nII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }
}
