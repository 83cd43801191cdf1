use anyhow::Result;
use std::io::BufRead;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

impl FastaRecord {
    /// Header as displayed in reports: id plus description when present.
    pub fn header(&self) -> String {
        match &self.desc {
            Some(d) => format!("{} {}", self.id, d),
            None => self.id.clone(),
        }
    }
}

#[derive(Debug)]
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    let h = self.buf[1..].trim().to_string();
                    break h;
                }
            }
        };

        // Parse id and description
        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // Read sequence lines
        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                let h = self.buf[1..].trim().to_string();
                self.peek_header = Some(h);
                break;
            }
            for &b in self.buf.as_bytes() {
                match b {
                    b'\n' | b'\r' | b' ' | b'\t' => {}
                    _ => seq.push(b.to_ascii_uppercase()),
                }
            }
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }

    /// Drain the reader into a vector of records.
    pub fn collect_records(&mut self) -> Result<Vec<FastaRecord>> {
        let mut out = Vec::new();
        while let Some(rec) = self.next_record()? {
            out.push(rec);
        }
        Ok(out)
    }
}

/// Open a FASTA file and return a buffered reader over it.
pub fn open(path: &str) -> Result<FastaReader<std::io::BufReader<std::fs::File>>> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open FASTA '{}': {}", path, e))?;
    Ok(FastaReader::new(std::io::BufReader::new(fh)))
}
