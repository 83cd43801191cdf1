/// Fraction of G/C bases in `seq`, case-insensitive. 0.0 for empty input.
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq
        .iter()
        .filter(|&&b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    gc as f64 / seq.len() as f64
}

/// Watson-Crick complement of one base. Uppercases first; characters
/// outside {A, T, G, C} pass through unchanged (N stays N).
#[inline]
pub fn complement(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        other => other,
    }
}

pub fn revcomp(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq.iter().rev() {
        out.push(complement(b));
    }
    out
}

/// Standard genetic code. Input codon must already be uppercased DNA.
fn codon_to_aa(codon: &[u8]) -> u8 {
    match codon {
        b"TTT" | b"TTC" => b'F',
        b"TTA" | b"TTG" | b"CTT" | b"CTC" | b"CTA" | b"CTG" => b'L',
        b"ATT" | b"ATC" | b"ATA" => b'I',
        b"ATG" => b'M',
        b"GTT" | b"GTC" | b"GTA" | b"GTG" => b'V',
        b"TCT" | b"TCC" | b"TCA" | b"TCG" | b"AGT" | b"AGC" => b'S',
        b"CCT" | b"CCC" | b"CCA" | b"CCG" => b'P',
        b"ACT" | b"ACC" | b"ACA" | b"ACG" => b'T',
        b"GCT" | b"GCC" | b"GCA" | b"GCG" => b'A',
        b"TAT" | b"TAC" => b'Y',
        b"TAA" | b"TAG" | b"TGA" => b'*',
        b"CAT" | b"CAC" => b'H',
        b"CAA" | b"CAG" => b'Q',
        b"AAT" | b"AAC" => b'N',
        b"AAA" | b"AAG" => b'K',
        b"GAT" | b"GAC" => b'D',
        b"GAA" | b"GAG" => b'E',
        b"TGT" | b"TGC" => b'C',
        b"TGG" => b'W',
        b"CGT" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => b'R',
        b"GGT" | b"GGC" | b"GGA" | b"GGG" => b'G',
        _ => b'X',
    }
}

fn normalize_coding(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| {
            let up = b.to_ascii_uppercase();
            if up == b'U' { b'T' } else { up }
        })
        .collect()
}

/// Translate a DNA/RNA sequence in frame 0. Trailing partial codons are
/// dropped; unknown codons become 'X'.
pub fn translate(seq: &[u8]) -> String {
    let seq = normalize_coding(seq);
    let mut aa = String::with_capacity(seq.len() / 3);
    for codon in seq.chunks_exact(3) {
        aa.push(codon_to_aa(codon) as char);
    }
    aa
}

/// An open reading frame: half-open `[start, end)` byte range in the input
/// plus the translated protein (without the stop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    pub protein: String,
}

/// Scan every position for an ATG, extend in-frame to the first stop codon,
/// and keep ORFs whose protein is at least `min_aa` long. Overlapping and
/// nested starts are all reported.
pub fn find_orfs(seq: &[u8], min_aa: usize) -> Vec<Orf> {
    let seq = normalize_coding(seq);
    let mut out = Vec::new();
    if seq.len() < 3 {
        return out;
    }

    for i in 0..seq.len() - 2 {
        if &seq[i..i + 3] != b"ATG" {
            continue;
        }
        let mut j = i;
        while j + 3 <= seq.len() {
            let codon = &seq[j..j + 3];
            if matches!(codon, b"TAA" | b"TAG" | b"TGA") {
                let protein = translate(&seq[i..j]);
                if protein.len() >= min_aa {
                    out.push(Orf { start: i, end: j + 3, protein });
                }
                break;
            }
            j += 3;
        }
    }
    out
}
