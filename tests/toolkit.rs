use std::fs;
use std::path::PathBuf;

use biotk::align::{smith_waterman, SwParams};
use biotk::io;
use biotk::stats;
use biotk::util::dna;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("biotk-test-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn gc_over_parsed_fasta() {
    let path = write_temp("gc.fa", ">seq1 demo\nGCGC\ngc\n>seq2\nATAT\n");
    let records = io::fasta::open(path.to_str().unwrap())
        .unwrap()
        .collect_records()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].header(), "seq1 demo");
    assert_eq!(dna::gc_content(&records[0].seq), 1.0);
    assert_eq!(dna::gc_content(&records[1].seq), 0.0);
}

#[test]
fn cycle_stats_over_parsed_fastq() {
    let path = write_temp("reads.fq", "@r1\nACGN\n+\nIIII\n@r2\nACG\n+\nIII\n");
    let mut reader = io::fastq::open(path.to_str().unwrap()).unwrap();
    let cycles = stats::fastq::cycle_stats(&mut reader, 10_000).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(cycles.len(), 4);
    assert_eq!(cycles[0].mean_q, 40.0);
    assert_eq!(cycles[3].frac_n, 1.0);
}

#[test]
fn tallies_over_parsed_vcf() {
    let path = write_temp(
        "calls.vcf",
        "##fileformat=VCFv4.2\n\
         #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
         chr1\t10\t.\tA\tG\t.\tPASS\t.\n\
         chr1\t20\t.\tAT\tA\t.\tPASS\t.\n",
    );
    let mut reader = io::vcf::open(path.to_str().unwrap()).unwrap();
    let s = stats::vcf::vcf_stats(&mut reader).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(s.snp, 1);
    assert_eq!(s.indel, 1);
    assert_eq!(s.ti, 1);
}

#[test]
fn align_sequences_from_fasta() {
    let path = write_temp("pair.fa", ">a\nACGTACGT\n>b\nACGTCGT\n");
    let records = io::fasta::open(path.to_str().unwrap())
        .unwrap()
        .collect_records()
        .unwrap();
    fs::remove_file(&path).unwrap();

    let a = String::from_utf8(records[0].seq.clone()).unwrap();
    let b = String::from_utf8(records[1].seq.clone()).unwrap();
    let res = smith_waterman(&a, &b, SwParams::default());
    assert_eq!(res.score, 12);
    assert_eq!(res.aligned_a, "ACGTACGT");
    assert_eq!(res.aligned_b, "ACGT-CGT");
}

#[test]
fn missing_file_reports_path() {
    let err = io::fasta::open("/no/such/file.fa").unwrap_err();
    assert!(err.to_string().contains("/no/such/file.fa"));
}
