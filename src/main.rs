use anyhow::Result;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use biotk::align::{self, SwParams};
use biotk::io;
use biotk::stats;
use biotk::util::{dna, table};

#[derive(Parser, Debug)]
#[command(name = "biotk", author, version, about = "Small bioinformatics toolkit: stats and local alignment", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute GC% for every sequence in a FASTA file
    Gc {
        /// Path to FASTA
        fasta: String,
    },
    /// Reverse complement a DNA sequence
    Revcomp {
        sequence: String,
    },
    /// Smith-Waterman local alignment (linear gap penalty)
    Sw {
        a: String,
        b: String,
        #[arg(long = "match", default_value_t = 2, allow_negative_numbers = true)]
        match_score: i32,
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        mismatch: i32,
        #[arg(long, default_value_t = -2, allow_negative_numbers = true)]
        gap: i32,
    },
    /// Per-cycle FASTQ stats (mean Q and N fraction)
    FastqStats {
        fastq: String,
        /// Stop after this many reads
        #[arg(long, default_value_t = 10_000)]
        max_reads: usize,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// VCF quick stats (SNP/INDEL counts and Ti/Tv)
    VcfStats {
        vcf: String,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Find open reading frames in FASTA sequences
    Orfs {
        fasta: String,
        /// Minimum protein length in amino acids
        #[arg(long, default_value_t = 30)]
        min_aa: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Gc { fasta } => run_gc(&fasta),
        Commands::Revcomp { sequence } => run_revcomp(&sequence),
        Commands::Sw { a, b, match_score, mismatch, gap } => {
            run_sw(&a, &b, SwParams { match_score, mismatch, gap })
        }
        Commands::FastqStats { fastq, max_reads, json } => run_fastq_stats(&fastq, max_reads, json),
        Commands::VcfStats { vcf, json } => run_vcf_stats(&vcf, json),
        Commands::Orfs { fasta, min_aa } => run_orfs(&fasta, min_aa),
    }
}

fn run_gc(fasta_path: &str) -> Result<()> {
    let records = io::fasta::open(fasta_path)?.collect_records()?;
    log::info!("loaded {} records from {}", records.len(), fasta_path);

    // order-preserving parallel map over the batch
    let rows: Vec<(String, f64)> = records
        .par_iter()
        .map(|rec| (rec.header(), dna::gc_content(&rec.seq) * 100.0))
        .collect();

    for (header, gc) in rows {
        println!("{}\t{:.2}", header, gc);
    }
    Ok(())
}

fn run_revcomp(sequence: &str) -> Result<()> {
    let rc = dna::revcomp(sequence.as_bytes());
    println!("{}", String::from_utf8_lossy(&rc));
    Ok(())
}

fn run_sw(a: &str, b: &str, params: SwParams) -> Result<()> {
    let res = align::smith_waterman(a, b, params);
    println!("score\t{}", res.score);
    println!("{}", res.aligned_a);
    println!("{}", res.aligned_b);
    Ok(())
}

fn run_fastq_stats(fastq_path: &str, max_reads: usize, json: bool) -> Result<()> {
    let mut reader = io::fastq::open(fastq_path)?;
    let cycles = stats::fastq::cycle_stats(&mut reader, max_reads)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cycles)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = cycles
        .iter()
        .map(|c| {
            vec![
                c.cycle.to_string(),
                format!("{:.2}", c.mean_q),
                format!("{:.2}%", 100.0 * c.frac_n),
            ]
        })
        .collect();
    print!("{}", table::render_table(&rows, Some(&["Cycle", "MeanQ", "FracN"])));
    Ok(())
}

fn run_vcf_stats(vcf_path: &str, json: bool) -> Result<()> {
    let mut reader = io::vcf::open(vcf_path)?;
    let s = stats::vcf::vcf_stats(&mut reader)?;

    if json {
        let doc = serde_json::json!({
            "snp": s.snp,
            "indel": s.indel,
            "ti": s.ti,
            "tv": s.tv,
            "titv": s.titv(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = [
        ("snp", s.snp as f64),
        ("indel", s.indel as f64),
        ("ti", s.ti as f64),
        ("tv", s.tv as f64),
        ("titv", s.titv()),
    ]
    .iter()
    .map(|(k, v)| vec![(*k).to_string(), format!("{:.4}", v)])
    .collect();
    print!("{}", table::render_table(&rows, Some(&["Metric", "Value"])));
    Ok(())
}

fn run_orfs(fasta_path: &str, min_aa: usize) -> Result<()> {
    let mut reader = io::fasta::open(fasta_path)?;
    while let Some(rec) = reader.next_record()? {
        for orf in dna::find_orfs(&rec.seq, min_aa) {
            println!("{}\t{}\t{}\t{}", rec.header(), orf.start, orf.end, orf.protein);
        }
    }
    Ok(())
}
