//! # biotk
//!
//! A small bioinformatics toolkit for everyday sequence chores.
//!
//! This crate provides:
//!
//! - **Local alignment**: Smith-Waterman with a linear gap penalty and a
//!   deterministic tie-break policy
//! - **Format readers**: pull-based FASTA / FASTQ / VCF parsers over any
//!   [`BufRead`](std::io::BufRead)
//! - **Statistics**: per-record GC content, per-cycle FASTQ quality and
//!   N-fraction, VCF SNP/indel counts with Ti/Tv ratio
//! - **Sequence utilities**: reverse complement, translation, ORF scanning
//!
//! ## Quick example
//!
//! ```rust
//! use biotk::align::{smith_waterman, SwParams};
//!
//! let res = smith_waterman("ACACACTA", "AGCACACA", SwParams::default());
//! assert_eq!(res.score, 10);
//! assert_eq!(res.aligned_a.len(), res.aligned_b.len());
//! ```
//!
//! ## Modules
//!
//! - [`align`] — Smith-Waterman local alignment engine
//! - [`io`] — FASTA / FASTQ / VCF file parsing
//! - [`stats`] — per-cycle FASTQ and VCF summary statistics
//! - [`util`] — GC content, reverse complement, translation, tables

pub mod align;
pub mod io;
pub mod stats;
pub mod util;
