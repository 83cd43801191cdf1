pub mod fastq;
pub mod vcf;
