pub mod dna;
pub mod table;
