pub mod dna;
pub mod strcmp;
