pub mod calculator;
pub mod filter;
pub mod logic;
pub mod normalizer;
