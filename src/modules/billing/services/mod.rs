pub mod calculator;
pub mod words;
