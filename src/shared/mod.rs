pub mod constants;
pub mod matching;
