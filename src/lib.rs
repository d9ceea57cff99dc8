pub mod answers;
pub mod catalog;
pub mod output;
pub mod quiz;
pub mod scoring;
