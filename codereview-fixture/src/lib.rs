// Demonstration run and output rendering for the fixture binary
pub mod demo;
pub mod output;
