pub mod cli;
pub mod error;
pub mod excel;
pub mod extract;
pub mod matcher;
pub mod pipeline;
pub mod scanner;
