pub mod parser;
pub mod output;

pub use parser::ParserConfig;
pub use output::OutputConfig;
