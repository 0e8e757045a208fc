pub mod error;
pub mod parser;
pub mod settings;
pub mod sink;
pub mod source;

pub use error::ExtractError;
pub use parser::Record;
