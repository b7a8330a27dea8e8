pub use checker::{check_ast, check_file, check_source, LinterResult};

pub mod analyze;
pub mod checker;
mod checkers;
pub mod qualified_name;
pub mod registry;
pub mod semantic;
pub mod settings;

#[cfg(test)]
mod test;
