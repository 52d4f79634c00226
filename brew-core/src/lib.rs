pub mod eval;
pub mod lexer;
pub mod parser;
pub mod runner;
pub mod utils;

pub mod prelude {
    pub use super::utils::prelude::*;
}
