pub mod diagnostic;
pub mod error;
pub mod src_span;

pub mod prelude {
    pub use super::{diagnostic::*, error::*, src_span::*};
}
