//! The possibility library: named recipes describing how regions of the
//! plane are filled with labeled rectangles.

mod library;
mod possibility;
mod spacing;

pub use library::*;
pub use possibility::*;
pub use spacing::*;
