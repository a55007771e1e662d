mod param;
mod tag;

pub use param::*;
pub use tag::*;
