mod block;
mod encoder;
pub mod galois;

pub use block::*;
pub use encoder::*;
