mod error;
mod decode;

pub use error::*;
pub use decode::*;

type BdecodeResult<T> = std::result::Result<T, BdecodeError>;
