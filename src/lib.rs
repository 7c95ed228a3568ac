mod failure;
mod render;
mod requests;

pub use failure::Error;
pub use requests::*;

pub type Result<T> = std::result::Result<T, Error>;
