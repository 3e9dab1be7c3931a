pub use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no property named {0:?}")]
    UnknownProperty(String),
    #[error("property {0:?} is not invocable")]
    Invocation(String),
    #[error("property {0:?} is a method, not a data property")]
    NotData(String),
    #[error("cannot write property {0:?}: target is frozen")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, Error>;
