use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot write metadata report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
