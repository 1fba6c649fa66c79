use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] DieselError),
    #[error("store connection error: {0}")]
    Pool(#[from] PoolError),
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("answer generation failed: {0}")]
    Generation(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
