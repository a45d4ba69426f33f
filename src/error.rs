use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `dequeue` was called while neither stack held an item.
    #[error("can't dequeue from empty queue")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, Error>;
