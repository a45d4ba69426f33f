#![forbid(unsafe_code)]

mod error;
pub mod queue;
pub mod stack;
pub mod word_cloud;

pub use error::{Error, Result};
pub use queue::TwoStackQueue;
pub use stack::{Stack, StackOps};
pub use word_cloud::{split_words, WordCloud, WordCounts, Words};
