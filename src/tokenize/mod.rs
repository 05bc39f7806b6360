// Tokenization — the black-box text-to-token step feeding the ranking pipeline.

pub mod entities;
pub mod traits;
pub mod tweet;
