//! Bridge between the UI thread and the async profile fetcher.

pub mod commands;
pub mod runtime;
