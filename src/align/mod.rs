pub mod sw;

pub use sw::{smith_waterman, SwParams, SwResult, Trace};
