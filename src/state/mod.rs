pub mod restart;

pub use restart::PendingRestart;
