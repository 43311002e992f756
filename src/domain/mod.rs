pub mod tuning;

pub use tuning::Tuning;
