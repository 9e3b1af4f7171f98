mod board;
mod piece;

#[cfg(test)]
mod tests;

pub use board::*;
pub use piece::*;
