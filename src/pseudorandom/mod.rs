pub mod prg;

pub use prg::{schedule_cipher, PositionPrg};
