//! The five pipeline stage transforms.
//!
//! Each stage is a free function from the previous cycle's latch contents
//! (plus shared engine state) to the next cycle's latch entry. None of them
//! reads a latch written in the same tick; the engine enforces that by
//! handing each stage the snapshot it is allowed to see.

mod decode;
mod execute;
mod fetch;
mod memory;
mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::memory_stage;
pub use writeback::writeback_stage;
