//! Opcode handler bodies referenced by the dispatch tables.
//!
//! Every handler shares one signature: it receives the CPU, the bus and
//! the opcode byte that selected it, and returns the T-cycles to add on
//! top of the descriptor's base cost. Fixed-cost instructions return 0;
//! variable-cost ones (the conditional branches) return the full cost and
//! carry a zero base in the table.

mod alu8;
mod cb;
mod control;
mod incdec;
mod ld;
mod misc;

pub(super) use alu8::*;
pub(super) use cb::*;
pub(super) use control::*;
pub(super) use incdec::*;
pub(super) use ld::*;
pub(super) use misc::*;
