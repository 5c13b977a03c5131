#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod countdown;
#[cfg(feature = "std")]
mod driver;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod render;
mod ship;
pub mod shot;
mod target;
#[cfg(feature = "std")]
mod terminal;

pub use bitboard::{CellMask, CellMaskError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use countdown::*;
#[cfg(feature = "std")]
pub use driver::drive;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use render::Renderer;
pub use ship::*;
pub use target::*;
#[cfg(feature = "std")]
pub use terminal::*;
