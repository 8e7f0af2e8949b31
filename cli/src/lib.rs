// SPDX-License-Identifier: MIT OR Apache-2.0

//! SOS CLI - terminal front-end for the SOS board engine
//!
//! Reads typed commands, forwards placements into `sos_core::Board`,
//! lets computer players move through the advisor and renders the
//! board as ASCII.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::Command;
pub use config::GameConfig;
pub use session::{Outcome, Session};
