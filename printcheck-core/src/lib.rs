//! Board-agnostic self-check logic for the printer firmware
//!
//! This crate contains the diagnostics that run from the touchscreen
//! "self check" page, independent of any specific board or UI toolkit:
//!
//! - Collaborator traits (thermal manager, motion queue, endstops, display)
//! - The self-check sequencer and its step/result/fault types
//! - Configuration types and their binary persistence

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod selfcheck;
pub mod traits;

#[cfg(test)]
pub(crate) mod sim;

pub use selfcheck::{CheckStep, ExitDecision, Machine, SelfCheck, StepResult};
