//! Hardware and firmware adapters
//!
//! This crate provides concrete implementations of the collaborator
//! traits defined in printcheck-core:
//!
//! - Endstop inputs with polarity correction (own pins and `embedded-hal`)
//! - Motion over the firmware's G-code queue
//! - Thermal manager over two closed-loop heater channels
//! - A text check panel for character displays

#![no_std]
#![deny(unsafe_code)]

pub mod endstop;
pub mod motion;
pub mod panel;
pub mod thermal;
