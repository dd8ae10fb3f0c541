//! Printcheck Hardware Abstraction Layer
//!
//! This crate defines the board-level traits the self-check code needs from
//! a chip-specific HAL. Only the capabilities the diagnostics actually touch
//! are modelled here; heaters and motion are firmware subsystems and live in
//! `printcheck-core` instead.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  printcheck-core (self-check sequencer) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  printcheck-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  board HAL (GPIO, IWDG/WDT, systick)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (endstops, probe)
//! - [`watchdog::Watchdog`] - Hardware watchdog refresh
//! - [`clock::Clock`] - Monotonic millisecond time source

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod watchdog;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::InputPin;
pub use watchdog::Watchdog;
