//! memlcd Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits the Memory LCD driver consumes.
//! Platform crates (or the `memlcd-hal-embedded` adapters) implement them so
//! the same driver code runs on any board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  memlcd-driver (Display, draw calls)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  memlcd-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ memlcd-hal-   │       │  board crate  │
//! │   embedded    │       │  (your own)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::Transport`] - Byte-level bus transactions (SCS framing)
//! - [`gpio::OutputPin`] - Digital output (DISP, EXTCOMIN)
//! - [`clock::Clock`] - Microsecond delays and a millisecond counter
//! - [`pulse::PulseService`] - Periodic EXTCOMIN inversion pulse

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod pulse;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::OutputPin;
pub use pulse::PulseService;
pub use spi::{BitOrder, SpiConfig, Transport};
