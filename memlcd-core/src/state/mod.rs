//! Power state machine
//!
//! The panel lifecycle is explicit, finite and deterministic. The driver
//! feeds events in as it sequences DISP, EXTCOMIN and the clear passes, and
//! reports the result through `Display::power_state`. Drawing does not
//! depend on the state: the buffer and panel memory can be written while
//! the panel is off.

pub mod events;
pub mod machine;

pub use events::PowerEvent;
pub use machine::PowerState;
