//! USB transport glue
//!
//! Everything that touches rusb lives here: the device-list scan, the hub
//! session (open handle + validated descriptor), and the two blocking
//! control transfers. Selection and validation logic itself lives in the
//! `protocol` crate so it stays testable without hardware.

pub mod scan;
pub mod session;
pub mod transfers;

pub use scan::find_hub;
pub use session::HubSession;
