//! Hub protocol library for usb-hub-power
//!
//! This crate defines the USB hub class protocol pieces needed to switch
//! power on a downstream hub port: control request construction, hub
//! descriptor decoding, and device matching. It is transport-free so the
//! selection and validation logic can be exercised without hardware.
//!
//! # Example
//!
//! ```
//! use protocol::{HubDescriptor, PowerAction, port_power};
//!
//! // Decode a hub descriptor returned by the device
//! let bytes = [9, 0x29, 4, 0x01, 0x00, 50, 100];
//! let descriptor = HubDescriptor::parse(&bytes).unwrap();
//! assert_eq!(descriptor.num_ports, 4);
//!
//! // Build the power-on request for port 3
//! descriptor.validate_port(3).unwrap();
//! let request = port_power(3, PowerAction::On);
//! assert_eq!(request.index, 3);
//! ```

pub mod descriptor;
pub mod error;
pub mod matching;
pub mod request;

pub use descriptor::{HubDescriptor, PowerSwitchingMode};
pub use error::{HubError, Result};
pub use matching::{CLASS_HUB, DeviceIdentity, MatchCriteria, select_first};
pub use request::{
    ControlRequest, HUB_DESCRIPTOR_TYPE, PORT_POWER_FEATURE, PowerAction, get_hub_descriptor,
    port_power,
};
