//! Hub session lifecycle
//!
//! Owns the open device handle from open through the power transfer. The
//! handle is released by Drop on every exit path, before the context that
//! produced it.

use crate::error::{Error, Result};
use crate::usb::transfers;
use protocol::{HubDescriptor, PowerAction};
use rusb::{Device, DeviceHandle, UsbContext};
use tracing::{debug, warn};

/// An opened hub with a validated descriptor
pub struct HubSession<T: UsbContext> {
    handle: DeviceHandle<T>,
    descriptor: HubDescriptor,
}

impl<T: UsbContext> HubSession<T> {
    /// Open the device and validate it as a controllable hub
    ///
    /// Sequence: open the handle, check that the active configuration
    /// exposes exactly one interface, then read and decode the hub
    /// descriptor. An open failure is graceful; everything after a
    /// successful open is hard except the topology check.
    pub fn open(device: &Device<T>) -> Result<Self> {
        let handle = device.open().map_err(|e| {
            warn!("could not open matched device: {}", e);
            Error::OpenDevice(e)
        })?;

        let config = device
            .active_config_descriptor()
            .map_err(Error::ConfigDescriptor)?;
        if config.num_interfaces() != 1 {
            return Err(Error::UnsupportedTopology(config.num_interfaces()));
        }

        let descriptor = transfers::read_hub_descriptor(&handle)?;
        debug!(
            "opened hub session: bus {} device {}",
            device.bus_number(),
            device.address()
        );

        Ok(Self { handle, descriptor })
    }

    /// Check that `port` is addressable and the hub can switch its power
    pub fn validate(&self, port: u16) -> Result<()> {
        self.descriptor.validate_port(port)?;
        let mode = self.descriptor.ensure_power_switchable()?;
        debug!("power switching mode: {:?}", mode);
        Ok(())
    }

    /// Switch power on `port`
    pub fn set_port_power(&self, port: u16, action: PowerAction) -> Result<()> {
        transfers::set_port_power(&self.handle, port, action)
    }

    /// Decoded hub descriptor for this session
    pub fn descriptor(&self) -> &HubDescriptor {
        &self.descriptor
    }
}
