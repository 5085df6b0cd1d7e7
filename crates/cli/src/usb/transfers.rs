//! Blocking control transfer execution
//!
//! The two wire transfers the tool performs, both bounded by a fixed
//! per-transfer timeout. Setup-packet parameters come from the protocol
//! crate and are passed to rusb verbatim.

use crate::error::{Error, Result};
use protocol::{HubDescriptor, PowerAction, get_hub_descriptor, port_power};
use rusb::{DeviceHandle, UsbContext};
use std::time::Duration;
use tracing::debug;

/// Timeout for every control transfer (1 second)
const TRANSFER_TIMEOUT: Duration = Duration::from_millis(1000);

/// Read and decode the hub descriptor
///
/// Issues the class-specific Get Hub Descriptor request for the fixed
/// non-variable portion. A transport error or a response shorter than that
/// portion is a hard failure; no field is trusted before the full prefix
/// has arrived.
pub fn read_hub_descriptor<T: UsbContext>(handle: &DeviceHandle<T>) -> Result<HubDescriptor> {
    let request = get_hub_descriptor();
    let mut buf = [0u8; HubDescriptor::NONVAR_SIZE];

    debug!(
        "get hub descriptor: request_type={:#04x}, value={:#06x}",
        request.request_type, request.value
    );

    let len = handle
        .read_control(
            request.request_type,
            request.request,
            request.value,
            request.index,
            &mut buf,
            TRANSFER_TIMEOUT,
        )
        .map_err(Error::DescriptorTransfer)?;

    let descriptor = HubDescriptor::parse(&buf[..len])?;
    debug!(
        "hub descriptor: ports={}, characteristics={:#06x}",
        descriptor.num_ports, descriptor.characteristics
    );

    Ok(descriptor)
}

/// Issue the Set/Clear Port Power transfer for `port`
///
/// Success has no payload; the only observable result is the transfer's
/// completion status.
pub fn set_port_power<T: UsbContext>(
    handle: &DeviceHandle<T>,
    port: u16,
    action: PowerAction,
) -> Result<()> {
    let request = port_power(port, action);

    debug!(
        "port power {:?}: request={:#04x}, index={}",
        action, request.request, request.index
    );

    handle
        .write_control(
            request.request_type,
            request.request,
            request.value,
            request.index,
            &[],
            TRANSFER_TIMEOUT,
        )
        .map_err(Error::PowerTransfer)?;

    Ok(())
}
