//! Device enumeration and hub selection
//!
//! Takes one point-in-time snapshot of the bus and runs the first-match-wins
//! search from the protocol crate over it. The snapshot is consumed once and
//! discarded; nothing is cached across invocations.

use crate::error::{Error, Result};
use protocol::{DeviceIdentity, MatchCriteria, select_first};
use rusb::{Context, Device, UsbContext};
use tracing::{debug, warn};

/// Find the first hub in the current snapshot satisfying `criteria`
///
/// Returns `Ok(None)` when nothing matches. A failure to allocate the
/// snapshot is an error; a failure to read one device's descriptor stops
/// the scan early (logged, no match).
pub fn find_hub(context: &Context, criteria: &MatchCriteria) -> Result<Option<Device<Context>>> {
    let devices = context.devices().map_err(Error::DeviceList)?;
    debug!("scanning {} devices", devices.len());

    let found = select_first(
        devices.iter().map(|device| {
            let identity = identity_of(&device);
            if let Err(ref e) = identity {
                warn!(
                    "stopping scan: descriptor read failed for bus {} device {}: {}",
                    device.bus_number(),
                    device.address(),
                    e
                );
            }
            (device, identity)
        }),
        criteria,
    );

    if let Some(ref device) = found {
        debug!(
            "matched hub on bus {} device {}",
            device.bus_number(),
            device.address()
        );
    }

    Ok(found)
}

/// Read the matching-relevant identity of one enumerated device
fn identity_of(device: &Device<Context>) -> std::result::Result<DeviceIdentity, rusb::Error> {
    let descriptor = device.device_descriptor()?;

    Ok(DeviceIdentity {
        bus_number: device.bus_number(),
        device_address: device.address(),
        vendor_id: descriptor.vendor_id(),
        product_id: descriptor.product_id(),
        class: descriptor.class_code(),
    })
}
