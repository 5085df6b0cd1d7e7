//! Device identity matching and first-match selection

/// USB hub device class code
pub const CLASS_HUB: u8 = 0x09;

/// Identity of one enumerated USB device
///
/// Read once from the platform's device snapshot and used only for matching;
/// not retained after a device has been selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Bus number the device is attached to
    pub bus_number: u8,
    /// Device address on that bus
    pub device_address: u8,
    /// USB Vendor ID
    pub vendor_id: u16,
    /// USB Product ID
    pub product_id: u16,
    /// USB device class
    pub class: u8,
}

/// Optional exact-match constraints for hub selection
///
/// `None` means unconstrained. A device satisfies the criteria iff it is a
/// hub and every specified field equals the device's identity field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCriteria {
    pub bus: Option<u8>,
    pub address: Option<u8>,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
}

impl MatchCriteria {
    pub fn matches(&self, identity: &DeviceIdentity) -> bool {
        identity.class == CLASS_HUB
            && self.bus.is_none_or(|bus| bus == identity.bus_number)
            && self
                .address
                .is_none_or(|address| address == identity.device_address)
            && self
                .vendor_id
                .is_none_or(|vendor| vendor == identity.vendor_id)
            && self
                .product_id
                .is_none_or(|product| product == identity.product_id)
    }
}

/// Select the first device satisfying `criteria`
///
/// Consumes a snapshot of `(device, identity)` pairs in enumeration order,
/// where each identity may have failed to read. The search short-circuits:
/// the first match wins with no secondary ranking, and an identity read
/// error terminates the scan without a match. The sequence is consumed at
/// most once and never restarted.
pub fn select_first<D, E, I>(devices: I, criteria: &MatchCriteria) -> Option<D>
where
    I: IntoIterator<Item = (D, Result<DeviceIdentity, E>)>,
{
    for (device, identity) in devices {
        match identity {
            Ok(identity) if criteria.matches(&identity) => return Some(device),
            Ok(_) => {}
            Err(_) => return None,
        }
    }
    None
}
