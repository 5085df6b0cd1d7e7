//! Hub descriptor decoding and validation
//!
//! The hub descriptor arrives as a packed little-endian byte layout:
//!
//! ```text
//! [bDescLength: u8][bDescriptorType: u8][bNbrPorts: u8]
//! [wHubCharacteristics: u16 LE][bPwrOn2PwrGood: u8][bHubContrCurrent: u8]
//! ```
//!
//! Decoding works on the raw byte slice with explicit endianness conversion
//! rather than an in-memory struct layout, since padding and alignment are
//! not portable. Only the fixed 7-byte prefix is decoded; the variable-length
//! tail (DeviceRemovable, PortPwrCtrlMask) is not needed for power control.

use crate::error::{HubError, Result};

/// Low 2 bits of wHubCharacteristics: logical power switching mode
const POWER_SWITCHING_MASK: u16 = 0x0003;
const POWER_SWITCHING_GANGED: u16 = 0x0000;
const POWER_SWITCHING_PER_PORT: u16 = 0x0001;

/// Fixed non-variable portion of the hub descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubDescriptor {
    /// Total descriptor length as reported by the hub (bDescLength)
    pub length: u8,
    /// Descriptor type (bDescriptorType, 0x29 for hubs)
    pub descriptor_type: u8,
    /// Number of downstream ports (bNbrPorts)
    pub num_ports: u8,
    /// Characteristics bitmask (wHubCharacteristics)
    pub characteristics: u16,
    /// Time from power-on to power-good, in 2 ms units (bPwrOn2PwrGood)
    pub power_on_to_good: u8,
    /// Maximum controller current in mA (bHubContrCurrent)
    pub controller_current: u8,
}

/// Logical power switching mode advertised by the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerSwitchingMode {
    /// All ports power together
    Ganged,
    /// Each port switches individually
    PerPort,
    /// Reserved encoding; no software power control
    Unsupported,
}

impl HubDescriptor {
    /// Size of the non-variable portion every hub must return
    pub const NONVAR_SIZE: usize = 7;

    /// Decode the fixed portion of a hub descriptor from raw bytes
    ///
    /// Fails if fewer than [`Self::NONVAR_SIZE`] bytes are available; no
    /// field may be trusted before the full fixed portion has been read.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::NONVAR_SIZE {
            return Err(HubError::DescriptorTooShort {
                needed: Self::NONVAR_SIZE,
                available: bytes.len(),
            });
        }

        Ok(Self {
            length: bytes[0],
            descriptor_type: bytes[1],
            num_ports: bytes[2],
            characteristics: u16::from_le_bytes([bytes[3], bytes[4]]),
            power_on_to_good: bytes[5],
            controller_current: bytes[6],
        })
    }

    /// Check that `port` addresses one of this hub's downstream ports
    ///
    /// Ports are 1-based; valid range is `[1, bNbrPorts]` inclusive.
    pub fn validate_port(&self, port: u16) -> Result<()> {
        if port < 1 || port > u16::from(self.num_ports) {
            return Err(HubError::PortOutOfRange {
                port,
                ports: self.num_ports,
            });
        }
        Ok(())
    }

    /// Power switching mode encoded in the characteristics bitmask
    pub fn power_switching_mode(&self) -> PowerSwitchingMode {
        match self.characteristics & POWER_SWITCHING_MASK {
            POWER_SWITCHING_GANGED => PowerSwitchingMode::Ganged,
            POWER_SWITCHING_PER_PORT => PowerSwitchingMode::PerPort,
            _ => PowerSwitchingMode::Unsupported,
        }
    }

    /// Check that this hub supports software port power switching
    pub fn ensure_power_switchable(&self) -> Result<PowerSwitchingMode> {
        match self.power_switching_mode() {
            PowerSwitchingMode::Unsupported => Err(HubError::PowerSwitchingUnsupported {
                mode: self.characteristics & POWER_SWITCHING_MASK,
            }),
            mode => Ok(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor_bytes(ports: u8, characteristics: u16) -> [u8; 7] {
        let chars = characteristics.to_le_bytes();
        [9, 0x29, ports, chars[0], chars[1], 50, 100]
    }

    #[test]
    fn test_parse_decodes_all_fields() {
        let desc = HubDescriptor::parse(&descriptor_bytes(4, 0x00A9)).unwrap();
        assert_eq!(desc.length, 9);
        assert_eq!(desc.descriptor_type, 0x29);
        assert_eq!(desc.num_ports, 4);
        assert_eq!(desc.characteristics, 0x00A9);
        assert_eq!(desc.power_on_to_good, 50);
        assert_eq!(desc.controller_current, 100);
    }

    #[test]
    fn test_parse_characteristics_little_endian() {
        let bytes = [9, 0x29, 4, 0x34, 0x12, 50, 100];
        let desc = HubDescriptor::parse(&bytes).unwrap();
        assert_eq!(desc.characteristics, 0x1234);
    }

    #[test]
    fn test_parse_ignores_variable_tail() {
        let mut bytes = Vec::from(descriptor_bytes(4, 0x0001));
        bytes.extend_from_slice(&[0x00, 0xFF]);
        let desc = HubDescriptor::parse(&bytes).unwrap();
        assert_eq!(desc.num_ports, 4);
    }

    #[test]
    fn test_parse_short_read_rejected() {
        let result = HubDescriptor::parse(&[9, 0x29, 4, 0x01]);
        assert_eq!(
            result,
            Err(HubError::DescriptorTooShort {
                needed: 7,
                available: 4,
            })
        );
    }

    #[test]
    fn test_parse_empty_rejected() {
        let result = HubDescriptor::parse(&[]);
        assert!(matches!(
            result,
            Err(HubError::DescriptorTooShort { available: 0, .. })
        ));
    }

    #[test]
    fn test_port_range_boundaries() {
        let desc = HubDescriptor::parse(&descriptor_bytes(4, 0x0001)).unwrap();
        assert!(desc.validate_port(0).is_err());
        assert!(desc.validate_port(1).is_ok());
        assert!(desc.validate_port(4).is_ok());
        assert!(desc.validate_port(5).is_err());
    }

    #[test]
    fn test_port_range_error_carries_values() {
        let desc = HubDescriptor::parse(&descriptor_bytes(4, 0x0001)).unwrap();
        assert_eq!(
            desc.validate_port(99),
            Err(HubError::PortOutOfRange { port: 99, ports: 4 })
        );
    }

    #[test]
    fn test_power_switching_modes() {
        let ganged = HubDescriptor::parse(&descriptor_bytes(4, 0x0000)).unwrap();
        assert_eq!(ganged.power_switching_mode(), PowerSwitchingMode::Ganged);

        let per_port = HubDescriptor::parse(&descriptor_bytes(4, 0x0001)).unwrap();
        assert_eq!(per_port.power_switching_mode(), PowerSwitchingMode::PerPort);

        let reserved2 = HubDescriptor::parse(&descriptor_bytes(4, 0x0002)).unwrap();
        assert_eq!(
            reserved2.power_switching_mode(),
            PowerSwitchingMode::Unsupported
        );

        let reserved3 = HubDescriptor::parse(&descriptor_bytes(4, 0x0003)).unwrap();
        assert_eq!(
            reserved3.power_switching_mode(),
            PowerSwitchingMode::Unsupported
        );
    }

    #[test]
    fn test_power_switching_ignores_upper_bits() {
        // Compound-device and overcurrent bits must not affect the mode
        let desc = HubDescriptor::parse(&descriptor_bytes(4, 0x00FD)).unwrap();
        assert_eq!(desc.power_switching_mode(), PowerSwitchingMode::PerPort);
    }

    #[test]
    fn test_ensure_power_switchable() {
        let ganged = HubDescriptor::parse(&descriptor_bytes(4, 0x0000)).unwrap();
        assert_eq!(
            ganged.ensure_power_switchable(),
            Ok(PowerSwitchingMode::Ganged)
        );

        let reserved = HubDescriptor::parse(&descriptor_bytes(4, 0x0003)).unwrap();
        assert_eq!(
            reserved.ensure_power_switchable(),
            Err(HubError::PowerSwitchingUnsupported { mode: 3 })
        );
    }
}
