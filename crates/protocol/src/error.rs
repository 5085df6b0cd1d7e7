//! Hub protocol error types

use thiserror::Error;

/// Failures detected while decoding or validating hub protocol data
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HubError {
    /// Descriptor data shorter than the fixed non-variable portion
    #[error("hub descriptor too short: needed {needed} bytes, got {available}")]
    DescriptorTooShort { needed: usize, available: usize },

    /// Requested port outside the hub's `[1, bNbrPorts]` range
    #[error("invalid port number {port}: hub reports {ports} ports")]
    PortOutOfRange { port: u16, ports: u8 },

    /// Hub characteristics indicate no software port power control
    #[error("power switching not supported by this hub (mode {mode})")]
    PowerSwitchingUnsupported { mode: u16 },
}

/// Type alias for hub protocol results
pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_descriptor_display() {
        let err = HubError::DescriptorTooShort {
            needed: 7,
            available: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("too short"));
        assert!(msg.contains('7'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_port_out_of_range_display() {
        let err = HubError::PortOutOfRange { port: 99, ports: 4 };
        let msg = format!("{}", err);
        assert!(msg.contains("99"));
        assert!(msg.contains('4'));
    }
}
