//! CLI error taxonomy and exit-code policy
//!
//! Failures fall into two tiers. Graceful conditions are expected,
//! user-correctable situations (nothing matched, hub can't do what was
//! asked): they print a diagnostic and the process still exits 0. Hard
//! failures mean the device stopped responding mid-protocol after being
//! opened, and exit 2. Context acquisition failure exits 255, distinct
//! from everything else. Note the asymmetry: a failed open is graceful,
//! a failed transfer after a successful open is hard.

use protocol::HubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// USB context could not be acquired
    #[error("libusb init failed: {0}")]
    ContextInit(#[source] rusb::Error),

    /// Device list snapshot could not be allocated
    #[error("could not list devices: {0}")]
    DeviceList(#[source] rusb::Error),

    /// No enumerated device satisfied the match criteria
    #[error("no matching hub found")]
    NoDevice,

    /// Matched device could not be opened
    #[error("could not open device: {0}")]
    OpenDevice(#[source] rusb::Error),

    /// Active configuration descriptor could not be read
    #[error("could not read configuration descriptor: {0}")]
    ConfigDescriptor(#[source] rusb::Error),

    /// Active configuration exposes more than one interface
    #[error("multiple interfaces found ({0})")]
    UnsupportedTopology(u8),

    /// Get Hub Descriptor transfer failed outright
    #[error("hub descriptor read failed: {0}")]
    DescriptorTransfer(#[source] rusb::Error),

    /// Set/Clear Port Power transfer failed
    #[error("port power transfer failed: {0}")]
    PowerTransfer(#[source] rusb::Error),

    /// Descriptor or validation failure from the protocol layer
    #[error(transparent)]
    Hub(#[from] HubError),

    /// Log filter string could not be parsed
    #[error("invalid log filter: {0}")]
    LogFilter(String),
}

impl Error {
    /// Whether this failure still exits with status 0
    pub fn is_graceful(&self) -> bool {
        matches!(
            self,
            Error::NoDevice
                | Error::OpenDevice(_)
                | Error::UnsupportedTopology(_)
                | Error::Hub(HubError::PortOutOfRange { .. })
                | Error::Hub(HubError::PowerSwitchingUnsupported { .. })
        )
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::ContextInit(_) => 255,
            Error::LogFilter(_) => 1,
            _ if self.is_graceful() => 0,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
