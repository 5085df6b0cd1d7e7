//! hub-power
//!
//! Toggles power on a single downstream port of a USB hub by issuing the
//! hub-class Set/Clear Port Power control request. Selects the hub from the
//! current device snapshot by optional bus/device/vendor/product criteria,
//! validates its descriptor and power-switching capability, then issues the
//! transfer.

mod error;
mod logging;
mod usb;

use clap::Parser;
use error::{Error, Result};
use protocol::{MatchCriteria, PowerAction};
use rusb::Context;
use std::process::ExitCode;
use tracing::info;
use usb::{HubSession, find_hub};

#[derive(Parser, Debug)]
#[command(name = "hub-power")]
#[command(version, about = "Switch power on a single USB hub port")]
#[command(long_about = "
Switch power on a single downstream port of a USB hub.

The first hub matching all given criteria is used; narrow the criteria with
-b/-d/-v/-p when more than one hub is attached. Exits 0 when there is
nothing to do (no matching hub, port out of range, hub cannot switch port
power), 2 on a transfer failure.

EXAMPLES:
    # Power off port 2 of the only hub on the system
    hub-power 2 0

    # Power on port 3 of the first Genesys Logic hub
    hub-power -v 0x05e3 3 1

    # Disambiguate by bus and device address
    hub-power -b 1 -d 4 2 1
")]
struct Args {
    /// 1-based port number on the hub
    #[arg(value_name = "PORT_NUM")]
    port: u16,

    /// 1 to power the port on, 0 to power it off
    #[arg(value_name = "{0|1}", value_parser = parse_action)]
    action: PowerAction,

    /// Only match the hub on this bus number (decimal)
    #[arg(short = 'b', long = "bus", value_name = "BUS_NUM")]
    bus: Option<u8>,

    /// Only match the hub with this device address (decimal)
    #[arg(short = 'd', long = "device", value_name = "DEV_NUM")]
    device: Option<u8>,

    /// Only match hubs with this vendor ID (hex, 0x prefix optional)
    #[arg(short = 'v', long = "vendor", value_name = "VENDOR_ID", value_parser = parse_hex_u16)]
    vendor: Option<u16>,

    /// Only match hubs with this product ID (hex, 0x prefix optional)
    #[arg(short = 'p', long = "product", value_name = "PRODUCT_ID", value_parser = parse_hex_u16)]
    product: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

/// Parse a hex ID with or without a leading `0x`
fn parse_hex_u16(s: &str) -> std::result::Result<u16, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

fn parse_action(s: &str) -> std::result::Result<PowerAction, String> {
    match s {
        "0" => Ok(PowerAction::Off),
        "1" => Ok(PowerAction::On),
        _ => Err(String::from("expected 0 (power off) or 1 (power on)")),
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Covers parse errors, --help and --version alike
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    if let Err(e) = logging::setup_logging(&args.log_level) {
        eprintln!("{e}");
        return ExitCode::from(e.exit_code());
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Context → scan → session → power, with the handle dropped before the
/// context on every path
fn run(args: &Args) -> Result<()> {
    let context = Context::new().map_err(Error::ContextInit)?;

    let criteria = MatchCriteria {
        bus: args.bus,
        address: args.device,
        vendor_id: args.vendor,
        product_id: args.product,
    };

    let device = find_hub(&context, &criteria)?.ok_or(Error::NoDevice)?;
    let session = HubSession::open(&device)?;
    info!("hub reports {} ports", session.descriptor().num_ports);
    session.validate(args.port)?;
    session.set_port_power(args.port, args.action)?;

    info!(
        "port {} powered {}",
        args.port,
        match args.action {
            PowerAction::On => "on",
            PowerAction::Off => "off",
        }
    );

    Ok(())
}
