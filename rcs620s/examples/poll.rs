//! Poll for a card on a serial port and print its identifier.
//!
//! Usage:
//!   cargo run -p rcs620s --example poll --features serial -- /dev/ttyUSB0

use rcs620s::prelude::*;
use rcs620s::transport::serial::SerialChannel;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let channel = SerialChannel::open(&path)?;
    let device = DeviceBuilder::new()
        .with_channel(Box::new(channel))
        .build_uninitialized()?;
    let mut dev = device.init_device()?;
    println!("reader on {} initialized", path);

    match dev.poll_felica(SystemCode::ANY)? {
        PollOutcome::Found(_) => {
            println!("FeliCa card: idm={}", bytes_to_hex(dev.id()));
            println!("             pmm={}", bytes_to_hex(dev.pmm()));
            dev.rf_off()?;
            return Ok(());
        }
        PollOutcome::NotFound => println!("no FeliCa card"),
    }

    match dev.poll_type_a()? {
        PollOutcome::Found(picc) => {
            println!("Type A card ({:?}): uid={}", picc, bytes_to_hex(dev.id()));
            if picc == PiccType::TypeAUltralight {
                let pages = dev.total_pages_for_detected_tag();
                println!("Ultralight tag with {} pages", pages);
                if pages > 0 {
                    let data = dev.read_ultralight_page(4)?;
                    println!("page 4: {}", bytes_to_hex_spaced(&data));
                }
            }
        }
        PollOutcome::NotFound => println!("no Type A card"),
    }

    match dev.poll_type_b()? {
        PollOutcome::Found(_) => {
            println!("Type B card: pupi={}", bytes_to_hex(dev.id()));
        }
        PollOutcome::NotFound => println!("no Type B card"),
    }

    dev.rf_off()?;
    Ok(())
}
