// SPDX-License-Identifier: GPL-3.0
// main.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// This file is the core of the basic client - it exists merely as a CLI-based
// program to enumerate CD-ROM drives and report their status. In due course,
// platform backends will give it real drives to talk to.

use clap::Parser;
use log::{error, info};
use philcd_core::backend::dummy_cdrom_backend::DummyCdromBackend;
use philcd_core::subsystem::CdromSubsystem;

#[derive(Parser)]
#[command(
    version,
    about = "A basic barebones client for the PhilCD CD-audio control library",
    long_about = None
)]
struct PhilCdArgs {
    #[arg(
        long = "drive",
        help = "An optional drive index to open and query",
        id = "Drive index"
    )]
    drive: Option<i32>,
}

fn main() {

    colog::init();

    let philcd_args = PhilCdArgs::parse();

    // Only the drive-less backend exists so far, so this mostly demonstrates
    // the subsystem lifecycle.
    let mut subsystem = CdromSubsystem::new(Box::new(DummyCdromBackend::new()));

    if let Err(error) = subsystem.init() {
        error!("Could not initialise the CD-ROM subsystem: {}", error);
        return;
    }

    match subsystem.num_drives() {
        Ok(0) => info!("No CD-ROM drives found"),
        Ok(count) => {
            info!("Found {} CD-ROM drive(s):", count);
            for drive in 0..count {
                let name = subsystem.drive_name(drive).unwrap_or_default();
                info!("  {}: {}", drive, name);
            }
        },
        Err(error) => error!("Could not count CD-ROM drives: {}", error),
    }

    if let Some(drive) = philcd_args.drive {
        match subsystem.open(drive) {
            Ok(mut cd) => {
                match subsystem.status(&mut cd) {
                    Ok(status) => {
                        let (minute, second, frame) = cd.get_current_position_msf();
                        info!(
                            "Drive {} status: {:?}, track {} at {:02}:{:02}:{:02}",
                            drive,
                            status,
                            cd.get_current_track(),
                            minute,
                            second,
                            frame
                        );
                    },
                    Err(error) => error!("Could not query drive {}: {}", drive, error),
                }
                subsystem.close(cd);
            },
            Err(error) => error!("Could not open drive {}: {}", drive, error),
        }
    }

    subsystem.quit();
}
