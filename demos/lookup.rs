#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![forbid(unsafe_code)]

use colored::Colorize;
use error_iter::ErrorIter as _;
use gm_names::{DrumKitTable, Error as NamesError, FIXED_LABEL_WIDTH};
use simple_logger::SimpleLogger;
use std::{num::ParseIntError, process::ExitCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Missing table argument\nUsage: lookup <family|program|variation|kit|sam9703|sc8820|drum> [code]"
    )]
    MissingTable,

    #[error("Unknown table `{0}`")]
    UnknownTable(String),

    #[error("Invalid code")]
    InvalidCode(#[from] ParseIntError),

    #[error("Lookup failed")]
    Lookup(#[from] NamesError),

    #[error("Unable to install logger")]
    Logger,
}

#[derive(Clone, Copy)]
enum Table {
    Family,
    Program,
    Variation,
    Kit,
    Vendor(&'static DrumKitTable),
    Drum,
}

impl Table {
    fn parse(name: &str) -> Result<Self, Error> {
        Ok(match name {
            "family" => Table::Family,
            "program" => Table::Program,
            "variation" => Table::Variation,
            "kit" => Table::Kit,
            "sam9703" => Table::Vendor(&gm_names::SAM9703_KITS),
            "sc8820" => Table::Vendor(&gm_names::SC8820_KITS),
            "drum" => Table::Drum,
            _ => Err(Error::UnknownTable(name.to_string()))?,
        })
    }

    fn lookup(self, code: u8) -> Result<&'static str, NamesError> {
        match self {
            Table::Family => gm_names::try_family_name(code),
            Table::Program => gm_names::try_program_name(code),
            Table::Variation => Ok(gm_names::variation_abbrev(code)),
            Table::Kit => gm_names::try_drum_kit_name(code),
            Table::Vendor(table) => table.try_name_for_program_change(code),
            Table::Drum => gm_names::try_drum_note_name(code),
        }
    }
}

fn main() -> ExitCode {
    match lookup() {
        Err(e) => {
            eprintln!("{} {}", "error:".red(), e);

            for cause in e.sources().skip(1) {
                eprintln!("{} {}", "caused by:".bright_red(), cause);
            }

            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}

fn lookup() -> Result<(), Error> {
    SimpleLogger::new().env().init().map_err(|_| Error::Logger)?;

    let mut args = std::env::args().skip(1);
    let table = Table::parse(&args.next().ok_or(Error::MissingTable)?)?;

    // Without a code, dump every entry that resolves
    let Some(code) = args.next() else {
        for code in 0..=u8::MAX {
            if let Ok(name) = table.lookup(code) {
                println!("{:>3} {}", code.to_string().cyan(), name);
            }
        }
        return Ok(());
    };

    let code = code.parse::<u8>()?;
    let name = table.lookup(code)?;
    println!(
        "{:>3} {} [{}]",
        code.to_string().cyan(),
        name.bold(),
        gm_names::fixed_width(name, FIXED_LABEL_WIDTH)
    );

    Ok(())
}
