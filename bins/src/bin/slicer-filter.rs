// SPDX-License-Identifier: MIT

//!
//! *Part of the wider MonthSlicer project*
//!
//! Print the advanced-filter JSON the slicer would push to the host for a
//! given table, column and month.  Intended for checking the wire format
//! against the host's filter schema without embedding the control
//!

use clap::{CommandFactory, Parser};
use month_slicer_core::{DateRange, FilterTarget, MonthToken};
use month_slicer_filter::FilterDescriptor;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};

/// MonthSlicer filter-JSON entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("month_slicer")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    let args = Cli::parse();

    // Check the options
    let selection = match (&args.month, args.clear) {
        //----------------------------------------------------------------------
        // Valid
        //----------------------------------------------------------------------
        (Some(month), false) => match MonthToken::from(month) {
            Ok(token) => Some(token),
            Err(error) => {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        },
        (None, true) => None,
        (None, false) => match MonthToken::default_selection() {
            Ok(token) => Some(token),
            Err(error) => {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        },
        //----------------------------------------------------------------------
        // Invalid
        //----------------------------------------------------------------------
        (Some(_), true) => {
            eprintln!("CLI Error: --month and --clear are mutually exclusive");
            Cli::command().print_long_help()?;
            std::process::exit(1);
        }
    };

    // Build the target the way the control does from host metadata
    let target = match FilterTarget::from(&args.table, &args.column) {
        Ok(target) => target,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    // Build the descriptor
    let descriptor = match selection {
        Some(token) => {
            let range = DateRange::for_month(&token);
            FilterDescriptor::month_range(target, &range)
        }
        None => FilterDescriptor::cleared(target),
    };

    println!("{}", serde_json::to_string_pretty(&descriptor)?);

    Ok(())
}

/// MonthSlicer CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print the advanced-filter JSON for a month selection",
    after_help = "With no --month the default selection is used (the month containing yesterday)"
)]
pub struct Cli {
    /// Table the filtered column belongs to
    #[arg(long)]
    pub table: String,

    /// Display name of the filtered column
    #[arg(long)]
    pub column: String,

    /// Month to filter to, in YYYY-MM form
    #[arg(long)]
    pub month: Option<String>,

    /// Emit the descriptor that clears the range restriction instead
    #[arg(long)]
    pub clear: bool,
}
