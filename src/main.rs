use clap::Parser;
use icq_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ICQ Processor - Comet Observation Catalog Cleaner");
    println!("=================================================");
    println!();
    println!("Clean comet brightness observation catalogs recorded in the");
    println!("International Comet Quarterly (ICQ) 80-column format.");
    println!();
    println!("USAGE:");
    println!("    icq-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    clean       Run the full cleaning pipeline over a catalog (main command)");
    println!("    inspect     Decode a catalog and print records without cleaning");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Clean a catalog against a perihelion date:");
    println!("    icq-processor clean hale-bopp.icq --perihelion 1997-04-01");
    println!();
    println!("    # Write survivors and the removal audit to files:");
    println!("    icq-processor clean hale-bopp.icq -p 1997-04-01 \\");
    println!("                        -o cleaned.icq --audit removals.json");
    println!();
    println!("    # Preview the first records of a catalog:");
    println!("    icq-processor inspect hale-bopp.icq --limit 20");
    println!();
    println!("For detailed help on any command, use:");
    println!("    icq-processor <COMMAND> --help");
}
