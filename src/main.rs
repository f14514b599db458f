use std::error::Error;
use subnet_calculator::commands::{CommandLine, Commands};
use subnet_calculator::config::Config;
use subnet_calculator::models::parse_address;
use subnet_calculator::output::json::{print_json, MaskConversion};
use subnet_calculator::output::terminal;
use subnet_calculator::processing::{mask_to_prefix, prefix_to_mask, size_for_usable_hosts};
use subnet_calculator::summarize;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    log4rs::init_file(&config.log4rs_file, Default::default())
        .expect("Error initializing log4rs");
    log::info!("#Start main()");

    let commands = CommandLine::parse_args();
    let json_output = commands.json || config.json_output;

    match commands.command {
        Commands::Range { cidr } => {
            let report = summarize(cidr.trim())?;
            if json_output {
                print_json(&report)?;
            } else {
                terminal::print_range_report(&report);
            }
        }
        Commands::Mask { mask } => {
            let mask = parse_address(mask.trim())?;
            let prefix = mask_to_prefix(mask)?;
            if json_output {
                print_json(&MaskConversion { prefix, mask })?;
            } else {
                terminal::print_mask_report(mask, prefix);
            }
        }
        Commands::Prefix { prefix } => {
            let mask = prefix_to_mask(prefix)?;
            if json_output {
                print_json(&MaskConversion { prefix, mask })?;
            } else {
                terminal::print_mask_report(mask, prefix);
            }
        }
        Commands::Size { hosts } => {
            let sized = size_for_usable_hosts(hosts)?;
            if json_output {
                print_json(&sized)?;
            } else {
                terminal::print_size_report(hosts, &sized);
            }
        }
    }

    Ok(())
}
