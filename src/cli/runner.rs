use tracing::info;

use agcgrid::api::{read_grid_from_path, write_grid_to_path};
use agcgrid::core::region::Region;
use agcgrid::io::agc;

use super::args::CliArgs;
use super::errors::AppError;

fn print_info(args: &CliArgs, header: &agcgrid::GridHeader) -> Result<(), AppError> {
    if args.json {
        let json = serde_json::to_string_pretty(header).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }
    println!("file: {}", args.input.display());
    println!("region: {}", header.region());
    println!("spacing: {} x {}", header.dx, header.dy);
    println!("size: {} x {}", header.nx, header.ny);
    println!("registration: {}", header.registration);
    if !header.remark.is_empty() {
        println!("remark: {}", header.remark);
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let region = match &args.region {
        Some(s) => Some(Region::parse(s).map_err(|e| AppError::InvalidRegion {
            value: s.clone(),
            reason: e.to_string(),
        })?),
        None => None,
    };

    if args.probe {
        if let Err(e) = agc::probe(&args.input) {
            return Err(AppError::NotAgc { path: args.input.clone(), reason: e.to_string() }.into());
        }
        println!("{}: AGC grid", args.input.display());
        return Ok(());
    }

    match &args.output {
        None => {
            let header = agc::read_header(&args.input)?;
            print_info(&args, &header)?;
        }
        Some(output) => {
            info!("Reading grid from {:?}", args.input);
            let mut grid = read_grid_from_path(&args.input, region.as_ref())?;
            info!(
                "Writing {}x{} grid to {:?} (region {})",
                grid.header.nx, grid.header.ny, output, grid.header.region()
            );
            write_grid_to_path(output, &mut grid)?;
        }
    }
    Ok(())
}
