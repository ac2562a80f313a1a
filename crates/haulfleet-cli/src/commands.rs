//! Command handlers

use crate::cli::{Cli, Commands, ProductivityArgs};
use crate::output::{
    output_estimate, output_fleet, output_report, output_truck, print_df_chart,
};
use haulfleet_app::app::{estimate_productivity, FleetService};
use haulfleet_app::config::Config;
use haulfleet_app::repository::open_fleet_repo;
use haulfleet_domain::model::{CycleInput, HaulSegment, RecordTemplate};
use haulfleet_domain::service::AvailabilityEngine;
use haulfleet_infra::fleet_csv::{load_fleet_csv, save_fleet_csv};
use haulfleet_infra::persistence::FileFleetRepository;
use haulfleet_infra::toml_loader::load_cycle_input;
use haulfleet_types::{Error, OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.fleet.is_some() {
        config.fleet_file = cli.fleet.clone();
    }
    if cli.durations.is_some() {
        config.durations_file = cli.durations.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(?config, %output_format, "resolved configuration");

    match &cli.command {
        Commands::Init { trucks, blank } => {
            let size = trucks.unwrap_or(config.fleet_size);
            let template = if *blank {
                RecordTemplate::Blank
            } else {
                RecordTemplate::ReferencePlan
            };
            cmd_init(&config, size, template, output_format)
        }

        Commands::Show => {
            let fleet = fleet_service(&config)?.load_or_default()?;
            output_fleet(output_format, &fleet)
        }

        Commands::Set { truck, assignments } => {
            let record = fleet_service(&config)?.update_truck(truck, assignments)?;
            output_truck(output_format, &record)
        }

        Commands::Resize { trucks } => {
            let fleet = fleet_service(&config)?.resize(*trucks)?;
            output_fleet(output_format, &fleet)
        }

        Commands::Import { file, dry_run } => cmd_import(&config, file.clone(), *dry_run),

        Commands::Export { file } => cmd_export(&config, file.clone()),

        Commands::Evaluate { truck, chart } => {
            let report = fleet_service(&config)?.evaluate(truck.as_deref())?;
            output_report(output_format, &report)?;
            if *chart && output_format == OutputFormat::Table {
                print_df_chart(&report);
            }
            Ok(())
        }

        Commands::Productivity(args) => {
            let input = build_cycle_input(args)?;
            let estimate = estimate_productivity(&input)?;
            output_estimate(output_format, &estimate)
        }

        Commands::Config {
            show,
            set_output,
            set_fleet_size,
            set_fleet_file,
            set_durations_file,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            *set_fleet_size,
            set_fleet_file.clone(),
            set_durations_file.clone(),
            *reset,
        ),
    }
}

fn fleet_service(config: &Config) -> Result<FleetService<FileFleetRepository>> {
    let repo = open_fleet_repo(config)?;
    let engine = AvailabilityEngine::new(config.duration_table()?);
    Ok(FleetService::new(repo, engine, config.fleet_size))
}

fn cmd_init(
    config: &Config,
    size: usize,
    template: RecordTemplate,
    output_format: OutputFormat,
) -> Result<()> {
    let fleet = fleet_service(config)?.init(size, template)?;
    if output_format == OutputFormat::Table {
        println!("Created fleet with {} trucks", fleet.len());
    }
    output_fleet(output_format, &fleet)
}

fn cmd_import(config: &Config, file: PathBuf, dry_run: bool) -> Result<()> {
    if !file.exists() {
        return Err(Error::FileNotFound(format!(
            "CSV file not found: {}",
            file.display()
        )));
    }

    println!("Loading fleet from: {}", file.display());
    let fleet = load_fleet_csv(&file)?;
    println!("  Loaded {} trucks", fleet.len());

    if dry_run {
        fleet.validate()?;
        println!("Dry run: nothing saved");
        return Ok(());
    }

    fleet_service(config)?.replace(&fleet)?;
    println!("Fleet replaced");
    Ok(())
}

fn cmd_export(config: &Config, file: PathBuf) -> Result<()> {
    let fleet = fleet_service(config)?.load_or_default()?;
    save_fleet_csv(&fleet, &file)?;
    println!("Exported {} trucks to: {}", fleet.len(), file.display());
    Ok(())
}

/// Assemble the cycle from `--input` (if any) and the individual flags
fn build_cycle_input(args: &ProductivityArgs) -> Result<CycleInput> {
    let mut input = match &args.input {
        Some(path) => load_cycle_input(path)?,
        None => CycleInput::default(),
    };

    let segment_flags = [
        (
            HaulSegment::Horizontal,
            args.horizontal_m,
            args.horizontal_loaded_kmh,
            args.horizontal_empty_kmh,
        ),
        (
            HaulSegment::Uphill,
            args.uphill_m,
            args.uphill_loaded_kmh,
            args.uphill_empty_kmh,
        ),
        (
            HaulSegment::Downhill,
            args.downhill_m,
            args.downhill_loaded_kmh,
            args.downhill_empty_kmh,
        ),
    ];

    for (segment, distance, loaded_speed, empty_speed) in segment_flags {
        let legs = input.segment_mut(segment);
        if let Some(d) = distance {
            legs.loaded.distance_m = d;
            legs.empty.distance_m = d;
        }
        if let Some(v) = loaded_speed {
            legs.loaded.speed_kmh = v;
        }
        if let Some(v) = empty_speed {
            legs.empty.speed_kmh = v;
        }
    }

    if let Some(capacity) = args.capacity {
        input.truck_capacity_tons = capacity;
    }
    if let Some(fill) = args.fill_factor {
        input.fill_factor_pct = fill;
    }

    Ok(input)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_fleet_size: Option<usize>,
    set_fleet_file: Option<PathBuf>,
    set_durations_file: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(size) = set_fleet_size {
        config.fleet_size = size;
        modified = true;
    }

    if let Some(path) = set_fleet_file {
        config.fleet_file = Some(path);
        modified = true;
    }

    if let Some(path) = set_durations_file {
        // Fail now rather than on the next evaluate
        let mut candidate = config.clone();
        candidate.durations_file = Some(path);
        candidate.duration_table()?;
        config = candidate;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
