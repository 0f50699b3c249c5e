use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use utmconvert::{
    build_records,
    config::{CliArgs, ConvertConfig},
    export::{write_csv_file, write_xlsx},
    map::render_world_map,
    marker::write_icons,
    table::render_table,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    let config = ConvertConfig::try_from(args)?;

    let points = config.form.submit()?;
    info!(count = points.len(), "converted points");
    let records = build_records(points);

    print!("{}", render_table(&records));

    if let Some(path) = &config.xlsx_path {
        write_xlsx(&records, path).with_context(|| format!("exporting {}", path.display()))?;
        println!("Spreadsheet written to {}", path.display());
    }
    if let Some(path) = &config.csv_path {
        write_csv_file(&records, path).with_context(|| format!("exporting {}", path.display()))?;
    }
    if let Some(path) = &config.map_path {
        render_world_map(&records, config.map_options)
            .save(path)
            .with_context(|| format!("rendering map to {}", path.display()))?;
    }
    if let Some(dir) = &config.icons_dir {
        write_icons(&records, dir).with_context(|| format!("writing icons to {}", dir.display()))?;
    }

    Ok(())
}
