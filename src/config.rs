//! Command-line configuration.
//!
//! [`CliArgs`] is what clap parses; [`ConvertConfig`] is the checked form the
//! binary works from, with every input row already collected into a
//! [`FormController`].

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::{
    export::{read_csv_file, DEFAULT_XLSX_PATH},
    form::{FormController, InputRow},
    map::MapOptions,
};

/// Arguments accepted by the `utmconvert` binary.
#[derive(Debug, Parser)]
#[command(name = "utmconvert", version, about = "Convert WGS84 lat/lon points to UTM")]
pub struct CliArgs {
    /// Point to convert, as LAT,LON. Repeat for several points.
    #[arg(long = "point", value_name = "LAT,LON", allow_hyphen_values = true)]
    pub points: Vec<InputRow>,
    /// CSV file with a header line and lat,lon columns, read after --point.
    #[arg(long = "input", value_name = "CSV")]
    pub input: Option<PathBuf>,
    /// Spreadsheet to write. Overwritten if it exists.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_XLSX_PATH)]
    pub output: PathBuf,
    /// Skip writing the spreadsheet.
    #[arg(long = "no-export", action = clap::ArgAction::SetTrue)]
    pub no_export: bool,
    /// Also write the results as CSV.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,
    /// Render a world map with the markers as PNG.
    #[arg(long = "map", value_name = "PATH")]
    pub map: Option<PathBuf>,
    /// Width of the map image in pixels.
    #[arg(long = "map-width", value_name = "PX", default_value_t = 1440)]
    pub map_width: u32,
    /// Write one marker icon PNG per point into this directory.
    #[arg(long = "icons", value_name = "DIR")]
    pub icons: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(long = "verbose", action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Everything one run needs, with inputs collected and outputs decided.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Rows to convert, `--point` values first, then `--input` lines.
    pub form: FormController,
    /// Spreadsheet path, `None` when export is disabled.
    pub xlsx_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
    pub map_path: Option<PathBuf>,
    pub map_options: MapOptions,
    pub icons_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl TryFrom<CliArgs> for ConvertConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        let mut form = FormController::with_rows(0);
        for row in args.points {
            form.push_row(row);
        }
        if let Some(input) = &args.input {
            let rows = read_csv_file(input)
                .with_context(|| format!("reading input rows from {}", input.display()))?;
            for row in rows {
                form.push_row(row);
            }
        }

        if form.is_empty() {
            bail!("no input rows; pass --point LAT,LON or --input FILE");
        }
        if args.map_width < 2 {
            bail!("--map-width must be at least 2 pixels");
        }

        Ok(Self {
            form,
            xlsx_path: (!args.no_export).then_some(args.output),
            csv_path: args.csv,
            map_path: args.map,
            map_options: MapOptions {
                width: args.map_width,
                ..MapOptions::default()
            },
            icons_dir: args.icons,
            verbose: args.verbose,
        })
    }
}
