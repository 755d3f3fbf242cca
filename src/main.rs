use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use platekit::{
    decode_location, init_logging, scene_to_svg, Config, FormField, InputForm, LayoutCanvas,
    LayoutResult, LayoutSession, ResultsView, BUILD_DATE, DEFAULT_MATERIAL, VERSION,
};
use std::path::PathBuf;

/// Plates listed individually by `compute` before the rest are summarized
const MAX_LISTED_PLATES: u64 = 50;

#[derive(Parser, Debug)]
#[command(name = "platekit", version, about = "Steel plate cutting layout for vessel shells")]
struct Cli {
    /// Config file (TOML or JSON); defaults to the platform config location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit log events as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List steel grades and densities
    Materials,
    /// Compute the plate layout and weight/cost report
    Compute {
        #[command(flatten)]
        inputs: InputArgs,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the shareable results location for the inputs
    Share {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Render the layout of a results location to SVG
    Render {
        /// Results location, query string or input JSON
        #[arg(long)]
        inputs: String,
        /// Output file, `-` for stdout
        #[arg(long, default_value = "layout.svg")]
        svg: PathBuf,
        /// Pixels per millimetre
        #[arg(long)]
        scale: Option<f64>,
    },
    /// Print version and build date
    Version,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Internal diameter of the shell (mm)
    #[arg(long = "internal-dia")]
    internal_dia: Option<f64>,
    /// Vessel length (mm)
    #[arg(long)]
    vessel_length: Option<f64>,
    /// Plate thickness (mm)
    #[arg(long)]
    plate_thickness: Option<f64>,
    /// Stock plate width (mm)
    #[arg(long)]
    plate_width: Option<f64>,
    /// Stock plate length (mm)
    #[arg(long)]
    plate_length: Option<f64>,
    /// Steel grade
    #[arg(long, default_value = DEFAULT_MATERIAL)]
    material: String,
    /// Price per kilogram
    #[arg(long)]
    rate_per_kg: Option<f64>,
}

impl InputArgs {
    fn to_form(&self) -> InputForm {
        let mut form = InputForm::new();
        let values = [
            (FormField::InternalDiameter, self.internal_dia),
            (FormField::VesselLength, self.vessel_length),
            (FormField::PlateThickness, self.plate_thickness),
            (FormField::PlateWidth, self.plate_width),
            (FormField::PlateLength, self.plate_length),
            (FormField::RatePerKg, self.rate_per_kg),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set_value(field, value);
            }
        }
        form.set_material(self.material.clone());
        form
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    let config = Config::load_or_default(cli.config.as_deref()).context("loading config")?;
    let mut session = LayoutSession::new(config.density_table());

    match cli.command {
        Command::Materials => {
            for grade in config.density_table().grades() {
                println!("{}", grade);
            }
        }
        Command::Compute { inputs, json } => {
            let inputs = inputs.to_form().to_inputs()?;
            tracing::info!("Computing layout for {}", inputs.plate.material);
            if json {
                let result = session.recompute(&inputs)?;
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                match ResultsView::from_inputs(&inputs, &mut session, &config.display) {
                    ResultsView::Ready(report) => {
                        print!("{}", report);
                        print_plates(&report.result);
                    }
                    ResultsView::Invalid { message } => anyhow::bail!(message),
                    ResultsView::Loading => anyhow::bail!("no inputs"),
                }
            }
        }
        Command::Share { inputs } => {
            let mut form = inputs.to_form();
            let location = form.submit()?;
            println!("{}", location);
        }
        Command::Render { inputs, svg, scale } => {
            let inputs = decode_location(&inputs)?;
            let result = session.recompute(&inputs)?;

            let mut canvas = LayoutCanvas::new(config.render.clone());
            if let Some(scale) = scale {
                canvas.set_scale(scale);
            }
            canvas.set_layout(Some(result.layout));
            let document = scene_to_svg(&canvas.render_export());

            if svg.as_os_str() == "-" {
                print!("{}", document);
            } else {
                std::fs::write(&svg, document)
                    .with_context(|| format!("writing {}", svg.display()))?;
                tracing::info!("Wrote layout to {}", svg.display());
            }
        }
        Command::Version => {
            println!("platekit {} (built {})", VERSION, BUILD_DATE);
        }
    }

    Ok(())
}

fn print_plates(result: &LayoutResult) {
    let layout = &result.layout;
    for cut in layout.plates().take(MAX_LISTED_PLATES as usize) {
        println!(
            "Plate {}: {} course(s), used {:.0} mm, offcut {:.0} x {:.0} mm",
            cut.index + 1,
            cut.units,
            cut.used_length,
            cut.offcut_length,
            cut.offcut_width
        );
    }
    if layout.num_plates_required > MAX_LISTED_PLATES {
        println!(
            "... and {} more plate(s)",
            layout.num_plates_required - MAX_LISTED_PLATES
        );
    }
}
