use bmi::calculator::{self, Category};
use bmi::config::{Config, OutputFormat};
use bmi::form::{BmiForm, FormView};
use bmi::units::{self, Dimension, UnitSystem};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body mass index calculator", long_about = None)]
struct Cli {
    /// Config file (default: ./bmi.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Unit system for bare numbers: metric (cm, kg) or imperial (in, lb)
    #[arg(short, long, global = true)]
    units: Option<UnitSystem>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute BMI, category and advice
    Calc {
        /// Height (e.g. "180", "1.8 m", "5 ft 11 in")
        #[arg(allow_negative_numbers = true)]
        height: String,

        /// Weight (e.g. "75", "165 lb", "11 st")
        #[arg(allow_negative_numbers = true)]
        weight: String,
    },

    /// Show the healthy weight range for a height
    Range {
        /// Height (e.g. "180", "71 in")
        #[arg(allow_negative_numbers = true)]
        height: String,
    },

    /// Classify a BMI value
    Category {
        /// BMI value
        #[arg(allow_negative_numbers = true)]
        bmi: f64,
    },

    /// List the BMI categories and their intervals
    Bands,
}

struct Settings {
    unit_system: UnitSystem,
    format: OutputFormat,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(cli.config.as_deref())?;
    let settings = Settings {
        unit_system: cli.units.unwrap_or(config.units.system),
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
    };
    log::debug!(
        "unit system {}, output {:?}",
        settings.unit_system,
        settings.format
    );

    match cli.command {
        Commands::Calc { height, weight } => calc(&settings, &height, &weight),
        Commands::Range { height } => range(&settings, &height),
        Commands::Category { bmi } => category(&settings, bmi),
        Commands::Bands => bands(&settings),
    }
}

fn calc(settings: &Settings, height: &str, weight: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Reject malformed text up front; the form itself only shows the placeholder
    units::parse_field(height, Dimension::Length, settings.unit_system)?;
    units::parse_field(weight, Dimension::Mass, settings.unit_system)?;

    let mut form = BmiForm::new(settings.unit_system);
    form.set_height(height);
    form.set_weight(weight);
    let view = form.view();

    if settings.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    match view {
        FormView::Ready(report) => {
            println!("BMI: {:.2}", report.bmi);
            println!("Category: {}", report.label);
            println!("{}", report.message);
        }
        FormView::Empty { title, prompt, .. } => {
            println!("{}", title);
            println!("{}", prompt);
        }
    }

    Ok(())
}

fn range(settings: &Settings, height: &str) -> Result<(), Box<dyn std::error::Error>> {
    let height_cm = units::parse_field(height, Dimension::Length, settings.unit_system)?;
    let range = calculator::ideal_weight_range_in(height_cm, settings.unit_system)
        .ok_or_else(|| format!("Height must be positive, got '{}'", height))?;

    if settings.format == OutputFormat::Json {
        let json = serde_json::json!({
            "min": range.min,
            "max": range.max,
            "unit": settings.unit_system.weight_label(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        let unit = settings.unit_system.weight_label();
        println!(
            "Ideal weight: {:.1} {} - {:.1} {}",
            range.min, unit, range.max, unit
        );
    }

    Ok(())
}

fn category(settings: &Settings, bmi: f64) -> Result<(), Box<dyn std::error::Error>> {
    if !bmi.is_finite() {
        return Err(format!("BMI must be a finite number, got '{}'", bmi).into());
    }
    let category = calculator::categorize(bmi);

    if settings.format == OutputFormat::Json {
        let json = serde_json::json!({
            "bmi": bmi,
            "category": category,
            "label": category.label(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", category);
    }

    Ok(())
}

fn bands(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if settings.format == OutputFormat::Json {
        let rows: Vec<_> = Category::ALL
            .iter()
            .map(|c| {
                let (lower, upper) = c.bounds();
                serde_json::json!({
                    "category": c,
                    "label": c.label(),
                    "min": lower,
                    "max": upper,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for c in Category::ALL {
        let interval = match c.bounds() {
            (None, Some(upper)) => format!("bmi < {}", upper),
            (Some(lower), Some(upper)) => format!("{} <= bmi < {}", lower, upper),
            (Some(lower), None) => format!("bmi >= {}", lower),
            (None, None) => "any".to_string(),
        };
        println!("  {:<18} {}", interval, c.label());
    }

    Ok(())
}
