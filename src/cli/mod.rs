/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Builds a [`SimulationConfig`] from a JSON file or from flags, runs it and
//! writes the spectrum as CSV or JSON.

use crate::input::{InputError, MaterialSpec, SimulationConfig, WavelengthGrid};
use crate::mie::{MieCalculator, MieOptions, MieSpectrum, Quantity};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output format of the spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Mie extinction, scattering and absorption spectra of a homogeneous sphere
#[derive(Debug, Parser)]
#[command(name = "mie-rs", version, about)]
pub struct Cli {
    /// JSON simulation description; overrides the flags below
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sphere radius, same unit as the wavelengths
    #[arg(short, long, default_value_t = 20.0)]
    pub radius: f64,

    /// Refractive index of the surrounding medium
    #[arg(short, long, default_value_t = 1.0)]
    pub medium: f64,

    /// First wavelength of the grid
    #[arg(long, default_value_t = 400.0)]
    pub start: f64,

    /// Last wavelength of the grid
    #[arg(long, default_value_t = 800.0)]
    pub stop: f64,

    /// Number of wavelengths
    #[arg(long, default_value_t = 81)]
    pub points: usize,

    /// Built-in material name (gold, silver, water, silica)
    #[arg(long, conflicts_with = "epsilon_re")]
    pub material: Option<String>,

    /// Real part of a constant permittivity
    #[arg(long, allow_hyphen_values = true)]
    pub epsilon_re: Option<f64>,

    /// Imaginary part of a constant permittivity
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub epsilon_im: f64,

    /// Truncation order of the Mie series
    #[arg(long)]
    pub nmax: Option<usize>,

    /// Report cross-sections instead of efficiencies
    #[arg(long)]
    pub cross_section: bool,

    /// Reject non-physical input before computing
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Build the simulation description
    pub fn to_config(&self) -> Result<SimulationConfig, InputError> {
        if let Some(path) = &self.config {
            return SimulationConfig::from_file(path);
        }

        let material = match (&self.material, self.epsilon_re) {
            (_, Some(epsilon_re)) => MaterialSpec::Constant {
                epsilon_re,
                epsilon_im: self.epsilon_im,
            },
            (Some(name), None) => MaterialSpec::Named { name: name.clone() },
            (None, None) => MaterialSpec::Named {
                name: "gold".to_string(),
            },
        };

        let config = SimulationConfig {
            wavelengths: WavelengthGrid::Range {
                start: self.start,
                stop: self.stop,
                points: self.points,
            },
            material,
            radius: self.radius,
            options: MieOptions {
                medium: self.medium,
                nmax: self.nmax,
                as_efficiency: !self.cross_section,
                strict: self.strict,
                resonance_threshold: None,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

/// Run a simulation description with the default backend
pub fn simulate(config: &SimulationConfig) -> anyhow::Result<MieSpectrum> {
    let material = config.material.build()?;
    let wavelengths = config.wavelengths();
    info!(
        "Computing {} wavelengths for {} (radius {}, medium {})",
        wavelengths.len(),
        material.name(),
        config.radius,
        config.options.medium
    );
    let spectrum = MieCalculator::new().spectrum(
        material.as_ref(),
        &wavelengths,
        config.radius,
        &config.options,
    )?;
    Ok(spectrum)
}

/// Write a spectrum as CSV with a header row
pub fn write_csv<W: Write>(spectrum: &MieSpectrum, mut writer: W) -> io::Result<()> {
    let suffix = match spectrum.quantity {
        Quantity::Efficiency => "efficiency",
        Quantity::CrossSection => "cross_section",
    };
    writeln!(
        writer,
        "wavelength,extinction_{0},scattering_{0},absorption_{0}",
        suffix
    )?;
    for record in &spectrum.records {
        writeln!(
            writer,
            "{},{:e},{:e},{:e}",
            record.wavelength, record.extinction, record.scattering, record.absorption
        )?;
    }
    writer.flush()
}

/// Write a spectrum as pretty-printed JSON
pub fn write_json<W: Write>(spectrum: &MieSpectrum, mut writer: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, spectrum)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Execute the command line request
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.to_config().context("failed to build simulation input")?;
    let spectrum = simulate(&config).context("Mie calculation failed")?;

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match cli.format {
        OutputFormat::Csv => write_csv(&spectrum, writer)?,
        OutputFormat::Json => write_json(&spectrum, writer)?,
    }
    Ok(())
}
