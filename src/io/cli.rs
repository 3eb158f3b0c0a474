//! Command-line interface for printing ramp colors and emitting scene snippets

use crate::codegen::aperture::ApertureRow;
use crate::codegen::palette::{PaletteSource, PaletteSpec};
use crate::codegen::pyramid::{PyramidLayout, PyramidPart};
use crate::codegen::table::BalancedTable;
use crate::io::configuration::{
    DEFAULT_APERTURE_SPACING, DEFAULT_APERTURE_STEPS, DEFAULT_GAMMA, DEFAULT_MIN_BRIGHTNESS,
    DEFAULT_SWATCH_HEIGHT, DEFAULT_SWATCH_WIDTH, DEFAULT_TABLE_SAMPLES,
};
use crate::io::error::{Result, emit_error};
use crate::io::image::{ChannelEncoding, export_swatch_png};
use crate::math::spectral::visible_spectrum;
use crate::ramp::sample::validate_min_brightness;
use crate::ramp::{ColorRamp, ColorSample};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rampgen")]
#[command(
    author,
    version,
    about = "Generate ramp colors and ray tracer scene snippets"
)]
/// Command-line arguments for the ramp tool
pub struct Cli {
    /// Suppress informational output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every ramp sample as `index r g b`
    Ramp,

    /// Print the color at a position among evenly spaced draws
    Sample {
        /// Position of the draw, in `[0, length)`
        #[arg(short, long, allow_negative_numbers = true)]
        position: f64,

        /// Number of draws the position is taken from
        #[arg(short, long)]
        length: usize,

        /// Per-channel floor
        #[arg(short, long, default_value_t = 0.0)]
        min_brightness: f64,
    },

    /// Print evenly spaced palette colors
    Palette {
        /// Number of colors
        #[arg(short, long)]
        count: usize,

        /// Color source
        #[arg(short, long, value_enum, default_value_t = PaletteSource::Ramp)]
        source: PaletteSource,

        /// Per-channel floor
        #[arg(short, long, default_value_t = DEFAULT_MIN_BRIGHTNESS)]
        min_brightness: f64,
    },

    /// Emit sphere pyramid objects and bodies
    Pyramid {
        /// Snippets to emit
        #[arg(short, long, value_enum, default_value_t = PyramidPart::All)]
        part: PyramidPart,

        /// Color source
        #[arg(short, long, value_enum, default_value_t = PaletteSource::Ramp)]
        source: PaletteSource,

        /// Per-channel floor
        #[arg(short, long, default_value_t = DEFAULT_MIN_BRIGHTNESS)]
        min_brightness: f64,
    },

    /// Emit the diagonal aperture row
    Aperture {
        /// Spheres on the rising arm
        #[arg(long, default_value_t = DEFAULT_APERTURE_STEPS)]
        steps: usize,

        /// Distance between neighbouring spheres
        #[arg(long, default_value_t = DEFAULT_APERTURE_SPACING)]
        spacing: f64,

        /// Per-channel floor
        #[arg(short, long, default_value_t = DEFAULT_MIN_BRIGHTNESS)]
        min_brightness: f64,
    },

    /// Emit the balanced linear-light table
    RgbTable {
        /// Number of table entries
        #[arg(long, default_value_t = DEFAULT_TABLE_SAMPLES)]
        samples: usize,

        /// Display gamma used for linearization
        #[arg(short, long, default_value_t = DEFAULT_GAMMA)]
        gamma: f64,
    },

    /// Write a gradient swatch PNG
    Swatch {
        /// Output PNG path
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Color source
        #[arg(short, long, value_enum, default_value_t = PaletteSource::Ramp)]
        source: PaletteSource,

        /// Width in pixels
        #[arg(short = 'w', long, default_value_t = DEFAULT_SWATCH_WIDTH)]
        width: u32,

        /// Height in pixels
        #[arg(short = 'H', long, default_value_t = DEFAULT_SWATCH_HEIGHT)]
        height: u32,
    },
}

impl Cli {
    /// Check if informational messages should be displayed
    pub const fn should_report(&self) -> bool {
        !self.quiet
    }
}

/// Runs one parsed command against a freshly generated ramp
pub struct CommandRunner {
    cli: Cli,
    ramp: ColorRamp,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            ramp: ColorRamp::generate(),
        }
    }

    /// Run the command, writing generated text to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation or output fails
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)?;
        out.flush().map_err(emit_error("stdout"))
    }

    /// Run the command, writing generated text to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation or output fails
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Command::Ramp => self.write_ramp(out),
            Command::Sample {
                position,
                length,
                min_brightness,
            } => {
                validate_min_brightness(*min_brightness)?;
                let color = self
                    .ramp
                    .sample_at(*position, *length)?
                    .with_min_brightness(*min_brightness);
                write_color(out, &color)
            }
            Command::Palette {
                count,
                source,
                min_brightness,
            } => {
                let spec = PaletteSpec {
                    source: *source,
                    count: *count,
                    min_brightness: *min_brightness,
                };
                for color in spec.build(&self.ramp)? {
                    write_color(out, &color)?;
                }
                Ok(())
            }
            Command::Pyramid {
                part,
                source,
                min_brightness,
            } => {
                let layout = PyramidLayout::default();
                let colors = PaletteSpec {
                    source: *source,
                    count: layout.sphere_count(),
                    min_brightness: *min_brightness,
                }
                .build(&self.ramp)?;
                layout.write(out, *part, &colors)
            }
            Command::Aperture {
                steps,
                spacing,
                min_brightness,
            } => ApertureRow {
                steps: *steps,
                spacing: *spacing,
            }
            .write(out, &self.ramp, *min_brightness),
            Command::RgbTable { samples, gamma } => {
                let table = BalancedTable::from_ramp(&self.ramp, *samples, *gamma)?;
                self.report(&format!(
                    "{:.6} {:.6} {:.6}",
                    table.sums.red, table.sums.green, table.sums.blue
                ));
                table.write(out)?;
                writeln!(out).map_err(emit_error("balanced table"))
            }
            Command::Swatch {
                output,
                source,
                width,
                height,
            } => {
                let (colors, encoding) = match source {
                    PaletteSource::Ramp => (self.ramp.samples().to_vec(), ChannelEncoding::Direct),
                    PaletteSource::Spectrum => (
                        visible_spectrum(*width as usize),
                        ChannelEncoding::Gamma(DEFAULT_GAMMA),
                    ),
                };
                export_swatch_png(&colors, *width, *height, encoding, output)?;
                self.report(&format!("Wrote swatch: {}", output.display()));
                Ok(())
            }
        }
    }

    fn write_ramp(&self, out: &mut impl Write) -> Result<()> {
        for (index, color) in self.ramp.iter().enumerate() {
            writeln!(
                out,
                "{index} {:.6} {:.6} {:.6}",
                color.red, color.green, color.blue
            )
            .map_err(emit_error("ramp"))?;
        }
        Ok(())
    }

    // Allow print for user feedback on stderr
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if self.cli.should_report() {
            eprintln!("{message}");
        }
    }
}

fn write_color(out: &mut impl Write, color: &ColorSample) -> Result<()> {
    writeln!(
        out,
        "{:.6} {:.6} {:.6}",
        color.red, color.green, color.blue
    )
    .map_err(emit_error("color"))
}
