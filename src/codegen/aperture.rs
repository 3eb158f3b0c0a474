//! Diagonal row of ramp-colored spheres emitted as inline intersection code
//!
//! The row rises along x and z for `steps` spheres, then a mirrored arm
//! of `steps - 1` spheres folds back in z. Mirrored spheres reuse the colors
//! of the rising arm position for position.

use std::io::Write;

use crate::io::configuration::{DEFAULT_APERTURE_SPACING, DEFAULT_APERTURE_STEPS};
use crate::io::error::{Result, emit_error, invalid_parameter};
use crate::ramp::{ColorRamp, ColorSample};

/// Row placement parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApertureRow {
    /// Spheres on the rising arm
    pub steps: usize,
    /// Distance between neighbouring spheres along each axis
    pub spacing: f64,
}

impl Default for ApertureRow {
    fn default() -> Self {
        Self {
            steps: DEFAULT_APERTURE_STEPS,
            spacing: DEFAULT_APERTURE_SPACING,
        }
    }
}

/// A sphere offset and its color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApertureSphere {
    /// Offset added to the base x coordinate
    pub x_offset: f64,
    /// Offset added to the base z coordinate
    pub z_offset: f64,
    /// Surface color
    pub color: ColorSample,
}

impl ApertureRow {
    /// Rising arm followed by the mirrored arm
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or `min_brightness` is not in `[0, 1]`
    pub fn spheres(&self, ramp: &ColorRamp, min_brightness: f64) -> Result<Vec<ApertureSphere>> {
        if self.steps == 0 {
            return Err(invalid_parameter(
                "steps",
                &self.steps,
                &"row needs at least one sphere",
            ));
        }
        let colors = ramp.palette(self.steps, min_brightness)?;
        let last = self.steps - 1;

        let rising = colors.iter().enumerate().map(|(i, &color)| {
            let offset = i as f64 * self.spacing;
            ApertureSphere {
                x_offset: offset,
                z_offset: offset,
                color,
            }
        });
        let mirrored = colors
            .iter()
            .take(last)
            .enumerate()
            .map(|(i, &color)| ApertureSphere {
                x_offset: i as f64 * self.spacing,
                z_offset: (2 * last - i) as f64 * self.spacing,
                color,
            });
        Ok(rising.chain(mirrored).collect())
    }

    /// Write one intersection block per sphere
    ///
    /// # Errors
    ///
    /// Returns an error if the row parameters are invalid or writing fails
    pub fn write(
        &self,
        out: &mut impl Write,
        ramp: &ColorRamp,
        min_brightness: f64,
    ) -> Result<()> {
        for sphere in self.spheres(ramp, min_brightness)? {
            write_block(out, &sphere).map_err(emit_error("aperture row"))?;
        }
        Ok(())
    }
}

fn write_block(out: &mut impl Write, sphere: &ApertureSphere) -> std::io::Result<()> {
    let x = sphere.x_offset;
    let z = sphere.z_offset;
    let ColorSample { red, green, blue } = sphere.color;
    writeln!(out, "    {{")?;
    writeln!(out, "      Vec3 oc = Vec3{{1 + {x:.6}, 1.2, 2 + {z:.6}}} - ray.o;")?;
    writeln!(out, "      f32 b = oc.dot(ray.d);")?;
    writeln!(out, "      f32 det = b * b - oc.len2() + 0.65 * 0.65;")?;
    writeln!(out, "      if (det > 0.0f) {{")?;
    writeln!(out, "        f32 sq_det = sqrtf(det);")?;
    writeln!(
        out,
        "        f32 t = b - sq_det > EPS ? b - sq_det : b + sq_det > EPS ? b + sq_det : 0.0f;"
    )?;
    writeln!(out, "        if (t && t < res.t) {{")?;
    writeln!(out, "          res.t = t;")?;
    writeln!(
        out,
        "          res.norm = (ray.o + ray.d * t - Vec3{{1 + {x:.6}, 1.2, 2 + {z:.6}}}).norm();"
    )?;
    writeln!(out, "          res.text = 2;")?;
    writeln!(out, "          res.col = Vec3{{{red:.6}, {green:.6}, {blue:.6}}};")?;
    writeln!(out, "        }}")?;
    writeln!(out, "      }}")?;
    writeln!(out, "    }}")
}
