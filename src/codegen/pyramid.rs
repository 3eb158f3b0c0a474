//! Square pyramid of spheres emitted as ray tracer scene code
//!
//! Layer `k` holds `(layers - k)^2` spheres packed edge to edge and raised
//! by `k * radius * sqrt(2)` so every sphere rests on the four below it.
//! Objects and physics bodies are emitted separately; the object list refers
//! to bodies by index, so both must be generated from the same layout.

use std::io::Write;

use clap::ValueEnum;

use crate::io::configuration::{
    PYRAMID_BODY_LIFT, PYRAMID_BODY_MASS, PYRAMID_CENTER_X, PYRAMID_CENTER_Z,
    PYRAMID_LAUNCH_SPEED, PYRAMID_LAYERS, PYRAMID_RADIUS,
};
use crate::io::error::{Result, emit_error, invalid_parameter};
use crate::ramp::ColorSample;

/// Which snippets to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PyramidPart {
    /// Renderable objects bound to their colors
    Objects,
    /// Moving physics bodies
    Bodies,
    /// Objects followed by bodies
    #[default]
    All,
}

/// One sphere in the pyramid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidSphere {
    /// Position in emission order
    pub index: usize,
    /// World-space center
    pub center: [f64; 3],
}

/// Pyramid placement parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidLayout {
    /// Number of layers, the base being `layers x layers`
    pub layers: usize,
    /// Sphere radius
    pub radius: f64,
    /// Anchor x coordinate
    pub center_x: f64,
    /// Anchor z coordinate
    pub center_z: f64,
}

impl Default for PyramidLayout {
    fn default() -> Self {
        Self {
            layers: PYRAMID_LAYERS,
            radius: PYRAMID_RADIUS,
            center_x: PYRAMID_CENTER_X,
            center_z: PYRAMID_CENTER_Z,
        }
    }
}

impl PyramidLayout {
    /// Total number of spheres across all layers
    pub fn sphere_count(&self) -> usize {
        (1..=self.layers).map(|side| side * side).sum()
    }

    /// Sphere centers, bottom layer first, row-major within a layer
    pub fn spheres(&self) -> Vec<PyramidSphere> {
        let mut spheres = Vec::with_capacity(self.sphere_count());
        let diameter = 2.0 * self.radius;
        for layer in 0..self.layers {
            let height =
                (layer as f64 * self.radius).mul_add(std::f64::consts::SQRT_2, self.radius);
            let offset = (layer as f64).mul_add(self.radius, -3.0 * self.radius);
            let side = self.layers - layer;
            for i in 0..side {
                for j in 0..side {
                    spheres.push(PyramidSphere {
                        index: spheres.len(),
                        center: [
                            (i as f64).mul_add(diameter, self.center_x) + offset,
                            height,
                            (j as f64).mul_add(diameter, self.center_z) + offset,
                        ],
                    });
                }
            }
        }
        spheres
    }

    /// Write one scene object per sphere, bound to `colors` in order
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` does not hold one color per sphere or
    /// writing fails
    pub fn write_objects(&self, out: &mut impl Write, colors: &[ColorSample]) -> Result<()> {
        let count = self.sphere_count();
        if colors.len() != count {
            return Err(invalid_parameter(
                "colors",
                &colors.len(),
                &format!("pyramid needs exactly {count} colors"),
            ));
        }
        for (sphere, color) in self.spheres().iter().zip(colors) {
            writeln!(
                out,
                "    world.objs.push(Object {{\n      geo: Geo::Sphere(pe.ss[{}].s),\n      color: Color::RGB(Vec3({:.6}, {:.6}, {:.6})),\n      texture: Texture::Refractive,\n    }});",
                sphere.index, color.red, color.green, color.blue
            )
            .map_err(emit_error("pyramid objects"))?;
        }
        Ok(())
    }

    /// Write one moving body per sphere
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails
    pub fn write_bodies(&self, out: &mut impl Write) -> Result<()> {
        for sphere in self.spheres() {
            let [x, y, z] = sphere.center;
            writeln!(
                out,
                "pe.ss.push(MovingSphere {{ s: Sphere {{ c: Vec3({x:.6}, {:.6}, {z:.6}), r: {:.6} }}, v: Vec3(0.0, {PYRAMID_LAUNCH_SPEED}, 0.0), m: {PYRAMID_BODY_MASS:.1} }});",
                y + PYRAMID_BODY_LIFT,
                self.radius
            )
            .map_err(emit_error("pyramid bodies"))?;
        }
        Ok(())
    }

    /// Write the requested snippets
    ///
    /// # Errors
    ///
    /// Returns an error if the colors do not match the layout or writing fails
    pub fn write(
        &self,
        out: &mut impl Write,
        part: PyramidPart,
        colors: &[ColorSample],
    ) -> Result<()> {
        if matches!(part, PyramidPart::Objects | PyramidPart::All) {
            self.write_objects(out, colors)?;
        }
        if matches!(part, PyramidPart::Bodies | PyramidPart::All) {
            self.write_bodies(out)?;
        }
        Ok(())
    }
}
