//! Tests for pyramid layout and scene snippet emission

#[cfg(test)]
mod tests {
    use rampgen::RampError;
    use rampgen::codegen::pyramid::{PyramidLayout, PyramidPart};
    use rampgen::ramp::{ColorRamp, ColorSample};

    fn palette() -> Vec<ColorSample> {
        ColorRamp::generate().palette(30, 0.3).unwrap_or_default()
    }

    fn emit(part: PyramidPart, colors: &[ColorSample]) -> String {
        let mut out = Vec::new();
        let result = PyramidLayout::default().write(&mut out, part, colors);
        assert!(result.is_ok(), "emission failed: {result:?}");
        String::from_utf8(out).unwrap_or_default()
    }

    // Tests default pyramid holds 16 + 9 + 4 + 1 spheres
    // Verified by counting layers instead of squares
    #[test]
    fn test_sphere_count() {
        let layout = PyramidLayout::default();
        assert_eq!(layout.sphere_count(), 30);
        assert_eq!(layout.spheres().len(), 30);
    }

    // Tests layer placement and stacking height
    // Verified by dropping the sqrt(2) stacking factor
    #[test]
    fn test_sphere_centers() {
        let spheres = PyramidLayout::default().spheres();
        let center = |i: usize| spheres.get(i).map(|s| s.center).unwrap_or_default();
        let close = |a: [f64; 3], b: [f64; 3]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6);

        assert!(close(center(0), [2.3, 0.9, 2.3]));
        assert!(close(center(1), [2.3, 0.9, 4.1]));
        assert!(close(center(16), [3.2, 2.172_792, 3.2]));
        assert!(close(center(29), [5.0, 4.718_377, 5.0]));
        assert!(spheres.iter().enumerate().all(|(i, s)| s.index == i));
    }

    // Tests object snippets bind body index and floored color
    // Verified by emitting colors without the brightness floor
    #[test]
    fn test_objects_snippet() {
        let text = emit(PyramidPart::Objects, &palette());
        assert!(text.starts_with(
            "    world.objs.push(Object {\n      geo: Geo::Sphere(pe.ss[0].s),\n      color: Color::RGB(Vec3(0.300000, 0.300000, 1.000000)),\n      texture: Texture::Refractive,\n    });\n"
        ));
        assert!(text.contains("pe.ss[29].s"));
        assert!(text.contains("Vec3(0.643137, 0.300000, 0.300000)"));
        assert_eq!(text.matches("world.objs.push").count(), 30);
        assert!(!text.contains("MovingSphere"));
    }

    // Tests body snippets carry lifted centers and launch velocity
    // Verified by omitting the floor lift
    #[test]
    fn test_bodies_snippet() {
        let text = emit(PyramidPart::Bodies, &[]);
        let first = text.lines().next().unwrap_or_default();
        assert_eq!(
            first,
            "pe.ss.push(MovingSphere { s: Sphere { c: Vec3(2.300000, 0.910000, 2.300000), r: 0.900000 }, v: Vec3(0.0, 3.1622776601683795, 0.0), m: 1.0 });"
        );
        assert!(text.contains("c: Vec3(5.000000, 4.728377, 5.000000)"));
        assert_eq!(text.lines().count(), 30);
    }

    // Tests all emits objects before bodies
    // Verified by swapping emission order
    #[test]
    fn test_all_parts_in_order() {
        let text = emit(PyramidPart::All, &palette());
        let objects = text.find("world.objs.push");
        let bodies = text.find("pe.ss.push");
        assert!(objects.is_some() && bodies.is_some());
        assert!(objects < bodies);
    }

    // Tests mismatched palette length is rejected
    // Verified by zipping without a length check
    #[test]
    fn test_objects_require_one_color_per_sphere() {
        let colors = ColorRamp::generate().palette(10, 0.3).unwrap_or_default();
        let mut out = Vec::new();
        let result = PyramidLayout::default().write_objects(&mut out, &colors);
        assert!(matches!(
            result,
            Err(RampError::InvalidParameter {
                parameter: "colors",
                ..
            })
        ));
        assert!(out.is_empty());
    }
}
