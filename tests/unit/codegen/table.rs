//! Tests for the balanced linear-light table

#[cfg(test)]
mod tests {
    use rampgen::RampError;
    use rampgen::codegen::table::BalancedTable;
    use rampgen::ramp::ColorRamp;

    // Tests channel totals of the default 32-entry table
    // Verified by skipping linearization
    #[test]
    fn test_default_table_sums() {
        let ramp = ColorRamp::generate();
        let Ok(table) = BalancedTable::from_ramp(&ramp, 32, 2.2) else {
            unreachable!("default table must build");
        };
        assert_eq!(table.entries.len(), 32);
        assert!((table.sums.red - 11.209_318).abs() < 1e-5);
        assert!((table.sums.green - 19.125_248).abs() < 1e-5);
        assert!((table.sums.blue - 10.057_230).abs() < 1e-5);
    }

    // Tests balanced green and blue totals match the red total
    // Verified by applying the green factor to blue
    #[test]
    fn test_entries_are_balanced() {
        let ramp = ColorRamp::generate();
        let Ok(table) = BalancedTable::from_ramp(&ramp, 32, 2.2) else {
            unreachable!("default table must build");
        };
        let (r, g, b) = table
            .entries
            .iter()
            .fold((0.0_f64, 0.0_f64, 0.0_f64), |(r, g, b), [er, eg, eb]| {
                (r + er, g + eg, b + eb)
            });
        assert!((g - r).abs() < 1e-9);
        assert!((b - r).abs() < 1e-9);
    }

    // Tests emitted declaration format
    // Verified by dropping the trailing separator
    #[test]
    fn test_write_declaration() {
        let ramp = ColorRamp::generate();
        let Ok(table) = BalancedTable::from_ramp(&ramp, 32, 2.2) else {
            unreachable!("default table must build");
        };
        let mut out = Vec::new();
        assert!(table.write(&mut out).is_ok());
        let text = String::from_utf8(out).unwrap_or_default();

        assert!(text.starts_with(
            "CONSTANT const Vec3 RGB_TABLE[] = {Vec3{0.000000, 0.000000, 1.114553}, \
             Vec3{0.000000, 0.007422, 1.114553}, "
        ));
        assert!(text.ends_with(", };"));
        assert_eq!(text.matches("Vec3{").count(), 32);
    }

    // Tests invalid sample counts are rejected
    // Verified by clamping the sample count
    #[test]
    fn test_rejects_invalid_sample_counts() {
        let ramp = ColorRamp::generate();
        for samples in [0, 1151] {
            assert!(matches!(
                BalancedTable::from_ramp(&ramp, samples, 2.2),
                Err(RampError::InvalidParameter {
                    parameter: "samples",
                    ..
                })
            ));
        }
    }

    // Tests a subset without green is a computation error
    // Verified by removing the zero total check
    #[test]
    fn test_single_blue_sample_cannot_balance() {
        let ramp = ColorRamp::generate();
        assert!(matches!(
            BalancedTable::from_ramp(&ramp, 1, 2.2),
            Err(RampError::Computation { .. })
        ));
    }
}
