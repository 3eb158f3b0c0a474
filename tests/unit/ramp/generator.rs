//! Tests for the channel walk, its direction rules and the eager ramp

#[cfg(test)]
mod tests {
    use rampgen::io::configuration::REFERENCE_RAMP_LENGTH;
    use rampgen::ramp::generator::{ColorRamp, Direction, RampIter, RampState};
    use rampgen::ramp::sample::ColorSample;

    fn channels_of(color: &ColorSample) -> [u8; 3] {
        color.components().map(|c| (c * 255.0).round() as u8)
    }

    // Tests walk starts at pure blue with only blue rising
    // Verified by starting the walk at black
    #[test]
    fn test_initial_state_is_pure_blue() {
        let state = RampState::new();
        assert_eq!(state.channels, [0, 0, 255]);
        assert_eq!(
            state.directions,
            [Direction::Hold, Direction::Hold, Direction::Rising]
        );
        assert_eq!(state.sample(), ColorSample::new(0.0, 0.0, 1.0));
    }

    // Tests blue saturates instead of wrapping while green starts rising
    // Verified by replacing the clamp with a wrapping add
    #[test]
    fn test_advance_saturates_at_channel_max() {
        let mut state = RampState::new();
        state.update_directions();
        assert_eq!(state.directions[1], Direction::Rising);

        state.advance();
        assert_eq!(state.channels, [0, 1, 255]);
    }

    // Tests falling counters saturate at zero
    // Verified by removing the lower clamp bound
    #[test]
    fn test_advance_saturates_at_zero() {
        let mut state = RampState {
            channels: [10, 0, 0],
            directions: [Direction::Falling, Direction::Falling, Direction::Falling],
        };
        state.advance();
        assert_eq!(state.channels, [9, 0, 0]);
    }

    // Tests later rules override earlier ones within the same step
    // Verified by turning the rule chain into else-if branches
    #[test]
    fn test_direction_rules_apply_in_order() {
        // blue == 0 sets red rising, then green == 0 && blue == 0 sets it falling
        let mut state = RampState {
            channels: [255, 0, 0],
            directions: [Direction::Rising, Direction::Falling, Direction::Falling],
        };
        state.update_directions();
        assert_eq!(state.directions[0], Direction::Falling);
        // red == 255 overrides the blue == 255 rule for green
        let mut both = RampState {
            channels: [255, 100, 255],
            directions: [Direction::Hold, Direction::Hold, Direction::Hold],
        };
        both.update_directions();
        assert_eq!(both.directions[1], Direction::Falling);
    }

    // Tests termination condition requires all three parts
    // Verified by dropping the green check
    #[test]
    fn test_is_terminal() {
        let done = |channels| {
            RampState {
                channels,
                directions: [Direction::Hold; 3],
            }
            .is_terminal()
        };
        assert!(done([126, 0, 0]));
        assert!(!done([127, 0, 0]));
        assert!(!done([0, 1, 0]));
        assert!(!done([0, 0, 1]));
    }

    // Tests generated length matches the reference length
    // Verified by changing the red stop threshold
    #[test]
    fn test_ramp_length_is_fixed() {
        let ramp = ColorRamp::generate();
        assert_eq!(ramp.len(), REFERENCE_RAMP_LENGTH);
        assert_eq!(ramp.len(), 1150);
        assert!(!ramp.is_empty());
    }

    // Tests phase boundaries land on the expected pure hues
    // Verified by swapping the green and blue direction rules
    #[test]
    fn test_golden_spot_checks() {
        let ramp = ColorRamp::generate();
        let expect = [
            (0, [0, 0, 255]),
            (1, [0, 1, 255]),
            (255, [0, 255, 255]),
            (256, [0, 255, 254]),
            (510, [0, 255, 0]),
            (511, [1, 255, 0]),
            (575, [65, 255, 0]),
            (765, [255, 255, 0]),
            (766, [255, 254, 0]),
            (1020, [255, 0, 0]),
            (1021, [254, 0, 0]),
            (1149, [126, 0, 0]),
        ];
        for (index, channels) in expect {
            let color = ramp
                .get(index)
                .unwrap_or_else(|| unreachable!("index {index} within ramp"));
            assert_eq!(channels_of(&color), channels, "sample {index}");
        }
        assert!(ramp.get(1150).is_none());
    }

    // Tests last sample meets the stop condition and no earlier one does
    // Verified by checking termination before appending
    #[test]
    fn test_stops_on_first_terminal_sample() {
        let ramp = ColorRamp::generate();
        let channels: Vec<[u8; 3]> = ramp.iter().map(channels_of).collect();
        let last = channels.last().copied().unwrap_or_default();
        assert!(last[0] < 127 && last[1] == 0 && last[2] == 0);

        let earlier = channels.get(..channels.len() - 1).unwrap_or_default();
        assert!(
            earlier
                .iter()
                .all(|[r, g, b]| !(*r < 127 && *g == 0 && *b == 0))
        );
    }

    // Tests lazy iterator restarts and matches the eager ramp
    // Verified by sharing walk state between iterators
    #[test]
    fn test_iterator_matches_eager_ramp() {
        let ramp = ColorRamp::generate();
        let lazy: Vec<ColorSample> = RampIter::new().collect();
        assert_eq!(lazy.as_slice(), ramp.samples());

        let again: Vec<ColorSample> = RampIter::default().collect();
        assert_eq!(lazy, again);
    }

    // Tests exhausted iterator stays exhausted
    // Verified by resetting state after termination
    #[test]
    fn test_iterator_is_fused() {
        let mut iter = RampIter::new();
        assert_eq!(iter.by_ref().count(), 1150);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    // Tests palette floors dark channels
    // Verified by skipping the brightness floor
    #[test]
    fn test_palette_applies_min_brightness() {
        let ramp = ColorRamp::generate();
        let palette = ramp.palette(30, 0.3).unwrap_or_default();
        assert_eq!(palette.len(), 30);
        assert_eq!(palette.first(), Some(&ColorSample::new(0.3, 0.3, 1.0)));
        assert!(
            palette
                .iter()
                .all(|c| c.components().iter().all(|&v| v >= 0.3))
        );
        assert!(ramp.palette(0, 0.3).is_err());
    }

    // Tests palette refuses floors that push channels past one
    // Verified by flooring without validating
    #[test]
    fn test_palette_rejects_out_of_range_floor() {
        let ramp = ColorRamp::generate();
        assert!(ramp.palette(3, 5.0).is_err());
        assert!(ramp.palette(3, -0.5).is_err());
        assert_eq!(ramp.palette(3, 1.0).ok().map(|p| p.len()), Some(3));
    }
}
