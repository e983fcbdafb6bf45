mod tests {
    use antennae_light_composer::{
        AntennaSet, BlendMode, CylonEffect, Effect, PaletteEffect, PaletteId, PongEffect, Rgb,
        SinePulseEffect, StaticColorEffect,
        color::{color_from_palette, wheel},
        effect::sweep::{Bounce, Direction},
        set_full_antennae_color,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_bounce_sequence() {
        let mut bounce = Bounce::new(1);
        let mut positions = [0usize; 9];
        for position in &mut positions {
            *position = bounce.position();
            bounce.advance(4);
        }
        assert_eq!(positions, [0, 1, 2, 3, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_bounce_stays_in_range_and_reverses_at_ends() {
        for step in [1, 2, 3, 5] {
            for span in 1..=12 {
                let mut bounce = Bounce::new(step);
                let mut direction = bounce.direction();
                for _ in 0..200 {
                    bounce.advance(span);
                    assert!(bounce.position() < span);
                    if bounce.direction() != direction {
                        let position = bounce.position();
                        assert!(position == 0 || position == span - 1);
                        match bounce.direction() {
                            Direction::Backward => assert_eq!(position, span - 1),
                            Direction::Forward => assert_eq!(position, 0),
                        }
                        direction = bounce.direction();
                    }
                }
            }
        }
    }

    #[test]
    fn test_bounce_clamps_to_boundary() {
        let mut bounce = Bounce::new(3);
        let mut positions = [0usize; 7];
        for position in &mut positions {
            *position = bounce.position();
            bounce.advance(8);
        }
        assert_eq!(positions, [0, 3, 6, 7, 4, 1, 0]);
    }

    #[test]
    fn test_cylon_lights_bounce_position() {
        let mut leds = [BLACK; 4];
        let mut cylon = CylonEffect::new(RED);
        let expected = [0, 1, 2, 3, 2, 1, 0, 1];
        for index in expected {
            cylon.render(&mut leds);
            assert_eq!(leds[index], RED);
            for (i, led) in leds.iter().enumerate() {
                if i != index {
                    assert!(led.r < 255);
                }
            }
        }
    }

    #[test]
    fn test_cylon_leaves_fading_trail() {
        let mut leds = [BLACK; 10];
        let mut cylon = CylonEffect::default();
        for _ in 0..3 {
            cylon.render(&mut leds);
        }
        assert_eq!(leds[2], RED);
        assert!(leds[1].r > leds[0].r);
        assert!(leds[0].r > 0);
        assert_eq!(leds[3], BLACK);
    }

    #[test]
    fn test_rainbow_cylon_walks_hue() {
        let mut leds = [BLACK; 10];
        let mut cylon = CylonEffect::rainbow();
        cylon.render(&mut leds);
        assert_eq!(leds[0], wheel(0));
        cylon.render(&mut leds);
        assert_eq!(leds[1], wheel(1));

        cylon.reset();
        assert_eq!(cylon.position(), 0);
        assert_eq!(cylon.color(), wheel(0));
    }

    #[test]
    fn test_effects_ignore_empty_strip() {
        let mut empty: [Rgb; 0] = [];
        CylonEffect::rainbow().render(&mut empty);
        PongEffect::fast().render(&mut empty);
        SinePulseEffect::new().render(&mut empty);
        PaletteEffect::default().render(&mut empty);
    }

    #[test]
    fn test_pong_segment() {
        let mut leds = [BLACK; 10];
        let mut pong = PongEffect::with_color(BLUE);
        pong.render(&mut leds);
        assert_eq!(&leds[0..3], &[BLUE; 3]);
        assert_eq!(leds[3], BLACK);

        for _ in 0..7 {
            pong.render(&mut leds);
        }
        // Segment reached the far end: pixels 7..10
        assert_eq!(&leds[7..10], &[BLUE; 3]);
        assert!(leds[6].b < 255);
    }

    #[test]
    fn test_pong_wider_than_strip() {
        let mut leds = [BLACK; 2];
        let mut pong = PongEffect::with_color(BLUE);
        for _ in 0..5 {
            pong.render(&mut leds);
            assert_eq!(leds, [BLUE; 2]);
            assert_eq!(pong.position(), 0);
        }
    }

    #[test]
    fn test_pong_cycles_hue_every_frame() {
        let mut pong = PongEffect::new();
        assert_eq!(pong.color(), wheel(0));
        pong.advance(10);
        assert_eq!(pong.color(), wheel(1));
    }

    #[test]
    fn test_fast_pong_changes_hue_on_bounce() {
        let mut pong = PongEffect::fast();
        // 10 LEDs, width 3: start positions 0..=7, step 2
        let expected = [2, 4, 6, 7];
        for position in expected {
            assert_eq!(pong.color(), wheel(0));
            pong.advance(10);
            assert_eq!(pong.position(), position);
        }
        assert_eq!(pong.color(), wheel(32));
    }

    #[test]
    fn test_sine_pulse_with_color() {
        let mut leds = [BLACK; 6];
        let mut pulse = SinePulseEffect::with_color(RED);
        pulse.render(&mut leds);
        assert_eq!(leds, [Rgb::new(128, 0, 0); 6]);

        // 2 degrees per frame: 44 more frames reach the peak at 90
        for _ in 0..44 {
            pulse.render(&mut leds);
        }
        assert_eq!(pulse.phase(), 90);
        pulse.render(&mut leds);
        assert_eq!(leds, [RED; 6]);
    }

    #[test]
    fn test_sine_pulse_phase_wraps() {
        let mut pulse = SinePulseEffect::new();
        for _ in 0..180 {
            pulse.advance(1);
        }
        assert_eq!(pulse.phase(), 0);
        pulse.advance(1);
        assert_eq!(pulse.phase(), 2);
    }

    #[test]
    fn test_sine_pulse_fills_uniformly() {
        let mut leds = [BLACK; 8];
        let mut pulse = SinePulseEffect::new();
        for _ in 0..20 {
            pulse.render(&mut leds);
            assert!(leds.iter().all(|led| *led == leds[0]));
        }
    }

    #[test]
    fn test_palette_effect_scrolls() {
        let mut leds = [BLACK; 4];
        let mut effect = PaletteEffect::new(PaletteId::Party, BlendMode::LinearBlend);
        let party = PaletteId::Party.colors();

        effect.render(&mut leds);
        assert_eq!(leds[0], color_from_palette(party, 0, 255, BlendMode::LinearBlend));
        assert_eq!(leds[1], color_from_palette(party, 3, 255, BlendMode::LinearBlend));
        assert_eq!(effect.start_index(), 1);

        effect.render(&mut leds);
        assert_eq!(leds[0], color_from_palette(party, 1, 255, BlendMode::LinearBlend));
    }

    #[test]
    fn test_static_color() {
        let mut leds = [BLACK; 3];
        StaticColorEffect::new(BLUE).render(&mut leds);
        assert_eq!(leds, [BLUE; 3]);
    }

    #[test]
    fn test_set_full_antennae_color() {
        let mut antennae: AntennaSet<1, 10> = AntennaSet::new();
        antennae.black_out();
        set_full_antennae_color(&mut antennae, RED);
        assert!(antennae.iter().all(|strip| strip.iter().all(|led| *led == RED)));
        assert_eq!(antennae.strip(0).map(<[Rgb]>::len), Some(10));
    }

    #[test]
    fn test_antenna_set_starts_black() {
        let antennae: AntennaSet<4, 20> = AntennaSet::new();
        assert_eq!(antennae.strip_count(), 4);
        assert_eq!(antennae.strip_len(), 20);
        assert!(antennae.iter().all(|strip| strip.iter().all(|led| *led == BLACK)));
        assert!(antennae.strip(4).is_none());
    }

    #[test]
    fn test_antennae_render_in_phase() {
        let mut antennae: AntennaSet<3, 12> = AntennaSet::new();
        let mut pong = PongEffect::fast();
        for _ in 0..9 {
            antennae.render(&mut pong);
        }
        let first = antennae.strip(0).unwrap().to_vec();
        assert!(antennae.iter().all(|strip| strip == first.as_slice()));
        // Advanced once per frame, not once per strip
        assert_eq!(pong.position(), 1);
    }
}
