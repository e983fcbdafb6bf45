mod tests {
    use antennae_light_composer::color::{
        BlendMode, PaletteId, Rgb, blend_colors, color_from_palette, rgb_from_u32, scale_color,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 255), WHITE);
        assert_eq!(scale_color(WHITE, 128), Rgb::new(128, 128, 128));
        assert_eq!(scale_color(WHITE, 0), BLACK);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xD5_2A_00), Rgb::new(0xD5, 0x2A, 0x00));
    }

    #[test]
    fn test_palette_entries() {
        let rainbow = PaletteId::Rainbow.colors();
        assert_eq!(color_from_palette(rainbow, 0, 255, BlendMode::LinearBlend), RED);
        assert_eq!(
            color_from_palette(rainbow, 16, 255, BlendMode::LinearBlend),
            Rgb::new(0xD5, 0x2A, 0x00)
        );
        assert_eq!(
            color_from_palette(rainbow, 160, 255, BlendMode::NoBlend),
            BLUE
        );
    }

    #[test]
    fn test_palette_blending() {
        let rainbow = PaletteId::Rainbow.colors();
        assert_eq!(color_from_palette(rainbow, 8, 255, BlendMode::NoBlend), RED);
        assert_eq!(
            color_from_palette(rainbow, 8, 255, BlendMode::LinearBlend),
            Rgb::new(234, 21, 0)
        );
    }

    #[test]
    fn test_palette_blend_wraps_to_first_entry() {
        let rainbow = PaletteId::Rainbow.colors();
        assert_eq!(
            color_from_palette(rainbow, 248, 255, BlendMode::LinearBlend),
            Rgb::new(234, 0, 21)
        );
    }

    #[test]
    fn test_palette_brightness() {
        let rainbow = PaletteId::Rainbow.colors();
        assert_eq!(color_from_palette(rainbow, 0, 0, BlendMode::LinearBlend), BLACK);
        assert_eq!(
            color_from_palette(rainbow, 0, 128, BlendMode::LinearBlend),
            Rgb::new(128, 0, 0)
        );
    }

    #[test]
    fn test_rainbow_stripe_gaps_are_black() {
        let stripe = PaletteId::RainbowStripe.colors();
        assert_eq!(color_from_palette(stripe, 0, 255, BlendMode::NoBlend), RED);
        assert_eq!(color_from_palette(stripe, 16, 255, BlendMode::NoBlend), BLACK);
    }

    #[test]
    fn test_palette_id_names() {
        assert_eq!(PaletteId::Rainbow.as_str(), "rainbow");
        assert_eq!(PaletteId::RainbowStripe.as_str(), "rainbow_stripe");
        assert_eq!(PaletteId::Party.as_str(), "party");
        assert_eq!(PaletteId::Forest.as_str(), "forest");
    }
}
