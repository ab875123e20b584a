/// Poster gradient palette for movie cards.
///
/// Each movie gets a deterministic two-stop gradient selected by
/// `id mod palette size`, plus a text colour with readable contrast on
/// top of it. Purely cosmetic; any deterministic-by-id mapping would do.

use egui::Color32;

/// A two-stop gradient rendered top-to-bottom behind the poster initials.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PosterGradient {
    pub start: Color32,
    pub end: Color32,
}

const GRADIENTS: [PosterGradient; 8] = [
    PosterGradient { start: Color32::from_rgb(0x66, 0x7e, 0xea), end: Color32::from_rgb(0x76, 0x4b, 0xa2) },
    PosterGradient { start: Color32::from_rgb(0xf0, 0x93, 0xfb), end: Color32::from_rgb(0xf5, 0x57, 0x6c) },
    PosterGradient { start: Color32::from_rgb(0x4f, 0xac, 0xfe), end: Color32::from_rgb(0x00, 0xf2, 0xfe) },
    PosterGradient { start: Color32::from_rgb(0x43, 0xe9, 0x7b), end: Color32::from_rgb(0x38, 0xf9, 0xd7) },
    PosterGradient { start: Color32::from_rgb(0xfa, 0x70, 0x9a), end: Color32::from_rgb(0xfe, 0xe1, 0x40) },
    PosterGradient { start: Color32::from_rgb(0xa1, 0x8c, 0xd1), end: Color32::from_rgb(0xfb, 0xc2, 0xeb) },
    PosterGradient { start: Color32::from_rgb(0xff, 0x9a, 0x9e), end: Color32::from_rgb(0xfe, 0xcf, 0xef) },
    PosterGradient { start: Color32::from_rgb(0xf6, 0xd3, 0x65), end: Color32::from_rgb(0xfd, 0xa0, 0x85) },
];

/// Gradient for a movie id. Stable across sessions for the same id.
pub fn gradient_for_id(id: u32) -> PosterGradient {
    GRADIENTS[id as usize % GRADIENTS.len()]
}

impl PosterGradient {
    /// Colour halfway down the gradient, used where a flat fill stands in
    /// for the full gradient (genre tags, date badges).
    pub fn midpoint(&self) -> Color32 {
        mix_colors(self.start, self.end, 0.5)
    }

    /// Text colour with readable contrast over this gradient, judged at
    /// the midpoint.
    pub fn text_color(&self) -> Color32 {
        readable_text_color(self.midpoint())
    }
}

// ── Colour arithmetic ──────────────────────────────────────────────

fn readable_text_color(bg: Color32) -> Color32 {
    const LIGHT: Color32 = Color32::from_rgb(255, 255, 255);
    const DARK: Color32 = Color32::from_rgb(20, 28, 45);
    if relative_luminance(bg) > 0.5 {
        DARK
    } else {
        LIGHT
    }
}

fn mix_colors(base: Color32, target: Color32, factor: f32) -> Color32 {
    let weight = factor.clamp(0.0, 1.0);
    let mix = |start: u8, end: u8| -> u8 {
        let start_f = start as f32;
        let end_f = end as f32;
        ((start_f + (end_f - start_f) * weight).round()).clamp(0.0, 255.0) as u8
    };
    Color32::from_rgb(
        mix(base.r(), target.r()),
        mix(base.g(), target.g()),
        mix(base.b(), target.b()),
    )
}

fn relative_luminance(color: Color32) -> f32 {
    fn srgb_component(value: u8) -> f32 {
        let channel = value as f32 / 255.0;
        if channel <= 0.03928 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    }

    let r = srgb_component(color.r());
    let g = srgb_component(color.g());
    let b = srgb_component(color.b());
    0.2126 * r + 0.7152 * g + 0.0722 * b
}
