// File: crates/chart-core/src/theme.rs
// Summary: Panel color presets (background, frame, text, series palette) in RGB565.

use crate::color::{rgb, Color};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub frame: Color,
    pub text: Color,
    pub palette: [Color; 10],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: rgb(0, 0, 0),
            frame: rgb(255, 255, 255),
            text: rgb(255, 255, 255),
            palette: [
                rgb(0, 255, 0),
                rgb(64, 160, 255),
                rgb(255, 200, 0),
                rgb(255, 80, 80),
                rgb(200, 100, 255),
                rgb(0, 220, 220),
                rgb(255, 140, 0),
                rgb(160, 255, 120),
                rgb(255, 120, 200),
                rgb(180, 180, 190),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgb(250, 250, 252),
            frame: rgb(60, 60, 70),
            text: rgb(20, 20, 30),
            palette: [
                rgb(20, 160, 90),
                rgb(32, 120, 200),
                rgb(200, 140, 0),
                rgb(200, 60, 60),
                rgb(130, 60, 200),
                rgb(0, 140, 150),
                rgb(220, 100, 0),
                rgb(90, 160, 40),
                rgb(200, 60, 140),
                rgb(100, 100, 110),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: rgb(0x00, 0x00, 0x00),
            frame: rgb(0xff, 0xff, 0xff),
            text: rgb(0xff, 0xff, 0x00),
            palette: [
                rgb(0x00, 0xff, 0x00),
                rgb(0x00, 0xff, 0xff),
                rgb(0xff, 0xff, 0x00),
                rgb(0xff, 0x00, 0x00),
                rgb(0xff, 0x00, 0xff),
                rgb(0x00, 0x80, 0xff),
                rgb(0xff, 0x80, 0x00),
                rgb(0x80, 0xff, 0x80),
                rgb(0xff, 0x80, 0xc0),
                rgb(0xff, 0xff, 0xff),
            ],
        }
    }

    /// Palette color for series/slice `i`, cycling.
    pub fn series_color(&self, i: usize) -> Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("nope").name, "dark");
        assert_eq!(Theme::dark().series_color(12), Theme::dark().palette[2]);
    }
}
