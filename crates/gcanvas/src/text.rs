//! Text measurement for labels
//!
//! There is no glyph backend in this crate, so label sizes come from a
//! [`TextMetrics`] implementation. [`ApproximateMetrics`] estimates advances
//! from character classes, which keeps layout stable and deterministic.

use std::fmt;

use gcanvas_core::{FontWeight, TextStyle};

/// Vertical metrics of a font at a given size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of tall glyphs
    pub ascent: f32,
    /// Distance from the baseline to the bottom of descending glyphs
    pub descent: f32,
}

impl FontMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Measures text for a style
pub trait TextMetrics: fmt::Debug + Send + Sync {
    fn font_metrics(&self, style: &TextStyle) -> FontMetrics;

    /// Advance width of `text` set in `style`
    fn measure(&self, text: &str, style: &TextStyle) -> f32;
}

/// Character-class based estimate of proportional and monospace fonts
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateMetrics;

impl ApproximateMetrics {
    const ASCENT: f32 = 0.8;
    const DESCENT: f32 = 0.2;
    const MONO_ADVANCE: f32 = 0.6;
    const BOLD_FACTOR: f32 = 1.05;

    fn advance(c: char) -> f32 {
        match c {
            'i' | 'j' | 'l' | '.' | ',' | '\'' | '!' | '|' | ':' | ';' => 0.28,
            ' ' | 'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' => 0.35,
            'm' | 'w' | 'M' | 'W' | '@' => 0.88,
            c if c.is_ascii_uppercase() => 0.68,
            c if c.is_ascii_digit() => 0.56,
            _ => 0.55,
        }
    }
}

impl TextMetrics for ApproximateMetrics {
    fn font_metrics(&self, style: &TextStyle) -> FontMetrics {
        FontMetrics {
            ascent: style.size * Self::ASCENT,
            descent: style.size * Self::DESCENT,
        }
    }

    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        let em: f32 = if style.is_monospace() {
            text.chars().count() as f32 * Self::MONO_ADVANCE
        } else {
            text.chars().map(Self::advance).sum()
        };
        let weight = match style.weight {
            FontWeight::Bold => Self::BOLD_FACTOR,
            _ => 1.0,
        };
        em * style.size * weight
    }
}
