// Word cloud layout and drawing.
//
// Words are placed largest first, each walking outward along an Archimedean
// spiral from the canvas centre until its bounding box fits without
// touching anything already placed. The spiral advances by a fixed arc
// length, not a fixed angle, so outer rings are searched as finely as inner
// ones. A word that finds no spot is retried at smaller sizes and dropped
// once it falls below the minimum font size. A word never starts larger
// than the word placed before it.
// Text extents are estimated from character count, which keeps the layout
// independent of installed fonts.

use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use super::colors::{parse_color, WORD_PALETTE};
use super::{draw_err, Scene};
use crate::error::{ConfigError, RenderError};
use crate::text::frequency::WordCount;

/// Canvas options for the word cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub min_font_size: u32,
    /// Largest font size; defaults to a quarter of the canvas height
    pub max_font_size: Option<u32>,
}

impl Default for CloudStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: "white".to_string(),
            min_font_size: 4,
            max_font_size: None,
        }
    }
}

impl CloudStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        parse_color(&self.background)?;
        Ok(())
    }

    fn max_font(&self) -> u32 {
        self.max_font_size
            .unwrap_or(self.height / 4)
            .max(self.min_font_size)
    }
}

/// A word positioned on the canvas (top-left corner, pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    pub color: RGBColor,
}

impl PlacedWord {
    fn rect(&self) -> Rect {
        Rect::for_text(self.x, self.y, &self.word, self.font_size)
    }
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rect {
    fn for_text(x: i32, y: i32, word: &str, font_size: u32) -> Self {
        let (w, h) = text_extent(word, font_size);
        Self { x, y, w, h }
    }

    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    fn inside(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

/// Approximate rendered size of `word` at `font_size`.
fn text_extent(word: &str, font_size: u32) -> (i32, i32) {
    let chars = word.chars().count().max(1) as f64;
    let w = (chars * font_size as f64 * 0.6).ceil() as i32;
    (w, font_size as i32)
}

/// Distance along the spiral between candidate positions, in pixels.
const ARC_STEP: f64 = 3.0;
/// Largest angle step, used near the centre where `ARC_STEP / r` blows up.
const MAX_ANGLE_STEP: f64 = 0.1;
const SPIRAL_GROWTH: f64 = 2.0;
const FONT_SHRINK: u32 = 2;

/// Lay out words. Input order is placement order, so pass them most
/// frequent first (as `word_frequencies` returns them).
pub fn layout_words(words: &[WordCount], style: &CloudStyle) -> Vec<PlacedWord> {
    let Some(max_count) = words.iter().map(|w| w.count).max() else {
        return Vec::new();
    };

    let width = style.width as i32;
    let height = style.height as i32;
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    let aspect = height as f64 / width as f64;
    let max_radius = (cx * cx + cy * cy).sqrt();

    let min_font = style.min_font_size.max(1);
    let max_font = style.max_font();

    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut size_cap = max_font;

    for (rank, entry) in words.iter().enumerate() {
        let ratio = entry.count as f64 / max_count as f64;
        let mut font_size = (min_font as f64
            + max_font.saturating_sub(min_font) as f64 * ratio)
            .round() as u32;
        font_size = font_size.min(size_cap).max(min_font);

        let spot = loop {
            let spot = find_spot(
                &entry.word,
                font_size,
                &placed,
                cx,
                cy,
                aspect,
                max_radius,
                width,
                height,
            );
            if spot.is_some() {
                break spot;
            }
            if font_size <= min_font {
                break None;
            }
            font_size = font_size.saturating_sub(FONT_SHRINK).max(min_font);
        };

        if let Some((x, y)) = spot {
            size_cap = font_size;
            placed.push(PlacedWord {
                word: entry.word.clone(),
                x,
                y,
                font_size,
                color: WORD_PALETTE[rank % WORD_PALETTE.len()],
            });
        }
    }

    placed
}

#[allow(clippy::too_many_arguments)]
fn find_spot(
    word: &str,
    font_size: u32,
    placed: &[PlacedWord],
    cx: f64,
    cy: f64,
    aspect: f64,
    max_radius: f64,
    width: i32,
    height: i32,
) -> Option<(i32, i32)> {
    let (w, h) = text_extent(word, font_size);
    if w > width || h > height {
        return None;
    }

    let mut t: f64 = 0.0;
    loop {
        let r = SPIRAL_GROWTH * t;
        if r > max_radius {
            return None;
        }
        let x = (cx + r * t.cos() - w as f64 / 2.0).round() as i32;
        let y = (cy + r * aspect * t.sin() - h as f64 / 2.0).round() as i32;
        let candidate = Rect { x, y, w, h };

        if candidate.inside(width, height)
            && placed.iter().all(|p| !p.rect().intersects(&candidate))
        {
            return Some((x, y));
        }
        t += (ARC_STEP / r).min(MAX_ANGLE_STEP);
    }
}

/// A laid-out word cloud ready to draw.
#[derive(Debug, Clone)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    pub fn build(words: &[WordCount], style: &CloudStyle) -> Result<Self, ConfigError> {
        style.validate()?;
        Ok(Self {
            width: style.width,
            height: style.height,
            background: parse_color(&style.background)?,
            words: layout_words(words, style),
        })
    }
}

impl Scene for WordCloud {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        root.fill(&self.background).map_err(draw_err)?;
        for word in &self.words {
            let font = ("sans-serif", word.font_size as f64)
                .into_font()
                .color(&word.color);
            root.draw(&Text::new(word.word.as_str(), (word.x, word.y), font))
                .map_err(draw_err)?;
        }
        Ok(())
    }
}
