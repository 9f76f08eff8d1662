// Graph drawing.
//
// Users get a fixed size and colour. Posts grow with their importance score
// (`base_post_size + size_scale * score`) and switch to the highlight colour
// when they reach the cutoff. Sizes are marker areas in points², the same
// unit plotting libraries use for scatter markers, converted to a pixel
// radius at the figure's dpi.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};

use super::colors::parse_color;
use super::layout::{spring_layout, SpringParams};
use super::{draw_err, Scene};
use crate::error::{ConfigError, RenderError};
use crate::network::build::{NodeKind, SocialGraph};
use crate::network::importance::Importance;
use crate::network::threshold::ScoredPosts;

/// Styling and layout options for the graph picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStyle {
    pub user_color: String,
    pub post_color: String,
    pub highlight_color: String,
    pub user_size: f64,
    pub base_post_size: f64,
    pub size_scale: f64,
    /// Figure size in inches
    pub figsize: (f64, f64),
    pub dpi: u32,
    pub seed: u64,
    pub spring_k: f64,
    pub iterations: usize,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            user_color: "lightblue".to_string(),
            post_color: "gray".to_string(),
            highlight_color: "orange".to_string(),
            user_size: 500.0,
            base_post_size: 500.0,
            size_scale: 100.0,
            figsize: (12.0, 8.0),
            dpi: 100,
            seed: 42,
            spring_k: 1.2,
            iterations: 100,
        }
    }
}

/// The three node colours, resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePalette {
    pub user: RGBColor,
    pub post: RGBColor,
    pub highlight: RGBColor,
}

impl GraphStyle {
    pub fn palette(&self) -> Result<NodePalette, ConfigError> {
        Ok(NodePalette {
            user: parse_color(&self.user_color)?,
            post: parse_color(&self.post_color)?,
            highlight: parse_color(&self.highlight_color)?,
        })
    }

    pub fn pixel_size(&self) -> Result<(u32, u32), ConfigError> {
        let width = (self.figsize.0 * self.dpi as f64).round();
        let height = (self.figsize.1 * self.dpi as f64).round();
        if !(width >= 1.0 && height >= 1.0) {
            return Err(ConfigError::EmptyCanvas {
                width: width.max(0.0) as u32,
                height: height.max(0.0) as u32,
            });
        }
        Ok((width as u32, height as u32))
    }

    fn spring_params(&self) -> SpringParams {
        SpringParams {
            k: self.spring_k,
            iterations: self.iterations,
            seed: self.seed,
        }
    }
}

/// How a single node is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub id: String,
    pub kind: NodeKind,
    pub color: RGBColor,
    /// Marker area in points²
    pub size: f64,
    pub highlighted: bool,
}

/// Colour and size every node, in graph node order.
pub fn node_styles(
    graph: &SocialGraph,
    scored: &ScoredPosts,
    style: &GraphStyle,
    palette: &NodePalette,
) -> Vec<NodeStyle> {
    graph
        .nodes()
        .map(|node| match node.kind {
            NodeKind::User => NodeStyle {
                id: node.id.clone(),
                kind: node.kind,
                color: palette.user,
                size: style.user_size,
                highlighted: false,
            },
            NodeKind::Post => {
                let highlighted = scored.is_highlighted(&node.id);
                NodeStyle {
                    id: node.id.clone(),
                    kind: node.kind,
                    color: if highlighted {
                        palette.highlight
                    } else {
                        palette.post
                    },
                    size: style.base_post_size + style.size_scale * scored.score(&node.id),
                    highlighted,
                }
            }
        })
        .collect()
}

/// A laid-out graph ready to draw.
#[derive(Debug, Clone)]
pub struct GraphPicture {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
    pub nodes: Vec<NodeStyle>,
    /// Layout positions in [-1, 1], same order as `nodes`
    pub positions: Vec<[f64; 2]>,
    pub edges: Vec<(usize, usize)>,
}

const MARGIN_FRACTION: f64 = 0.08;
const TITLE_HEIGHT: f64 = 40.0;
const LABEL_POINTS: f64 = 8.0;
const ARROW_LENGTH: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 4.0;

impl GraphPicture {
    pub fn build(
        graph: &SocialGraph,
        scored: &ScoredPosts,
        importance: &Importance,
        style: &GraphStyle,
    ) -> Result<Self, ConfigError> {
        let palette = style.palette()?;
        let (width, height) = style.pixel_size()?;
        let edges = graph.edge_indices();
        let positions = spring_layout(graph.node_count(), &edges, &style.spring_params());

        Ok(Self {
            title: format!("Social Media Graph (highlight by '{importance}')"),
            width,
            height,
            dpi: style.dpi,
            nodes: node_styles(graph, scored, style, &palette),
            positions,
            edges,
        })
    }

    /// Marker radius in pixels for an area given in points².
    fn radius_px(&self, size: f64) -> f64 {
        size.max(0.0).sqrt() / 2.0 * self.dpi as f64 / 72.0
    }

    /// Map a layout position into the drawing area below the title.
    fn to_pixel(&self, p: [f64; 2]) -> (f64, f64) {
        let w = self.width as f64;
        let h = self.height as f64 - TITLE_HEIGHT;
        let mx = w * MARGIN_FRACTION;
        let my = h * MARGIN_FRACTION;
        let x = mx + (p[0] + 1.0) / 2.0 * (w - 2.0 * mx);
        // Flip y so positive is up
        let y = TITLE_HEIGHT + my + (1.0 - p[1]) / 2.0 * (h - 2.0 * my);
        (x, y)
    }
}

fn px(v: (f64, f64)) -> (i32, i32) {
    (v.0.round() as i32, v.1.round() as i32)
}

impl Scene for GraphPicture {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let centre = Pos::new(HPos::Center, VPos::Center);
        let title_style = ("sans-serif", 20.0)
            .into_font()
            .color(&BLACK)
            .pos(centre);
        root.draw(&Text::new(
            self.title.as_str(),
            (self.width as i32 / 2, (TITLE_HEIGHT / 2.0) as i32),
            title_style,
        ))
        .map_err(draw_err)?;

        let pixels: Vec<(f64, f64)> = self.positions.iter().map(|&p| self.to_pixel(p)).collect();
        let edge_color = BLACK.mix(0.5);

        for &(from, to) in &self.edges {
            let (Some(&a), Some(&b), Some(target)) =
                (pixels.get(from), pixels.get(to), self.nodes.get(to))
            else {
                continue;
            };
            let (dx, dy) = (b.0 - a.0, b.1 - a.1);
            let length = dx.hypot(dy);
            if length < 1.0 {
                continue;
            }
            let (ux, uy) = (dx / length, dy / length);

            // Stop the arrow at the target's rim
            let rim = self.radius_px(target.size).min(length);
            let tip = (b.0 - ux * rim, b.1 - uy * rim);
            let base = (tip.0 - ux * ARROW_LENGTH, tip.1 - uy * ARROW_LENGTH);

            root.draw(&PathElement::new(
                vec![px(a), px(tip)],
                edge_color.stroke_width(1),
            ))
            .map_err(draw_err)?;

            let left = (base.0 - uy * ARROW_HALF_WIDTH, base.1 + ux * ARROW_HALF_WIDTH);
            let right = (base.0 + uy * ARROW_HALF_WIDTH, base.1 - ux * ARROW_HALF_WIDTH);
            root.draw(&Polygon::new(
                vec![px(tip), px(left), px(right)],
                edge_color.filled(),
            ))
            .map_err(draw_err)?;
        }

        for (node, &p) in self.nodes.iter().zip(&pixels) {
            let radius = self.radius_px(node.size).round().max(1.0) as i32;
            root.draw(&Circle::new(px(p), radius, node.color.filled()))
                .map_err(draw_err)?;
        }

        let label_size = LABEL_POINTS * self.dpi as f64 / 72.0;
        for (node, &p) in self.nodes.iter().zip(&pixels) {
            let label = ("sans-serif", label_size)
                .into_font()
                .color(&BLACK)
                .pos(centre);
            root.draw(&Text::new(node.id.as_str(), px(p), label))
                .map_err(draw_err)?;
        }

        Ok(())
    }
}
