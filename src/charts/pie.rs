//! Pie Chart Module
//! Rating distribution pie drawn with egui_plot polygons.

use crate::stats::{RatingSummary, STAR_LEVELS};
use egui::{Color32, RichText, Stroke};
use egui_plot::{Legend, Plot, PlotPoints, Polygon};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Slice colours for 1..=5 stars.
pub const STAR_PALETTE: [Color32; STAR_LEVELS] = [
    Color32::from_rgb(0xff, 0x63, 0x84), // Pink
    Color32::from_rgb(0xff, 0xcd, 0x56), // Yellow
    Color32::from_rgb(0x36, 0xa2, 0xeb), // Blue
    Color32::from_rgb(0x4b, 0xc0, 0xc0), // Teal
    Color32::from_rgb(0xff, 0x9f, 0x40), // Orange
];

/// Largest angle a single filled polygon may span. egui fills convex shapes only.
const MAX_WEDGE_ANGLE: f64 = FRAC_PI_2;

/// Arc points per full turn.
const ARC_RESOLUTION: f64 = 128.0;

/// One star bucket of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub stars: usize,
    /// Clockwise from 12 o'clock, in radians.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn label(&self) -> String {
        slice_label(self.stars)
    }

    pub fn color(&self) -> Color32 {
        STAR_PALETTE[(self.stars - 1) % STAR_PALETTE.len()]
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Outline of the slice split into convex wedges.
    /// Every wedge starts at the centre.
    pub fn wedges(&self) -> Vec<Vec<[f64; 2]>> {
        let span = self.span();
        if span <= 0.0 {
            return Vec::new();
        }

        let pieces = (span / MAX_WEDGE_ANGLE).ceil().max(1.0) as usize;
        let step = span / pieces as f64;

        (0..pieces)
            .map(|i| {
                let from = self.start_angle + step * i as f64;
                let to = from + step;
                let segments = ((to - from) / TAU * ARC_RESOLUTION).ceil().max(1.0) as usize;

                let mut points = Vec::with_capacity(segments + 2);
                points.push([0.0, 0.0]);
                for s in 0..=segments {
                    let angle = from + (to - from) * s as f64 / segments as f64;
                    points.push(point_on_circle(angle));
                }
                points
            })
            .collect()
    }
}

/// Legend text for a star bucket.
pub fn slice_label(stars: usize) -> String {
    if stars == 1 {
        "1 Star".to_string()
    } else {
        format!("{} Stars", stars)
    }
}

/// Unit-circle point for a clockwise angle measured from 12 o'clock.
fn point_on_circle(angle: f64) -> [f64; 2] {
    [angle.sin(), angle.cos()]
}

/// Builds pie geometry from rating counts.
pub struct PieChart;

impl PieChart {
    /// Slices for every non-empty bucket, laid out clockwise from the top.
    pub fn slices(counts: &[usize; STAR_LEVELS]) -> Vec<PieSlice> {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Vec::new();
        }

        let mut angle = 0.0;
        counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(i, &count)| {
                let start_angle = angle;
                angle += count as f64 / total as f64 * TAU;
                PieSlice {
                    stars: i + 1,
                    start_angle,
                    end_angle: angle,
                }
            })
            .collect()
    }

    /// Draw the rating distribution pie with a legend.
    pub fn draw(ui: &mut egui::Ui, summary: &RatingSummary, height: f32) {
        let slices = Self::slices(&summary.star_counts);
        if slices.is_empty() {
            ui.label(RichText::new("No ratings to chart.").color(Color32::GRAY));
            return;
        }

        Plot::new("rating_pie")
            .height(height)
            .data_aspect(1.0)
            .include_x(-1.1)
            .include_x(1.1)
            .include_y(-1.1)
            .include_y(1.1)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for slice in &slices {
                    let name = slice.label();
                    for wedge in slice.wedges() {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(wedge))
                                .fill_color(slice.color())
                                .stroke(Stroke::new(1.0, slice.color()))
                                .name(&name),
                        );
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_slices_without_ratings() {
        assert!(PieChart::slices(&[0; 5]).is_empty());
    }

    #[test]
    fn test_fractions_and_angles() {
        let slices = PieChart::slices(&[1, 0, 1, 0, 2]);
        assert_eq!(slices.len(), 3);

        let stars: Vec<usize> = slices.iter().map(|s| s.stars).collect();
        assert_eq!(stars, vec![1, 3, 5]);

        let total: f64 = slices.iter().map(PieSlice::span).sum();
        assert!(approx(total, TAU));

        assert!(approx(slices[0].start_angle, 0.0));
        assert!(approx(slices[0].span(), TAU / 4.0));
        assert!(approx(slices[2].span(), TAU / 2.0));
        assert!(approx(slices[2].end_angle, TAU));
        for pair in slices.windows(2) {
            assert!(approx(pair[0].end_angle, pair[1].start_angle));
        }
    }

    #[test]
    fn test_colors_follow_star_position() {
        let slices = PieChart::slices(&[0, 3, 0, 0, 1]);
        assert_eq!(slices[0].color(), STAR_PALETTE[1]);
        assert_eq!(slices[1].color(), STAR_PALETTE[4]);
        assert_eq!(slices[0].label(), "2 Stars");
        assert_eq!(slice_label(1), "1 Star");
    }

    #[test]
    fn test_labels_are_plain_star_names() {
        let labels: Vec<String> = PieChart::slices(&[1, 1, 0, 1, 1])
            .iter()
            .map(PieSlice::label)
            .collect();
        assert_eq!(labels, vec!["1 Star", "2 Stars", "4 Stars", "5 Stars"]);
    }

    #[test]
    fn test_full_circle_split_into_quarters() {
        let slices = PieChart::slices(&[0, 0, 0, 7, 0]);
        let wedges = slices[0].wedges();
        assert_eq!(wedges.len(), 4);

        for wedge in &wedges {
            assert_eq!(wedge[0], [0.0, 0.0]);
            assert!(wedge.len() >= 3);
        }

        let first_arc = wedges[0][1];
        assert!(approx(first_arc[0], 0.0));
        assert!(approx(first_arc[1], 1.0));
    }

    #[test]
    fn test_wedges_stay_on_unit_circle() {
        let slices = PieChart::slices(&[2, 1, 0, 0, 0]);
        for slice in &slices {
            for wedge in slice.wedges() {
                for p in &wedge[1..] {
                    assert!(approx(p[0].hypot(p[1]), 1.0));
                }
            }
        }
    }

    #[test]
    fn test_first_slice_runs_clockwise() {
        let slices = PieChart::slices(&[1, 3, 0, 0, 0]);
        let wedges = slices[0].wedges();
        let wedge = &wedges[0];
        let end = wedge[wedge.len() - 1];
        assert!(approx(end[0], 1.0));
        assert!(approx(end[1], 0.0));
    }
}
