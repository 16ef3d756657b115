//! Interactive 2D RRT viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the growth session from
//! `rrt-core` and implements [`eframe::App`] to render the tree and drive
//! growth through an egui UI.

use eframe::App;
use glam::Vec2;
use rand::rngs::ThreadRng;
use rrt_core::{
    config::Config,
    engine::{Edge, Rrt},
    sampler::UniformSampler,
};
use tracing::{debug, warn};

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The growth session: [`Rrt`] over a thread-rng [`UniformSampler`].
/// - UI configuration (pan/zoom, growth rate, timing).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true`, call [`Viewer::step_once`] up to
///    `steps_per_frame` times.
/// 3. Render the domain boundary, tree edges, and nodes.
///
/// ### Fields
/// - `rrt` - Growth session holding the tree, configuration, and sampler.
///
/// - `running` - Whether growth is currently auto-advancing.
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
///
/// - `last_edge` - The edge grown most recently (for highlighting).
///
/// - `steps_per_frame` - Growth steps attempted per rendered frame.
/// - `last_step_time` - Time stamp of the last step batch (egui time).
/// - `last_step_dt` - Actual time delta between the last two batches.
pub struct Viewer {
    rrt: Rrt<UniformSampler<ThreadRng>>,

    running: bool,
    zoom: f32,
    pan: egui::Vec2,

    last_edge: Option<Edge>,

    steps_per_frame: usize,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer with the default growth configuration:
    /// a root at `(400, 300)` centered in an `800×600` domain.
    ///
    /// The camera starts at 1:1 zoom with no pan, growth paused.
    pub fn new() -> Self {
        let cfg = Config::default();
        let rrt = Rrt::new(cfg, UniformSampler::new(rand::rng()));

        Self {
            rrt,
            running: false,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
            last_edge: None,
            steps_per_frame: 1,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Restarts growth from a fresh root.
    ///
    /// The current configuration and camera settings are kept; the tree
    /// is rebuilt with a single root at `cfg.root`, the last-edge
    /// highlight is cleared, and auto-running stops.
    fn reset(&mut self) {
        let cfg = self.rrt.cfg;
        self.rrt = Rrt::new(cfg, UniformSampler::new(rand::rng()));
        self.last_edge = None;
        self.running = false;
        debug!(root = ?cfg.root, "growth session reset");
    }

    /// Attempts a single growth step.
    ///
    /// A degenerate sample leaves the tree (and the highlight) unchanged.
    /// An empty-tree error cannot occur through this UI, but if it ever
    /// does it is logged and auto-running stops.
    fn step_once(&mut self) {
        match self.rrt.advance() {
            Ok(Some(edge)) => self.last_edge = Some(edge),
            Ok(None) => {}
            Err(err) => {
                warn!("growth step failed: {err}");
                self.running = false;
            }
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are taken relative to the domain center, scaled
    /// by `zoom`, offset by `pan`, and centered inside the given `rect`.
    /// The domain's y-axis already points down, matching the screen.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        let c = self.rrt.cfg.domain.center();
        egui::pos2(
            center.x + (p.x - c.x) * self.zoom + self.pan.x,
            center.y + (p.y - c.y) * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding), using the same `zoom`, `pan`, and `rect` center.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let c = self.rrt.cfg.domain.center();
        Vec2::new(
            (p.x - center.x - self.pan.x) / self.zoom + c.x,
            (p.y - center.y - self.pan.y) / self.zoom + c.y,
        )
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.steps_per_frame)
                        .prefix("steps/frame = ")
                        .range(1..=1000)
                        .speed(1.0),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (timing, node and edge counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("nodes = {}", self.rrt.tree.nodes.len()));
                ui.label(format!(
                    "edges = {}",
                    self.rrt
                        .tree
                        .nodes
                        .iter()
                        .map(|n| n.children.len())
                        .sum::<usize>()
                ));
            });
        });
    }

    /// Builds the right-hand configuration panel for growth parameters.
    ///
    /// Step bounds apply to subsequent growth immediately; the root and
    /// domain take full effect on the next Reset.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                let cfg = &mut self.rrt.cfg;

                ui.separator();
                ui.label("Step bounds");
                Self::labeled_drag_f32(ui, "min_step:", &mut cfg.min_step, 0.0..=100.0, 0.5);
                Self::labeled_drag_f32(ui, "max_step:", &mut cfg.max_step, 1.0..=100.0, 0.5);

                ui.separator();
                ui.label("Root (applies on Reset)");
                Self::labeled_drag_f32(ui, "x:", &mut cfg.root.x, 0.0..=2000.0, 1.0);
                Self::labeled_drag_f32(ui, "y:", &mut cfg.root.y, 0.0..=2000.0, 1.0);

                ui.separator();
                ui.label("Domain");
                Self::labeled_drag_f32(ui, "min x:", &mut cfg.domain.min.x, -2000.0..=2000.0, 1.0);
                Self::labeled_drag_f32(ui, "min y:", &mut cfg.domain.min.y, -2000.0..=2000.0, 1.0);
                Self::labeled_drag_f32(ui, "max x:", &mut cfg.domain.max.x, -2000.0..=2000.0, 1.0);
                Self::labeled_drag_f32(ui, "max y:", &mut cfg.domain.max.y, -2000.0..=2000.0, 1.0);

                // Keep the sampling ranges nonempty while dragging.
                cfg.domain.max = cfg.domain.max.max(cfg.domain.min + Vec2::ONE);

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.rrt.cfg = Config::default();
                }
            });
    }

    /// Builds the central panel where the tree is drawn and interacted with.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            let hover_world = response.hover_pos().map(|p| self.screen_to_world(p, rect));

            // Click to re-root: restart growth from the clicked point.
            if response.clicked()
                && let Some(p) = hover_world
            {
                self.rrt.cfg.root = p;
                self.reset();
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    let new_zoom = (self.zoom * factor).clamp(0.1, 10.0);
                    self.zoom = new_zoom;

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Draw the domain boundary.
            let domain = self.rrt.cfg.domain;
            let corners = [
                Vec2::new(domain.min.x, domain.min.y),
                Vec2::new(domain.max.x, domain.min.y),
                Vec2::new(domain.max.x, domain.max.y),
                Vec2::new(domain.min.x, domain.max.y),
            ];
            let boundary: Vec<egui::Pos2> = corners
                .iter()
                .map(|&c| self.world_to_screen(c, rect))
                .collect();
            painter.add(egui::Shape::closed_line(
                boundary,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            ));

            // Draw tree edges.
            for node in self.rrt.tree.nodes.iter() {
                for &child in &node.children {
                    let a = self.world_to_screen(node.pos, rect);
                    let b = self.world_to_screen(self.rrt.tree.nodes[child].pos, rect);
                    painter.line_segment(
                        [a, b],
                        egui::Stroke::new(1.0, egui::Color32::from_rgb(128, 100, 0)),
                    );
                }
            }

            // Draw tree nodes (highlighting the newest one in red).
            let newest = self.last_edge.map(|e| e.child);
            for node in self.rrt.tree.nodes.iter() {
                let p = self.world_to_screen(node.pos, rect);

                let color = if newest == Some(node.pos) {
                    egui::Color32::RED
                } else {
                    egui::Color32::LIGHT_BLUE
                };

                painter.circle_filled(p, 2.0, color);
            }

            // Auto-run growth if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                if self.last_step_time > 0.0 {
                    self.last_step_dt = now - self.last_step_time;
                }
                for _ in 0..self.steps_per_frame {
                    if !self.running {
                        break;
                    }
                    self.step_once();
                }
                self.last_step_time = now;

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar and status bar.
    /// - Renders the config side panel.
    /// - Draws the central tree view and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-3;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn step_once_extends_the_tree_within_the_step_bound() {
        let mut viewer = Viewer::new();

        viewer.step_once();

        assert_eq!(viewer.rrt.tree.nodes.len(), 2);

        let edge = viewer.last_edge.expect("a grown edge should be recorded");
        assert_eq!(edge.parent, viewer.rrt.cfg.root);

        let step_len = edge.child.distance(edge.parent);
        assert!(
            step_len <= viewer.rrt.cfg.max_step + 1e-3,
            "step length {} exceeds the bound",
            step_len
        );
    }

    #[test]
    fn reset_restores_a_single_root() {
        let mut viewer = Viewer::new();

        for _ in 0..10 {
            viewer.step_once();
        }
        viewer.running = true;
        assert!(viewer.rrt.tree.nodes.len() > 1);

        viewer.reset();

        assert_eq!(viewer.rrt.tree.nodes.len(), 1);
        assert_eq!(viewer.rrt.tree.nodes[0].pos, viewer.rrt.cfg.root);
        assert!(viewer.rrt.tree.nodes[0].parent.is_none());
        assert!(viewer.last_edge.is_none());
        assert!(!viewer.running);
    }
}
