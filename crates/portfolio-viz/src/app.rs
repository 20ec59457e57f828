//! eframe host for both scenes.

use eframe::{App, CreationContext};
use egui::{Color32, ComboBox, Context, Pos2, Rect, Sense, Slider, Vec2};
use portfolio_core::EdgeStrategy;
use tracing::info;

use crate::painter::EguiSurface;
use crate::settings::{SceneLayout, VizSettings};
use crate::surface::RenderSurface;
use crate::visualizer::{FrameStats, Surfaces, Visualizer};

const BACKGROUND: Color32 = Color32::from_rgb(0x08, 0x0b, 0x12);
const ABOUT_SIZE: f32 = 320.0;

/// Where each scene is drawn inside `full`. `None` skips the scene.
fn scene_rects(layout: SceneLayout, full: Rect, show_about: bool) -> (Option<Rect>, Option<Rect>) {
    match layout {
        SceneLayout::Combined => {
            let about = Rect::from_center_size(
                Pos2::new(full.right() - ABOUT_SIZE * 0.75, full.center().y),
                Vec2::splat(ABOUT_SIZE),
            );
            (Some(full), show_about.then_some(about))
        }
        SceneLayout::BackgroundOnly => (Some(full), None),
        SceneLayout::AboutOnly => (None, show_about.then_some(full)),
    }
}

/// The portfolio visuals as an egui application.
pub struct PortfolioApp {
    settings: VizSettings,
    viz: Visualizer,
    last_stats: FrameStats,
    show_settings: bool,
    show_about: bool,
}

impl PortfolioApp {
    pub fn new(cc: &CreationContext<'_>, settings: VizSettings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        info!(
            particles = settings.particle_count,
            threshold = settings.threshold,
            strategy = settings.strategy.label(),
            "viz_started"
        );
        Self {
            viz: Visualizer::new(&settings),
            settings,
            last_stats: FrameStats::default(),
            show_settings: false,
            show_about: true,
        }
    }

    /// Scatter a fresh cloud, keeping the live threshold and strategy.
    fn reseed(&mut self) {
        self.settings.threshold = self.viz.background.threshold();
        self.settings.strategy = self.viz.background.strategy();
        self.viz = Visualizer::new(&VizSettings {
            seed: None,
            ..self.settings.clone()
        });
    }

    fn ui_settings(&mut self, ctx: &Context) {
        let mut open = self.show_settings;
        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                let mut threshold = self.viz.background.threshold();
                if ui
                    .add(Slider::new(&mut threshold, 0.0..=60.0).text("threshold"))
                    .changed()
                {
                    self.viz.background.set_threshold(threshold);
                }

                let mut strategy = self.viz.background.strategy();
                ComboBox::from_label("edges")
                    .selected_text(strategy.label())
                    .show_ui(ui, |ui| {
                        for option in [EdgeStrategy::BruteForce, EdgeStrategy::Grid] {
                            ui.selectable_value(&mut strategy, option, option.label());
                        }
                    });
                if strategy != self.viz.background.strategy() {
                    self.viz.background.set_strategy(strategy);
                }

                ui.checkbox(&mut self.show_about, "about shape");

                if ui.button("reseed").clicked() {
                    self.reseed();
                }

                ui.separator();
                ui.label(format!("points: {}", self.viz.background.cloud().len()));
                match self.last_stats.background_edges {
                    Some(edges) => ui.label(format!("edges: {edges}")),
                    None => ui.label("edges: -"),
                };
            });
        self.show_settings = open;
    }
}

impl App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Tab) {
                self.show_settings = !self.show_settings;
            }
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let full = ui.max_rect();
                let (background_rect, about_rect) =
                    scene_rects(self.settings.layout, full, self.show_about);

                if let Some(rect) = background_rect {
                    if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
                        let local = pos - rect.min;
                        self.viz
                            .background
                            .pointer_moved(local.x, local.y, rect.width(), rect.height());
                    }
                }

                if let Some(rect) = about_rect {
                    let response = ui.interact(rect, ui.id().with("about"), Sense::drag());
                    let about = &mut self.viz.about;
                    if response.drag_started() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            let local = pos - rect.min;
                            about.press(local.x, local.y);
                        }
                    }
                    if response.dragged() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            let local = pos - rect.min;
                            about.pointer_moved(local.x, local.y);
                        }
                    }
                    if response.drag_stopped() {
                        about.release();
                    }
                    if response.hovered() || response.dragged() {
                        about.hover(true);
                    } else {
                        about.leave();
                    }
                }

                let background_painter = background_rect.map(|rect| (ui.painter_at(rect), rect));
                let about_painter = about_rect.map(|rect| (ui.painter_at(rect), rect));
                let mut background = background_painter
                    .as_ref()
                    .map(|(painter, rect)| EguiSurface::new(painter, *rect));
                let mut about = about_painter
                    .as_ref()
                    .map(|(painter, rect)| EguiSurface::new(painter, *rect));

                self.last_stats = self.viz.frame(Surfaces {
                    background: background.as_mut().map(|s| s as &mut dyn RenderSurface),
                    about: about.as_mut().map(|s| s as &mut dyn RenderSurface),
                });
            });

        self.ui_settings(ctx);

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 800.0))
    }

    #[test]
    fn test_combined_layout_overlays_about() {
        let (background, about) = scene_rects(SceneLayout::Combined, window(), true);
        assert_eq!(background, Some(window()));
        let about = about.unwrap();
        assert!(window().contains_rect(about));
        assert_eq!(about.size(), Vec2::splat(ABOUT_SIZE));

        let (_, hidden) = scene_rects(SceneLayout::Combined, window(), false);
        assert_eq!(hidden, None);
    }

    #[test]
    fn test_single_scene_layouts_fill_window() {
        assert_eq!(
            scene_rects(SceneLayout::BackgroundOnly, window(), true),
            (Some(window()), None)
        );
        assert_eq!(
            scene_rects(SceneLayout::AboutOnly, window(), true),
            (None, Some(window()))
        );
    }
}
