//! egui rendering for the portfolio's 3D visuals.
//!
//! Two scenes are provided:
//! - [`ParticleBackground`]: a rotating point cloud whose close pairs are
//!   joined by faint lines, recomputed every frame.
//! - [`AboutShape`]: a wireframe icosahedron that spins idly and follows
//!   pointer drags.
//!
//! Scenes draw through the [`RenderSurface`] trait. [`EguiSurface`] is the
//! egui implementation and [`PortfolioApp`] hosts both scenes natively (via
//! eframe) or in the browser (via WASM).

mod about;
mod app;
mod background;
mod camera;
mod painter;
mod settings;
mod surface;
mod visualizer;

pub use about::AboutShape;
pub use app::PortfolioApp;
pub use background::ParticleBackground;
pub use camera::{PerspectiveCamera, Projected};
pub use painter::EguiSurface;
pub use settings::{SceneLayout, VizSettings};
pub use surface::{LineStyle, PointStyle, RenderSurface, Viewport};
pub use visualizer::{FrameStats, Surfaces, Visualizer};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Canvas element the home background renders into.
#[cfg(target_arch = "wasm32")]
pub const CANVAS_ID: &str = "bg-canvas";

/// Canvas element the about-section shape renders into.
#[cfg(target_arch = "wasm32")]
pub const ABOUT_CANVAS_ID: &str = "about-canvas";

/// Start the visualization app in WASM context.
///
/// Each scene runs on its own canvas. A missing canvas skips only its scene.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    start_on_canvas(CANVAS_ID, SceneLayout::BackgroundOnly);
    start_on_canvas(ABOUT_CANVAS_ID, SceneLayout::AboutOnly);
}

#[cfg(target_arch = "wasm32")]
fn start_on_canvas(id: &'static str, layout: SceneLayout) {
    use wasm_bindgen::JsCast;

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        web_sys::console::log_1(&format!("#{id} not found, skipping scene").into());
        return;
    };

    let settings = VizSettings {
        layout,
        ..VizSettings::default()
    };
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc, settings)))),
            )
            .await;
        if let Err(e) = started {
            web_sys::console::error_1(&e);
        }
    });
}
