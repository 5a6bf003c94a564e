//! Editor window: shows the display image and turns presses into strokes

use egui::{Color32, ColorImage, Pos2, Rect, Sense, TextureHandle, TextureId, TextureOptions, Vec2};
use image::RgbImage;

use crate::io::configuration::{EditorConfig, WINDOW_TITLE};
use crate::io::error::Result;
use crate::terrain::PaintSession;
use crate::terrain::brush::{StrokeDirection, StrokeOutcome};
use crate::terrain::region::DirtyRegion;
use crate::ui::input::read_press;
use crate::ui::mapping::{ViewMapping, fit_size};

const TEXTURE_NAME: &str = "map";
const TEXTURE_OPTIONS: TextureOptions = TextureOptions::LINEAR;

/// The eframe application wrapping a [`PaintSession`]
pub struct EditorApp {
    session: PaintSession,
    texture: Option<TextureHandle>,
    /// Display pixels changed since the last texture upload
    pending: Option<DirtyRegion>,
}

impl EditorApp {
    /// Wrap a session; the texture is created on the first frame
    pub fn new(session: PaintSession) -> Self {
        Self {
            session,
            texture: None,
            pending: None,
        }
    }

    /// The wrapped session
    pub const fn session(&self) -> &PaintSession {
        &self.session
    }

    /// Region waiting to be uploaded to the texture
    pub const fn pending(&self) -> Option<DirtyRegion> {
        self.pending
    }

    /// Paint at a position relative to the displayed image
    ///
    /// Returns `None` without touching the session if the position maps
    /// outside the map.
    pub fn paint_at(
        &mut self,
        mapping: &ViewMapping,
        position: [f32; 2],
        direction: StrokeDirection,
    ) -> Option<StrokeOutcome> {
        let Some(center) = mapping.to_map(position) else {
            tracing::debug!(x = position[0], y = position[1], "press outside the map");
            return None;
        };

        let outcome = self.session.stroke(center, direction);
        if let Some(region) = outcome.region {
            self.pending = Some(self.pending.map_or(region, |p| p.union(region)));
        }
        Some(outcome)
    }

    /// Upload pending display changes and return the texture to draw
    pub fn sync_texture(&mut self, ctx: &egui::Context) -> TextureId {
        let pending = self.pending.take();

        if let Some(texture) = self.texture.as_mut() {
            if let Some(region) = pending {
                texture.set_partial(
                    [region.min.x as usize, region.min.y as usize],
                    region_image(self.session.display(), region),
                    TEXTURE_OPTIONS,
                );
            }
            return texture.id();
        }

        let texture = ctx.load_texture(
            TEXTURE_NAME,
            full_image(self.session.display()),
            TEXTURE_OPTIONS,
        );
        let id = texture.id();
        self.texture = Some(texture);
        id
    }
}

fn full_image(display: &RgbImage) -> ColorImage {
    let size = [display.width() as usize, display.height() as usize];
    ColorImage::from_rgb(size, display.as_raw())
}

fn region_image(display: &RgbImage, region: DirtyRegion) -> ColorImage {
    let patch = image::imageops::crop_imm(
        display,
        region.min.x,
        region.min.y,
        region.width(),
        region.height(),
    )
    .to_image();
    full_image(&patch)
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture_id = self.sync_texture(ctx);
        let (width, height) = self.session.map_size();

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let (response, painter) = ui.allocate_painter(available, Sense::click());
            painter.rect_filled(response.rect, 0.0, Color32::from_gray(30));

            // Keep the map's aspect ratio, centered in the panel
            let size = fit_size([width, height], [available.x, available.y]);
            let image_rect =
                Rect::from_center_size(response.rect.center(), Vec2::new(size[0], size[1]));
            painter.image(
                texture_id,
                image_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );

            if !response.hovered() {
                return;
            }
            let Some(press) = ui.input(read_press) else {
                return;
            };

            let mapping = ViewMapping::new(size, [width, height]);
            let local = [
                press.position[0] - image_rect.min.x,
                press.position[1] - image_rect.min.y,
            ];
            if self.paint_at(&mapping, local, press.direction).is_some() {
                ctx.request_repaint();
            }
        });
    }
}

/// Open the editor window and block until it is closed
///
/// # Errors
///
/// Returns an error if the native window or its event loop fails
pub fn run_editor(session: PaintSession, config: &EditorConfig) -> Result<()> {
    let (width, height) = config.display_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([width as f32, height as f32]),
        ..Default::default()
    };

    tracing::info!(
        width,
        height,
        radius = session.kernel().radius(),
        "opening editor window"
    );
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new(session)))),
    )?;
    Ok(())
}
