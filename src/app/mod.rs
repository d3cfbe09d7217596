//! The eframe shell: side panel controls, canvas, and status bar.
//!
//! All editing semantics live in the core modules; this layer owns only
//! widget wiring, texture upload, and replaying overlay draw commands
//! onto the egui painter.

pub mod fields;
pub mod state;

use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::error;

use crate::constants::EXPORT_BASENAME;
use crate::input::{coords::DisplayTransform, drag, hit_test};
use crate::ops;
use crate::render::{even_odd_surround, overlay_commands, DrawCmd};
use crate::types::{CanvasPoint, CanvasRect, Cursor};

use self::state::{EditorState, ExportFormat};

/// Which control group the side panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Crop,
    Resize,
}

pub struct EditorApp {
    state: EditorState,
    tab: Tab,
    texture: Option<egui::TextureHandle>,
    texture_dirty: bool,
    preview: Option<(egui::TextureHandle, usize)>,
}

impl EditorApp {
    pub fn new(initial: Option<PathBuf>) -> Self {
        let mut app = Self {
            state: EditorState::new(),
            tab: Tab::Crop,
            texture: None,
            texture_dirty: false,
            preview: None,
        };
        if let Some(path) = initial {
            app.open_path(&path);
        }
        app
    }

    fn open_path(&mut self, path: &Path) {
        match ops::load::load_from_path(path) {
            Ok(bitmap) => self.install(bitmap, true),
            Err(err) => self.state.report(&err),
        }
    }

    fn install(&mut self, bitmap: image::DynamicImage, user_load: bool) {
        self.state.install_image(bitmap, user_load);
        self.texture_dirty = true;
        self.preview = None;
    }

    fn open_picker(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"])
            .pick_file();
        if let Some(path) = picked {
            self.open_path(&path);
        }
    }

    /// Upload the working bitmap as the canvas texture when it changed.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        if !self.texture_dirty {
            return;
        }
        self.texture_dirty = false;
        let Some(image) = self.state.image.as_ref() else {
            self.texture = None;
            return;
        };
        let rgba = image.bitmap.to_rgba8();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [rgba.width() as usize, rgba.height() as usize],
            rgba.as_raw(),
        );
        self.texture =
            Some(ctx.load_texture("working-image", color_image, egui::TextureOptions::LINEAR));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        let Some(path) = file.path else {
            return;
        };
        match ops::load::load_dropped(&path) {
            Ok(bitmap) => self.install(bitmap, true),
            Err(err) => self.state.report(&err),
        }
    }

    fn side_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open Image…").clicked() {
                self.open_picker();
            }
            if ui.button("Reset").clicked() {
                self.state.reset_to_original();
                self.texture_dirty = true;
            }
        });
        ui.separator();

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Crop, "Crop");
            ui.selectable_value(&mut self.tab, Tab::Resize, "Resize");
        });
        ui.separator();

        match self.tab {
            Tab::Crop => self.crop_controls(ui),
            Tab::Resize => self.resize_controls(ui),
        }

        ui.separator();
        self.export_controls(ui);
    }

    fn crop_controls(&mut self, ui: &mut egui::Ui) {
        let toggle_label = if self.state.crop.is_active() {
            "Exit Crop Mode"
        } else {
            "Crop Image"
        };
        if ui.button(toggle_label).clicked() {
            self.state.toggle_crop_mode();
        }
        ui.checkbox(&mut self.state.show_guides, "Show guides");

        let current = self.state.current_dims();
        ui.horizontal(|ui| {
            ui.label("W:");
            let w = ui.add(
                egui::TextEdit::singleline(&mut self.state.crop_fields.w).desired_width(56.0),
            );
            if w.changed() {
                if let Some((cw, _)) = current {
                    self.state
                        .crop_fields
                        .width_edited(&mut self.state.crop, cw as f32);
                }
            }
            if w.lost_focus() {
                self.state.crop_fields.resync(&self.state.crop);
            }

            ui.label("H:");
            let h = ui.add(
                egui::TextEdit::singleline(&mut self.state.crop_fields.h).desired_width(56.0),
            );
            if h.changed() {
                if let Some((_, ch)) = current {
                    self.state
                        .crop_fields
                        .height_edited(&mut self.state.crop, ch as f32);
                }
            }
            if h.lost_focus() {
                self.state.crop_fields.resync(&self.state.crop);
            }
        });

        if ui.button("Apply Crop").clicked() {
            match ops::crop::apply_crop(&mut self.state) {
                Ok(()) => self.texture_dirty = true,
                Err(err) => self.state.report(&err),
            }
        }
    }

    fn resize_controls(&mut self, ui: &mut egui::Ui) {
        let natural = self.state.image.as_ref().map(|i| (i.natural_w, i.natural_h));

        ui.horizontal(|ui| {
            ui.label("W:");
            let w = ui.add(
                egui::TextEdit::singleline(&mut self.state.resize_fields.w).desired_width(56.0),
            );
            if w.changed() {
                if let Some((nw, nh)) = natural {
                    self.state.resize_fields.width_edited(nw, nh);
                }
            }
            ui.label("H:");
            let h = ui.add(
                egui::TextEdit::singleline(&mut self.state.resize_fields.h).desired_width(56.0),
            );
            if h.changed() {
                if let Some((nw, nh)) = natural {
                    self.state.resize_fields.height_edited(nw, nh);
                }
            }
        });
        ui.checkbox(&mut self.state.resize_fields.keep_aspect, "Keep aspect ratio");

        ui.horizontal_wrapped(|ui| {
            for preset in fields::ResizePreset::ALL {
                if ui.button(preset.label()).clicked() {
                    if let Err(err) = ops::resize::apply_preset(&mut self.state, preset) {
                        self.state.report(&err);
                    }
                }
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Apply Resize").clicked() {
                match ops::resize::apply_resize(&mut self.state) {
                    Ok(()) => self.texture_dirty = true,
                    Err(err) => self.state.report(&err),
                }
            }
            if ui.button("Original Size").clicked() {
                if let Err(err) = ops::resize::reset_fields_to_original(&mut self.state) {
                    self.state.report(&err);
                }
            }
        });
    }

    fn export_controls(&mut self, ui: &mut egui::Ui) {
        ui.label("Export");

        egui::ComboBox::from_id_salt("export-format")
            .selected_text(self.state.export.format.label())
            .show_ui(ui, |ui| {
                for format in ExportFormat::ALL {
                    ui.selectable_value(&mut self.state.export.format, format, format.label());
                }
            });

        if self.state.export.format.supports_quality() {
            ui.add(
                egui::Slider::new(&mut self.state.export.quality, 0.1..=1.0).text("Quality"),
            );
        }

        ui.horizontal(|ui| {
            if ui.button("Preview").clicked() {
                self.run_preview(ui.ctx());
            }
            if ui.button("Download…").clicked() {
                self.run_export();
            }
        });

        if let Some((texture, size)) = &self.preview {
            let [w, h] = texture.size();
            let scale = (220.0 / w as f32).min(1.0);
            ui.image((texture.id(), egui::vec2(w as f32 * scale, h as f32 * scale)));
            ui.label(format!("{:.2} KB", *size as f32 / 1024.0));
        }
    }

    fn run_preview(&mut self, ctx: &egui::Context) {
        let Some(image) = self.state.image.as_ref() else {
            self.state.report(&crate::error::EditorError::NoImage);
            return;
        };
        match ops::export::preview(image, self.state.export.format, self.state.export.quality) {
            Ok((decoded, size)) => {
                let rgba = decoded.to_rgba8();
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [rgba.width() as usize, rgba.height() as usize],
                    rgba.as_raw(),
                );
                let texture =
                    ctx.load_texture("export-preview", color_image, egui::TextureOptions::LINEAR);
                self.preview = Some((texture, size));
                self.state
                    .set_status(format!("Preview size: {:.2} KB", size as f32 / 1024.0));
            }
            Err(err) => self.state.report(&err),
        }
    }

    fn run_export(&mut self) {
        let Some(image) = self.state.image.as_ref() else {
            self.state.report(&crate::error::EditorError::NoImage);
            return;
        };
        let format = self.state.export.format;
        let picked = rfd::FileDialog::new()
            .set_file_name(format!("{EXPORT_BASENAME}.{}", format.extension()))
            .save_file();
        let Some(path) = picked else {
            return;
        };
        match ops::export::export_to_file(image, format, self.state.export.quality, &path) {
            Ok(()) => self.state.set_status("Download started."),
            Err(err) => {
                error!(%err, "export failed");
                self.state.report(&err);
            }
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas = response.rect;

        let Some(texture) = self.texture.as_ref() else {
            painter.text(
                canvas.center(),
                egui::Align2::CENTER_CENTER,
                "Drop an image here or click to open",
                egui::FontId::proportional(16.0),
                ui.visuals().weak_text_color(),
            );
            if response.clicked() {
                self.open_picker();
            }
            return;
        };

        let xform = self.state.display_transform(canvas.width(), canvas.height());
        let (cw, ch) = self.state.current_dims().unwrap_or((1, 1));

        let image_rect = egui::Rect::from_min_size(
            canvas.min + egui::vec2(xform.offset_x, xform.offset_y),
            egui::vec2(cw as f32 * xform.scale, ch as f32 * xform.scale),
        );
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        if self.state.crop.is_active() {
            self.crop_interaction(ui, &response, canvas, &xform, cw as f32, ch as f32);
            if let Some(rect) = self.state.crop.rect() {
                let cmds =
                    overlay_commands(canvas.width(), canvas.height(), &rect, &xform, self.state.show_guides);
                replay(&painter, canvas.min, &cmds);
            }
        } else if response.clicked() {
            self.open_picker();
        }
    }

    fn crop_interaction(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        canvas: egui::Rect,
        xform: &DisplayTransform,
        max_w: f32,
        max_h: f32,
    ) {
        let to_canvas_point =
            |pos: egui::Pos2| CanvasPoint::new(pos.x - canvas.min.x, pos.y - canvas.min.y);

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                if drag::pointer_down(&mut self.state.crop, to_canvas_point(pos), xform) {
                    self.state.crop_fields.resync(&self.state.crop);
                }
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if drag::pointer_move(
                    &mut self.state.crop,
                    to_canvas_point(pos),
                    xform,
                    max_w,
                    max_h,
                ) {
                    self.state.crop_fields.resync(&self.state.crop);
                }
            }
        } else if response.drag_stopped() {
            drag::pointer_up(&mut self.state.crop);
            self.state.crop_fields.resync(&self.state.crop);
        }

        if let Some(pos) = response.hover_pos() {
            let cursor = hit_test::hover_cursor(&self.state.crop, to_canvas_point(pos), xform);
            ui.ctx().set_cursor_icon(cursor_icon(cursor));
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.refresh_texture(ctx);

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| self.side_panel(ui));

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.state.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));
    }
}

/// Replay overlay draw commands onto the egui painter, offset into the
/// canvas rectangle. egui has no even-odd fill, so the mask is realized
/// as its four disjoint surround bands.
fn replay(painter: &egui::Painter, origin: egui::Pos2, cmds: &[DrawCmd]) {
    let to_rect = |r: &CanvasRect| {
        egui::Rect::from_min_size(origin + egui::vec2(r.x, r.y), egui::vec2(r.w, r.h))
    };

    for cmd in cmds {
        match cmd {
            DrawCmd::MaskEvenOdd { outer, window, color } => {
                let fill = color32(*color);
                for band in even_odd_surround(outer, window) {
                    painter.rect_filled(to_rect(&band), 0.0, fill);
                }
            }
            DrawCmd::FillRect { rect, color } => {
                painter.rect_filled(to_rect(rect), 0.0, color32(*color));
            }
            DrawCmd::StrokeRect { rect, width, color } => {
                painter.rect_stroke(to_rect(rect), 0.0, egui::Stroke::new(*width, color32(*color)));
            }
            DrawCmd::DashedLine { from, to, width, color, dash, gap } => {
                let points = [
                    origin + egui::vec2(from.x, from.y),
                    origin + egui::vec2(to.x, to.y),
                ];
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    egui::Stroke::new(*width, color32(*color)),
                    *dash,
                    *gap,
                ));
            }
        }
    }
}

fn color32(c: crate::render::Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn cursor_icon(cursor: Cursor) -> egui::CursorIcon {
    match cursor {
        Cursor::Default => egui::CursorIcon::Default,
        Cursor::Crosshair => egui::CursorIcon::Crosshair,
        Cursor::Move => egui::CursorIcon::Move,
        Cursor::ResizeNs => egui::CursorIcon::ResizeVertical,
        Cursor::ResizeEw => egui::CursorIcon::ResizeHorizontal,
        Cursor::ResizeNesw => egui::CursorIcon::ResizeNeSw,
        Cursor::ResizeNwse => egui::CursorIcon::ResizeNwSe,
    }
}
