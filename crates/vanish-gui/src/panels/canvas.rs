//! Central editing canvas: the photo with the mask overlay and the paint
//! interaction, or the side-by-side result view after a submission.

use vanish_core::geometry::{map_to_canvas, CanvasRect, ContainerSize, PointerPos};
use vanish_core::session::EditSession;

use crate::app::VanishApp;

/// Tint alpha for the on-screen mask overlay. The mask itself stays fully
/// opaque; only its display is dimmed so the photo remains visible.
const MASK_OVERLAY_ALPHA: u8 = 150;

pub fn show(ctx: &egui::Context, app: &mut VanishApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        // Remember the space on offer; the next loaded photo derives its
        // canvas pixel size from it.
        app.canvas_area = Some(ContainerSize {
            width: rect.width(),
            viewport_height: ctx.screen_rect().height(),
        });

        if app.view.viewing_result && app.result.is_some() {
            show_result(ui, app, rect);
        } else if app.session.is_some() {
            show_editor(ctx, ui, app, rect);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_editor(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut VanishApp, rect: egui::Rect) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let geometry = session.geometry();
    let img_rect = fit_rect(rect, egui::vec2(geometry.width as f32, geometry.height as f32));
    let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

    let painted = handle_painting(ui, &response, session, img_rect);
    let brush_size = session.brush_size();
    if painted {
        app.view.mask_dirty = true;
    }

    if let Some(texture) = &app.view.photo_texture {
        draw_image(ui, texture.id(), img_rect, egui::Color32::WHITE);
    }
    if let Some(texture) = &app.view.mask_texture {
        draw_image(
            ui,
            texture.id(),
            img_rect,
            egui::Color32::from_white_alpha(MASK_OVERLAY_ALPHA),
        );
    }

    draw_brush_ring(ctx, ui, &response, img_rect, geometry.width, brush_size);
}

/// Feed pointer input into the stroke engine. Returns true when mask pixels
/// changed this frame.
///
/// A press inside the photo begins a stroke, every held-down frame extends
/// it, and release or leaving the photo ends it; duplicate ends are no-ops
/// in the engine, so up-then-leave is safe.
fn handle_painting(
    ui: &egui::Ui,
    response: &egui::Response,
    session: &mut EditSession,
    img_rect: egui::Rect,
) -> bool {
    let geometry = session.geometry();
    let rect = Some(CanvasRect {
        left: img_rect.left(),
        top: img_rect.top(),
        width: img_rect.width(),
        height: img_rect.height(),
    });

    let (pressed, down, released, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });

    let mapped = pos.and_then(|p| {
        map_to_canvas(
            PointerPos { x: p.x, y: p.y },
            rect,
            geometry.width,
            geometry.height,
        )
    });
    let inside = pos.is_some_and(|p| img_rect.contains(p));

    let mut painted = false;
    if pressed && inside && response.hovered() {
        if let Some(at) = mapped {
            session.begin_stroke(at);
            painted = true;
        }
    } else if down && session.is_drawing() {
        if let Some(to) = mapped {
            session.extend_stroke(to);
            painted = true;
        }
    }

    if (released || !inside) && session.is_drawing() {
        session.end_stroke();
    }

    painted
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect, tint: egui::Color32) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        tint,
    );
}

/// Outline the brush footprint under the cursor, two-tone so it reads on
/// both light and dark photo content.
fn draw_brush_ring(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    img_rect: egui::Rect,
    canvas_width: u32,
    brush_size: f32,
) {
    let Some(pos) = ui.input(|i| i.pointer.hover_pos()) else {
        return;
    };
    if !img_rect.contains(pos) || !response.hovered() {
        return;
    }

    ctx.set_cursor_icon(egui::CursorIcon::Crosshair);

    // Brush diameter is in canvas pixels; show it at the display scale.
    let scale = img_rect.width() / canvas_width as f32;
    let radius = (brush_size * scale / 2.0).max(1.0);
    let painter = ui.painter();
    painter.circle_stroke(
        pos,
        radius,
        egui::Stroke::new(1.5, egui::Color32::from_black_alpha(180)),
    );
    painter.circle_stroke(
        pos,
        (radius - 1.0).max(1.0),
        egui::Stroke::new(1.0, egui::Color32::from_white_alpha(220)),
    );
}

/// Original and edited result next to each other.
fn show_result(ui: &mut egui::Ui, app: &VanishApp, rect: egui::Rect) {
    const GAP: f32 = 8.0;
    let half_width = (rect.width() - GAP) / 2.0;
    let left = egui::Rect::from_min_size(rect.min, egui::vec2(half_width, rect.height()));
    let right = egui::Rect::from_min_size(
        egui::pos2(rect.min.x + half_width + GAP, rect.min.y),
        egui::vec2(half_width, rect.height()),
    );

    if let Some(texture) = &app.view.photo_texture {
        let size = texture.size();
        let r = fit_rect(left, egui::vec2(size[0] as f32, size[1] as f32));
        draw_image(ui, texture.id(), r, egui::Color32::WHITE);
        draw_corner_label(ui, r, "Original");
    }

    match app.result.as_ref().and_then(|r| r.texture.as_ref()) {
        Some(texture) => {
            let size = texture.size();
            let r = fit_rect(right, egui::vec2(size[0] as f32, size[1] as f32));
            draw_image(ui, texture.id(), r, egui::Color32::WHITE);
            draw_corner_label(ui, r, "Result");
        }
        None => {
            ui.painter().text(
                right.center(),
                egui::Align2::CENTER_CENTER,
                "No preview",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(100),
            );
        }
    }
}

/// Largest rect of the given aspect that fits the panel, centered, never
/// scaled above 1:1.
fn fit_rect(avail: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    let scale = (avail.width() / image_size.x)
        .min(avail.height() / image_size.y)
        .min(1.0);
    egui::Rect::from_center_size(avail.center(), image_size * scale)
}

fn draw_corner_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a photo to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
