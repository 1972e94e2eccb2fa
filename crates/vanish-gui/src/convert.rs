use image::RgbaImage;

/// Convert an RGBA buffer (straight alpha) to an egui ColorImage.
pub fn rgba_to_color_image(buffer: &RgbaImage) -> egui::ColorImage {
    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let mut pixels = Vec::with_capacity(w * h);

    for p in buffer.pixels() {
        let [r, g, b, a] = p.0;
        pixels.push(egui::Color32::from_rgba_unmultiplied(r, g, b, a));
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
