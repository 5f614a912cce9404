use egui::{ClippedPrimitive, TexturesDelta};

/// Paint output of one egui frame, ready for a wgpu renderer.
pub struct EguiFrame {
    pub primitives: Vec<ClippedPrimitive>,
    pub textures_delta: TexturesDelta,
    pub pixels_per_point: f32,
}

impl EguiFrame {
    /// Folds `newer` into this frame: newer geometry wins, texture updates accumulate.
    pub fn merge(&mut self, newer: EguiFrame) {
        self.primitives = newer.primitives;
        self.textures_delta.append(newer.textures_delta);
        self.pixels_per_point = newer.pixels_per_point;
    }
}
