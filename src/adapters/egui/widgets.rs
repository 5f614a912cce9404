//! Immediate-mode widget calls in value-in/value-out form.
//!
//! Every widget takes the caller's current value and returns the value after
//! this frame's interaction, so callers keep ownership of their state.

use std::ops::RangeInclusive;
use std::sync::Arc;

use egui::{Color32, DragValue, ProgressBar, RichText, Slider, Ui, emath::Numeric};

use crate::adapters::egui::gui::WidgetCache;

pub struct Panel<'a> {
    ui: &'a mut Ui,
    cache: &'a mut WidgetCache,
}

impl<'a> Panel<'a> {
    pub(crate) fn new(ui: &'a mut Ui, cache: &'a mut WidgetCache) -> Self {
        Self { ui, cache }
    }

    /// Escape hatch for anything the facade doesn't cover.
    pub fn ui(&mut self) -> &mut Ui {
        self.ui
    }

    pub fn text(&mut self, text: &str) {
        self.ui.label(text);
    }

    pub fn colored_text(&mut self, text: &str, [r, g, b]: [f32; 3]) {
        self.ui.colored_label(Color32::from(egui::Rgba::from_rgb(r, g, b)), text);
    }

    pub fn checkbox(&mut self, label: &str, mut value: bool) -> bool {
        self.ui.checkbox(&mut value, label);
        value
    }

    pub fn slider_int(&mut self, label: &str, value: i32, min: i32, max: i32) -> i32 {
        self.slider(label, value, min..=max)
    }

    pub fn slider_float(&mut self, label: &str, value: f32, min: f32, max: f32) -> f32 {
        self.slider(label, value, min..=max)
    }

    fn slider<N: Numeric>(&mut self, label: &str, mut value: N, range: RangeInclusive<N>) -> N {
        self.ui.add(Slider::new(&mut value, range).text(label));
        value
    }

    pub fn color_edit_3(&mut self, label: &str, mut rgb: [f32; 3]) -> [f32; 3] {
        self.ui.horizontal(|ui| {
            ui.color_edit_button_rgb(&mut rgb);
            ui.label(label);
        });
        rgb
    }

    pub fn color_edit_4(&mut self, label: &str, mut rgba: [f32; 4]) -> [f32; 4] {
        self.ui.horizontal(|ui| {
            ui.color_edit_button_rgba_unmultiplied(&mut rgba);
            ui.label(label);
        });
        rgba
    }

    pub fn button(&mut self, label: &str) -> bool {
        self.ui.button(label).clicked()
    }

    /// Returns the selected index. The item list is cached per label and only
    /// re-marshalled when a different `Arc` is passed in.
    pub fn combo(&mut self, label: &str, selected: usize, items: &Arc<[String]>) -> usize {
        let Self { ui, cache } = self;
        let handles = cache.get_or_build(label, items, rich_texts);
        let mut current = selected;

        egui::ComboBox::from_label(label)
            .selected_text(handles.get(selected).cloned().unwrap_or_default())
            .show_ui(ui, |ui| {
                for (index, handle) in handles.iter().enumerate() {
                    ui.selectable_value(&mut current, index, handle.clone());
                }
            });

        current
    }

    /// A scrollable list showing `visible_rows` entries at a time.
    pub fn listbox(
        &mut self,
        label: &str,
        selected: usize,
        items: &Arc<[String]>,
        visible_rows: usize,
    ) -> usize {
        let Self { ui, cache } = self;
        let handles = cache.get_or_build(label, items, rich_texts);
        let mut current = selected;
        let row_height = ui.text_style_height(&egui::TextStyle::Button) + ui.spacing().item_spacing.y;

        ui.label(label);
        egui::ScrollArea::vertical()
            .id_source(label)
            .max_height(row_height * visible_rows as f32)
            .show(ui, |ui| {
                for (index, handle) in handles.iter().enumerate() {
                    ui.selectable_value(&mut current, index, handle.clone());
                }
            });

        current
    }

    pub fn input_int(&mut self, label: &str, value: i32) -> i32 {
        self.drag(label, value, 0.0, None)
    }

    pub fn input_float(&mut self, label: &str, value: f32) -> f32 {
        self.drag(label, value, 0.0, None)
    }

    pub fn drag_int(&mut self, label: &str, value: i32, speed: f64, min: i32, max: i32) -> i32 {
        self.drag(label, value, speed, Some(min..=max))
    }

    pub fn drag_float(&mut self, label: &str, value: f32, speed: f64, min: f32, max: f32) -> f32 {
        self.drag(label, value, speed, Some(min..=max))
    }

    fn drag<N: Numeric>(
        &mut self,
        label: &str,
        mut value: N,
        speed: f64,
        range: Option<RangeInclusive<N>>,
    ) -> N {
        self.ui.horizontal(|ui| {
            let mut field = DragValue::new(&mut value).speed(speed);
            if let Some(range) = range {
                field = field.clamp_range(range);
            }
            ui.add(field);
            ui.label(label);
        });
        value
    }

    /// Runs `add_contents` only while the node is expanded.
    pub fn tree_node<R>(&mut self, label: &str, add_contents: impl FnOnce(&mut Panel<'_>) -> R) -> Option<R> {
        let Self { ui, cache } = self;
        ui.collapsing(label, |ui| add_contents(&mut Panel::new(ui, cache)))
            .body_returned
    }

    pub fn collapsing_header<R>(
        &mut self,
        label: &str,
        add_contents: impl FnOnce(&mut Panel<'_>) -> R,
    ) -> Option<R> {
        let Self { ui, cache } = self;
        egui::CollapsingHeader::new(label)
            .show_background(true)
            .show(ui, |ui| add_contents(&mut Panel::new(ui, cache)))
            .body_returned
    }

    /// Returns the selection state after a click toggles it.
    pub fn selectable(&mut self, label: &str, mut selected: bool) -> bool {
        if self.ui.selectable_label(selected, label).clicked() {
            selected = !selected;
        }
        selected
    }

    /// True when clicked this frame.
    pub fn radio_button(&mut self, label: &str, active: bool) -> bool {
        self.ui.radio(active, label).clicked()
    }

    /// Returns the index of the active tab.
    pub fn tab_bar(&mut self, tabs: &[&str], active: usize) -> usize {
        let mut current = active;
        self.ui.horizontal(|ui| {
            for (index, tab) in tabs.iter().enumerate() {
                ui.selectable_value(&mut current, index, *tab);
            }
        });
        self.ui.separator();
        current
    }

    pub fn separator(&mut self) {
        self.ui.separator();
    }

    /// Lays out everything added by `add_contents` on one row.
    pub fn same_line<R>(&mut self, add_contents: impl FnOnce(&mut Panel<'_>) -> R) -> R {
        let Self { ui, cache } = self;
        ui.horizontal(|ui| add_contents(&mut Panel::new(ui, cache))).inner
    }

    pub fn indent<R>(&mut self, id: &str, add_contents: impl FnOnce(&mut Panel<'_>) -> R) -> R {
        let Self { ui, cache } = self;
        ui.indent(id, |ui| add_contents(&mut Panel::new(ui, cache))).inner
    }

    pub fn progress_bar(&mut self, fraction: f32, overlay: Option<&str>) {
        let mut bar = ProgressBar::new(fraction.clamp(0.0, 1.0));
        if let Some(text) = overlay {
            bar = bar.text(text);
        }
        self.ui.add(bar);
    }
}

fn rich_texts(items: &[String]) -> Vec<RichText> {
    items.iter().map(RichText::new).collect()
}
