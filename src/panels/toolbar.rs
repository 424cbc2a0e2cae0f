use egui::{Color32, Rect};

use crate::components::ToolButton;
use crate::persistence::DrawingStore;
use crate::shape::ShapeKind;
use crate::state::ToolbarAction;
use crate::tool::{width_to_slider, PenConfig, ToolMode, slider_to_width};

const DEFAULT_DRAWING_NAME: &str = "my-drawing";
const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(30, 30, 30, 230);

/// Which side panel of the toolbar is open. Only one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OpenPanel {
    #[default]
    None,
    Color,
    Width,
    Shapes,
    Save,
    Load,
}

/// Vertical button bar on the left edge of the screen.
pub struct Toolbar {
    open: OpenPanel,
    rgb: [f32; 3],
    width: f32,
    save_name: String,
    load_name: String,
    saved_names: Vec<String>,
    status: Option<String>,
    rect: Option<Rect>,
}

impl Toolbar {
    pub fn new(pen: &PenConfig) -> Self {
        let mut toolbar = Self {
            open: OpenPanel::None,
            rgb: [0.0; 3],
            width: 0.0,
            save_name: DEFAULT_DRAWING_NAME.to_owned(),
            load_name: DEFAULT_DRAWING_NAME.to_owned(),
            saved_names: Vec::new(),
            status: None,
            rect: None,
        };
        toolbar.sync_from_pen(pen);
        toolbar
    }

    /// Screen area the toolbar covered last frame.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }

    fn toggle(&mut self, panel: OpenPanel) {
        self.open = if self.open == panel { OpenPanel::None } else { panel };
    }

    /// Opens or closes a slider panel. Opening starts from the pen as it is now,
    /// since keys may have changed it while the panel was closed.
    fn toggle_sliders(&mut self, panel: OpenPanel, pen: &PenConfig) {
        self.toggle(panel);
        if matches!(self.open, OpenPanel::Color | OpenPanel::Width) {
            self.sync_from_pen(pen);
        }
    }

    fn sync_from_pen(&mut self, pen: &PenConfig) {
        let [r, g, b, _] = pen.color.to_srgba_unmultiplied();
        self.rgb = [r, g, b].map(|c| c as f32 / 255.0);
        self.width = width_to_slider(pen.width);
    }

    /// Lays out the toolbar and returns what the user asked for this frame.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        pen: &PenConfig,
        tool: ToolMode,
        store: &DrawingStore,
    ) -> Vec<ToolbarAction> {
        let mut actions = Vec::new();

        let response = egui::Area::new(egui::Id::new("toolbar"))
            .anchor(egui::Align2::LEFT_CENTER, [10.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.main_buttons(ui, pen, tool, store, &mut actions);
                    match self.open {
                        OpenPanel::None => {}
                        OpenPanel::Color | OpenPanel::Width => self.sliders(ui, &mut actions),
                        OpenPanel::Shapes => self.shape_picker(ui, tool, &mut actions),
                        OpenPanel::Save => self.save_dialog(ui, &mut actions),
                        OpenPanel::Load => self.load_dialog(ui, &mut actions),
                    }
                });
            })
            .response;

        self.rect = Some(response.rect);
        actions
    }

    fn main_buttons(
        &mut self,
        ui: &mut egui::Ui,
        pen: &PenConfig,
        tool: ToolMode,
        store: &DrawingStore,
        actions: &mut Vec<ToolbarAction>,
    ) {
        panel_frame(ui, |ui| {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 10.0;

                if ToolButton::new("Color", self.open == OpenPanel::Color).show(ui).clicked() {
                    self.toggle_sliders(OpenPanel::Color, pen);
                }
                if ToolButton::new("Width", self.open == OpenPanel::Width).show(ui).clicked() {
                    self.toggle_sliders(OpenPanel::Width, pen);
                }
                if ToolButton::new("Eraser", tool.is_eraser()).show(ui).clicked() {
                    if tool.is_eraser() {
                        actions.push(ToolbarAction::EraserOff);
                    } else {
                        actions.push(ToolbarAction::EraserOn);
                        self.open = OpenPanel::None;
                    }
                }
                if ToolButton::new("Shapes", tool.shape().is_some()).show(ui).clicked() {
                    self.toggle(OpenPanel::Shapes);
                }
                if ToolButton::new("Save", self.open == OpenPanel::Save).show(ui).clicked() {
                    self.toggle(OpenPanel::Save);
                }
                if ToolButton::new("Load", self.open == OpenPanel::Load).show(ui).clicked() {
                    self.toggle(OpenPanel::Load);
                    if self.open == OpenPanel::Load {
                        self.refresh_saved_names(store);
                    }
                }

                if let Some(status) = &self.status {
                    ui.add(egui::Label::new(egui::RichText::new(status).small()).wrap());
                }
            });
        });
    }

    fn sliders(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ToolbarAction>) {
        let before = (self.rgb, self.width);

        panel_frame(ui, |ui| {
            ui.vertical(|ui| {
                if self.open == OpenPanel::Color {
                    ui.label("Color");
                    for (value, name) in self.rgb.iter_mut().zip(["R", "G", "B"]) {
                        ui.horizontal(|ui| {
                            ui.label(name);
                            ui.add(egui::Slider::new(value, 0.0..=1.0).show_value(false));
                        });
                    }
                    let [r, g, b] = self.rgb.map(|v| (v * 255.0) as u8);
                    let (swatch, _) = ui.allocate_exact_size(egui::vec2(60.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, Color32::from_rgb(r, g, b));
                } else {
                    ui.label("Width");
                    ui.add(egui::Slider::new(&mut self.width, 0.0..=1.0).show_value(false));
                    ui.label(format!("{:.1} pt", slider_to_width(self.width)));
                }
            });
        });

        if (self.rgb, self.width) != before {
            actions.push(ToolbarAction::SlidersChanged {
                rgb: self.rgb,
                width: self.width,
            });
        }
    }

    fn shape_picker(&mut self, ui: &mut egui::Ui, tool: ToolMode, actions: &mut Vec<ToolbarAction>) {
        panel_frame(ui, |ui| {
            ui.vertical(|ui| {
                for kind in ShapeKind::ALL {
                    if ToolButton::new(kind.name(), tool.shape() == Some(kind)).show(ui).clicked() {
                        actions.push(ToolbarAction::SelectShape(kind));
                    }
                }
            });
        });
    }

    fn save_dialog(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ToolbarAction>) {
        panel_frame(ui, |ui| {
            ui.vertical(|ui| {
                ui.label("Save drawing as");
                let edit = ui.text_edit_singleline(&mut self.save_name);
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() || submitted {
                        actions.push(ToolbarAction::Save(self.save_name.clone()));
                        self.open = OpenPanel::None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = OpenPanel::None;
                    }
                });
            });
        });
    }

    fn load_dialog(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ToolbarAction>) {
        panel_frame(ui, |ui| {
            ui.vertical(|ui| {
                ui.label("Load drawing");
                let edit = ui.text_edit_singleline(&mut self.load_name);
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if !self.saved_names.is_empty() {
                    egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                        for name in &self.saved_names {
                            if ui.selectable_label(*name == self.load_name, name).clicked() {
                                self.load_name = name.clone();
                            }
                        }
                    });
                }

                ui.horizontal(|ui| {
                    if ui.button("Load").clicked() || submitted {
                        actions.push(ToolbarAction::Load(self.load_name.clone()));
                        self.open = OpenPanel::None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = OpenPanel::None;
                    }
                });
            });
        });
    }

    fn refresh_saved_names(&mut self, store: &DrawingStore) {
        match store.list() {
            Ok(names) => self.saved_names = names,
            Err(err) => {
                log::warn!("Could not list saved drawings: {}", err);
                self.saved_names.clear();
            }
        }
    }
}

fn panel_frame(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(PANEL_FILL)
        .rounding(6.0)
        .inner_margin(8.0)
        .show(ui, add_contents);
}
