use crate::input::InputHandler;
use crate::panels::Toolbar;
use crate::persistence::DrawingStore;
use crate::renderer::Renderer;
use crate::state::{EditorState, Settings, Signal};

/// The overlay window: wires egui input, the toolbar and the renderer to the editor state.
pub struct PenApp {
    state: EditorState,
    renderer: Renderer,
    input: InputHandler,
    toolbar: Toolbar,
    store: DrawingStore,
}

impl PenApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, store: DrawingStore) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals {
            window_fill: egui::Color32::TRANSPARENT,
            panel_fill: egui::Color32::TRANSPARENT,
            ..egui::Visuals::dark()
        });

        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_settings(settings, store)
    }

    pub fn with_settings(settings: Settings, store: DrawingStore) -> Self {
        log::info!("Drawings are stored in {}", store.dir().display());
        let toolbar = Toolbar::new(&settings.pen);
        Self {
            state: EditorState::new(settings),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            toolbar,
            store,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }
}

impl eframe::App for PenApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.settings());
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The toolbar rect from the previous frame decides which presses draw.
        self.input.set_toolbar_rect(self.toolbar.rect());
        for event in self.input.process_input(ctx) {
            if let Some(Signal::Quit) = self.state.handle_event(&event) {
                log::info!("Quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        for action in self.toolbar.show(ctx, self.state.pen(), self.state.tool(), &self.store) {
            if let Some(status) = self.state.apply_toolbar(action, &self.store) {
                log::info!("{}", status);
                self.toolbar.set_status(status);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.renderer.render(ui.painter(), rect, &self.state);
            });

        // Keep animating while drawing.
        if self.state.canvas().is_drawing() {
            ctx.request_repaint();
        }
    }
}
