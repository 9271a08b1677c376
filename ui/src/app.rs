use crate::pages::{self, Page};
use crate::state::State;

pub struct LibrisApp {
    state: State,
    /// Persisted across restarts through eframe storage.
    page: Page,
}

impl LibrisApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            page: Page::default(),
        }
    }

    /// Restores the last opened page from `storage`, if any.
    pub fn with_storage(state: State, storage: Option<&dyn eframe::Storage>) -> Self {
        let page = storage
            .and_then(|storage| eframe::get_value::<Page>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self { state, page }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for LibrisApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results of finished commands before rendering.
        if self.state.ctx.sync() > 0 {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Libris");
                ui.separator();
                for page in Page::ALL {
                    if ui.selectable_label(self.page == page, page.label()).clicked()
                        && self.page != page
                    {
                        log::debug!("Switching to {page:?}");
                        self.page = page;
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                pages::show_page(self.page, &mut self.state.ctx, ui);
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.page);
    }
}
