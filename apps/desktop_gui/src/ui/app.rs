use std::{path::PathBuf, sync::Arc};

use client_core::Locale;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{dataset::Dataset, error::ServiceError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration::dispatch_backend_command,
    reducer::{Action, Effect, ViewController, ViewState},
};
use crate::ui::{
    panels,
    rendered::RenderedProfile,
    strings::{strings_for, Strings},
    theme,
};

pub struct StartupConfig {
    pub locale: Locale,
    pub font: Option<PathBuf>,
    pub dataset: Arc<Dataset>,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: ViewController,
    strings: &'static Strings,
    status: String,
    rendered: Option<RenderedProfile>,
    year: i32,
}

impl DesktopGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        config: StartupConfig,
        year: i32,
    ) -> Self {
        let strings = strings_for(config.locale);
        Self {
            cmd_tx,
            ui_rx,
            controller: ViewController::new(config.dataset, strings.error_message),
            strings,
            status: "Starting backend worker".to_string(),
            rendered: None,
            year,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn rendered(&self) -> Option<&RenderedProfile> {
        self.rendered.as_ref()
    }

    pub fn handle(&mut self, action: Action) {
        if let Some(effect) = self.controller.apply(action) {
            self.run_effect(effect);
        }
        self.refresh_rendered();
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchProfile { request, person } => {
                let cmd = BackendCommand::FetchProfile { request, person };
                if let Err(reason) = dispatch_backend_command(&self.cmd_tx, cmd) {
                    self.status = reason.clone();
                    self.controller.apply(Action::ProfileResolved {
                        request,
                        result: Err(ServiceError::Transport(reason)),
                    });
                }
            }
        }
    }

    /// Flattens once per Content entry; leaving Content always clears the cache.
    fn refresh_rendered(&mut self) {
        match self.controller.state().profile() {
            Some(profile)
                if self
                    .rendered
                    .as_ref()
                    .is_some_and(|cached| cached.name == profile.name) => {}
            profile => self.rendered = profile.map(RenderedProfile::from_profile),
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BackendUnavailable(reason) => {
                    tracing::error!("{reason}");
                    self.status = reason.clone();
                    if let ViewState::Loading { request, .. } = self.controller.state() {
                        let request = *request;
                        self.handle(Action::ProfileResolved {
                            request,
                            result: Err(ServiceError::Transport(reason)),
                        });
                    }
                }
                UiEvent::ProfileResolved { request, result } => {
                    self.handle(Action::ProfileResolved { request, result });
                }
            }
        }
    }

    fn show_main(&self, ui: &mut egui::Ui) -> Option<Action> {
        let strings = self.strings;
        let state = self.controller.state();
        if shows_hero(state) {
            panels::hero(ui, strings);
        }
        match state {
            ViewState::Home { category: None } => {
                panels::category_grid(ui, self.controller.dataset(), strings)
            }
            ViewState::Home {
                category: Some(category),
            } => panels::item_list(ui, self.controller.dataset(), category, strings),
            ViewState::Loading { person, .. } => {
                panels::loading(ui, strings, person);
                None
            }
            ViewState::Error {
                message, detail, ..
            } => panels::error_screen(ui, strings, message, detail),
            ViewState::Content { outcome, .. } => match &self.rendered {
                Some(profile) if !outcome.is_insufficient() => {
                    panels::profile_detail(ui, profile, strings)
                }
                _ => panels::insufficient(ui, strings),
            },
        }
    }
}

/// The hero banner sits above the category grid and the item list.
pub fn shows_hero(state: &ViewState) -> bool {
    matches!(state, ViewState::Home { .. })
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut action = None;
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = Some(Action::Back);
        }

        egui::TopBottomPanel::top("top_nav")
            .exact_height(44.0)
            .frame(
                egui::Frame::new()
                    .fill(theme::NAV_BG)
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if let Some(nav) = panels::top_nav(ui, self.strings) {
                        action = Some(nav);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.status)
                                .size(10.0)
                                .color(theme::MUTED),
                        );
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::PAGE_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Frame::new()
                            .inner_margin(egui::Margin::symmetric(32, 16))
                            .show(ui, |ui| {
                                if let Some(screen) = self.show_main(ui) {
                                    action = Some(screen);
                                }
                            });
                        ui.add_space(48.0);
                        panels::footer(ui, self.strings, self.year);
                    });
            });

        if let Some(action) = action {
            self.handle(action);
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
