//! Screens rendered purely from controller state. Each returns the action it emitted.

use eframe::egui;
use egui::RichText;
use shared::dataset::Dataset;

use crate::controller::reducer::Action;
use crate::ui::{
    rendered::RenderedProfile,
    strings::{Strings, CHANNELS_URL, TERMS_URL},
    theme,
    widgets::{back_button, card_frame, pill_button, render_blocks, section_label},
};

const CONTENT_MAX_WIDTH: f32 = 760.0;
const CARD_WIDTH: f32 = 250.0;
const CARD_HEIGHT: f32 = 150.0;
const PREVIEW_NAMES: usize = 3;

/// Centers a column of at most `max_width` inside the available space.
fn centered_column<R>(ui: &mut egui::Ui, max_width: f32, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let width = ui.available_width().min(max_width);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}

pub fn top_nav(ui: &mut egui::Ui, strings: &Strings) -> Option<Action> {
    let mut action = None;
    ui.horizontal_centered(|ui| {
        ui.spacing_mut().item_spacing.x = 28.0;
        let home = egui::Button::new(
            RichText::new(strings.nav_home)
                .size(11.0)
                .strong()
                .color(theme::NAV_TEXT),
        )
        .frame(false);
        if ui.add(home).clicked() {
            action = Some(Action::Home);
        }
        ui.hyperlink_to(
            RichText::new(strings.nav_channels).size(11.0).color(theme::NAV_TEXT),
            CHANNELS_URL,
        );
        ui.hyperlink_to(
            RichText::new(strings.nav_terms).size(11.0).color(theme::NAV_TEXT),
            TERMS_URL,
        );
    });
    action
}

pub fn hero(ui: &mut egui::Ui, strings: &Strings) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(strings.brand_prefix)
                    .size(44.0)
                    .strong()
                    .color(theme::HEADING),
            );
            ui.label(
                RichText::new(strings.brand_highlight)
                    .size(44.0)
                    .strong()
                    .color(theme::ACCENT),
            );
        });
        ui.label(RichText::new(strings.tagline).size(15.0).color(theme::MUTED));
        ui.add_space(28.0);
    });
}

pub fn category_grid(ui: &mut egui::Ui, dataset: &Dataset, strings: &Strings) -> Option<Action> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(strings.category_prompt)
                .size(13.0)
                .strong()
                .color(theme::MUTED),
        );
    });
    ui.add_space(20.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for category in dataset.categories_sorted() {
            let preview = dataset.preview_names(&category.label, PREVIEW_NAMES);
            let text = format!(
                "{}\n\n{}...\n\n{} {}",
                category.label,
                preview,
                category.entries.len(),
                strings.entries_suffix
            );
            let card = egui::Button::new(RichText::new(text).size(13.0).color(theme::HEADING))
                .min_size(egui::vec2(CARD_WIDTH, CARD_HEIGHT))
                .wrap()
                .corner_radius(10.0);
            let response = ui
                .add_sized([CARD_WIDTH, CARD_HEIGHT], card)
                .on_hover_text(strings.view_cta);
            if response.clicked() {
                action = Some(Action::SelectCategory(category.label.clone()));
            }
        }
    });
    action
}

pub fn item_list(
    ui: &mut egui::Ui,
    dataset: &Dataset,
    category: &str,
    strings: &Strings,
) -> Option<Action> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new(RichText::new("←").size(18.0)).frame(false))
            .clicked()
        {
            action = Some(Action::Back);
        }
        ui.vertical(|ui| {
            ui.label(
                RichText::new(strings.category_caption)
                    .size(11.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.label(RichText::new(category).size(28.0).strong().color(theme::HEADING));
        });
    });
    ui.add_space(20.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        for entry in dataset.entries_sorted(category) {
            let text = format!("{}\n{}", entry.name, entry.company.to_uppercase());
            let button = egui::Button::new(RichText::new(text).size(13.0).color(theme::HEADING))
                .wrap()
                .corner_radius(8.0);
            if ui.add_sized([CARD_WIDTH, 64.0], button).clicked() {
                action = Some(Action::SelectPerson(entry.name.clone()));
            }
        }
    });
    action
}

pub fn loading(ui: &mut egui::Ui, strings: &Strings, person: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.add(egui::Spinner::new().size(48.0).color(theme::ACCENT));
        ui.add_space(24.0);
        ui.label(
            RichText::new(strings.loading_title)
                .size(22.0)
                .strong()
                .color(theme::HEADING),
        );
        ui.label(RichText::new(person).size(15.0).color(theme::ACCENT));
        ui.add_space(8.0);
        ui.label(RichText::new(strings.loading_note).size(13.0).color(theme::BODY));
    });
}

pub fn error_screen(
    ui: &mut egui::Ui,
    strings: &Strings,
    message: &str,
    detail: &str,
) -> Option<Action> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.label(
            RichText::new(strings.error_title)
                .size(26.0)
                .strong()
                .color(theme::DANGER),
        );
        ui.add_space(12.0);
        ui.label(RichText::new(message).size(15.0).color(theme::BODY));
        if !detail.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new(detail).size(11.0).color(theme::MUTED));
        }
        ui.add_space(28.0);
        if pill_button(ui, strings.return_to_base) {
            action = Some(Action::Home);
        }
    });
    action
}

pub fn insufficient(ui: &mut egui::Ui, strings: &Strings) -> Option<Action> {
    let mut action = None;
    centered_column(ui, 420.0, |ui| {
        ui.add_space(24.0);
        if back_button(ui, strings.back) {
            action = Some(Action::Back);
        }
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(RichText::new("?").size(40.0).color(theme::MUTED));
            ui.add_space(12.0);
            ui.label(
                RichText::new(strings.insufficient_title)
                    .size(20.0)
                    .strong()
                    .color(theme::HEADING),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(strings.insufficient_body).size(13.0).color(theme::BODY));
            ui.add_space(24.0);
            if pill_button(ui, strings.return_to_directory) {
                action = Some(Action::Back);
            }
        });
    });
    action
}

/// Header → dashboard → summary → sections → lessons → references.
pub fn profile_detail(
    ui: &mut egui::Ui,
    profile: &RenderedProfile,
    strings: &Strings,
) -> Option<Action> {
    let mut action = None;
    centered_column(ui, CONTENT_MAX_WIDTH, |ui| {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            if back_button(ui, strings.back) {
                action = Some(Action::Back);
            }
            ui.add_space(16.0);
            ui.label(
                RichText::new(&profile.name)
                    .size(40.0)
                    .strong()
                    .color(theme::HEADING),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(&profile.title).size(19.0).color(theme::BODY));
            ui.add_space(10.0);
            egui::Frame::new()
                .fill(theme::ACCENT_SOFT)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(14, 5))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(profile.industry.to_uppercase())
                            .size(10.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                });
        });
        ui.add_space(32.0);

        if !profile.dashboard.is_empty() {
            card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                render_blocks(ui, "dashboard", &profile.dashboard);
            });
            ui.add_space(36.0);
        }

        if !profile.summary.is_empty() {
            ui.horizontal_top(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(4.0, 64.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 0.0, theme::ACCENT);
                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("\"{}\"", profile.summary))
                        .size(20.0)
                        .italics()
                        .color(theme::BODY),
                );
            });
            ui.add_space(40.0);
        }

        for section in &profile.sections {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&section.number).size(12.0).strong().color(theme::ACCENT));
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&section.title)
                        .size(22.0)
                        .strong()
                        .color(theme::HEADING),
                );
            });
            ui.add_space(10.0);
            render_blocks(ui, &section.number, &section.blocks);
            ui.add_space(32.0);
        }

        if !profile.lessons.is_empty() {
            ui.separator();
            ui.add_space(24.0);
            section_label(ui, strings.lessons_heading);
            ui.add_space(12.0);
            card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                render_blocks(ui, "lessons", &profile.lessons);
            });
            ui.add_space(32.0);
        }

        ui.separator();
        ui.add_space(16.0);
        ui.label(
            RichText::new(strings.sources_heading)
                .size(11.0)
                .strong()
                .color(theme::MUTED),
        );
        ui.add_space(8.0);
        for (index, reference) in profile.references.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("[REF-{}]", index + 1))
                        .size(10.0)
                        .monospace()
                        .color(theme::MUTED),
                );
                ui.hyperlink_to(RichText::new(&reference.title).size(12.0), &reference.url);
            });
        }
        ui.add_space(40.0);
    });
    action
}

pub fn footer(ui: &mut egui::Ui, strings: &Strings, year: i32) {
    egui::Frame::new()
        .fill(theme::NAV_BG)
        .inner_margin(egui::Margin::symmetric(32, 28))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(strings.disclaimer_heading)
                    .size(13.0)
                    .strong()
                    .color(theme::NAV_TEXT),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(strings.disclaimer_body).size(11.0).color(theme::MUTED));
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("© {year} {}", strings.rights))
                        .size(10.0)
                        .color(theme::BODY),
                );
            });
        });
}
