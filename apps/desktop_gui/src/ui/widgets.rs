use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use shared::markup::{Block, Span};

use crate::ui::theme;

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(18))
}

/// Small uppercase label with an accent bar, used for block titles.
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(3.0, 16.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, theme::ACCENT);
        ui.label(
            egui::RichText::new(text)
                .size(12.0)
                .strong()
                .color(theme::HEADING),
        );
    });
}

pub fn back_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add(
        egui::Button::new(
            egui::RichText::new(format!("← {label}"))
                .size(11.0)
                .strong()
                .color(theme::MUTED),
        )
        .frame(false),
    )
    .clicked()
}

pub fn pill_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(14.0).color(theme::HEADING))
            .min_size(egui::vec2(180.0, 40.0))
            .corner_radius(20.0),
    )
    .clicked()
}

fn spans_job(spans: &[Span], size: f32, wrap_width: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;
    for span in spans {
        job.append(
            &span.text,
            0.0,
            TextFormat {
                font_id: egui::FontId::proportional(size),
                color: if span.strong { theme::HEADING } else { theme::BODY },
                ..Default::default()
            },
        );
    }
    job
}

/// Renders flattened rich content. Consecutive table rows share one grid.
pub fn render_blocks(ui: &mut egui::Ui, id_salt: &str, blocks: &[Block]) {
    let wrap_width = ui.available_width();
    let mut index = 0;
    while index < blocks.len() {
        match &blocks[index] {
            Block::Heading(spans) => {
                let text: String = spans.iter().map(|s| s.text.as_str()).collect();
                ui.add_space(6.0);
                section_label(ui, &text.to_uppercase());
                ui.add_space(4.0);
            }
            Block::Paragraph(spans) => {
                ui.label(spans_job(spans, 15.0, wrap_width));
                ui.add_space(6.0);
            }
            Block::Bullet(spans) => {
                ui.horizontal_top(|ui| {
                    ui.label(egui::RichText::new("➤").size(10.0).color(theme::ACCENT));
                    ui.label(spans_job(spans, 14.0, (wrap_width - 24.0).max(120.0)));
                });
                ui.add_space(4.0);
            }
            Block::TableRow(_) => {
                let start = index;
                while index + 1 < blocks.len() && matches!(blocks[index + 1], Block::TableRow(_)) {
                    index += 1;
                }
                egui::Grid::new((id_salt, start))
                    .striped(true)
                    .spacing(egui::vec2(24.0, 8.0))
                    .show(ui, |ui| {
                        for (row_index, block) in blocks[start..=index].iter().enumerate() {
                            if let Block::TableRow(cells) = block {
                                for cell in cells {
                                    let text = egui::RichText::new(cell).size(13.0);
                                    let text = if row_index == 0 {
                                        text.strong().color(theme::MUTED)
                                    } else {
                                        text.color(theme::HEADING)
                                    };
                                    ui.label(text);
                                }
                                ui.end_row();
                            }
                        }
                    });
                ui.add_space(8.0);
            }
        }
        index += 1;
    }
}
