//! Light slate/cyan palette and font setup.

use std::{fs, path::Path, sync::Arc};

use eframe::egui;

pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
pub const CARD_BG: egui::Color32 = egui::Color32::WHITE;
pub const NAV_BG: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const HEADING: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const BODY: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(8, 145, 178);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(236, 254, 255);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const NAV_TEXT: egui::Color32 = egui::Color32::WHITE;

/// System fonts known to carry Thai glyphs; the bundled egui fonts do not.
const THAI_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/truetype/tlwg/Loma.ttf",
    "/usr/share/fonts/truetype/tlwg/Garuda.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\tahoma.ttf",
    "C:\\Windows\\Fonts\\leelawad.ttf",
];

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE_BG;
    visuals.window_fill = CARD_BG;
    visuals.extreme_bg_color = CARD_BG;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT_SOFT;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.widgets.inactive.weak_bg_fill = CARD_BG;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.weak_bg_fill = ACCENT_SOFT;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals
}

/// Appends a Thai-capable fallback font. Returns the path that was loaded.
pub fn install_fonts(ctx: &egui::Context, explicit: Option<&Path>) -> Option<String> {
    let candidates: Vec<&Path> = match explicit {
        Some(path) => vec![path],
        None => THAI_FONT_CANDIDATES.iter().map(Path::new).collect(),
    };

    let (path, bytes) = candidates
        .into_iter()
        .find_map(|path| fs::read(path).ok().map(|bytes| (path, bytes)))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "thai_fallback".to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("thai_fallback".to_owned());
    }
    ctx.set_fonts(fonts);
    Some(path.display().to_string())
}
