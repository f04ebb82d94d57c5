// themes module - slate visuals for reading logs next to bright shade colors
use egui::{Color32, Context, FontId, Stroke, TextStyle, Visuals};

// shades paint saturated backgrounds, so the chrome stays cool and low-contrast
const LOG_BACKGROUND: Color32 = Color32::from_rgb(14, 17, 21);
const PANEL: Color32 = Color32::from_rgb(24, 28, 34);
const WINDOW: Color32 = Color32::from_rgb(30, 35, 42);
const ACCENT: Color32 = Color32::from_rgb(80, 200, 190);

pub fn apply_theme(ctx: &Context, editor_font_size: f32) {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = PANEL;
    visuals.window_fill = WINDOW;
    // the log text area and the shade table body
    visuals.extreme_bg_color = LOG_BACKGROUND;
    visuals.faint_bg_color = Color32::from_rgb(34, 40, 48);

    // blue selection, kept apart from the default yellow shade
    visuals.selection.bg_fill = Color32::from_rgb(40, 80, 140);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(120, 170, 230));
    visuals.text_cursor.stroke = Stroke::new(2.0, ACCENT);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(34, 39, 46);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(40, 46, 55);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 58, 69);
    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 70, 83);

    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, ACCENT);
    visuals.warn_fg_color = Color32::from_rgb(255, 200, 60);
    visuals.error_fg_color = Color32::from_rgb(230, 80, 60);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Monospace, FontId::monospace(editor_font_size));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(13.0));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(13.0));

    ctx.set_style(style);
}
