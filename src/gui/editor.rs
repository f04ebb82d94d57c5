// src/gui/editor.rs - editable log view with shaded lines
use super::dialogs::to_color32;
use crate::core::{
    session::Session,
    shades::{visible_rule, ShadeRule},
};
use egui::{text::LayoutJob, Color32, FontId, Response, TextFormat, Ui};

pub struct LogPanel<'a> {
    session: &'a mut Session,
    text: &'a mut String,
    font_size: f32,
    accepts_input: bool,
}

impl<'a> LogPanel<'a> {
    pub fn new(
        session: &'a mut Session,
        text: &'a mut String,
        font_size: f32,
        accepts_input: bool,
    ) -> Self {
        Self {
            session,
            text,
            font_size,
            accepts_input,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        // the layouter runs on the text after this frame's edit, match the rules against that
        let rules = self.session.shades().to_vec();
        let font_id = FontId::monospace(self.font_size);

        let mut layouter = move |ui: &Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
            let mut job = shaded_job(text.as_str(), &rules, &font_id);
            job.wrap.max_width = wrap_width;
            ui.fonts_mut(|f| f.layout_job(job))
        };

        let response = egui::ScrollArea::vertical()
            .id_salt("log_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(self.text)
                        .code_editor()
                        .frame(false)
                        .interactive(self.accepts_input)
                        .desired_width(f32::INFINITY)
                        .layouter(&mut layouter),
                )
            })
            .inner;

        if response.changed() {
            self.session.replace_content(self.text.as_str());
            ui.ctx().request_repaint();
        }

        response
    }
}

fn shaded_job(text: &str, rules: &[ShadeRule], font_id: &FontId) -> LayoutJob {
    let mut job = LayoutJob::default();

    for line in text.split_inclusive('\n') {
        let (content, newline) = match line.strip_suffix('\n') {
            Some(content) => (content, "\n"),
            None => (line, ""),
        };
        let background = visible_rule(rules, content)
            .map(|rule| to_color32(rule.color))
            .unwrap_or(Color32::TRANSPARENT);
        // shaded text is drawn dark so it stays readable on light shades
        let color = if background == Color32::TRANSPARENT {
            Color32::WHITE
        } else {
            Color32::BLACK
        };

        job.append(
            content,
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color,
                background,
                ..Default::default()
            },
        );
        if !newline.is_empty() {
            job.append(
                newline,
                0.0,
                TextFormat::simple(font_id.clone(), Color32::WHITE),
            );
        }
    }

    job
}
