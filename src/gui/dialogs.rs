// dialogs module - the clear-lines prompt, the shade manager and message boxes
use crate::core::{
    notification::{Level, Notification},
    shades::{Highlights, ShadeColor, ShadeRule},
};
use egui::{Color32, Context, Key, RichText};
use egui_extras::{Column, TableBuilder};

/// What a dialog asks the app to do with the session
#[derive(Debug, PartialEq)]
pub enum DialogCommand {
    ClearLines(String),
    AddShade(String, ShadeColor),
    RemoveShade(Option<usize>),
}

pub fn to_color32(color: ShadeColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn from_color32(color: Color32) -> ShadeColor {
    ShadeColor::from_rgb(color.r(), color.g(), color.b())
}

fn centered_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

#[derive(Default)]
pub struct ClearLinesDialog {
    pub open: bool,
    search_text: String,
    focus_pending: bool,
}

impl ClearLinesDialog {
    pub fn open(&mut self) {
        self.open = true;
        self.search_text.clear();
        self.focus_pending = true;
    }

    // a message box on top blocks the dialog until it is dismissed
    fn submission(&self, triggered: bool, blocked: bool) -> Option<DialogCommand> {
        (triggered && !blocked).then(|| DialogCommand::ClearLines(self.search_text.clone()))
    }

    pub fn show(&mut self, ctx: &Context, blocked: bool) -> Option<DialogCommand> {
        let mut command = None;
        let mut close = false;

        centered_window("Clear Lines").show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            ui.label("Enter the text to search for:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_text).desired_width(280.0),
            );
            if self.focus_pending {
                response.request_focus();
                self.focus_pending = false;
            }

            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let clicked = ui.button("Clear").clicked();
                command = self.submission(clicked || submitted, blocked);
                if ui.button("Cancel").clicked() {
                    close = true;
                }
            });

            if !blocked && ui.input(|i| i.key_pressed(Key::Escape)) {
                close = true;
            }
        });

        if close {
            self.open = false;
        }
        command
    }
}

struct ShadeDraft {
    text: String,
    color: Color32,
    focus_pending: bool,
}

#[derive(Default)]
pub struct ShadeManager {
    pub open: bool,
    pub selected: Option<usize>,
    draft: Option<ShadeDraft>,
}

impl ShadeManager {
    pub fn open(&mut self) {
        self.open = true;
        self.selected = None;
    }

    pub fn is_adding(&self) -> bool {
        self.draft.is_some()
    }

    pub fn close_draft(&mut self) {
        self.draft = None;
    }

    pub fn show(
        &mut self,
        ctx: &Context,
        rules: &[ShadeRule],
        highlights: &Highlights,
        default_color: ShadeColor,
        blocked: bool,
    ) -> Option<DialogCommand> {
        let mut command = None;
        let mut close = false;

        // stale selection after the list shrank
        if self.selected.is_some_and(|i| i >= rules.len()) {
            self.selected = None;
        }

        egui::Window::new("Manage Shades")
            .collapsible(false)
            .default_size([500.0, 400.0])
            .show(ctx, |ui| {
                if blocked {
                    ui.disable();
                }
                ui.label(RichText::new("Configured shades:").strong());
                ui.add_space(4.0);

                TableBuilder::new(ui)
                    .striped(true)
                    .sense(egui::Sense::click())
                    .column(Column::remainder())
                    .column(Column::exact(50.0))
                    .column(Column::exact(60.0))
                    .min_scrolled_height(180.0)
                    .header(20.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("Shade");
                        });
                        header.col(|ui| {
                            ui.strong("Color");
                        });
                        header.col(|ui| {
                            ui.strong("Lines");
                        });
                    })
                    .body(|mut body| {
                        for (index, rule) in rules.iter().enumerate() {
                            body.row(20.0, |mut row| {
                                row.set_selected(self.selected == Some(index));
                                row.col(|ui| {
                                    ui.label(rule.label(index));
                                });
                                row.col(|ui| {
                                    let (rect, _) = ui.allocate_exact_size(
                                        egui::vec2(36.0, 14.0),
                                        egui::Sense::hover(),
                                    );
                                    ui.painter().rect_filled(rect, 2.0, to_color32(rule.color));
                                });
                                row.col(|ui| {
                                    ui.label(highlights.lines_matching(index).count().to_string());
                                });
                                if row.response().clicked() {
                                    self.selected = Some(index);
                                }
                            });
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() && self.draft.is_none() {
                        self.draft = Some(ShadeDraft {
                            text: String::new(),
                            color: to_color32(default_color),
                            focus_pending: true,
                        });
                    }
                    if ui.button("Remove").clicked() {
                        command = Some(DialogCommand::RemoveShade(self.selected));
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });

        if let Some(add) = self.show_add_dialog(ctx, blocked) {
            command = Some(add);
        }

        if close {
            self.open = false;
            self.draft = None;
        }
        command
    }

    fn show_add_dialog(&mut self, ctx: &Context, blocked: bool) -> Option<DialogCommand> {
        let draft = self.draft.as_mut()?;
        let mut command = None;
        let mut cancel = false;

        centered_window("Add Shade").show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            ui.label("Text to search:");
            let response =
                ui.add(egui::TextEdit::singleline(&mut draft.text).desired_width(280.0));
            if draft.focus_pending {
                response.request_focus();
                draft.focus_pending = false;
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Select Color:");
                ui.color_edit_button_srgba(&mut draft.color);
                ui.label(
                    RichText::new(format!("Selected Color: {}", from_color32(draft.color)))
                        .background_color(draft.color)
                        .color(Color32::BLACK),
                );
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    command = Some(DialogCommand::AddShade(
                        draft.text.clone(),
                        from_color32(draft.color),
                    ));
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

        if cancel {
            self.draft = None;
        }
        command
    }
}

/// Message box for the latest notification; returns false once dismissed
pub fn show_notification(ctx: &Context, notification: &Notification) -> bool {
    let mut keep = true;
    let accent = match notification.level {
        Level::Info => Color32::from_rgb(120, 180, 255),
        Level::Warning => Color32::from_rgb(255, 215, 0),
        Level::Error => Color32::from_rgb(230, 80, 60),
    };

    centered_window(notification.title).show(ctx, |ui| {
        ui.label(RichText::new(&notification.message).color(accent));
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            keep = false;
        }
    });

    keep
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_lines_submits_search_text() {
        let mut dialog = ClearLinesDialog::default();
        dialog.open();
        dialog.search_text.push_str("DEBUG");
        assert_eq!(
            dialog.submission(true, false),
            Some(DialogCommand::ClearLines("DEBUG".to_string()))
        );
        assert_eq!(dialog.submission(false, false), None);
    }

    #[test]
    fn test_clear_lines_ignores_input_behind_message_box() {
        let mut dialog = ClearLinesDialog::default();
        dialog.open();
        assert_eq!(dialog.submission(true, true), None);
    }

    #[test]
    fn test_color_conversion_keeps_channels() {
        let color = ShadeColor::from_rgb(0x12, 0xAB, 0xFE);
        assert_eq!(from_color32(to_color32(color)), color);
    }
}
