// app module specifying gui interface with core shortcuts integration
use super::{
    dialogs::{self, ClearLinesDialog, DialogCommand, ShadeManager},
    editor::LogPanel,
};
use crate::core::{
    actions::Action, config::ViewerConfig, error::ViewerError, notification::Notification,
    session::Session, shortcuts::Shortcuts,
};
use egui::{Context, ViewportCommand};
use log::info;

pub struct LogViewerApp {
    config: ViewerConfig,
    session: Session,
    // text shown in the editor, kept in step with the session buffer
    editor_text: String,
    clear_lines: ClearLinesDialog,
    shade_manager: ShadeManager,
    notification: Option<Notification>,
    show_shortcuts: bool,
    window_title: String,
}

impl LogViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        let session = Session::new();
        Self {
            config,
            window_title: session.title(),
            session,
            editor_text: String::new(),
            clear_lines: ClearLinesDialog::default(),
            shade_manager: ShadeManager::default(),
            notification: None,
            show_shortcuts: false,
        }
    }

    fn dialog_has_focus(&self) -> bool {
        self.clear_lines.open || self.shade_manager.is_adding() || self.notification.is_some()
    }

    fn menu_item(ui: &mut egui::Ui, label: &str, action: Action) -> bool {
        let text = match Shortcuts::label_for(action) {
            Some(shortcut) => format!("{label} ({shortcut})"),
            None => label.to_string(),
        };
        ui.button(text).clicked()
    }

    fn menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if Self::menu_item(ui, "📂 Open file...", Action::OpenFile) {
                        self.handle_action(ctx, Action::OpenFile);
                        ui.close();
                    }

                    ui.separator();

                    if Self::menu_item(ui, "❌ Exit", Action::Quit) {
                        self.handle_action(ctx, Action::Quit);
                        ui.close();
                    }
                });

                ui.menu_button("Clean", |ui| {
                    if Self::menu_item(ui, "Clear lines containing...", Action::ClearLinesContaining)
                    {
                        self.handle_action(ctx, Action::ClearLinesContaining);
                        ui.close();
                    }

                    if Self::menu_item(ui, "Clear empty lines", Action::ClearEmptyLines) {
                        self.handle_action(ctx, Action::ClearEmptyLines);
                        ui.close();
                    }
                });

                ui.menu_button("Configuration", |ui| {
                    if Self::menu_item(ui, "🎨 Manage shades...", Action::ManageShades) {
                        self.handle_action(ctx, Action::ManageShades);
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    if Self::menu_item(ui, "⌨ Shortcuts", Action::ToggleShortcuts) {
                        self.handle_action(ctx, Action::ToggleShortcuts);
                        ui.close();
                    }
                });
            });
        });
    }

    fn status_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let filename = self
                    .session
                    .current_file()
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "[No File]".to_string());
                ui.label(filename);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Shades: {}", self.session.shades().len()));
                    ui.separator();
                    let highlights = self.session.highlights();
                    if !highlights.is_empty() {
                        ui.label(format!("Highlighted: {}", highlights.len()));
                        ui.separator();
                    }
                    ui.label(format!("Lines: {}", self.session.buffer().line_count()));
                });
            });
        });
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        if self.dialog_has_focus() {
            return;
        }

        let mut triggered = Vec::new();
        ctx.input_mut(|i| {
            for (key, action, _) in Shortcuts::get_mappings() {
                let Some(key) = egui::Key::from_name(&key.to_string()) else {
                    continue;
                };
                if i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::CTRL, key)) {
                    triggered.push(action);
                }
            }
        });

        for action in triggered {
            self.handle_action(ctx, action);
        }
    }

    // Centralized action handler - uses the Action enum from core
    fn handle_action(&mut self, ctx: &Context, action: Action) {
        match action {
            Action::OpenFile => self.open_file(),
            Action::Quit => ctx.send_viewport_cmd(ViewportCommand::Close),
            Action::ClearLinesContaining => {
                // no prompt when there is nothing to clear
                if self.session.buffer().is_blank() {
                    self.notify((&ViewerError::NoContent).into());
                } else {
                    self.clear_lines.open();
                }
            }
            Action::ClearEmptyLines => match self.session.remove_blank_lines() {
                Ok(_) => self.sync_editor(),
                Err(error) => self.notify((&error).into()),
            },
            Action::ManageShades => self.shade_manager.open(),
            Action::ToggleShortcuts => self.show_shortcuts = !self.show_shortcuts,
        }
    }

    fn handle_command(&mut self, command: DialogCommand) {
        match command {
            DialogCommand::ClearLines(needle) => {
                match self.session.remove_lines_containing(&needle) {
                    Ok(removed) => {
                        self.clear_lines.open = false;
                        self.sync_editor();
                        self.notify(Notification::lines_deleted(removed));
                    }
                    Err(error) => self.notify((&error).into()),
                }
            }
            DialogCommand::AddShade(text, color) => match self.session.add_shade(&text, color) {
                Ok(_) => self.shade_manager.close_draft(),
                Err(error) => self.notify((&error).into()),
            },
            DialogCommand::RemoveShade(selected) => match self.session.remove_shade(selected) {
                Ok(_) => self.shade_manager.selected = None,
                Err(error) => self.notify((&error).into()),
            },
        }
    }

    fn open_file(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("Select log file");
        for (name, extensions) in &self.config.file_filters {
            dialog = dialog.add_filter(*name, extensions.as_slice());
        }

        let Some(path) = dialog.pick_file() else {
            info!("Open file cancelled");
            return;
        };

        match self.session.open_file(&path) {
            Ok(()) => self.sync_editor(),
            Err(error) => self.notify((&error).into()),
        }
    }

    fn sync_editor(&mut self) {
        self.editor_text = self.session.buffer().text();
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn update_title(&mut self, ctx: &Context) {
        let title = self.session.title();
        if title != self.window_title {
            ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn show_dialogs(&mut self, ctx: &Context) {
        let blocked = self.notification.is_some();
        if self.clear_lines.open {
            if let Some(command) = self.clear_lines.show(ctx, blocked) {
                self.handle_command(command);
            }
        }

        if self.shade_manager.open {
            let command = self.shade_manager.show(
                ctx,
                self.session.shades(),
                self.session.highlights(),
                self.config.default_shade_color,
                blocked,
            );
            if let Some(command) = command {
                self.handle_command(command);
            }
        }

        let dismissed = self
            .notification
            .as_ref()
            .is_some_and(|notification| !dialogs::show_notification(ctx, notification));
        if dismissed {
            self.notification = None;
        }
    }

    fn show_shortcuts_window(&mut self, ctx: &Context) {
        egui::Window::new("Keyboard Shortcuts")
            .collapsible(true)
            .resizable(true)
            .show(ctx, |ui| {
                egui::Grid::new("shortcuts_grid")
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label("Action");
                        ui.label("Shortcut");
                        ui.end_row();

                        for (key, _, description) in Shortcuts::get_mappings() {
                            ui.label(description);
                            ui.label(format!("Ctrl+{key}"));
                            ui.end_row();
                        }
                    });

                if ui.button("Close").clicked() {
                    self.show_shortcuts = false;
                }
            });
    }
}

impl eframe::App for LogViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.menu_bar(ctx);
        self.status_bar(ctx);

        let accepts_input = !self.dialog_has_focus();
        egui::CentralPanel::default().show(ctx, |ui| {
            LogPanel::new(
                &mut self.session,
                &mut self.editor_text,
                self.config.editor_font_size,
                accepts_input,
            )
            .show(ui);
        });

        self.show_dialogs(ctx);

        if self.show_shortcuts {
            self.show_shortcuts_window(ctx);
        }

        self.update_title(ctx);
    }
}
