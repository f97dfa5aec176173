use crate::presentation::components::{LogLevel, LogManager};
use crate::presentation::style::{ACCENT_YELLOW, FAVORITE_RED};
use eframe::egui;
use egui::{Color32, RichText};

pub enum LogAction {
    CopyAll,
    Clear,
    SetLevelVisible(LogLevel, bool),
}

pub struct LogTab;

impl LogTab {
    pub fn show(ui: &mut egui::Ui, log_manager: &LogManager) -> Vec<LogAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Activity Log");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑 Clear").clicked() {
                    actions.push(LogAction::Clear);
                }
                if ui.button("📋 Copy All").clicked() {
                    actions.push(LogAction::CopyAll);
                }
            });
        });

        ui.horizontal_wrapped(|ui| {
            ui.label("Show:");
            for level in LogLevel::ALL {
                let mut visible = log_manager.is_level_visible(level);
                let text = RichText::new(format!("{} ({})", level.label(), log_manager.count(level)))
                    .color(level_color(level));
                if ui.checkbox(&mut visible, text).changed() {
                    actions.push(LogAction::SetLevelVisible(level, visible));
                }
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let mut entries = log_manager.filtered_logs_reversed().peekable();
                if entries.peek().is_none() {
                    ui.label(RichText::new("Nothing logged at the selected levels.").italics());
                    return;
                }

                egui::Grid::new("activity_log")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        for entry in entries {
                            ui.label(
                                RichText::new(entry.format_timestamp())
                                    .monospace()
                                    .color(Color32::GRAY),
                            );
                            ui.label(
                                RichText::new(entry.level.label())
                                    .monospace()
                                    .strong()
                                    .color(level_color(entry.level)),
                            );
                            ui.label(RichText::new(&entry.message).monospace());
                            ui.end_row();
                        }
                    });
            });

        actions
    }
}

fn level_color(level: LogLevel) -> Color32 {
    match level {
        LogLevel::Trace | LogLevel::Debug => Color32::GRAY,
        LogLevel::Info => Color32::from_rgb(34, 197, 94),
        LogLevel::Warn => ACCENT_YELLOW,
        LogLevel::Error => FAVORITE_RED,
    }
}
