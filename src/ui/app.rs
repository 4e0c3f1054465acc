//! Application orchestrator: the result screen and the editor lifecycle.

use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;

use crate::color::Rgb;
use crate::ui::editor::ColorEditor;

/// The top-level application, implementing [`eframe::App`].
///
/// Plays the result-screen role: it owns the background color, opens the
/// editor on demand, and adopts whatever color the editor commits through
/// the channel. Dismissing the editor without confirming leaves the
/// background untouched.
pub struct App {
    background: Rgb,
    editor: Option<ColorEditor>,
    commit_tx: Sender<Rgb>,
    commit_rx: Receiver<Rgb>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, background: Rgb) -> Self {
        let (commit_tx, commit_rx) = mpsc::channel();
        Self {
            background,
            editor: None,
            commit_tx,
            commit_rx,
        }
    }

    /// Edit action: present the editor on the current background color and
    /// hand it the commit sender.
    fn open_editor(&mut self) {
        log::info!("opening editor on {:?}", self.background);
        self.editor = Some(ColorEditor::new(self.background, self.commit_tx.clone()));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Adopt committed colors ─────────────────────────────────────
        while let Ok(color) = self.commit_rx.try_recv() {
            log::info!("background color committed: {color:?}");
            self.background = color;
        }

        // ── 2. Result screen ──────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // One editor at a time; the button re-enables on close.
                let edit = ui.add_enabled(self.editor.is_none(), egui::Button::new("Edit"));
                if edit.clicked() {
                    self.open_editor();
                }
            });
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.background.to_color32()))
            .show(ctx, |_ui| {});

        // ── 3. Editor window ──────────────────────────────────────────────
        if let Some(editor) = &mut self.editor {
            editor.show(ctx);
            if !editor.is_open() {
                self.editor = None;
            }
        }
    }
}
