//! The color editor screen: three channel rows and a live preview swatch.

use std::sync::mpsc::Sender;

use eframe::egui::{self, CornerRadius, Id, Sense, Ui, Vec2};

use crate::color::{self, Channel, Rgb};

/// Mirrored state of one channel: the slider value plus the text-field string.
///
/// Outside an in-progress edit the string always equals the value formatted
/// to two decimals; `sync_text` restores that after any value change.
struct ChannelField {
    value: f32,
    text: String,
}

impl ChannelField {
    fn new(value: f32) -> Self {
        Self {
            value,
            text: color::format_value(value),
        }
    }

    fn sync_text(&mut self) {
        self.text = color::format_value(self.value);
    }
}

/// The editor screen, presented as a window over the result screen.
///
/// Owns the session state for all three channels and the commit sender
/// injected by the presenter. The sender fires exactly once, on Done;
/// closing the window any other way reports nothing.
pub struct ColorEditor {
    channels: [ChannelField; 3],
    commit_tx: Sender<Rgb>,
    alert: Option<String>,
    open: bool,
}

impl ColorEditor {
    pub fn new(initial: Rgb, commit_tx: Sender<Rgb>) -> Self {
        Self {
            channels: Channel::ALL.map(|ch| ChannelField::new(initial.channel(ch))),
            commit_tx,
            alert: None,
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Color currently shown on the preview swatch.
    pub fn preview(&self) -> Rgb {
        Rgb::new(
            self.channels[0].value,
            self.channels[1].value,
            self.channels[2].value,
        )
    }

    fn field_mut(&mut self, channel: Channel) -> &mut ChannelField {
        &mut self.channels[channel.index()]
    }

    /// A slider wrote a new value; resynchronize the label/text mirror.
    fn slider_changed(&mut self, channel: Channel) {
        self.field_mut(channel).sync_text();
    }

    /// End-of-edit on a text field: validate and apply, or alert and reset.
    ///
    /// Invalid input resets the channel to 0.0 (not to its previous value);
    /// the other two channels are untouched.
    fn commit_text(&mut self, channel: Channel) {
        let field = self.field_mut(channel);
        match color::parse_value(channel, &field.text) {
            Ok(value) => {
                field.value = value;
                field.sync_text();
            }
            Err(e) => {
                log::warn!("{e}");
                field.value = 0.0;
                field.sync_text();
                self.alert = Some(e.to_string());
            }
        }
    }

    /// Report the preview color to the presenter and close.
    fn confirm(&mut self) {
        let committed = self.preview();
        if self.commit_tx.send(committed).is_err() {
            log::warn!("commit receiver dropped; {committed:?} not delivered");
        }
        self.open = false;
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn show(&mut self, ctx: &egui::Context) {
        let mut keep_open = self.open;
        egui::Window::new("Edit Color")
            .resizable(false)
            .collapsible(false)
            .open(&mut keep_open)
            .show(ctx, |ui| self.ui(ui));
        if !keep_open {
            // Title-bar close: dismiss without committing.
            self.open = false;
        }

        if let Some(message) = self.alert.clone() {
            let modal = egui::Modal::new(Id::new("invalid_channel_input")).show(ctx, |ui| {
                ui.heading("Invalid input");
                ui.label(message);
                ui.separator();
                if ui.button("OK").clicked() {
                    self.alert = None;
                }
            });
            if modal.should_close() {
                self.alert = None;
            }
        }
    }

    fn ui(&mut self, ui: &mut Ui) {
        // Preview swatch. Clicking it only ends text-field focus; the
        // field's end-of-edit commit then runs as usual.
        let (rect, response) = ui.allocate_exact_size(Vec2::new(280.0, 80.0), Sense::click());
        ui.painter()
            .rect_filled(rect, CornerRadius::same(10), self.preview().to_color32());
        if response.clicked() {
            ui.ctx().memory_mut(|mem| {
                if let Some(id) = mem.focused() {
                    mem.surrender_focus(id);
                }
            });
        }
        ui.add_space(8.0);

        for channel in Channel::ALL {
            let idx = channel.index();
            ui.horizontal(|ui| {
                ui.monospace(color::format_value(self.channels[idx].value));

                let slider = ui
                    .scope(|ui| {
                        ui.visuals_mut().selection.bg_fill = channel.tint();
                        ui.add(
                            egui::Slider::new(&mut self.channels[idx].value, 0.0..=1.0)
                                .show_value(false),
                        )
                    })
                    .inner;
                if slider.changed() {
                    self.slider_changed(channel);
                }

                let field = ui.add(
                    egui::TextEdit::singleline(&mut self.channels[idx].text).desired_width(52.0),
                );
                if field.lost_focus() {
                    self.commit_text(channel);
                }
            });
        }

        ui.separator();
        if ui.button("Done").clicked() {
            self.confirm();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;

    fn make_editor(initial: Rgb) -> (ColorEditor, Receiver<Rgb>) {
        let (tx, rx) = mpsc::channel();
        (ColorEditor::new(initial, tx), rx)
    }

    #[test]
    fn fields_initialized_from_incoming_color() {
        let (editor, _rx) = make_editor(Rgb::new(0.5, 0.0, 1.0));
        assert_eq!(editor.channels[0].text, "0.50");
        assert_eq!(editor.channels[1].text, "0.00");
        assert_eq!(editor.channels[2].text, "1.00");
        assert_eq!(editor.preview(), Rgb::new(0.5, 0.0, 1.0));
    }

    #[test]
    fn slider_change_updates_mirror_and_preview() {
        let (mut editor, _rx) = make_editor(Rgb::default());
        editor.channels[Channel::Green.index()].value = 0.25;
        editor.slider_changed(Channel::Green);
        assert_eq!(editor.channels[1].text, "0.25");
        assert_eq!(editor.preview().g, 0.25);
    }

    #[test]
    fn valid_text_converges_value_and_mirror() {
        let (mut editor, _rx) = make_editor(Rgb::default());
        editor.channels[2].text = "0.75".to_string();
        editor.commit_text(Channel::Blue);
        assert_eq!(editor.channels[2].value, 0.75);
        assert_eq!(editor.channels[2].text, "0.75");
        assert!(editor.alert.is_none());
    }

    #[test]
    fn valid_text_is_renormalized_to_two_decimals() {
        let (mut editor, _rx) = make_editor(Rgb::default());
        editor.channels[0].text = "1".to_string();
        editor.commit_text(Channel::Red);
        assert_eq!(editor.channels[0].value, 1.0);
        assert_eq!(editor.channels[0].text, "1.00");
    }

    #[test]
    fn out_of_range_text_alerts_and_resets_to_zero() {
        let (mut editor, _rx) = make_editor(Rgb::new(0.4, 0.4, 0.4));
        editor.channels[0].text = "1.5".to_string();
        editor.commit_text(Channel::Red);
        assert!(editor.alert.is_some());
        assert_eq!(editor.channels[0].value, 0.0);
        assert_eq!(editor.channels[0].text, "0.00");
        // The other channels keep their values.
        assert_eq!(editor.channels[1].value, 0.4);
        assert_eq!(editor.channels[2].value, 0.4);
    }

    #[test]
    fn garbage_text_alerts_and_resets_to_zero() {
        let (mut editor, _rx) = make_editor(Rgb::default());
        editor.channels[2].text = "abc".to_string();
        editor.commit_text(Channel::Blue);
        assert!(editor.alert.is_some());
        assert_eq!(editor.channels[2].value, 0.0);
        assert_eq!(editor.channels[2].text, "0.00");
    }

    #[test]
    fn confirm_commits_preview_exactly_once_and_closes() {
        let (mut editor, rx) = make_editor(Rgb::new(0.5, 0.0, 1.0));
        editor.confirm();
        assert_eq!(rx.try_recv().unwrap(), Rgb::new(0.5, 0.0, 1.0));
        assert!(rx.try_recv().is_err());
        assert!(!editor.is_open());
    }

    #[test]
    fn dismiss_without_confirm_commits_nothing() {
        let (mut editor, rx) = make_editor(Rgb::default());
        editor.channels[0].value = 0.9;
        editor.slider_changed(Channel::Red);
        editor.channels[1].text = "oops".to_string();
        editor.commit_text(Channel::Green);
        drop(editor);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn committed_color_round_trips_into_a_new_editor() {
        let (mut editor, rx) = make_editor(Rgb::default());
        for (idx, text) in ["0.10", "0.20", "0.30"].iter().enumerate() {
            editor.channels[idx].text = text.to_string();
        }
        editor.commit_text(Channel::Red);
        editor.commit_text(Channel::Green);
        editor.commit_text(Channel::Blue);
        editor.confirm();

        let (reopened, _rx) = make_editor(rx.try_recv().unwrap());
        assert_eq!(reopened.channels[0].text, "0.10");
        assert_eq!(reopened.channels[1].text, "0.20");
        assert_eq!(reopened.channels[2].text, "0.30");
    }
}
