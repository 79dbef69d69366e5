//! `Model` trait implementation for the evaluation TUI application.
//!
//! Handles initialisation, update dispatch, and view rendering, and pads or
//! clips every frame to the terminal size.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::EvaluationApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for EvaluationApp {
    fn init() -> (Self, Option<Cmd>) {
        let (gateway, settings) = crate::tui::get_app_context();
        let model = Self::new(gateway, settings);

        // The headline request is issued when `Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }
        self.normalise_viewport(&self.render_main_view())
    }
}

impl EvaluationApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clipped to one column less than the terminal width so the
    /// terminal never autowraps, and padded with spaces so shorter rows
    /// overwrite whatever the previous frame left behind. Missing rows are
    /// filled with blanks.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_n(blank, missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Clips `line` to `width` columns and pads it with spaces to exactly that
/// width.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(width);
    let mut used = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(used)));
    output
}
