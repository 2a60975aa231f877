//! Subword navigation demo
//!
//! Edits a single line in the terminal. Alt+Left/Alt+Right move by
//! subword, falling back to whole-word motion when there is no subword
//! stop; plain arrows move by character. Optional arguments simulate the
//! host's enablement check: `subword-demo notes.md rs toml` edits a
//! pretend `notes.md` with navigation restricted to `.rs`/`.toml` files.

use std::io::{stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, ClearType},
};
use unicode_width::UnicodeWidthChar;

use subword_nav::host::{execute_navigation, EditorHost, FileFilter};
use subword_nav::movement::{boundaries, Direction};

/// Single-line editor state backing the demo
struct LineEditor {
    line: String,
    /// Caret as a character offset into the line
    caret: usize,
    enabled: bool,
}

impl LineEditor {
    fn new(line: &str, enabled: bool) -> Self {
        LineEditor {
            line: line.to_string(),
            caret: 0,
            enabled,
        }
    }

    fn char_count(&self) -> usize {
        self.line.chars().count()
    }

    /// Byte index of the given character offset
    fn byte_at(&self, char_idx: usize) -> usize {
        self.line
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.line.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_at(self.caret);
        self.line.insert(at, c);
        self.caret += 1;
    }

    fn backspace(&mut self) {
        if self.caret > 0 {
            self.caret -= 1;
            let at = self.byte_at(self.caret);
            self.line.remove(at);
        }
    }

    /// Display column of the caret, accounting for wide characters
    fn caret_column(&self) -> usize {
        self.line
            .chars()
            .take(self.caret)
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }
}

impl EditorHost for LineEditor {
    fn current_line(&self) -> (&str, usize) {
        (&self.line, self.caret)
    }

    fn apply_offset(&mut self, offset: usize) {
        self.caret = offset.min(self.char_count());
    }

    fn fallback(&mut self, direction: Direction) {
        self.caret = match direction {
            Direction::Right => boundaries::next_word(&self.line, self.caret),
            Direction::Left => boundaries::prev_word(&self.line, self.caret),
        };
    }

    fn subword_enabled(&self) -> bool {
        self.enabled
    }
}

fn render(editor: &LineEditor) -> Result<()> {
    let mut out = stdout();
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(&editor.line),
        cursor::MoveToColumn(editor.caret_column() as u16),
    )
    .context("failed to render line")?;
    out.flush().context("failed to flush terminal")?;
    Ok(())
}

fn run(editor: &mut LineEditor) -> Result<()> {
    loop {
        render(editor)?;

        let Event::Key(key) = event::read().context("failed to read event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => {
                execute_navigation(editor, Direction::Right);
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
                execute_navigation(editor, Direction::Left);
            }
            KeyCode::Right => {
                if editor.caret < editor.char_count() {
                    editor.caret += 1;
                }
            }
            KeyCode::Left => editor.caret = editor.caret.saturating_sub(1),
            KeyCode::Home => editor.caret = 0,
            KeyCode::End => editor.caret = editor.char_count(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                editor.insert(c);
            }
            _ => {}
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // subword-demo [file-name] [extension ...]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let file_name = args.first().map(String::as_str).unwrap_or("demo.rs");
    let filter = FileFilter::new(args.get(1..).unwrap_or(&[]));
    let enabled = filter.matches(file_name);

    let mut editor = LineEditor::new("getHTTPResponse my_var_name fooBarBaz", enabled);

    let status = if enabled { "subword" } else { "whole-word only" };
    println!("editing {file_name} ({status}); Alt+arrows navigate, Esc quits");

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let result = run(&mut editor);
    // Restore the terminal on every exit path
    let _ = terminal::disable_raw_mode();
    println!();

    result
}
