// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text drawing of the keyboard for the terminal drill.

use std::collections::HashSet;

use super::grader::{GradeResult, KeyFeedback};
use super::layout::{KeyIdentity, KeyboardLayout};
use crate::music::{NoteNaming, Scale};

/// Width of one white key cell, including its left border
const CELL: usize = 4;

/// What to draw besides the keys themselves
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub naming: NoteNaming,
    /// Mark the root's key before the answer is checked
    pub mark_root: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            naming: NoteNaming::English,
            mark_root: true,
        }
    }
}

/// Marker character after a key's label.
///
/// Before a check: `*` selected, `^` root. After: `+` correct,
/// `x` wrong, `!` missed.
fn marker(
    key: KeyIdentity,
    root_key: Option<KeyIdentity>,
    selected: &HashSet<KeyIdentity>,
    result: Option<&GradeResult>,
    options: RenderOptions,
) -> char {
    match result {
        Some(result) => match result.feedback(key) {
            KeyFeedback::Correct => '+',
            KeyFeedback::Incorrect => 'x',
            KeyFeedback::Missed => '!',
            KeyFeedback::Untouched => ' ',
        },
        None if selected.contains(&key) => '*',
        None if options.mark_root && root_key == Some(key) => '^',
        None => ' ',
    }
}

fn write_at(row: &mut Vec<char>, start: usize, text: &str) {
    for (offset, c) in text.chars().enumerate() {
        let column = start + offset;
        if column >= row.len() {
            row.resize(column + 1, ' ');
        }
        row[column] = c;
    }
}

/// Draw the keyboard as three lines: black keys, white keys, octave ruler
pub fn render_keyboard(
    layout: &KeyboardLayout,
    scale: &Scale,
    selected: &HashSet<KeyIdentity>,
    result: Option<&GradeResult>,
    options: RenderOptions,
) -> String {
    let root_key = layout.key_for(scale.root(), 1);
    let width = layout.white_keys().len() * CELL + 1;

    let mut black_row = vec![' '; width];
    for slot in layout.black_keys() {
        let key = slot.identity();
        let text = format!(
            "{}{}",
            layout.label(key, Some(scale), options.naming),
            marker(key, root_key, selected, result, options)
        );
        // Centre the label on the border between its two white keys
        let border = slot.position * CELL;
        write_at(&mut black_row, border.saturating_sub(text.chars().count() / 2), &text);
    }

    let mut white_row = String::with_capacity(width);
    for index in 0..layout.white_keys().len() {
        let key = KeyIdentity::White { index: index as u8 };
        let label = layout.label(key, Some(scale), options.naming);
        let mark = marker(key, root_key, selected, result, options);
        white_row.push_str(&format!("|{:<2}{}", label, mark));
    }
    white_row.push('|');

    let mut ruler = vec![' '; width];
    for octave in 0..2 {
        write_at(&mut ruler, octave * 7 * CELL, &format!("^{}", octave + 1));
    }

    let trim = |row: Vec<char>| row.into_iter().collect::<String>().trim_end().to_string();
    format!("{}\n{}\n{}", trim(black_row), white_row, trim(ruler))
}
