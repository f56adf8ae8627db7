//! Multi-line text with word wrap.

use macroquad::prelude::Color;

use super::Rect2;
use super::label::draw_label;

/// Rough glyph width of the default font relative to its size.
const CHAR_WIDTH: f32 = 0.5;
/// Line height relative to the text size.
const LINE_SPACING: f32 = 1.3;

/// How many characters fit on one line of `width` pixels.
pub fn chars_per_line(width: f32, size: f32) -> usize {
    if size <= 0.0 || !width.is_finite() {
        return 0;
    }
    (width / (size * CHAR_WIDTH)).max(0.0) as usize
}

/// Height of `lines` lines of text at `size`.
pub fn block_height(lines: usize, size: f32) -> f32 {
    lines as f32 * size * LINE_SPACING
}

/// Draw word-wrapped `text` inside `area`, clipped to its height.
///
/// Returns the number of wrapped lines.
pub fn draw_text_area(text: &str, area: &Rect2, size: f32, color: Color) -> usize {
    let width = chars_per_line(area.w, size);
    if width == 0 {
        return 0;
    }
    let wrapped = wrap_text(text, width);
    let line_height = size * LINE_SPACING;
    let visible = (area.h / line_height) as usize;
    for (i, line) in wrapped.iter().take(visible).enumerate() {
        draw_label(line, area.x, area.y + i as f32 * line_height, size, color);
    }
    wrapped.len()
}

/// Word-wrap text into lines of at most `max_chars` characters.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_chars == 0 {
        return lines;
    }

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0;
        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                if word_len > max_chars {
                    let chars: Vec<char> = word.chars().collect();
                    let mut chunks = chars.chunks(max_chars).peekable();
                    while let Some(chunk) = chunks.next() {
                        let piece: String = chunk.iter().collect();
                        if chunks.peek().is_some() {
                            lines.push(piece);
                        } else {
                            current_len = piece.chars().count();
                            current = piece;
                        }
                    }
                } else {
                    current = word.to_string();
                    current_len = word_len;
                }
            } else if current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("Where the Shadows lie in the land of Mordor", 16);
        assert_eq!(
            lines,
            vec!["Where the", "Shadows lie in", "the land of", "Mordor"]
        );
        assert!(lines.iter().all(|l| l.chars().count() <= 16));
    }

    #[test]
    fn long_words_are_broken() {
        let lines = wrap_text("Wingardiumleviosa up", 8);
        assert_eq!(lines, vec!["Wingardi", "umlevios", "a up"]);
    }

    #[test]
    fn multibyte_text_is_counted_in_chars() {
        let lines = wrap_text("花果山 水帘洞 天宫", 7);
        assert_eq!(lines, vec!["花果山 水帘洞", "天宫"]);
    }

    #[test]
    fn blank_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert!(wrap_text("text", 0).is_empty());
    }

    #[test]
    fn chars_per_line_scales_with_size() {
        assert_eq!(chars_per_line(200.0, 10.0), 40);
        assert_eq!(chars_per_line(200.0, 0.0), 0);
    }
}
