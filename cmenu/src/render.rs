//! Fixed-width bordered text layout used to draw pages.
//!
//! Every line is exactly `width` characters long for ASCII text. Widths are
//! counted in chars, multi-byte and wide characters won't line up.

use pad::{Alignment, PadStr};
use substring::Substring;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_BORDER: char = '*';

// border, key, ':', ' ' and the closing border
const ITEM_OVERHEAD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub width: usize,
    pub border: char,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            border: DEFAULT_BORDER,
        }
    }
}

impl BoxStyle {
    pub fn new(width: usize, border: char) -> Self {
        Self { width, border }
    }

    pub fn width(mut self, value: usize) -> Self {
        self.width = value;
        self
    }

    pub fn border(mut self, value: char) -> Self {
        self.border = value;
        self
    }

    /// Space between the two borders.
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(2)
    }

    pub fn whole_line(&self) -> String {
        self.border.to_string().repeat(self.width)
    }

    /// Title centered between borders, extra space goes to the right.
    /// Titles that don't fit are cut, no ellipsis.
    pub fn title_line(&self, title: &str) -> String {
        let inner = self.inner_width();
        let body = if title.chars().count() <= inner {
            title.pad_to_width_with_alignment(inner, Alignment::Middle)
        } else {
            title.substring(0, inner).to_string()
        };

        format!("{b}{body}{b}", b = self.border)
    }

    /// `<border><key>: <name>` left aligned and padded up to the closing border.
    /// Names that don't fit are cut and the closing border follows right away.
    pub fn item_line(&self, key: char, name: &str) -> String {
        if name.chars().count() + ITEM_OVERHEAD <= self.width {
            let row = format!("{}{key}: {name}", self.border);
            format!("{}{}", row.pad_to_width(self.width - 1), self.border)
        } else {
            let fits = self.width.saturating_sub(ITEM_OVERHEAD);
            format!("{b}{key}: {}{b}", name.substring(0, fits), b = self.border)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoxStyle;

    #[test]
    fn whole_line_fills_width() {
        let style = BoxStyle::default();
        assert_eq!(style.whole_line(), "*".repeat(80));
        assert_eq!(BoxStyle::new(3, '#').whole_line(), "###");
    }

    #[test]
    fn title_is_centered() {
        let style = BoxStyle::new(12, '*');
        // 10 inner chars, 4 taken by the title
        assert_eq!(style.title_line("Main"), "*   Main   *");
        // odd leftover goes to the right
        assert_eq!(style.title_line("Page1"), "*  Page1   *");
        assert_eq!(style.title_line(""), format!("*{}*", " ".repeat(10)));
    }

    #[test]
    fn title_padding_uses_floor() {
        let style = BoxStyle::default();
        for title in ["Main Page", "Page1", "x", "Switch to Page2"] {
            let line = style.title_line(title);
            let left = (78 - title.len()) / 2;

            assert_eq!(line.len(), 80);
            assert_eq!(&line[1 + left..1 + left + title.len()], title);
            assert!(line[1..1 + left].chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn long_title_is_cut() {
        let style = BoxStyle::new(10, '*');
        assert_eq!(style.title_line("abcdefgh"), "*abcdefgh*");
        assert_eq!(style.title_line("abcdefghijkl"), "*abcdefgh*");
    }

    #[test]
    fn item_is_padded() {
        let style = BoxStyle::new(20, '#');
        assert_eq!(style.item_line('1', "abc"), "#1: abc            #");

        let line = BoxStyle::default().item_line('0', "Switch to Page1");
        assert_eq!(line.len(), 80);
        assert!(line.starts_with("*0: Switch to Page1 "));
        assert!(line.ends_with(" *"));
    }

    #[test]
    fn item_on_the_edge() {
        let style = BoxStyle::default();
        let exact = "n".repeat(75);

        assert_eq!(style.item_line('1', &exact), format!("*1: {exact}*"));
    }

    #[test]
    fn long_item_is_cut_without_padding() {
        let style = BoxStyle::new(12, '*');
        assert_eq!(style.item_line('2', "abcdefghij"), "*2: abcdefg*");

        let long = "x".repeat(200);
        let line = BoxStyle::default().item_line('9', &long);
        assert_eq!(line.len(), 80);
        assert_eq!(line, format!("*9: {}*", "x".repeat(75)));
    }
}
