use pseudoloc::transform;
use unicode_width::UnicodeWidthStr;

/// One previewed string with its on-screen growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub original: String,
    pub pseudo: String,
    pub original_width: usize,
    pub pseudo_width: usize,
}

impl PreviewLine {
    pub fn new(original: &str) -> Self {
        let pseudo = transform(original);
        PreviewLine {
            original: original.to_string(),
            original_width: original.width(),
            pseudo_width: pseudo.width(),
            pseudo,
        }
    }

    /// Width growth in percent; `None` for an empty original.
    pub fn growth_percent(&self) -> Option<i64> {
        if self.original_width == 0 {
            return None;
        }
        let grown = self.pseudo_width as i64 - self.original_width as i64;
        Some(grown * 100 / self.original_width as i64)
    }
}

/// Print each text next to its pseudo-localized form.
pub fn print_preview(texts: &[String]) {
    for text in texts {
        let line = PreviewLine::new(text);
        println!("{}", line.original);
        println!("  → {}", line.pseudo);
        match line.growth_percent() {
            Some(percent) => println!(
                "  width {} → {} (+{}%)",
                line.original_width, line.pseudo_width, percent
            ),
            None => println!("  width 0 → {}", line.pseudo_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_word() {
        let line = PreviewLine::new("Save");
        assert_eq!(line.pseudo, "[Ŝävę !!! !!! !!!]");
        assert_eq!(line.original_width, 4);
        assert_eq!(line.pseudo_width, 18);
        assert_eq!(line.growth_percent(), Some(350));
    }

    #[test]
    fn test_preview_empty() {
        let line = PreviewLine::new("");
        assert_eq!(line.pseudo_width, 10);
        assert_eq!(line.growth_percent(), None);
    }

    #[test]
    fn test_preview_wide_characters() {
        let line = PreviewLine::new("保存");
        assert_eq!(line.original_width, 4);
        assert!(line.pseudo.starts_with("[保存"));
    }

    #[test]
    fn test_preview_link_does_not_grow() {
        let line = PreviewLine::new("https://example.com");
        assert_eq!(line.growth_percent(), Some(0));
    }
}
