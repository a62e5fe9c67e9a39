//! Static font-metric tables for the two PDF font faces.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard Helvetica AFM metrics, so wrapping matches what the built-in PDF
//! fonts actually render. Tables cover ASCII 0x20..=0x7E (95 printable
//! characters); index = (char as usize) - 32.

/// Points to millimetres (1pt = 1/72in).
pub const PT_TO_MM: f32 = 0.352_778;

/// The two font faces used on the rendered resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
    HelveticaBold,
}

/// Page geometry for the rendered resume, in millimetres.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
}

impl PageConfig {
    /// Horizontal space available to text.
    pub fn text_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }
}

/// US letter (215.9mm x 279.4mm) with 15mm margins.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_mm: 215.9,
        page_height_mm: 279.4,
        margin_mm: 15.0,
    }
}

/// Static character-width table for one font face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp .. [15]=/   [16..25]=0-9   [26]=: .. [32]=@
/// [33..58]=A-Z   [59]=[ .. [64]=`   [65..90]=a-z   [91]={ .. [94]=~
/// ```
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures the rendered width of a string in millimetres at `font_size_pt`.
    pub fn measure_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt * PT_TO_MM
    }
}

/// Helvetica regular, AFM widths / 1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.55,
};

/// Helvetica bold, AFM widths / 1000.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.58,
};

pub fn metrics_for(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Helvetica => &HELVETICA_TABLE,
        FontFamily::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

/// Greedy word-wraps `text` into lines that fit within `max_width_mm` at the
/// given font and size. A word wider than the line goes on its own line rather
/// than being split.
pub fn wrap_words(
    text: &str,
    font: FontFamily,
    font_size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    let metrics = metrics_for(font);
    let space_mm = metrics.measure_mm(" ", font_size_pt);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_mm = 0.0_f32;

    for word in text.split_whitespace() {
        let word_mm = metrics.measure_mm(word, font_size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_mm = word_mm;
        } else if current_mm + space_mm + word_mm > max_width_mm {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_mm = word_mm;
        } else {
            current.push(' ');
            current.push_str(word);
            current_mm += space_mm + word_mm;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_known_widths() {
        let m = metrics_for(FontFamily::Helvetica);
        assert!((m.measure_str(" ") - 0.278).abs() < 1e-6);
        // "iii" is narrow, "mmm" is wide.
        assert!(m.measure_str("iii") < m.measure_str("mmm"));
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let regular = metrics_for(FontFamily::Helvetica);
        let bold = metrics_for(FontFamily::HelveticaBold);
        let s = "Software Engineer";
        assert!(bold.measure_str(s) > regular.measure_str(s));
    }

    #[test]
    fn test_non_ascii_uses_fallback_width() {
        let m = metrics_for(FontFamily::Helvetica);
        assert!((m.measure_str("é") - m.average_char_width).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_words("", FontFamily::Helvetica, 10.0, 100.0).is_empty());
        assert!(wrap_words("   ", FontFamily::Helvetica, 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_words("Hello world", FontFamily::Helvetica, 10.0, 100.0);
        assert_eq!(lines, vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_splits_long_text() {
        let text = "word ".repeat(60);
        let lines = wrap_words(&text, FontFamily::Helvetica, 10.0, 50.0);
        assert!(lines.len() > 1);
        // Every produced line must itself fit.
        let m = metrics_for(FontFamily::Helvetica);
        for line in &lines {
            assert!(m.measure_mm(line, 10.0) <= 50.0, "overwide line: {line}");
        }
    }

    #[test]
    fn test_wrap_preserves_all_words() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let lines = wrap_words(text, FontFamily::Helvetica, 10.0, 30.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_overwide_word_gets_own_line() {
        let text = "a Pneumonoultramicroscopicsilicovolcanoconiosis b";
        let lines = wrap_words(text, FontFamily::Helvetica, 10.0, 20.0);
        assert!(lines
            .iter()
            .any(|l| l == "Pneumonoultramicroscopicsilicovolcanoconiosis"));
    }

    #[test]
    fn test_default_page_config_is_us_letter() {
        let config = default_page_config();
        assert!((config.page_width_mm - 215.9).abs() < 1e-3);
        assert!((config.page_height_mm - 279.4).abs() < 1e-3);
        assert!((config.text_width_mm() - 185.9).abs() < 1e-3);
    }
}
