//! Static font-metric tables for the PDF built-in font families.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Adobe core-font AFM files for Helvetica and Times-Roman. Oblique/italic
//! faces reuse the upright widths. Bold faces are approximated by scaling the
//! upright widths by [`BOLD_WIDTH_FACTOR`], which slightly over-estimates most
//! glyphs so wrapped lines stay inside the measure.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use crate::styles::{FontFamily, FormatSpec};

/// Width multiplier applied to upright metrics for bold faces.
pub const BOLD_WIDTH_FACTOR: f32 = 1.08;

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` at 1em.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Greedy word wrap at `max_width_em`. Words wider than a whole line are
    /// broken between characters. Whitespace runs collapse to one space.
    pub fn wrap(&self, s: &str, max_width_em: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in s.split_whitespace() {
            let word_w = self.measure_str(word);
            let space_w = if current.is_empty() { 0.0 } else { self.space_width };

            if current_width + space_w + word_w <= max_width_em {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += space_w + word_w;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if word_w <= max_width_em {
                current.push_str(word);
                current_width = word_w;
            } else {
                for c in word.chars() {
                    let w = self.char_width(c);
                    if current_width + w > max_width_em && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica (also used for Helvetica-Oblique).
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
    average_char_width: 0.556,
    space_width: 0.278,
};

/// Times-Roman (also used for Times-Italic).
static TIMES_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Times,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.500,
    space_width: 0.250,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Helvetica => &HELVETICA_TABLE,
        FontFamily::Times => &TIMES_TABLE,
    }
}

/// Width scale for the face a format selects, relative to the upright table.
fn face_factor(spec: &FormatSpec) -> f32 {
    if spec.bold {
        BOLD_WIDTH_FACTOR
    } else {
        1.0
    }
}

/// Rendered width of `s` in points under `spec`.
pub fn text_width(spec: &FormatSpec, s: &str) -> f32 {
    get_metrics(spec.font).measure_str(s) * spec.size * face_factor(spec)
}

/// Wraps `s` to fit `max_width_pt` under `spec`.
pub fn wrap_text(spec: &FormatSpec, s: &str, max_width_pt: f32) -> Vec<String> {
    let em = spec.size * face_factor(spec);
    if em <= 0.0 {
        return vec![s.to_string()];
    }
    get_metrics(spec.font).wrap(s, max_width_pt / em)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFamily::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFamily::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "Rust width should be ~2.056, got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFamily::Times);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_times_narrower_than_helvetica() {
        let text = "The quick brown fox jumps over the lazy dog";
        assert!(
            get_metrics(FontFamily::Times).measure_str(text)
                < get_metrics(FontFamily::Helvetica).measure_str(text)
        );
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(FontFamily::Helvetica).wrap("Jane Doe", 40.0);
        assert_eq!(lines, vec!["Jane Doe"]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        // "aaaa" = 2.224em, space 0.278em: two words fit in 5em, three do not.
        let lines = get_metrics(FontFamily::Helvetica).wrap("aaaa aaaa aaaa", 5.0);
        assert_eq!(lines, vec!["aaaa aaaa", "aaaa"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace_and_handles_empty() {
        let metrics = get_metrics(FontFamily::Times);
        assert!(metrics.wrap("   ", 10.0).is_empty());
        assert_eq!(metrics.wrap("a \n  b", 10.0), vec!["a b"]);
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        // Each "m" is 0.833em; 2em fits two.
        let lines = get_metrics(FontFamily::Helvetica).wrap("mmmmm", 2.0);
        assert_eq!(lines, vec!["mm", "mm", "m"]);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = FormatSpec::text(FontFamily::Helvetica, 10.0);
        let bold = regular.bold();
        assert!(text_width(&bold, "Skills") > text_width(&regular, "Skills"));
    }

    #[test]
    fn test_wrap_text_in_points() {
        let spec = FormatSpec::text(FontFamily::Helvetica, 10.0);
        // "aaaa" at 10pt = 22.24pt.
        let lines = wrap_text(&spec, "aaaa aaaa", 30.0);
        assert_eq!(lines, vec!["aaaa", "aaaa"]);
    }
}
