//! Plain text histogram renderer:
//! - bold title
//! - one fixed-width bar per bin, labelled by the bin centre
//! - dashed separator + entries / under-overflow / percentile summary
//!
//! The whole frame is assembled into one `String` and written with a single
//! `write_all`.

use std::{
    fmt::Write as _,
    io::{Write, stdout},
};

use tracing::warn;

use crate::core::{
    color::{AnsiCode, colorize},
    config::Config,
    constants::{BAR_GLYPH, LABEL_PRECISION, PERCENTILE_COUNT, PERCENTILE_PRECISION},
    error::{HistoError, HistogramError},
    histogram::Histogram,
};

/// C-style `%.Ne`: at least two exponent digits, always signed.
///
/// `1.0` -> `1.0e+00`, `0.05` -> `5.0e-02`
#[must_use]
pub fn sci_label(v: f64, precision: usize) -> String {
    let s = format!("{v:.precision$e}");
    let Some((mantissa, exp)) = s.split_once('e') else {
        // inf / NaN have no exponent
        return s;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

pub struct Renderer {
    bar_width: usize,
    color: Option<AnsiCode>,
    buf: String,
}

impl Renderer {
    #[must_use]
    pub fn new(cfg: &Config) -> Self {
        Self {
            bar_width: cfg.bar_width,
            color: cfg.color.clone(),
            buf: String::new(),
        }
    }

    fn push_title(&mut self, hist: &Histogram) {
        self.buf.push_str(&colorize(&AnsiCode::bold(), hist.title()));
        self.buf.push('\n');
    }

    /// Cell `i` is filled while `i <= count`, so an empty bin still shows
    /// one cell and any count >= `bar_width - 1` fills the bar.
    fn push_bar(&mut self, count: u64, label: f64) {
        self.buf.push_str(&sci_label(label, LABEL_PRECISION));
        self.buf.push('|');

        let filled = usize::try_from(count)
            .map_or(self.bar_width, |c| c.saturating_add(1))
            .min(self.bar_width);
        for _ in 0..filled {
            match &self.color {
                Some(c) => {
                    self.buf.push_str(c.as_str());
                    self.buf.push(BAR_GLYPH);
                    self.buf.push_str(AnsiCode::reset().as_str());
                }
                None => self.buf.push(BAR_GLYPH),
            }
        }
        for _ in filled..self.bar_width {
            self.buf.push(' ');
        }
        self.buf.push('\n');
    }

    fn push_bars(&mut self, hist: &Histogram) {
        for (i, &count) in hist.bins().iter().enumerate() {
            self.push_bar(count, hist.bin_center(i));
        }
        for _ in 0..self.bar_width {
            self.buf.push('-');
        }
        self.buf.push('\n');
    }

    fn push_stats(&mut self, hist: &mut Histogram) -> Result<(), HistoError> {
        let b = &mut self.buf;
        writeln!(b, "entries: {}", hist.total_entries()).ok();
        writeln!(
            b,
            "underflow: {} | overflow: {}",
            hist.underflow(),
            hist.overflow()
        )
        .ok();

        b.push_str("Percentiles:");
        match hist.percentiles() {
            Ok(ps) => {
                for (i, p) in ps.iter().enumerate() {
                    let k = (i + 1) * (100 / PERCENTILE_COUNT);
                    write!(b, " {k}th  {:.*} |", PERCENTILE_PRECISION, p).ok();
                }
            }
            Err(HistogramError::InsufficientSamples) => {
                warn!("no numeric values were filled; percentiles skipped");
                b.push_str(" n/a (no samples)");
            }
            Err(e) => return Err(e.into()),
        }
        b.push('\n');
        Ok(())
    }

    /// Draw `hist` into `out`.
    ///
    /// # Errors
    /// Write failures from `out`.
    pub fn render<W: Write>(&mut self, out: &mut W, hist: &mut Histogram) -> Result<(), HistoError> {
        self.buf.clear();
        self.push_title(hist);
        self.push_bars(hist);
        self.push_stats(hist)?;

        out.write_all(self.buf.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// [`Renderer::render`] to a locked stdout.
    ///
    /// # Errors
    /// Write failures on stdout.
    pub fn render_stdout(&mut self, hist: &mut Histogram) -> Result<(), HistoError> {
        let mut term = stdout().lock();
        self.render(&mut term, hist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(bins: usize, high: f64, width: usize) -> Config {
        Config::builder()
            .bins(bins)
            .range(0.0..high)
            .bar_width(width)
            .no_color()
            .build()
            .unwrap()
    }

    fn draw(cfg: &Config, values: &[f64]) -> String {
        let mut h = Histogram::from_config(cfg).unwrap();
        h.fill(values.iter().copied());
        let mut out = Vec::new();
        Renderer::new(cfg).render(&mut out, &mut h).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sci_labels_match_c_printf() {
        assert_eq!(sci_label(1.0, 1), "1.0e+00");
        assert_eq!(sci_label(10.0, 1), "1.0e+01");
        assert_eq!(sci_label(0.05, 1), "5.0e-02");
        assert_eq!(sci_label(-1234.0, 1), "-1.2e+03");
        assert_eq!(sci_label(1e-120, 1), "1.0e-120");
        assert_eq!(sci_label(f64::INFINITY, 1), "inf");
    }

    #[test]
    fn bar_fill_is_inclusive() {
        let cfg = plain(3, 3.0, 4);
        let out = draw(&cfg, &[1.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "5.0e-01|█   ");
        assert_eq!(lines[2], "1.5e+00|██  ");
        assert_eq!(lines[3], "2.5e+00|████");
        assert_eq!(lines[4], "----");
    }

    #[test]
    fn colored_cells_are_wrapped() {
        let cfg = Config::builder()
            .bins(1)
            .range(0.0..1.0)
            .bar_width(2)
            .build()
            .unwrap();
        let out = draw(&cfg, &[]);
        let bar = out.lines().nth(1).unwrap();
        assert_eq!(bar, "5.0e-01|\x1b[31;1m█\x1b[0m ");
        assert!(out.starts_with("\x1b[1mTitle\x1b[0m\n"));
    }

    #[test]
    fn summary_lines() {
        let cfg = plain(2, 2.0, 2);
        let out = draw(&cfg, &[0.5, 1.5, -1.0, 7.0]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[4], "entries: 2");
        assert_eq!(lines[5], "underflow: 1 | overflow: 1");
        assert_eq!(
            lines[6],
            "Percentiles: 10th  -1.00 | 20th  -1.00 | 30th  -1.00 | 40th  -1.00 \
             | 50th  0.50 | 60th  0.50 | 70th  0.50 | 80th  1.50 | 90th  1.50 | 100th  7.00 |"
        );
    }

    #[test]
    fn no_samples_still_renders() {
        let out = draw(&plain(2, 2.0, 2), &[]);
        assert!(out.ends_with("entries: 0\nunderflow: 0 | overflow: 0\nPercentiles: n/a (no samples)\n"));
    }
}
