//! Benchmark results.

/// Transfer rates produced by one benchmark run.
///
/// Rates are decimal megabytes per second, already truncated to whole
/// bytes-per-second before the final division, so rendering them with six
/// decimal places is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputReport {
    /// One rate per completed read, in schedule order.
    pub per_read: Vec<f64>,

    /// Total bytes over total elapsed time; 0.0 for an empty schedule.
    ///
    /// Not the average of the per-read rates: it weighs each read by its
    /// actual duration.
    pub total: f64,
}

impl ThroughputReport {
    /// Number of reads the report covers.
    pub fn read_count(&self) -> usize {
        self.per_read.len()
    }

    /// Render in the classic text layout: a `[Start data]`/`[End data]`
    /// block of six 6-decimal rates per line, then the total rate.
    pub fn render(&self) -> String {
        let mut out = String::from("[Start data]\n");
        for (i, rate) in self.per_read.iter().enumerate() {
            out.push_str(&format!("{rate:.6} "));
            if (i + 1) % 6 == 0 || i + 1 == self.per_read.len() {
                out.push('\n');
            }
        }
        out.push_str("[End data]\n");
        out.push_str(&format!("Total {:.6} MB/s\n", self.total));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_six_per_line() {
        let report = ThroughputReport {
            per_read: (1..=8).map(|i| i as f64).collect(),
            total: 4.5,
        };
        let text = report.render();
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        assert_eq!(lines[0], "[Start data]");
        assert_eq!(
            lines[1],
            "1.000000 2.000000 3.000000 4.000000 5.000000 6.000000"
        );
        assert_eq!(lines[2], "7.000000 8.000000");
        assert_eq!(lines[3], "[End data]");
        assert_eq!(lines[4], "Total 4.500000 MB/s");
    }

    #[test]
    fn test_render_empty_report() {
        let report = ThroughputReport {
            per_read: Vec::new(),
            total: 0.0,
        };
        let rendered = report.render();
        let lines: Vec<&str> = rendered.lines().map(str::trim_end).collect();
        assert_eq!(lines, ["[Start data]", "[End data]", "Total 0.000000 MB/s"]);
    }
}
