//! Text rendering of matrices and benchmark results.
//!
//! Everything here returns a `String`; the drivers decide where it goes.

use std::fmt::Write;

use crate::matrix::{Layout, Matrix};
use crate::timing::{MatmulTimings, TransposeTimings};

const RULE_LONG: &str = "---------------------------------------------------------";
const RULE_SHORT: &str = "-------------------------------------";

/// One `|`-framed line per row of the `n × n` buffer `data`, read in `layout`.
///
/// ```
/// use matmul_cache::Layout;
/// use matmul_cache::display::format_grid;
///
/// let grid = format_grid(2, &[1.0, 2.0, 3.0, 4.0], Layout::RowMajor);
/// assert_eq!(grid, "    |     1.0       2.0   |\n    |     3.0       4.0   |\n");
/// ```
pub fn format_grid(n: usize, data: &[f64], layout: Layout) -> String {
    let mut out = String::new();
    for row in 0..n {
        out.push_str("    | ");
        for col in 0..n {
            let _ = write!(out, "{:7.1}   ", data[layout.index(n, row, col)]);
        }
        out.push_str("|\n");
    }
    out
}

/// The raw buffer as one bracketed, comma-separated line. Useful for debugging.
pub fn format_linear(data: &[f64]) -> String {
    let mut out = String::from("[");
    if let Some((last, rest)) = data.split_last() {
        for v in rest {
            let _ = write!(out, "{:5.1},", v);
        }
        let _ = write!(out, "{:5.1}", last);
    }
    out.push_str("]\n");
    out
}

/// A, B and C side by side with `*` and `=` on the middle row.
///
/// Each matrix is drawn by logical element, so a column-major operand shows
/// up the same as its row-major twin. All three must share `n`.
pub fn format_product(a: &Matrix, b: &Matrix, c: &Matrix) -> String {
    let n = a.n();
    let mut out = String::new();
    for row in 0..n {
        out.push_str("    | ");
        for col in 0..n {
            let _ = write!(out, "{:4.1}  ", a.get(row, col));
        }

        out.push_str(if row == n / 2 { "|  *  | " } else { "|     | " });
        for col in 0..n {
            let _ = write!(out, "{:4.1}  ", b.get(row, col));
        }

        out.push_str(if row == n / 2 { "|  =  | " } else { "|     | " });
        for col in 0..n {
            let _ = write!(out, "{:7.1}  ", c.get(row, col));
        }

        out.push_str("|\n");
    }
    out
}

fn block_line(block: usize) -> String {
    if block > 1 {
        format!("  block size\t= {}\n", block)
    } else {
        "  (no blocking)\n".to_string()
    }
}

/// Summary block for one multiplication benchmark run.
pub fn format_matmult_results(block: usize, timings: &MatmulTimings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE_LONG);
    out.push_str(&block_line(block));
    let _ = writeln!(out, "{}", RULE_LONG);
    let rows = [
        ("naive", timings.naive),
        ("realigned", timings.realigned),
        ("interchange", timings.interchange),
        ("blocked", timings.blocked),
    ];
    for (name, ms) in rows {
        let _ = writeln!(out, "  TIME TO COMPLETION ({}) = {} msec.", name, ms);
    }
    let _ = writeln!(out, "{}\n", RULE_LONG);
    out
}

/// Naive-vs-blocked summary for one transpose benchmark run.
pub fn format_transpose_results(n: usize, block: usize, timings: &TransposeTimings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}-", RULE_LONG);
    out.push_str("   (results with naive version)\n");
    let _ = writeln!(out, "{}", RULE_SHORT);
    let _ = writeln!(out, "  TIME TO COMPLETION = {} msec.\n\n", timings.naive);

    let _ = writeln!(out, "{}", RULE_SHORT);
    out.push_str("   (results with blocking)\n");
    let _ = writeln!(out, "{}", RULE_SHORT);
    let _ = writeln!(out, "  N\t= {}", n);
    if block > 1 {
        let _ = writeln!(out, "  BLOCK\t= {}", block);
    } else {
        out.push_str("  (no blocking)\n");
    }
    out.push('\n');
    let _ = writeln!(out, "  TIME TO COMPLETION = {} msec.\n\n", timings.blocked);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_column_major_reads_logically() {
        let row_major = format_grid(2, &[1.0, 2.0, 3.0, 4.0], Layout::RowMajor);
        let col_major = format_grid(2, &[1.0, 3.0, 2.0, 4.0], Layout::ColumnMajor);
        assert_eq!(row_major, col_major);
    }

    #[test]
    fn test_linear() {
        assert_eq!(format_linear(&[1.0, 2.5, 10.0]), "[  1.0,  2.5, 10.0]\n");
        assert_eq!(format_linear(&[7.0]), "[  7.0]\n");
    }

    #[test]
    fn test_product_markers_on_middle_row() {
        let a = Matrix::sequential(3).unwrap();
        let b = Matrix::sequential(3).unwrap();
        let c = Matrix::sequential(3).unwrap();
        let text = format_product(&a, &b, &c);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(!lines[0].contains('*'));
        assert!(lines[1].contains("|  *  | ") && lines[1].contains("|  =  | "));
        assert!(lines[2].contains("|     | "));
        assert_eq!(
            lines[0],
            "    |  1.0   2.0   3.0  |     |  1.0   2.0   3.0  |     |     1.0      2.0      3.0  |"
        );
    }

    #[test]
    fn test_matmult_results_mention_every_variant() {
        let timings = MatmulTimings {
            naive: 12,
            realigned: 7,
            interchange: 3,
            blocked: 5,
        };
        let text = format_matmult_results(1, &timings);
        assert!(text.contains("(no blocking)"));
        assert!(text.contains("TIME TO COMPLETION (naive) = 12 msec."));
        assert!(text.contains("TIME TO COMPLETION (realigned) = 7 msec."));
        assert!(text.contains("TIME TO COMPLETION (interchange) = 3 msec."));
        assert!(text.contains("TIME TO COMPLETION (blocked) = 5 msec."));

        assert!(format_matmult_results(32, &timings).contains("block size\t= 32"));
    }

    #[test]
    fn test_transpose_results_block_line() {
        let timings = TransposeTimings {
            naive: 1,
            blocked: 2,
            interchange: 3,
        };
        assert!(format_transpose_results(64, 8, &timings).contains("  BLOCK\t= 8\n"));
        assert!(format_transpose_results(64, 1, &timings).contains("  (no blocking)\n"));
    }
}
