//! Command-line handling for the binaries.
//!
//! The four benchmark binaries take one positional argument, the matrix
//! dimension. Usage errors are reported on stderr and the process still
//! exits with status 0; scripts that drive the benchmarks rely on that.
//! The `sweep` binary uses ordinary clap flags instead.

use std::path::PathBuf;

use clap::Parser;

/// Run one of the cache-behaviour benchmarks on n × n matrices.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct DimensionArgs {
    /// Row and column count of the square matrices
    pub dimension: Option<String>,
}

/// Why the dimension argument could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ArgError {
    #[error("missing <dimension> argument")]
    MissingDimension,

    #[error("Bad dimension value {0}.")]
    InvalidDimension(String),

    #[error(transparent)]
    Clap(#[from] clap::Error),
}

impl DimensionArgs {
    /// The dimension as a positive integer.
    pub fn dimension(&self) -> Result<usize, ArgError> {
        let raw = self.dimension.as_deref().ok_or(ArgError::MissingDimension)?;
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ArgError::InvalidDimension(raw.to_string())),
        }
    }
}

/// Parses `args` (program name first) down to the dimension.
pub fn parse_dimension<I, T>(args: I) -> Result<usize, ArgError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    DimensionArgs::try_parse_from(args)?.dimension()
}

/// Usage text in the form the drivers have always printed.
pub fn usage(program: &str) -> String {
    format!("USAGE:  {} <dimension> \n<dimension> must be a positive integer.\n", program)
}

/// Prints `err` to stderr in the appropriate form.
///
/// Clap's own errors (help, version, stray arguments) are printed as clap
/// renders them, which already carries a usage line. Dimension errors get
/// the error line followed by [`usage`].
pub fn report(program: &str, err: &ArgError) {
    match err {
        ArgError::Clap(e) => {
            let _ = e.print();
        }
        ArgError::MissingDimension => eprint!("{}", usage(program)),
        ArgError::InvalidDimension(_) => {
            eprintln!("{}", err);
            eprint!("{}", usage(program));
        }
    }
}

/// Dimension from the process arguments, or `None` after reporting why not.
pub fn dimension_from_env() -> Option<usize> {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "matmul".to_string());
    match parse_dimension(std::env::args_os()) {
        Ok(n) => Some(n),
        Err(err) => {
            report(&program, &err);
            None
        }
    }
}

/// Time blocked multiplication over a grid of matrix and block sizes.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct SweepArgs {
    /// Comma-separated list of matrix sizes
    #[arg(long, short = 'n', value_delimiter = ',', required = true, value_parser = parse_positive)]
    pub matrix_sizes: Vec<usize>,

    /// Comma-separated list of block sizes
    #[arg(long, short = 'b', value_delimiter = ',', required = true, value_parser = parse_positive)]
    pub block_sizes: Vec<usize>,

    /// CSV file to write
    #[arg(long, short = 'o', default_value = "runtimes.csv")]
    pub output: PathBuf,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{s:?} is not a positive integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dimension() {
        assert_eq!(parse_dimension(["matmult", "16"]).unwrap(), 16);
    }

    #[test]
    fn test_missing_dimension() {
        assert!(matches!(
            parse_dimension(["matmult"]),
            Err(ArgError::MissingDimension)
        ));
    }

    #[test]
    fn test_non_numeric_dimension() {
        match parse_dimension(["matmult", "abc"]) {
            Err(ArgError::InvalidDimension(raw)) => assert_eq!(raw, "abc"),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_dimension() {
        assert!(matches!(
            parse_dimension(["matmult", "0"]),
            Err(ArgError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_negative_dimension() {
        assert!(matches!(
            parse_dimension(["matmult", "--", "-3"]),
            Err(ArgError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_extra_argument_is_clap_error() {
        assert!(matches!(
            parse_dimension(["matmult", "4", "5"]),
            Err(ArgError::Clap(_))
        ));
    }

    #[test]
    fn test_usage_text() {
        assert_eq!(
            usage("matmult"),
            "USAGE:  matmult <dimension> \n<dimension> must be a positive integer.\n"
        );
    }

    #[test]
    fn test_sweep_lists() {
        let args =
            SweepArgs::try_parse_from(["sweep", "--matrix-sizes", "64,128", "-b", "8,16,32"])
                .unwrap();
        assert_eq!(args.matrix_sizes, vec![64, 128]);
        assert_eq!(args.block_sizes, vec![8, 16, 32]);
        assert_eq!(args.output, PathBuf::from("runtimes.csv"));
    }

    #[test]
    fn test_sweep_rejects_zero_block() {
        assert!(SweepArgs::try_parse_from(["sweep", "-n", "4", "-b", "0,2"]).is_err());
    }

    #[test]
    fn test_sweep_requires_both_lists() {
        assert!(SweepArgs::try_parse_from(["sweep", "-n", "4"]).is_err());
    }
}
