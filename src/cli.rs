// Command line parsing for `e_life <width> <height>`

use crate::config::GridConfig;
use crate::life_errors::{LifeError, LifeResult};

/// Program name shown in the usage line when argv[0] is unavailable
pub const DEFAULT_PROGRAM_NAME: &str = "e_life";

const EXPECTED_ARGC: usize = 3;

/// Name to show in the usage line, taken from argv[0]
pub fn program_name(args: &[String]) -> String {
    args.first()
        .and_then(|arg0| std::path::Path::new(arg0).file_stem())
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Parse the full argument vector (including argv[0]) into grid dimensions.
/// Both dimensions must be positive integers.
pub fn parse_args(args: &[String]) -> LifeResult<GridConfig> {
    if args.len() != EXPECTED_ARGC {
        return Err(LifeError::Usage(format!(
            "expected 2 arguments, got {}",
            args.len().saturating_sub(1)
        )));
    }

    let width = parse_dimension("width", &args[1])?;
    let height = parse_dimension("height", &args[2])?;

    Ok(GridConfig::new(width, height))
}

fn parse_dimension(name: &str, value: &str) -> LifeResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(LifeError::Usage(format!("{} must be positive", name))),
        Ok(n) => Ok(n),
        Err(_) => Err(LifeError::Usage(format!(
            "{} must be a positive integer, got {:?}",
            name, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_arguments() {
        let config = parse_args(&args(&["e_life", "40", "20"])).unwrap();
        assert_eq!(config, GridConfig::new(40, 20));
    }

    #[test]
    fn test_wrong_arity() {
        assert!(matches!(parse_args(&args(&["e_life"])), Err(LifeError::Usage(_))));
        assert!(matches!(
            parse_args(&args(&["e_life", "4"])),
            Err(LifeError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&args(&["e_life", "4", "4", "4"])),
            Err(LifeError::Usage(_))
        ));
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn test_rejects_malformed_dimensions() {
        for bad in ["abc", "-3", "0", "", "4.5", "10x"] {
            assert!(
                matches!(parse_args(&args(&["e_life", bad, "5"])), Err(LifeError::Usage(_))),
                "width {:?} should be rejected",
                bad
            );
            assert!(parse_args(&args(&["e_life", "5", bad])).is_err());
        }
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name(&args(&["/usr/local/bin/e_life"])), "e_life");
        assert_eq!(program_name(&[]), DEFAULT_PROGRAM_NAME);
    }
}
