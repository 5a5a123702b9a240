//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract. Scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Code | Meaning                                                  |
//! |------|----------------------------------------------------------|
//! | 0    | Success (artifact written)                               |
//! | 1    | General error (unspecified)                              |
//! | 2    | CLI usage error (bad args)                               |
//! | 3    | Input file not found                                     |
//! | 4    | Input file is not a valid result document                |
//! | 5    | Invalid job config                                       |
//! | 6    | Report artifact could not be written                     |
//! | 7    | Discrepancies found (only with `--fail-on-mismatch`)     |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant below
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into `exit_code_for` or the relevant command

use verdict_recon::ReconError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure (non-NotFound IO errors).
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// A golden or report path does not resolve to a readable file.
pub const EXIT_INPUT_NOT_FOUND: u8 = 3;

/// A golden or report file is not valid JSON or lacks the expected shape.
pub const EXIT_INPUT_MALFORMED: u8 = 4;

/// Job config could not be parsed or failed validation.
pub const EXIT_INVALID_CONFIG: u8 = 5;

/// Writing the report artifact failed.
pub const EXIT_WRITE_FAILED: u8 = 6;

/// Reconciliation found mismatches, missing tests or a count mismatch.
/// Only returned when the caller opts in with `--fail-on-mismatch`.
pub const EXIT_DISCREPANCIES: u8 = 7;

/// Map an engine error to its exit code.
pub fn exit_code_for(err: &ReconError) -> u8 {
    match err {
        ReconError::InputNotFound { .. } => EXIT_INPUT_NOT_FOUND,
        ReconError::MalformedInput { .. } => EXIT_INPUT_MALFORMED,
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        ReconError::Io(_) => EXIT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_distinct_codes() {
        let not_found = ReconError::InputNotFound { path: "g.json".into() };
        let malformed = ReconError::malformed("g.json", "expected value");
        assert_eq!(exit_code_for(&not_found), EXIT_INPUT_NOT_FOUND);
        assert_eq!(exit_code_for(&malformed), EXIT_INPUT_MALFORMED);
        assert_ne!(exit_code_for(&not_found), exit_code_for(&malformed));
        assert_eq!(exit_code_for(&ReconError::ConfigParse("x".into())), EXIT_INVALID_CONFIG);
        assert_eq!(exit_code_for(&ReconError::Io("x".into())), EXIT_ERROR);
    }
}
