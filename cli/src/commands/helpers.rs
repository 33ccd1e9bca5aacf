use crate::format::OutputFormat;
use markshelf::error::Result;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from stdin
pub fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_with(prompt, &mut stdin.lock(), &mut io::stdout())
}

/// Only "y" or "yes" (any case) count as agreement
pub fn confirm_with(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{} [y/N]: ", prompt)?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    let response = response.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Output format chosen on the command line, colored when none is given
pub fn resolve_format(format: Option<&str>) -> OutputFormat {
    format
        .map(OutputFormat::from_string)
        .unwrap_or(OutputFormat::Colored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case("y\n", true)]
    #[case("YES\n", true)]
    #[case(" yes \n", true)]
    #[case("n\n", false)]
    #[case("\n", false)]
    #[case("", false)]
    fn test_confirm_with(#[case] answer: &str, #[case] expected: bool) {
        let mut input = Cursor::new(answer.as_bytes());
        let mut output = Vec::new();

        let confirmed = confirm_with("Delete 1 bookmark(s)?", &mut input, &mut output).unwrap();

        assert_eq!(confirmed, expected);
        assert_eq!(String::from_utf8(output).unwrap(), "Delete 1 bookmark(s)? [y/N]: ");
    }

    #[rstest]
    #[case(None, OutputFormat::Colored)]
    #[case(Some("json"), OutputFormat::Json)]
    #[case(Some("plain"), OutputFormat::Plain)]
    fn test_resolve_format(#[case] format: Option<&str>, #[case] expected: OutputFormat) {
        assert_eq!(resolve_format(format), expected);
    }
}
