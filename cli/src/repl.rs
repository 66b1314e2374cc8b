use std::io::Write;

const PROMPT: &str = "tickwork> ";

/// Print the prompt and read one line from stdin.
///
/// Returns `Ok(None)` at end of input.
pub fn readline() -> Result<Option<String>, String> {
    write!(std::io::stdout(), "{PROMPT}").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    let read = std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;

    if read == 0 { Ok(None) } else { Ok(Some(buffer)) }
}
