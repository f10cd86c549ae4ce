use anyhow::Context;
use fortimac_application::use_cases::GenerateScriptUseCase;
use fortimac_domain::GenerationRequest;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Reads the address list from `input` (`-` for stdin) and writes the script to `out`.
///
/// Validation failures come back as the domain error, so the process exits
/// non-zero with the same message the HTTP API returns.
pub fn run_generate(
    use_case: &GenerateScriptUseCase,
    input: &Path,
    fortigate_name: &str,
    group_choice: i64,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let text = read_input(input, std::io::stdin().lock())?;
    generate_to(use_case, text, fortigate_name, group_choice, out)
}

fn generate_to(
    use_case: &GenerateScriptUseCase,
    text: String,
    fortigate_name: &str,
    group_choice: i64,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let request = GenerationRequest::new(text, fortigate_name, group_choice);

    let result = use_case.execute(&request)?;
    info!(count = result.count, "Script generated");

    writeln!(out, "{}", result.script).context("Failed to write script")?;
    Ok(())
}

fn read_input(input: &Path, mut stdin: impl Read) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read address list from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read address list from {}", input.display()))
}
