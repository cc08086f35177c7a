#![allow(dead_code)]

pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process with `args` after the program name.
pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut argv = vec!["sixmax"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = sixmax_cli::run(argv, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8(out).expect("stdout is utf8"),
        stderr: String::from_utf8(err).expect("stderr is utf8"),
    }
}

/// Value of a `label:` summary line.
pub fn field<'a>(stdout: &'a str, label: &str) -> Option<&'a str> {
    let prefix = format!("{label}:");
    stdout
        .lines()
        .find(|l| l.starts_with(&prefix))
        .map(|l| l[prefix.len()..].trim())
}
