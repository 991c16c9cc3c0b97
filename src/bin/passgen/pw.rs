use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::Context;
use console::style;

use crate::ProgError;
use passgen::{GenerationOptions, PasswordReport, Secret, StrengthLabel};

/// Cells in the strength bar; a 100% password fills all of them.
const BAR_WIDTH: usize = 30;

pub(crate) fn generate(
    options: &GenerationOptions,
    count: u32,
    json: bool,
    copy: bool,
) -> Result<(), ProgError> {
    let mut rng = rand::thread_rng();
    let reports = (0..count)
        .map(|_| passgen::evaluate(&mut rng, options))
        .collect::<Vec<_>>();

    {
        let mut stdout = io::stdout().lock();
        if json {
            match reports.as_slice() {
                [single] => serde_json::to_writer_pretty(&mut stdout, single),
                many => serde_json::to_writer_pretty(&mut stdout, many),
            }
            .context("failed to write JSON to stdout")?;
            writeln!(stdout).context("failed to write to stdout")?;
        } else if let [single] = reports.as_slice() {
            writeln!(stdout, "{}", single.password.as_str())
                .and_then(|()| write!(stdout, "{}", render_strength(single)))
                .context("failed to write to stdout")?;
        } else {
            crate::table::display_table(&reports, &mut stdout)
                .context("failed to output table")?;
        }
    }

    if copy {
        if let Some(first) = reports.first() {
            copy_password(&first.password);
        }
    }
    Ok(())
}

pub(crate) fn check(password: Option<String>, json: bool) -> Result<(), ProgError> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ")
            .context("failed to read password from TTY")?,
    };
    if password.is_empty() {
        return Err(ProgError::NoPassword);
    }
    let report = PasswordReport::new(Secret::from(password));

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report)
            .context("failed to write JSON to stdout")?;
        writeln!(stdout).context("failed to write to stdout")?;
    } else {
        write!(stdout, "{}", render_strength(&report)).context("failed to write to stdout")?;
    }
    Ok(())
}

/// The strength panel: label, a bar as wide as the score, and the crack time.
pub(crate) fn render_strength(report: &PasswordReport) -> String {
    let label = report.strength.label;
    let filled = BAR_WIDTH * usize::from(report.strength.score.min(100)) / 100;
    let mut out = format!(
        "Security score: {}\n{}{} {}%\n",
        style(label.as_str()).fg(label_color(label)).bold(),
        style("█".repeat(filled)).fg(label_color(label)),
        style("░".repeat(BAR_WIDTH - filled)).dim(),
        report.strength.score,
    );
    let crack_time = report.crack_time.as_str();
    if !crack_time.is_empty() {
        out.push_str(&format!("{} to hack this password\n", crack_time));
    }
    out
}

fn label_color(label: StrengthLabel) -> console::Color {
    match label {
        StrengthLabel::Weak => console::Color::Red,
        StrengthLabel::Medium => console::Color::Yellow,
        StrengthLabel::Strong => console::Color::Green,
    }
}

/// Copy `password` to the clipboard, reporting (but otherwise ignoring) failure.
pub(crate) fn copy_password(password: &Secret) {
    match send_to_clipboard(password.as_str().as_bytes()) {
        Ok(()) => eprintln!("Copied to the clipboard."),
        Err(err) => {
            log::warn!("clipboard copy failed: {:#}", err);
            eprintln!(
                "{} could not copy to the clipboard: {:#}",
                style("Warning:").yellow(),
                err
            );
        }
    }
}

fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    pipe_to(clipboard_cmd(), data)
}

/// Run `cmd` with `data` on its stdin, and wait for it to finish.
fn pipe_to(mut cmd: Command, data: &[u8]) -> anyhow::Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start `{}`", program))?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin
            .write_all(data)
            .with_context(|| format!("failed to write to `{}`", program)),
        None => Err(anyhow::anyhow!("`{}` has no stdin", program)),
    };
    if let Err(err) = written {
        // The child may still be running; don't leave it behind as a zombie.
        let _ = child.kill();
        let _ = child.wait();
        return Err(err);
    }
    let exit_status = child
        .wait()
        .with_context(|| format!("failed to wait for `{}` to finish", program))?;
    if exit_status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("`{}` exited with {}", program, exit_status))
    }
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
