use std::io::Write;
use crate::resume::ResumeLocation;

mod paths;
mod resume;

// Stdout carries the result, so diagnostics only go to stderr.
fn setup_logging() -> anyhow::Result<()> {
    logforth::Logger::new()
        .dispatch(
            logforth::Dispatch::new()
                .filter(log::LevelFilter::Warn)
                .layout(logforth::layout::TextLayout::default())
                .append(logforth::append::Stderr)
        )
        .apply()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    let location = ResumeLocation::default();
    log::debug!("Resume folder: {}", location.folder_name());
    log::debug!("Resume path: {}", location);

    let file_name = location.file_name();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", file_name)?;
    Ok(())
}
