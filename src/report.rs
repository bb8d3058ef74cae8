// src/report.rs

//! Reporting of exceptions nobody caught.
//!
//! The default panic hook only knows how to print string payloads, so an
//! uncaught [`Exception`] would show up as `Box<dyn Any>`. The hook installed
//! here renders it instead, and leaves every other panic to the previous hook.
//!
//! The hook runs before unwinding starts, so it checks whether a
//! [`catch_exception`](crate::catch_exception) is waiting further up the
//! stack and stays quiet when one is.

use std::fmt::Write as _;
use std::panic;

use crate::errors::Result;
use crate::exception::{Exception, is_catching};
use crate::types::ReportStyle;

/// Render `exception` the way the report hook prints it.
pub fn render(exception: &Exception, style: ReportStyle) -> Result<String> {
    let mut out = format!("uncaught {exception}");
    match style {
        ReportStyle::Short => {}
        ReportStyle::Full => {
            for (name, value) in exception.fields().iter() {
                let _ = write!(out, "\n  {name} = {value}");
            }
            for note in exception.notes() {
                let _ = write!(out, "\n  note: {note}");
            }
        }
        ReportStyle::Structured => {
            out = toml::to_string_pretty(exception)?;
        }
    }
    Ok(out)
}

/// Install a panic hook that reports uncaught [`Exception`] payloads to
/// stderr using `style`.
pub fn install_report_hook(style: ReportStyle) {
    install_report_hook_with(style, |text| eprintln!("{text}"));
}

/// Like [`install_report_hook`], but hands each report to `sink`.
pub fn install_report_hook_with<S>(style: ReportStyle, sink: S)
where
    S: Fn(&str) + Send + Sync + 'static,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let Some(exception) = info.payload().downcast_ref::<Exception>() else {
            previous(info);
            return;
        };
        if is_catching() {
            return;
        }

        let location = info
            .location()
            .map(|l| format!(" at {}:{}", l.file(), l.line()))
            .unwrap_or_default();

        match render(exception, style) {
            Ok(text) => sink(&format!("{text}{location}")),
            Err(err) => sink(&format!("uncaught {exception}{location} (report failed: {err})")),
        }
    }));
}
