use std::path::Path;

use colored::Colorize;

use crate::emit_form::EmittedForm;
use crate::template::InitSummary;

pub fn summarize_init(summary: &InitSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} Created {} from {}\n",
        "✓".green(),
        summary.destination.cyan(),
        summary.url
    ));
    output.push_str(&format!(
        "Files rewritten: {} of {}\n",
        summary.replace.files_rewritten, summary.replace.files_scanned
    ));
    if summary.replace.files_skipped > 0 {
        output.push_str(&format!(
            "Non-text files skipped: {}\n",
            summary.replace.files_skipped
        ));
    }
    if !summary.history_removed {
        output.push_str(&format!(
            "{} git history was left in place\n",
            "!".yellow()
        ));
    }
    output.push('\n');
    output.push_str(&format!("  cd {}\n", summary.destination));

    output.trim_end().to_string()
}

pub fn summarize_form(root: &Path, emitted: &EmittedForm) -> String {
    [&emitted.view_path, &emitted.server_path]
        .into_iter()
        .map(|path| {
            let shown = path.strip_prefix(root).unwrap_or(path);
            format!("{} Wrote {}", "✓".green(), shown.display())
        })
        .collect::<Vec<String>>()
        .join("\n")
}
