//! Text output formatter

use eslint_bridge_core::LintDiagnostic;

use super::FileReport;

pub fn output_text(results: &[FileReport]) {
    for result in results {
        if result.fixed {
            println!("\nFixed {}", result.path.display());
        }
        if result.diagnostics.is_empty() {
            continue;
        }

        println!("\n{}:", result.path.display());
        for diag in &result.diagnostics {
            println!("  {}", format_diagnostic(diag));
        }
    }

    let total_files = results.len();
    let total_issues: usize = results.iter().map(|r| r.diagnostics.len()).sum();
    let fixed = results.iter().filter(|r| r.fixed).count();

    println!();
    println!(
        "Checked {} files ({} fixed), found {} issues",
        total_files, fixed, total_issues
    );
}

fn format_diagnostic(diag: &LintDiagnostic) -> String {
    format!(
        "{}:{} {} [{}]: {}",
        diag.line,
        diag.column,
        diag.severity,
        diag.rule_id.as_deref().unwrap_or("-"),
        diag.message
    )
}
