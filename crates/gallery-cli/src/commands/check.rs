// Rust guideline compliant 2026-10-14

//! Implementation of check mode.

use crate::output::{emit_success, is_json_output};
use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use gallery_app::{check_store, SiteContext};

/// Checks every artwork record against the content schema.
///
/// # Returns
///
/// `true` if no record has problems.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn execute(site: &SiteContext) -> Result<bool> {
    let report = check_store(site)?;
    let clean = report.is_clean();

    if is_json_output() {
        emit_success(&report)?;
        return Ok(clean);
    }

    for record in &report.records {
        for violation in &record.violations {
            println!("{}: {violation}", record.slug);
        }
    }

    if clean {
        print_success(&format!("{} records checked, no problems", report.checked));
    } else {
        print_warning(&format!(
            "{} problems in {} of {} records",
            report.violation_count(),
            report.records.len(),
            report.checked
        ));
    }
    Ok(clean)
}
