//! The `rosterly menu` command.

use anyhow::Result;

/// The seven registry actions, printed for human orientation. Not wired
/// to input handling; the demo drives the registry with fixed data.
pub const MENU: &str = "\
Registry actions:
  1. add             — add a student record
  2. list            — list all records in insertion order
  3. find-by-id      — look up a record by id
  4. update-average  — replace a record's average score
  5. change-status   — set a record's active flag
  6. list-active     — list active records only
  7. overall-average — mean of all averages\
";

pub fn execute() -> Result<()> {
    println!("{MENU}");
    Ok(())
}
