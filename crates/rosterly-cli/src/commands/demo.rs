//! The `rosterly demo` command.
//!
//! Drives an explicitly owned registry through a scripted session with
//! fixed sample data and prints every outcome, including one of each
//! failure kind.

use anyhow::Result;
use comfy_table::{Cell, Table};

use rosterly_core::{Outcome, Registry, Student};

use super::menu::MENU;

pub fn execute() -> Result<()> {
    println!("{MENU}");
    println!();

    let mut registry = Registry::new();

    // Seed the roster.
    for student in [
        Student::new(1, "Ana", 20, 8.5),
        Student::new(2, "Luis", 22, 9.2),
        Student::new(3, "Marta", 19, 7.8),
    ] {
        let outcome = Outcome::from_result(
            registry.add(student).cloned(),
            "student added",
        );
        println!("{outcome}");
    }

    // Each failure kind in turn.
    println!();
    let rejects = [
        Student::new(1, "Ana again", 20, 8.5),
        Student::new(4, "Too young", 14, 8.0),
        Student::new(5, "Off the scale", 20, 10.5),
    ];
    for student in rejects {
        let outcome = Outcome::from_result(registry.add(student).cloned(), "student added");
        println!("{outcome}");
    }

    println!();
    print_roster("Roster", registry.list().iter());

    println!();
    let found = Outcome::from_result(registry.find_by_id(2).cloned(), "student found");
    println!("{found}");
    let missing = Outcome::from_result(registry.find_by_id(99).cloned(), "student found");
    println!("{missing}");

    println!();
    let updated = Outcome::from_result(
        registry.update_average(1, 9.0).cloned(),
        "average updated",
    );
    println!("{updated}");
    let bad_update = Outcome::from_result(
        registry.update_average(1, 11.0).cloned(),
        "average updated",
    );
    println!("{bad_update}");

    let benched = Outcome::from_result(
        registry.change_status(3, false).cloned(),
        "status changed",
    );
    println!("{benched}");

    println!();
    print_roster("Active students", registry.list_active().into_iter());

    let stats = registry.stats();
    println!(
        "\n{} of {} active, overall average {:.4}",
        stats.active, stats.total, stats.overall_average
    );

    Ok(())
}

fn print_roster<'a>(title: &str, students: impl Iterator<Item = &'a Student>) {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Age", "Average", "Active"]);

    for s in students {
        table.add_row(vec![
            Cell::new(s.id),
            Cell::new(&s.name),
            Cell::new(s.age),
            Cell::new(format!("{:.1}", s.average)),
            Cell::new(if s.active { "yes" } else { "no" }),
        ]);
    }

    println!("{title}:\n{table}");
}
