//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cardbox_core` linkage.
//! - Walk one add -> filter -> undo sequence with deterministic output.

use cardbox_core::{ContactService, Person, SortOrder};

fn main() {
    println!("cardbox_core version={}", cardbox_core::core_version());

    let mut service = ContactService::empty();
    service
        .add(Person::new(
            "Alex Yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Blk 30 Geylang Street 29",
            "12-2024 urgent",
        ))
        .expect("smoke contact should be unique");
    service
        .add(Person::new(
            "Bernice Yu",
            "99272758",
            "berniceyu@example.com",
            "Blk 30 Lorong 3 Serangoon Gardens",
            "01-2025",
        ))
        .expect("smoke contact should be unique");
    service.sort_by(SortOrder::Name);

    service
        .filter_by_calendar("urgent")
        .expect("smoke filter keywords are non-blank");
    for person in service.view() {
        println!("match: {person}");
    }

    let undone = service.undo().expect("two adds were recorded");
    println!("undone: {}", undone.kind());
    println!("remaining: {}", service.store().len());
}
