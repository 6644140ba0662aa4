//! Deterministic names for demo clients, crew and event titles.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::DemoRng;

pub struct NameGenerator;

impl NameGenerator {
    pub fn generate_full_name(rng: &mut DemoRng) -> String {
        let first = *rng.pick(Self::first_names());
        let last = *rng.pick(Self::last_names());
        format!("{first} {last}")
    }

    /// "Mehta Wedding", "Ananya & Karan Pre-Wedding", ...
    pub fn generate_event_title(rng: &mut DemoRng, event_type: &str) -> String {
        let label = event_type.replace('-', " ");
        if rng.chance(0.5) {
            format!("{} {label}", rng.pick(Self::last_names()))
        } else {
            let a = *rng.pick(Self::first_names());
            let b = *rng.pick(Self::first_names());
            format!("{a} & {b} {label}")
        }
    }

    pub fn generate_vendor(rng: &mut DemoRng) -> String {
        format!("{} {}", rng.pick(Self::vendor_prefixes()), rng.pick(Self::vendor_kinds()))
    }

    /// Canonical stored event types.
    pub fn event_types() -> &'static [&'static str] {
        &[
            "Wedding", "Pre-Wedding", "Engagement", "Ring-Ceremony", "Haldi", "Mehendi",
            "Sangeet", "Reception", "Birthday", "Anniversary", "Maternity", "Baby-Shower",
            "Corporate", "Product-Shoot",
        ]
    }

    pub fn expense_categories() -> &'static [&'static str] {
        &[
            "Equipment", "Travel", "Printing", "Albums", "Rent", "Utilities", "Marketing",
            "Software", "Food", "Salary",
        ]
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Aarav", "Vihaan", "Aditya", "Arjun", "Karan", "Rohan", "Ishaan", "Kabir",
            "Rahul", "Siddharth", "Nikhil", "Dev", "Yash", "Varun", "Manish", "Sahil",
            "Ananya", "Diya", "Priya", "Isha", "Kavya", "Meera", "Neha", "Pooja",
            "Riya", "Sneha", "Tanvi", "Aisha", "Shreya", "Nisha", "Simran", "Zara",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Sharma", "Verma", "Gupta", "Mehta", "Patel", "Shah", "Iyer", "Reddy",
            "Nair", "Kapoor", "Malhotra", "Chopra", "Bose", "Das", "Joshi", "Kulkarni",
            "Rao", "Singh", "Khanna", "Bhatia", "Menon", "Pillai", "Agarwal", "Saxena",
        ]
    }

    fn vendor_prefixes() -> &'static [&'static str] {
        &["City", "Royal", "Metro", "Galaxy", "Sunrise", "Lotus", "Prime", "Star"]
    }

    fn vendor_kinds() -> &'static [&'static str] {
        &["Print House", "Travels", "Lens Rentals", "Album Studio", "Caterers", "Digital"]
    }
}
