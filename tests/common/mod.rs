#![allow(dead_code)]

pub mod mocks;

pub use mocks::MockFile;

use employee_analytics::analytics::Employee;

/// Roster in CSV form, same people as `sample_employees()`.
pub const ROSTER_CSV: &str = "name,department,salary,age
Alice,Engineering,75000,28
Bob,Engineering,65000,32
Charlie,Marketing,55000,26
Diana,Engineering,85000,35
Eve,HR,50000,29
Frank,Marketing,60000,31
Grace,Engineering,90000,40
Henry,HR,52000,27";

pub fn names(employees: &[&Employee]) -> Vec<String> {
    employees.iter().map(|e| e.name().to_owned()).collect()
}
