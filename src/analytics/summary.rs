use serde::{Deserialize, Serialize};

use super::employee::Employee;

/// Placeholder top earner of a department without members.
pub const NO_TOP_EARNER: &str = "None";

/// Per-department statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub employee_count: usize,
    pub average_salary: f64,
    pub average_age: f64,
    pub top_earner: String,
}

impl DepartmentSummary {
    /// Summarises `members` as the department `department`.
    ///
    /// An empty member list yields zero averages and [`NO_TOP_EARNER`]. When two
    /// members share the highest salary the first one wins.
    pub fn from_members(department: &str, members: &[&Employee]) -> Self {
        let average_salary = average(members.iter().map(|e| e.salary())).unwrap_or(0.0);
        let average_age = average(members.iter().map(|e| f64::from(e.age()))).unwrap_or(0.0);
        let top_earner = highest_salary(members.iter().copied())
            .map(|e| e.name().to_owned())
            .unwrap_or_else(|| NO_TOP_EARNER.to_owned());

        Self {
            department: department.to_owned(),
            employee_count: members.len(),
            average_salary,
            average_age,
            top_earner,
        }
    }
}

/// Arithmetic mean, `None` for an empty sequence.
pub(crate) fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Highest-paid employee, keeping the first one on ties.
pub(crate) fn highest_salary<'a>(
    employees: impl Iterator<Item = &'a Employee>,
) -> Option<&'a Employee> {
    employees.reduce(|best, e| if e.salary() > best.salary() { e } else { best })
}
