use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SalaryBands;

/// An employee record.
///
/// Plain value type: two employees are the same when every field matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    department: String,
    salary: f64,
    age: u32,
}

impl Employee {
    pub fn new(name: &str, department: &str, salary: f64, age: u32) -> Self {
        Self {
            name: name.to_owned(),
            department: department.to_owned(),
            salary,
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{name='{}', dept='{}', salary={:.0}, age={}}}",
            self.name, self.department, self.salary, self.age
        )
    }
}

/// Salary bucket used by the grouping queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SalaryBand {
    Low,
    Medium,
    High,
}

impl SalaryBand {
    pub fn classify(salary: f64, bands: &SalaryBands) -> SalaryBand {
        if salary < bands.low_ceiling {
            SalaryBand::Low
        } else if salary < bands.medium_ceiling {
            SalaryBand::Medium
        } else {
            SalaryBand::High
        }
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SalaryBand::Low => "Low",
            SalaryBand::Medium => "Medium",
            SalaryBand::High => "High",
        };
        f.write_str(label)
    }
}

/// The eight-person roster every example runs against.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("Alice", "Engineering", 75000.0, 28),
        Employee::new("Bob", "Engineering", 65000.0, 32),
        Employee::new("Charlie", "Marketing", 55000.0, 26),
        Employee::new("Diana", "Engineering", 85000.0, 35),
        Employee::new("Eve", "HR", 50000.0, 29),
        Employee::new("Frank", "Marketing", 60000.0, 31),
        Employee::new("Grace", "Engineering", 90000.0, 40),
        Employee::new("Henry", "HR", 52000.0, 27),
    ]
}

/// The same roster as nested team lists, one list per department.
pub fn sample_teams() -> Vec<Vec<String>> {
    [
        vec!["Alice", "Bob", "Diana", "Grace"],
        vec!["Charlie", "Frank"],
        vec!["Eve", "Henry"],
    ]
    .into_iter()
    .map(|team| team.into_iter().map(String::from).collect())
    .collect()
}

#[cfg(test)]
mod tests {
    use crate::config::SalaryBands;

    use super::{Employee, SalaryBand, sample_employees, sample_teams};

    #[test]
    fn display_matches_record_notation() {
        let alice = Employee::new("Alice", "Engineering", 75000.0, 28);

        assert_eq!(
            alice.to_string(),
            "Employee{name='Alice', dept='Engineering', salary=75000, age=28}"
        );
    }

    #[test]
    fn band_boundaries_belong_to_the_upper_band() {
        let bands = SalaryBands::default();

        assert_eq!(SalaryBand::classify(59_999.0, &bands), SalaryBand::Low);
        assert_eq!(SalaryBand::classify(60_000.0, &bands), SalaryBand::Medium);
        assert_eq!(SalaryBand::classify(79_999.0, &bands), SalaryBand::Medium);
        assert_eq!(SalaryBand::classify(80_000.0, &bands), SalaryBand::High);
    }

    #[test]
    fn sample_roster_and_teams_agree() {
        let employees = sample_employees();
        let teams = sample_teams();

        assert_eq!(employees.len(), 8);
        assert_eq!(teams.iter().map(Vec::len).sum::<usize>(), employees.len());
        for team in &teams {
            let department = employees
                .iter()
                .find(|e| e.name() == team[0])
                .map(Employee::department)
                .unwrap();
            assert!(team.iter().all(|name| {
                employees
                    .iter()
                    .any(|e| e.name() == name.as_str() && e.department() == department)
            }));
        }
    }
}
