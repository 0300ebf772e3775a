//! Follow-up queries built from the same primitives as the report.

use std::collections::BTreeMap;

use super::{
    employee::Employee,
    pipeline::EmployeePipeline,
    summary::{DepartmentSummary, average},
};

impl<'a> EmployeePipeline<'a> {
    /// Second entry of the department's salary ranking (ties ranked by roster order).
    pub fn second_highest_paid_in(&self, department: &str) -> Option<&'a Employee> {
        let mut members = self.filter_by_department(department);
        members.sort_by(|a, b| b.salary().total_cmp(&a.salary()));
        members.get(1).copied()
    }

    /// `None` when there are no employees. Ties keep the department that sorts first.
    pub fn department_with_highest_average_salary(&self) -> Option<DepartmentSummary> {
        self.department_report()
            .into_iter()
            .reduce(|best, s| if s.average_salary > best.average_salary { s } else { best })
    }

    /// Employees keyed by decade of age: 20 for 20..=29, 30 for 30..=39, and so on.
    pub fn group_by_age_decade(&self) -> BTreeMap<u32, Vec<&'a Employee>> {
        let mut groups: BTreeMap<u32, Vec<&Employee>> = BTreeMap::new();
        for employee in self.employees() {
            groups
                .entry(employee.age() / 10 * 10)
                .or_default()
                .push(employee);
        }
        groups
    }

    /// Employees whose name contains `letter`, ignoring case.
    pub fn names_containing(&self, letter: char) -> Vec<&'a str> {
        let needle = letter.to_lowercase().to_string();
        self.employees()
            .iter()
            .map(Employee::name)
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn total_salary_by_department(&self) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for employee in self.employees() {
            *totals.entry(employee.department().to_owned()).or_default() += employee.salary();
        }
        totals
    }

    /// Oldest member of each department, first one on ties.
    pub fn oldest_by_department(&self) -> BTreeMap<String, &'a Employee> {
        self.group_by_department()
            .into_iter()
            .filter_map(|(department, members)| {
                members
                    .into_iter()
                    .reduce(|oldest, e| if e.age() > oldest.age() { e } else { oldest })
                    .map(|oldest| (department, oldest))
            })
            .collect()
    }

    /// Department ascending, then salary descending within a department.
    pub fn sorted_by_department_then_salary_desc(&self) -> Vec<&'a Employee> {
        let mut sorted: Vec<&Employee> = self.employees().iter().collect();
        sorted.sort_by(|a, b| {
            a.department()
                .cmp(b.department())
                .then_with(|| b.salary().total_cmp(&a.salary()))
        });
        sorted
    }

    /// True when every member of `department` earns strictly less than `ceiling`.
    /// Vacuously true for a department with no members.
    pub fn all_in_department_earn_below(&self, department: &str, ceiling: f64) -> bool {
        self.employees()
            .iter()
            .filter(|e| e.department() == department)
            .all(|e| e.salary() < ceiling)
    }

    /// Middle salary; the mean of the two middle salaries for an even count.
    pub fn median_salary(&self) -> Option<f64> {
        let mut salaries: Vec<f64> = self.employees().iter().map(Employee::salary).collect();
        if salaries.is_empty() {
            return None;
        }
        salaries.sort_by(f64::total_cmp);

        let middle = salaries.len() / 2;
        if salaries.len() % 2 == 1 {
            Some(salaries[middle])
        } else {
            average(salaries[middle - 1..=middle].iter().copied())
        }
    }
}
