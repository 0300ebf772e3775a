use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::config::SalaryBands;

use super::{
    employee::{Employee, SalaryBand},
    summary::{DepartmentSummary, average, highest_salary},
};

/// Both sides of a boolean partition.
#[derive(Debug, Clone, PartialEq)]
pub struct AgePartition<'a> {
    /// Employees strictly younger than the limit.
    pub matching: Vec<&'a Employee>,
    pub rest: Vec<&'a Employee>,
}

/// Read-only queries over a slice of employees.
///
/// Every query is a pure function of the slice: results borrow from it and
/// keep its order unless the query sorts.
///
/// ```
/// use employee_analytics::analytics::{EmployeePipeline, sample_employees};
///
/// let employees = sample_employees();
/// let pipeline = EmployeePipeline::new(&employees);
///
/// assert_eq!(pipeline.filter_by_department("HR").len(), 2);
/// assert_eq!(pipeline.total_salary(), 532000.0);
/// assert_eq!(pipeline.highest_paid().map(|e| e.name()), Some("Grace"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmployeePipeline<'a> {
    employees: &'a [Employee],
}

impl<'a> EmployeePipeline<'a> {
    pub fn new(employees: &'a [Employee]) -> Self {
        Self { employees }
    }

    pub fn employees(&self) -> &'a [Employee] {
        self.employees
    }

    // Filtering

    pub fn filter<P>(&self, predicate: P) -> Vec<&'a Employee>
    where
        P: Fn(&Employee) -> bool,
    {
        self.employees.iter().filter(|e| predicate(e)).collect()
    }

    pub fn filter_by_department(&self, department: &str) -> Vec<&'a Employee> {
        self.filter(|e| e.department() == department)
    }

    /// Employees earning strictly more than `threshold`.
    pub fn filter_by_salary_above(&self, threshold: f64) -> Vec<&'a Employee> {
        self.filter(|e| e.salary() > threshold)
    }

    // Mapping

    pub fn names(&self) -> Vec<&'a str> {
        self.employees.iter().map(Employee::name).collect()
    }

    /// `"Alice: $75.0K"` for every employee.
    pub fn salaries_in_thousands(&self) -> Vec<String> {
        self.employees
            .iter()
            .map(|e| format!("{}: ${:.1}K", e.name(), e.salary() / 1000.0))
            .collect()
    }

    // Sorting

    /// Ascending by salary; equal salaries keep their original order.
    pub fn sorted_by_salary(&self) -> Vec<&'a Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by(|a, b| a.salary().total_cmp(&b.salary()));
        sorted
    }

    /// Descending by name, truncated to `limit` entries when given.
    pub fn sorted_by_name_desc(&self, limit: Option<usize>) -> Vec<&'a Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by(|a, b| b.name().cmp(a.name()));
        if let Some(limit) = limit {
            sorted.truncate(limit);
        }
        sorted
    }

    // Collecting

    /// Department names in order of first appearance.
    pub fn distinct_departments(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.employees
            .iter()
            .map(Employee::department)
            .filter(|department| seen.insert(*department))
            .collect()
    }

    pub fn unique_departments(&self) -> HashSet<&'a str> {
        self.employees.iter().map(Employee::department).collect()
    }

    /// Name to salary. Names are not unique: a later employee overwrites an
    /// earlier one with the same name.
    pub fn name_to_salary(&self) -> HashMap<String, f64> {
        self.employees
            .iter()
            .map(|e| (e.name().to_owned(), e.salary()))
            .collect()
    }

    /// Names grouped into one team per department, departments in order of
    /// first appearance. The nested shape [`flatten_teams`] takes.
    pub fn teams_by_department(&self) -> Vec<Vec<String>> {
        self.distinct_departments()
            .into_iter()
            .map(|department| {
                self.filter_by_department(department)
                    .iter()
                    .map(|e| e.name().to_owned())
                    .collect()
            })
            .collect()
    }

    // Flat mapping

    /// Every character used in any name, once, in code point order.
    pub fn distinct_name_characters(&self) -> Vec<char> {
        self.employees
            .iter()
            .flat_map(|e| e.name().chars())
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect()
    }

    // Grouping

    pub fn group_by_department(&self) -> BTreeMap<String, Vec<&'a Employee>> {
        let mut groups: BTreeMap<String, Vec<&Employee>> = BTreeMap::new();
        for employee in self.employees {
            groups
                .entry(employee.department().to_owned())
                .or_default()
                .push(employee);
        }
        groups
    }

    pub fn group_by_salary_band(
        &self,
        bands: &SalaryBands,
    ) -> BTreeMap<SalaryBand, Vec<&'a Employee>> {
        let mut groups: BTreeMap<SalaryBand, Vec<&Employee>> = BTreeMap::new();
        for employee in self.employees {
            groups
                .entry(SalaryBand::classify(employee.salary(), bands))
                .or_default()
                .push(employee);
        }
        groups
    }

    // Partitioning

    pub fn partition_by_age(&self, limit: u32) -> AgePartition<'a> {
        let (matching, rest): (Vec<&Employee>, Vec<&Employee>) =
            self.employees.iter().partition(|e| e.age() < limit);
        AgePartition { matching, rest }
    }

    /// Average salary of (younger than `limit`, the others). An empty side is `None`.
    pub fn average_salary_by_age(&self, limit: u32) -> (Option<f64>, Option<f64>) {
        let partition = self.partition_by_age(limit);
        (
            average(partition.matching.iter().map(|e| e.salary())),
            average(partition.rest.iter().map(|e| e.salary())),
        )
    }

    // Reduction

    pub fn total_salary(&self) -> f64 {
        self.employees.iter().map(Employee::salary).sum()
    }

    /// Highest-paid employee, first one on ties, `None` for an empty slice.
    pub fn highest_paid(&self) -> Option<&'a Employee> {
        highest_salary(self.employees.iter())
    }

    /// All names joined by `separator`, with no leading separator.
    pub fn join_names(&self, separator: &str) -> String {
        self.employees
            .iter()
            .map(Employee::name)
            .fold(String::new(), |mut joined, name| {
                if !joined.is_empty() {
                    joined.push_str(separator);
                }
                joined.push_str(name);
                joined
            })
    }

    // Composite report

    /// One summary per department, in department name order.
    pub fn department_report(&self) -> Vec<DepartmentSummary> {
        self.group_by_department()
            .iter()
            .map(|(department, members)| DepartmentSummary::from_members(department, members))
            .collect()
    }
}

/// Concatenates nested lists, outer list first, then each inner list in order.
pub fn flatten_teams<T: Clone>(teams: &[Vec<T>]) -> Vec<T> {
    teams.iter().flatten().cloned().collect()
}
