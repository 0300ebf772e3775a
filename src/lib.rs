#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 # Employee Analytics

 A small, batch-flavoured toolkit for answering questions about an employee roster
 held in memory: who works where, who earns what, how departments compare.

 ## Core Concepts

- **Employee:** an immutable record (name, department, salary, age). A fixed
  eight-person roster is available through `sample_employees()`.
- **EmployeePipeline:** read-only queries over a slice of employees: filtering,
  mapping, sorting, deduplication, grouping, partitioning and reductions.
- **DepartmentSummary:** per-department count, average salary, average age and top earner.
- **ItemReader / ItemProcessor / ItemWriter:** the batch abstractions used to load
  rosters (with validation) and to emit reports.
- **Step / Job:** a chunk-oriented step loads employees; the console report is a
  job made of one tasklet step per section.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| csv           | Enables CSV `ItemReader` and `ItemWriter`                     |
| json          | Enables JSON `ItemWriter`                                     |
| logger        | Enables a logger `ItemWriter`, useful for debugging purposes  |
| full          | Enables all available features                                |

 ## Getting Started

```rust
use employee_analytics::analytics::{EmployeePipeline, sample_employees};
use employee_analytics::config::AnalyticsConfig;

let employees = sample_employees();
let pipeline = EmployeePipeline::new(&employees);
let config = AnalyticsConfig::default();

let groups = pipeline.group_by_department();
assert_eq!(groups["Engineering"].len(), 4);

let (young, experienced) = pipeline.average_salary_by_age(config.young_age_limit);
assert_eq!(young, Some(58000.0));
assert_eq!(experienced, Some(75000.0));

for summary in pipeline.department_report() {
    println!("{}: {} employees, top earner {}", summary.department, summary.employee_count, summary.top_earner);
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
*/

/// Employee records and the queries run over them.
pub mod analytics;

/// Tunable thresholds, loadable from JSON.
pub mod config;

/// Core module for batch operations
pub mod core;

/// Error types for analytics operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of item readers / writers (for exemple: csv reader and writer)
pub mod item;

/// The ten-section console report.
pub mod report;
