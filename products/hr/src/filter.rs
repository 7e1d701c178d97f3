//! Directory filtering.
//!
//! An employee is kept when its name, designation or any skill contains the
//! matching query, compared case-insensitively. The three predicates are
//! OR-ed, so an empty query matches every employee whose field is populated.
//! A missing or empty field never matches, whatever the query.

use serde::{Deserialize, Serialize};

use crate::model::Employee;

/// The current search constraints entered by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterCriteria {
    pub name: String,
    pub designation: String,
    pub skills: String,
}

impl FilterCriteria {
    pub fn new(
        name: impl Into<String>,
        designation: impl Into<String>,
        skills: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            designation: designation.into(),
            skills: skills.into(),
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn folded(&self) -> Folded {
        Folded {
            name: self.name.to_lowercase(),
            designation: self.designation.to_lowercase(),
            skills: self.skills.to_lowercase(),
        }
    }
}

/// Lowercased copy of the criteria, built once per recomputation.
struct Folded {
    name: String,
    designation: String,
    skills: String,
}

fn contains_folded(field: &str, needle: &str) -> bool {
    !field.is_empty() && field.to_lowercase().contains(needle)
}

impl Folded {
    fn matches(&self, employee: &Employee) -> bool {
        contains_folded(&employee.name, &self.name)
            || employee
                .designation
                .as_deref()
                .is_some_and(|designation| contains_folded(designation, &self.designation))
            || employee
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&self.skills))
    }
}

/// Returns true when `employee` belongs in the filtered view.
pub fn matches(employee: &Employee, criteria: &FilterCriteria) -> bool {
    criteria.folded().matches(employee)
}

/// Positions of the matching employees, in directory order.
pub fn matching_indices(directory: &[Employee], criteria: &FilterCriteria) -> Vec<usize> {
    let folded = criteria.folded();
    directory
        .iter()
        .enumerate()
        .filter(|(_, employee)| folded.matches(employee))
        .map(|(index, _)| index)
        .collect()
}

/// Derives the filtered view. The directory is never modified and the
/// relative order of survivors is preserved.
pub fn apply<'a>(directory: &'a [Employee], criteria: &FilterCriteria) -> Vec<&'a Employee> {
    matching_indices(directory, criteria)
        .into_iter()
        .map(|index| &directory[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Employee> {
        vec![
            Employee::new(1, "Ann")
                .with_designation("Engineer")
                .with_skills(["Python", "SQL"]),
            Employee::new(2, "Bo")
                .with_designation("Designer")
                .with_skills(["Photoshop"]),
        ]
    }

    fn names(employees: &[&Employee]) -> Vec<String> {
        employees.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn empty_criteria_keep_the_whole_directory() {
        let directory = directory();
        let filtered = apply(&directory, &FilterCriteria::default());
        assert_eq!(filtered.len(), directory.len());
        assert_eq!(names(&filtered), vec!["Ann", "Bo"]);
    }

    #[test]
    fn name_query_is_a_case_insensitive_substring() {
        let directory = directory();
        let criteria = FilterCriteria::new("an", "zzz", "zzz");
        assert_eq!(names(&apply(&directory, &criteria)), vec!["Ann"]);
    }

    #[test]
    fn unmatched_name_alone_still_matches_through_empty_queries() {
        // With the other two queries empty their predicates hold vacuously.
        let directory = directory();
        let filtered = apply(&directory, &FilterCriteria::by_name("xyz"));
        assert_eq!(names(&filtered), vec!["Ann", "Bo"]);
    }

    #[test]
    fn predicates_are_or_ed() {
        let directory = directory();
        let criteria = FilterCriteria::new("bo", "engineer", "nothing");
        assert_eq!(names(&apply(&directory, &criteria)), vec!["Ann", "Bo"]);

        let criteria = FilterCriteria::new("nobody", "nothing", "shop");
        assert_eq!(names(&apply(&directory, &criteria)), vec!["Bo"]);
    }

    #[test]
    fn skill_match_is_case_insensitive_substring() {
        let employee = Employee::new(3, "Cy").with_skills(["javascript"]);
        assert!(matches(&employee, &FilterCriteria::new("zzz", "zzz", "Script")));
        assert!(matches(&employee, &FilterCriteria::new("zzz", "zzz", "JAVASCRIPT")));
        assert!(!matches(&employee, &FilterCriteria::new("zzz", "zzz", "Java Script")));
    }

    #[test]
    fn missing_fields_never_match() {
        let blank = Employee::new(4, "");
        assert!(!matches(&blank, &FilterCriteria::default()));

        let no_designation = Employee::new(5, "Ann");
        assert!(!matches(&no_designation, &FilterCriteria::new("zzz", "", "zzz")));
    }

    #[test]
    fn filtering_preserves_order_and_source() {
        let directory = vec![
            Employee::new(10, "Zed").with_skills(["Go"]),
            Employee::new(11, "Amy").with_skills(["Rust"]),
            Employee::new(12, "Max").with_skills(["Go", "Rust"]),
        ];
        let snapshot = directory.clone();
        let criteria = FilterCriteria::new("zzz", "zzz", "rust");
        assert_eq!(matching_indices(&directory, &criteria), vec![1, 2]);
        assert_eq!(directory, snapshot);
    }

    #[test]
    fn filtering_is_idempotent() {
        let directory = directory();
        let criteria = FilterCriteria::new("an", "zzz", "zzz");
        let once: Vec<Employee> = apply(&directory, &criteria).into_iter().cloned().collect();
        let twice: Vec<Employee> = apply(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice);

        // Reset to the full directory and filter again.
        let _ = apply(&directory, &FilterCriteria::default());
        let again: Vec<Employee> = apply(&directory, &criteria).into_iter().cloned().collect();
        assert_eq!(once, again);
    }

    #[test]
    fn folding_handles_non_ascii() {
        let employee = Employee::new(6, "ÉLODIE");
        assert!(matches(&employee, &FilterCriteria::new("élo", "zzz", "zzz")));
    }
}
