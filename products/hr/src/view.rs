use tracing::{debug, error};

use crate::{
    error::RetrievalResult,
    filter::{FilterCriteria, matching_indices},
    model::Employee,
};

/// Outcome of the mount-time retrieval.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// One of the three search inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryField {
    Name,
    Designation,
    Skills,
}

impl QueryField {
    pub const ALL: [QueryField; 3] = [QueryField::Name, QueryField::Designation, QueryField::Skills];

    pub fn label(self) -> &'static str {
        match self {
            QueryField::Name => "Search by name",
            QueryField::Designation => "Search by designation",
            QueryField::Skills => "Search by skills",
        }
    }
}

/// State owned by a mounted directory view: the directory as retrieved, the
/// criteria, and the filtered view derived from both.
///
/// The derived view is recomputed in full whenever the directory or a
/// criterion actually changes; setting a query to its current value is a
/// no-op. [`DirectoryView::commit`] forces a recomputation.
#[derive(Debug, Default)]
pub struct DirectoryView {
    directory: Vec<Employee>,
    criteria: FilterCriteria,
    visible: Vec<usize>,
    status: LoadStatus,
    revision: u64,
}

impl DirectoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a retrieval outcome. Failures are logged and recorded in
    /// [`LoadStatus::Failed`]; the directory is left untouched.
    pub fn apply_load(&mut self, result: RetrievalResult<Vec<Employee>>) {
        match result {
            Ok(employees) => {
                self.status = LoadStatus::Ready;
                self.set_directory(employees);
            }
            Err(err) => {
                error!(error = %err, "retrieval failure");
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    pub fn set_directory(&mut self, employees: Vec<Employee>) {
        self.directory = employees;
        self.recompute();
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.set_query(QueryField::Name, query);
    }

    pub fn set_designation_query(&mut self, query: impl Into<String>) {
        self.set_query(QueryField::Designation, query);
    }

    pub fn set_skills_query(&mut self, query: impl Into<String>) {
        self.set_query(QueryField::Skills, query);
    }

    pub fn set_query(&mut self, field: QueryField, query: impl Into<String>) {
        let query = query.into();
        let slot = self.slot_mut(field);
        if *slot != query {
            *slot = query;
            self.recompute();
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.recompute();
        }
    }

    pub fn query(&self, field: QueryField) -> &str {
        match field {
            QueryField::Name => &self.criteria.name,
            QueryField::Designation => &self.criteria.designation,
            QueryField::Skills => &self.criteria.skills,
        }
    }

    fn slot_mut(&mut self, field: QueryField) -> &mut String {
        match field {
            QueryField::Name => &mut self.criteria.name,
            QueryField::Designation => &mut self.criteria.designation,
            QueryField::Skills => &mut self.criteria.skills,
        }
    }

    /// Accept-key path: recompute even though nothing changed.
    pub fn commit(&mut self) {
        self.recompute();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn directory(&self) -> &[Employee] {
        &self.directory
    }

    /// Filtered employees in directory order.
    pub fn visible(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.visible.iter().map(|&index| &self.directory[index])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Bumped on every recomputation of the filtered view.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        self.visible = matching_indices(&self.directory, &self.criteria);
        self.revision += 1;
        debug!(
            revision = self.revision,
            visible = self.visible.len(),
            total = self.directory.len(),
            "filtered view recomputed"
        );
    }
}
