//! Presentation of a [`DirectoryView`] as a sequence of indented lines.
//!
//! Both the terminal UI and the plain-text search output are built from
//! [`lines`]; only the styling differs.

use std::fmt::Write as _;

use crate::{
    model::{Employee, Project},
    view::{DirectoryView, LoadStatus},
};

pub const TITLE: &str = "Developers";
pub const NO_RESULTS: &str = "No developers found.";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const SKILL_SEPARATOR: &str = ", ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Title,
    /// Retrieval failure, shown apart from the result list.
    Status,
    NoResults,
    Employee,
    Section,
    Project,
    Field,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderLine {
    pub depth: usize,
    pub kind: LineKind,
    pub text: String,
}

impl RenderLine {
    fn new(depth: usize, kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            depth,
            kind,
            text: text.into(),
        }
    }

    fn field(depth: usize, label: &str, value: Option<&str>) -> Self {
        Self::new(
            depth,
            LineKind::Field,
            format!("{label}: {}", or_not_specified(value)),
        )
    }
}

fn or_not_specified(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// Everything the view shows, top to bottom.
pub fn lines(view: &DirectoryView) -> Vec<RenderLine> {
    let mut out = vec![RenderLine::new(0, LineKind::Title, TITLE)];
    if let LoadStatus::Failed(reason) = view.status() {
        out.push(RenderLine::new(
            0,
            LineKind::Status,
            format!("Directory unavailable: {reason}"),
        ));
    }
    out.extend(result_lines(view.visible()));
    out
}

/// Lines for the result list alone: the no-results message or one block per
/// employee.
pub fn result_lines<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Vec<RenderLine> {
    let mut out = Vec::new();
    for employee in employees {
        push_employee(&mut out, employee);
    }
    if out.is_empty() {
        out.push(RenderLine::new(0, LineKind::NoResults, NO_RESULTS));
    }
    out
}

fn push_employee(out: &mut Vec<RenderLine>, employee: &Employee) {
    out.push(RenderLine::new(
        0,
        LineKind::Employee,
        or_not_specified(Some(employee.name.as_str())),
    ));
    out.push(RenderLine::field(
        1,
        "Designation",
        employee.designation.as_deref(),
    ));
    out.push(RenderLine::new(
        1,
        LineKind::Field,
        format!("Skills: {}", employee.skills.join(SKILL_SEPARATOR)),
    ));
    if employee.projects.is_empty() {
        return;
    }
    out.push(RenderLine::new(1, LineKind::Section, "Projects"));
    for project in &employee.projects {
        push_project(out, project);
    }
}

fn push_project(out: &mut Vec<RenderLine>, project: &Project) {
    out.push(RenderLine::new(
        2,
        LineKind::Project,
        or_not_specified(Some(project.name.as_str())),
    ));
    out.push(RenderLine::field(
        3,
        "Description",
        project.description.as_deref(),
    ));
    if !project.team.is_empty() {
        out.push(RenderLine::new(3, LineKind::Section, "Team"));
        for member in &project.team {
            out.push(RenderLine::field(4, "Name", member.name.as_deref()));
            out.push(RenderLine::field(4, "Role", member.role.as_deref()));
        }
    }
    if !project.tasks.is_empty() {
        out.push(RenderLine::new(3, LineKind::Section, "Tasks"));
        for task in &project.tasks {
            let id = task.id.as_ref().map(ToString::to_string);
            out.push(RenderLine::field(4, "ID", id.as_deref()));
            out.push(RenderLine::field(4, "Name", task.name.as_deref()));
            out.push(RenderLine::field(4, "Status", task.status.as_deref()));
        }
    }
}

/// Plain-text rendering, two spaces per indentation level.
pub fn to_text(lines: &[RenderLine]) -> String {
    let mut text = String::new();
    for line in lines {
        let _ = writeln!(text, "{:indent$}{}", "", line.text, indent = line.depth * 2);
    }
    text
}
