use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Wire shape of the directory document: `{ "employees": [...] }`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DirectoryDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub employees: Vec<Employee>,
}

impl DirectoryDocument {
    /// Decodes a response body. Only a JSON object is a directory document;
    /// arrays and scalars are rejected even when they would coerce.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("directory document must be a JSON object"));
        }
        serde_json::from_value(value)
    }
}

/// Directory documents carry numeric or string ids; anything else (floats,
/// booleans, objects) is kept verbatim rather than failing the document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EmployeeId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeId::Number(n) => write!(f, "{n}"),
            EmployeeId::Text(s) => f.write_str(s),
            EmployeeId::Other(v) => write!(f, "{v}"),
        }
    }
}

pub type TaskId = EmployeeId;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: Vec<TeamMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Task {
    #[serde(default)]
    pub id: Option<TaskId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(EmployeeId::Number(id)),
            name: name.into(),
            designation: None,
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }
}

/// `null` and a missing key both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
