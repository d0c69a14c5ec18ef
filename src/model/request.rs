use serde::Deserialize;
use serde_json::{Map, Value};

/// Body shared by every endpoint that accepts JSON. Each endpoint reads the
/// fields it needs through one of the `get_*` accessors below.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientRequest {
    // New Course
    pub code: Option<String>,

    // New Course / New User
    pub name: Option<String>,

    // New User
    pub netid: Option<String>,

    // Add to Course
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,

    // New Assignment
    pub title: Option<String>,
    pub due_date: Option<i64>,
}

/// Empty strings count as missing
fn text(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Zero counts as missing
fn number(field: Option<i64>) -> Option<i64> {
    field.filter(|n| *n != 0)
}

impl ClientRequest {
    /// Parses a JSON object body. Arrays and scalars are rejected rather than
    /// being matched to fields by position.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(fields))
    }

    /// Returns (code, name)
    pub fn get_new_course(&self) -> Option<(String, String)> {
        Some((text(&self.code)?, text(&self.name)?))
    }

    /// Returns (name, netid)
    pub fn get_new_user(&self) -> Option<(String, String)> {
        Some((text(&self.name)?, text(&self.netid)?))
    }

    /// Returns (user_id, type)
    pub fn get_membership(&self) -> Option<(i64, String)> {
        Some((number(self.user_id)?, text(&self.user_type)?))
    }

    /// Returns (title, due_date)
    pub fn get_new_assignment(&self) -> Option<(String, i64)> {
        Some((text(&self.title)?, number(self.due_date)?))
    }
}
