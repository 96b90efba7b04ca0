//! Schema-less table rows.
//!
//! A [`Row`] is an `id` plus an ordered list of `(field, value)` pairs.
//! Column derivation is explicit: [`derive_columns`] reflects on the first
//! row only, so every row in one table render is expected to share a
//! schema — extra fields on later rows simply do not get a column.

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CellValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Flat text rendering, used for plain cells and edit inputs.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::List(items) => items.join(", "),
        }
    }

    /// Elements of a list cell; a non-empty text cell counts as one element.
    pub fn list_values(&self) -> Vec<String> {
        match self {
            CellValue::List(items) => items.clone(),
            CellValue::Text(s) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    /// Case-insensitive substring match; element-wise for lists.
    pub fn matches(&self, needle_lower: &str) -> bool {
        match self {
            CellValue::Text(s) => s.to_lowercase().contains(needle_lower),
            CellValue::Bool(b) => b.to_string().contains(needle_lower),
            CellValue::List(items) => items
                .iter()
                .any(|item| item.to_lowercase().contains(needle_lower)),
        }
    }
}

/// One table row: a unique id plus ordered field/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    fields: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style append, preserving insertion order.
    pub fn with(mut self, key: impl Into<String>, value: CellValue) -> Self {
        self.fields.push((key.into(), value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_text(&self, key: &str) -> String {
        self.get(key).map(CellValue::as_text).unwrap_or_default()
    }

    /// Replace an existing field or append a new one.
    pub fn set(&mut self, key: &str, value: CellValue) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// A human label for the row, for confirmation dialogs.
    pub fn display_name(&self) -> String {
        for key in ["name", "title", "email", "username"] {
            if let Some(value) = self.get(key) {
                let text = value.as_text();
                if !text.is_empty() {
                    return text;
                }
            }
        }
        format!("Record #{}", self.id)
    }
}

/// A rendered column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

/// Columns from the shape of the first row, excluding `id`.
pub fn derive_columns(rows: &[Row]) -> Vec<Column> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    first
        .keys()
        .filter(|key| *key != "id")
        .map(|key| Column {
            key: key.to_string(),
            label: column_label(key),
        })
        .collect()
}

/// `dueDate` → `Due Date`, `assigned_to` → `Assigned To`, `title` → `Title`.
pub fn column_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    let mut start_of_word = true;
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            label.push(' ');
            start_of_word = true;
        } else if ch.is_uppercase() {
            if !label.ends_with(' ') && !label.is_empty() {
                label.push(' ');
            }
            label.push(ch);
            start_of_word = false;
        } else if start_of_word {
            label.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            label.push(ch);
        }
    }
    label
}

/// Badge pill classes keyed by lowercase value, with a neutral default.
pub fn badge_color(value: &str) -> &'static str {
    match value.to_lowercase().as_str() {
        "active" | "completed" | "low" => "bg-green-100 text-green-800",
        "inactive" | "high" => "bg-red-100 text-red-800",
        "pending" | "medium" => "bg-yellow-100 text-yellow-800",
        "in progress" => "bg-blue-100 text-blue-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new("1")
            .with("title", CellValue::text("Open the store"))
            .with("dueDate", CellValue::text("2025-07-23T00:00:00Z"))
            .with("assigned_to", CellValue::list(["Asha", "Ravi"]))
    }

    #[test]
    fn columns_come_from_first_row_without_id() {
        let columns = derive_columns(&[sample_row()]);
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["title", "dueDate", "assigned_to"]);
        assert!(derive_columns(&[]).is_empty());
    }

    #[test]
    fn labels_prettify_camel_and_snake_case() {
        assert_eq!(column_label("title"), "Title");
        assert_eq!(column_label("dueDate"), "Due Date");
        assert_eq!(column_label("assigned_to"), "Assigned To");
    }

    #[test]
    fn list_values_match_element_wise() {
        let row = sample_row();
        assert!(row.get("assigned_to").unwrap().matches("rav"));
        assert!(!row.get("assigned_to").unwrap().matches("zoe"));
    }

    #[test]
    fn set_replaces_in_place_and_appends_new_fields() {
        let mut row = sample_row();
        row.set("title", CellValue::text("Close the store"));
        row.set("priority", CellValue::text("High"));
        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, ["title", "dueDate", "assigned_to", "priority"]);
        assert_eq!(row.get_text("title"), "Close the store");
    }

    #[test]
    fn display_name_prefers_known_fields() {
        assert_eq!(sample_row().display_name(), "Open the store");
        assert_eq!(Row::new("42").display_name(), "Record #42");
    }

    #[test]
    fn badge_colors_key_off_lowercase_value() {
        assert_eq!(badge_color("Completed"), badge_color("completed"));
        assert_eq!(badge_color("unknown"), "bg-gray-100 text-gray-800");
        assert_ne!(badge_color("High"), badge_color("Low"));
    }
}
