use serde::{Deserialize, Deserializer};

/// One recipe record as returned by the search service.
///
/// The wire format is a JSON object whose keys are the index's original
/// column headers, hence the serde renames. Fields the index leaves blank
/// arrive as empty strings; a missing field deserializes to its default.
/// Keys this client does not consume are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Recipe", default)]
    pub title: String,
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Months", default)]
    pub months: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Cover Color (Border)", default)]
    pub cover_color: String,
    /// Optional link to notes. The index stores blanks as empty strings;
    /// both absent and empty normalize to `None`.
    #[serde(rename = "Notes", default, deserialize_with = "empty_as_none")]
    pub notes: Option<String>,
}

impl Recipe {
    /// Issue identifier line for display: `Date (Months, Year)`.
    pub fn issue_line(&self) -> String {
        format!("{} ({}, {})", self.date, self.months, self.year)
    }
}

/// Deserialize a string field where the empty string means "absent".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_record_deserializes() {
        let json = r#"{
            "Recipe": "Apple Pie",
            "Date": "1/1",
            "Months": "Jan",
            "Year": "2020",
            "Category": "Desserts",
            "Cover Color (Border)": "Red",
            "Notes": "https://example.com/apple-pie"
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Apple Pie");
        assert_eq!(recipe.date, "1/1");
        assert_eq!(recipe.months, "Jan");
        assert_eq!(recipe.year, "2020");
        assert_eq!(recipe.category, "Desserts");
        assert_eq!(recipe.cover_color, "Red");
        assert_eq!(
            recipe.notes.as_deref(),
            Some("https://example.com/apple-pie")
        );
    }

    #[test]
    fn empty_notes_becomes_none() {
        let json = r#"{"Recipe": "Apple Pie", "Notes": ""}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.notes, None);
    }

    #[test]
    fn missing_fields_default() {
        let json = r#"{"Recipe": "Apple Pie"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Apple Pie");
        assert_eq!(recipe.category, "");
        assert_eq!(recipe.cover_color, "");
        assert_eq!(recipe.notes, None);
    }

    #[test]
    fn unknown_fields_ignored() {
        let json = r#"{"Recipe": "Apple Pie", "Page": "12", "Rating": "5"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Apple Pie");
    }

    #[test]
    fn whitespace_notes_is_preserved() {
        // Only the empty string means absent; the service does not trim.
        let json = r#"{"Recipe": "Apple Pie", "Notes": " "}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.notes.as_deref(), Some(" "));
    }

    #[test]
    fn issue_line_format() {
        let recipe = Recipe {
            title: "Apple Pie".into(),
            date: "1/1".into(),
            months: "Jan".into(),
            year: "2020".into(),
            category: "Desserts".into(),
            cover_color: "Red".into(),
            notes: None,
        };
        assert_eq!(recipe.issue_line(), "1/1 (Jan, 2020)");
    }

    #[test]
    fn array_of_records_deserializes() {
        let json = r#"[
            {"Recipe": "Apple Pie", "Category": "Desserts"},
            {"Recipe": "Pot Pie", "Category": "Mains"}
        ]"#;
        let recipes: Vec<Recipe> = serde_json::from_str(json).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[1].title, "Pot Pie");
    }
}
