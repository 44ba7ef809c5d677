//! The recipe record as stored in `recipes.json`.
//!
//! Field names follow the JSON source (camelCase). Ingredient groups are
//! kept in the order they appear in the source object, since that order is
//! the display order on the detail page.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A named group of ingredients, e.g. "For the sauce".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientGroup {
    pub name: String,
    pub items: Vec<String>,
}

impl IngredientGroup {
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// A single read-only recipe record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub cooking_time: String,
    pub difficulty: String,
    pub servings: String,
    #[serde(default, deserialize_with = "deserialize_groups")]
    pub ingredients: Vec<IngredientGroup>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tips: Option<String>,
}

impl Recipe {
    /// Tips text, if present and non-empty.
    pub fn tips(&self) -> Option<&str> {
        self.tips.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Instruction steps paired with their 1-based step number.
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.as_str()))
    }
}

struct GroupsVisitor;

impl<'de> Visitor<'de> for GroupsVisitor {
    type Value = Vec<IngredientGroup>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping group names to ingredient lists")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Vec::new())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, items)) = map.next_entry::<String, Vec<String>>()? {
            groups.push(IngredientGroup { name, items });
        }
        Ok(groups)
    }
}

// Collects groups in source order.
fn deserialize_groups<'de, D>(deserializer: D) -> Result<Vec<IngredientGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(GroupsVisitor)
}
