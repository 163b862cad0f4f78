//! Downstream section grouping.
//!
//! The importer itself never constructs a section; it only guarantees that
//! rows belonging together carry the same `section_name` text. This module is
//! the pure grouping step a menu-creation caller runs on the importer's
//! output before persisting anything.

use serde::{Deserialize, Serialize};

use crate::types::ImportRow;

/// One menu item in a grouped section draft.
///
/// Unlike [`ImportRow`], tag fields are split out of their comma-separated
/// free text into lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item display name.
    pub name: String,
    /// Item price.
    pub price: f64,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Dietary tags, trimmed; empty when the row had none.
    pub dietary_tags: Vec<String>,
    /// Allergens, trimmed; empty when the row had none.
    pub allergens: Vec<String>,
}

/// A grouped menu section draft: name plus items in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Section display name, exactly as it appeared in the file.
    pub name: String,
    /// Items belonging to this section, in input order.
    pub items: Vec<MenuItem>,
}

/// Cluster rows into sections by exact `section_name` equality
/// (case-sensitive).
///
/// Sections appear in first-seen order of their distinct names; items within a
/// section keep input order. Both orderings are display-significant.
pub fn group_into_sections(rows: &[ImportRow]) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Vec::new();

    for row in rows {
        let item = MenuItem {
            name: row.item_name.clone(),
            price: row.price,
            description: row.description.clone(),
            dietary_tags: split_tags(row.dietary_tags.as_deref()),
            allergens: split_tags(row.allergens.as_deref()),
        };

        match sections.iter_mut().find(|s| s.name == row.section_name) {
            Some(section) => section.items.push(item),
            None => sections.push(MenuSection {
                name: row.section_name.clone(),
                items: vec![item],
            }),
        }
    }

    sections
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| {
        text.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{group_into_sections, split_tags};
    use crate::types::ImportRow;

    fn row(section: &str, item: &str, price: f64) -> ImportRow {
        ImportRow {
            section_name: section.to_string(),
            item_name: item.to_string(),
            price,
            description: None,
            dietary_tags: None,
            allergens: None,
        }
    }

    #[test]
    fn groups_by_exact_name_in_first_seen_order() {
        let rows = vec![
            row("Starters", "Soup", 4.50),
            row("Mains", "Steak", 19.00),
            row("Starters", "Bread", 3.00),
            // Case differs, so this is a distinct section.
            row("starters", "Olives", 2.50),
        ];
        let sections = group_into_sections(&rows);

        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Starters", "Mains", "starters"]);

        let starter_items: Vec<&str> =
            sections[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(starter_items, vec!["Soup", "Bread"]);
    }

    #[test]
    fn splits_comma_separated_tags() {
        assert_eq!(
            split_tags(Some("Vegetarian, Gluten Free ,Vegan")),
            vec!["Vegetarian", "Gluten Free", "Vegan"]
        );
        assert_eq!(split_tags(Some(" , ")), Vec::<String>::new());
        assert_eq!(split_tags(None), Vec::<String>::new());
    }

    #[test]
    fn tags_flow_through_grouping() {
        let mut r = row("Starters", "Caesar Salad", 8.99);
        r.dietary_tags = Some("Vegetarian".to_string());
        r.allergens = Some("Dairy,Gluten".to_string());

        let sections = group_into_sections(&[r]);
        assert_eq!(sections[0].items[0].dietary_tags, vec!["Vegetarian"]);
        assert_eq!(sections[0].items[0].allergens, vec!["Dairy", "Gluten"]);
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(group_into_sections(&[]).is_empty());
    }
}
