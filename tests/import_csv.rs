use menu_csv_import::grouping::group_into_sections;
use menu_csv_import::import::{import_from_path, import_from_reader, import_from_str, ImportOptions};
use menu_csv_import::types::{ImportRow, ImportTier};
use menu_csv_import::ImportError;

fn import(text: &str) -> Result<menu_csv_import::types::MenuImport, ImportError> {
    import_from_str(text, &ImportOptions::default())
}

#[test]
fn import_from_path_happy_path() {
    let result = import_from_path("tests/fixtures/menu.csv", &ImportOptions::default()).unwrap();

    assert_eq!(result.tier, ImportTier::AutoDetect);
    assert_eq!(result.row_count(), 3);
    assert!(result.skipped.is_empty());
    assert_eq!(result.rows[2].item_name, "Margherita Pizza");
    assert_eq!(result.rows[2].allergens, Some("Gluten,Dairy".to_string()));
}

#[test]
fn end_to_end_example_yields_exact_records() {
    let input = "\
section_name,item_name,price,description,dietary_tags,allergens
Starters,Caesar Salad,8.99,\"Fresh romaine, with croutons\",Vegetarian,Dairy
Starters,Garlic Bread,5.50,,,
";
    let result = import(input).unwrap();

    assert_eq!(
        result.rows,
        vec![
            ImportRow {
                section_name: "Starters".to_string(),
                item_name: "Caesar Salad".to_string(),
                price: 8.99,
                description: Some("Fresh romaine, with croutons".to_string()),
                dietary_tags: Some("Vegetarian".to_string()),
                allergens: Some("Dairy".to_string()),
            },
            ImportRow {
                section_name: "Starters".to_string(),
                item_name: "Garlic Bread".to_string(),
                price: 5.50,
                description: None,
                dietary_tags: None,
                allergens: None,
            },
        ]
    );
}

#[test]
fn rows_come_back_in_input_order() {
    let input = "section_name,item_name,price\n\
                 Mains,Steak,19.00\n\
                 Starters,Soup,4.50\n\
                 Mains,Burger,11.00\n\
                 Desserts,Cake,6.00\n";
    let result = import(input).unwrap();

    let items: Vec<&str> = result.rows.iter().map(|r| r.item_name.as_str()).collect();
    assert_eq!(items, vec!["Steak", "Soup", "Burger", "Cake"]);
}

#[test]
fn reordered_and_unrecognized_columns_are_handled() {
    let input = "price,internal_sku,item_name,section_name\n4.50,X-99,Soup,Starters\n";
    let result = import(input).unwrap();

    assert_eq!(result.rows[0].section_name, "Starters");
    assert_eq!(result.rows[0].item_name, "Soup");
    assert_eq!(result.rows[0].price, 4.50);
}

#[test]
fn price_strings_normalize_to_the_same_value() {
    let input = "section_name,item_name,price\n\
                 A,One,$8.99\n\
                 A,Two, 8.99 \n\
                 A,Three,8.99\n";
    let result = import(input).unwrap();
    assert!(result.rows.iter().all(|r| r.price == 8.99));
}

#[test]
fn empty_optional_fields_normalize_to_none() {
    let input = "section_name,item_name,price,description,dietary_tags,allergens\n\
                 Starters,Bread,3.00, ,,\n";
    let result = import(input).unwrap();

    assert_eq!(result.rows[0].description, None);
    assert_eq!(result.rows[0].dietary_tags, None);
    assert_eq!(result.rows[0].allergens, None);
}

#[test]
fn header_only_file_is_empty() {
    let err = import("section_name,item_name,price\n").unwrap_err();
    assert!(matches!(err, ImportError::EmptyFile));
}

#[test]
fn missing_header_fails_fast_and_names_the_column() {
    let input = "section_name,item_name,cost\nStarters,Soup,4.50\n";
    let err = import(input).unwrap_err();
    match err {
        ImportError::MissingHeaders { columns } => assert_eq!(columns, vec!["price"]),
        other => panic!("expected MissingHeaders, got {other:?}"),
    }
}

#[test]
fn invalid_price_aborts_the_whole_import() {
    let input = "section_name,item_name,price\n\
                 Starters,Soup,4.50\n\
                 Starters,Bread,abc\n";
    let err = import(input).unwrap_err();
    match err {
        ImportError::InvalidPrice { row, raw } => {
            assert_eq!(row, 2);
            assert_eq!(raw, "abc");
        }
        other => panic!("expected InvalidPrice, got {other:?}"),
    }
}

#[test]
fn missing_required_field_reports_row_and_field() {
    let input = "section_name,item_name,price\nStarters,,4.50\n";
    let err = import(input).unwrap_err();
    assert!(
        matches!(err, ImportError::MissingField { row: 1, field: "item_name" }),
        "got {err:?}"
    );
}

#[test]
fn quoted_commas_survive_as_one_field() {
    let input = "section_name,item_name,price,description\n\
                 Starters,Caesar Salad,8.99,\"Fresh romaine, with croutons\"\n";
    let result = import(input).unwrap();
    assert_eq!(
        result.rows[0].description,
        Some("Fresh romaine, with croutons".to_string())
    );
}

#[test]
fn import_from_reader_matches_import_from_str() {
    let input = "section_name,item_name,price\nStarters,Soup,4.50\n";
    let from_reader = import_from_reader(input.as_bytes(), &ImportOptions::default()).unwrap();
    let from_str = import(input).unwrap();
    assert_eq!(from_reader, from_str);
}

#[test]
fn missing_file_is_an_io_error() {
    let err =
        import_from_path("tests/fixtures/does_not_exist.csv", &ImportOptions::default())
            .unwrap_err();
    assert!(matches!(err, ImportError::Io(_)));
}

#[test]
fn imported_rows_group_into_sections() {
    let result = import_from_path("tests/fixtures/menu.csv", &ImportOptions::default()).unwrap();

    let names: Vec<&str> = result.section_names().collect();
    assert_eq!(names, vec!["Starters", "Mains"]);

    let sections = group_into_sections(&result.rows);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].name, "Starters");
    assert_eq!(sections[0].items.len(), 2);
    assert_eq!(sections[1].name, "Mains");
    assert_eq!(sections[1].items[0].allergens, vec!["Gluten", "Dairy"]);
}

#[test]
fn import_rows_serialize_with_nulls_for_empty_optionals() {
    let input = "section_name,item_name,price\nStarters,Soup,4.50\n";
    let result = import(input).unwrap();

    let json = serde_json::to_value(&result.rows[0]).unwrap();
    assert_eq!(json["section_name"], "Starters");
    assert_eq!(json["price"], 4.5);
    assert!(json["description"].is_null());
}
