//! Integration tests for reading, validating, and binding tables.

use std::io::{Seek, SeekFrom, Write};

use rowbind_core::{MarshalConfig, ReadOptions, Record, Table, TableError};
use tempfile::NamedTempFile;

#[derive(Debug, Default, PartialEq, Record)]
struct Person {
    #[csv_column_name = "name"]
    name: String,
    #[csv_column_name = "lastname"]
    last_name: String,
}

/// Each field has its own column.
#[derive(Debug, Default, PartialEq, Record)]
struct ValidModel {
    #[csv_column_name = "column1"]
    field1: String,
    #[csv_column_name = "column2"]
    field2: String,
    #[csv_column_name = "column3"]
    field3: String,
}

/// Same columns as `ValidModel`, declared in another order.
#[derive(Debug, Default, PartialEq, Record)]
struct ShuffledModel {
    #[csv_column_name = "column3"]
    field3: String,
    #[csv_column_name = "column1"]
    field1: String,
    #[csv_column_name = "column2"]
    field2: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Record)]
struct DuplicatedTagModel {
    #[csv_column_name = "column1"]
    field1: String,
    #[csv_column_name = "column2"]
    field2: String,
    #[csv_column_name = "column2"]
    field3: String,
}

#[derive(Debug, Default, Record)]
struct MissingTagModel {
    #[csv_column_name = "column1"]
    field1: String,
    field2: String,
    #[csv_column_name = "column3"]
    field3: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct MissingElementModel {
    #[csv_column_name = "column1"]
    field1: String,
    #[csv_column_name = "column2"]
    field2: String,
}

#[derive(Debug, Default, Record)]
struct KeywordModel {
    #[csv_column_name = "column1"]
    r#type: String,
    r#match: String,
}

const VALID_CSV: &str = "column1,column2,column3
value1,value2,value3
value1,value2,value3
";

const WIDE_HEADER_CSV: &str = "column1,column2,column3,invalidColumn
value1,value2,value3
";

const SHUFFLED_CSV: &str = "column2,column1,column3
value2,value1,value3
value2,value1,value3
";

fn strict() -> MarshalConfig {
    MarshalConfig::default()
}

fn lenient() -> MarshalConfig {
    MarshalConfig::new().with_skip_validation(true)
}

#[test]
fn test_marshal_people_in_order() {
    let input = "name,lastname\nLucas,Montenegro\nVinicius,Vieira\n";
    let people = Table::<Person>::new()
        .read(input.as_bytes())
        .marshal(&strict())
        .unwrap();

    insta::assert_debug_snapshot!(people, @r#"
    [
        Person {
            name: "Lucas",
            last_name: "Montenegro",
        },
        Person {
            name: "Vinicius",
            last_name: "Vieira",
        },
    ]
    "#);
}

#[test]
fn test_marshal_people_reordered_columns() {
    let people = Table::<Person>::new()
        .read("lastname,name\nMontenegro,Lucas\n".as_bytes())
        .marshal(&strict())
        .unwrap();

    assert_eq!(
        people,
        vec![Person {
            name: "Lucas".to_string(),
            last_name: "Montenegro".to_string(),
        }]
    );
}

#[test]
fn test_header_matching_is_case_insensitive() {
    let people = Table::<Person>::new()
        .read("LASTNAME,Name\nMontenegro,Lucas\n".as_bytes())
        .marshal(&strict())
        .unwrap();
    assert_eq!(people[0].name, "Lucas");
    assert_eq!(people[0].last_name, "Montenegro");
}

#[test]
fn test_declaration_order_does_not_matter() {
    let valid = Table::<ValidModel>::new()
        .read(SHUFFLED_CSV.as_bytes())
        .marshal(&strict())
        .unwrap();
    let shuffled = Table::<ShuffledModel>::new()
        .read(SHUFFLED_CSV.as_bytes())
        .marshal(&strict())
        .unwrap();

    assert_eq!(valid.len(), 2);
    for (a, b) in valid.iter().zip(&shuffled) {
        assert_eq!(a.field1, "value1");
        assert_eq!(a.field1, b.field1);
        assert_eq!(a.field2, b.field2);
        assert_eq!(a.field3, b.field3);
    }
}

#[test]
fn test_records_returns_header_and_rows() {
    let table = Table::<ValidModel>::new().read(VALID_CSV.as_bytes());
    let records = table.records().unwrap();
    assert_eq!(
        records,
        &[
            vec!["column1", "column2", "column3"],
            vec!["value1", "value2", "value3"],
            vec!["value1", "value2", "value3"],
        ]
    );
}

#[test]
fn test_every_accessor_uninitialized_before_read() {
    let table = Table::<ValidModel>::new();
    assert_eq!(table.validate(), Err(TableError::UninitializedRecords));
    assert!(!table.is_valid());
    assert_eq!(table.records(), Err(TableError::UninitializedRecords));
    assert_eq!(table.error(), Some(TableError::UninitializedRecords));
    assert_eq!(table.marshal(&strict()), Err(TableError::UninitializedRecords));
    assert_eq!(table.marshal(&lenient()), Err(TableError::UninitializedRecords));
}

#[test]
fn test_empty_input_stays_uninitialized() {
    let table = Table::<ValidModel>::new().read("".as_bytes());
    assert_eq!(table.error(), Some(TableError::UninitializedRecords));
}

#[test]
fn test_ragged_input_error_is_sticky() {
    let table = Table::<ValidModel>::new().read(WIDE_HEADER_CSV.as_bytes());
    let expected = TableError::UnequalLengths {
        line: 2,
        expected: 4,
        found: 3,
    };

    assert_eq!(table.validate(), Err(expected.clone()));
    assert_eq!(table.records(), Err(expected.clone()));
    assert_eq!(table.error(), Some(expected.clone()));
    assert_eq!(table.marshal(&lenient()), Err(expected));
    assert!(table.header().is_none());
}

#[test]
fn test_missing_tag() {
    let table = Table::<MissingTagModel>::new().read(VALID_CSV.as_bytes());
    assert_eq!(
        table.validate(),
        Err(TableError::MissingRequiredTag { field: "field2" })
    );
    assert!(table.marshal(&strict()).is_err());
}

#[test]
fn test_raw_identifier_field_names() {
    let tags: Vec<_> = KeywordModel::schema().tags().collect();
    assert_eq!(tags, vec![("type", Some("column1")), ("match", None)]);

    let table = Table::<KeywordModel>::new().read("column1,column2\na,b\n".as_bytes());
    assert_eq!(
        table.error(),
        Some(TableError::MissingRequiredTag { field: "match" })
    );

    let models = table.marshal(&lenient()).unwrap();
    assert_eq!(models[0].r#type, "a");
    assert_eq!(models[0].r#match, "");
}

#[test]
fn test_duplicated_tag() {
    let table = Table::<DuplicatedTagModel>::new().read(VALID_CSV.as_bytes());
    assert_eq!(
        table.error(),
        Some(TableError::DuplicatedTag {
            tag: "column2".to_string(),
        })
    );
}

#[test]
fn test_invalid_header_size() {
    let table = Table::<MissingElementModel>::new().read(VALID_CSV.as_bytes());
    assert_eq!(
        table.marshal(&strict()),
        Err(TableError::InvalidHeaderSize {
            expected: 2,
            found: 3,
        })
    );
}

#[test]
fn test_skip_validation_binds_narrow_model() {
    let models = Table::<MissingElementModel>::new()
        .read(VALID_CSV.as_bytes())
        .marshal(&lenient())
        .unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(
        models[0],
        MissingElementModel {
            field1: "value1".to_string(),
            field2: "value2".to_string(),
        }
    );
}

#[test]
fn test_skip_validation_leaves_unmatched_fields_default() {
    let models = Table::<ValidModel>::new()
        .read("column1,other\na,b\n".as_bytes())
        .marshal(&lenient())
        .unwrap();
    assert_eq!(
        models,
        vec![ValidModel {
            field1: "a".to_string(),
            ..ValidModel::default()
        }]
    );
}

#[test]
fn test_skip_validation_with_untagged_field() {
    let models = Table::<MissingTagModel>::new()
        .read(VALID_CSV.as_bytes())
        .marshal(&lenient())
        .unwrap();
    assert_eq!(models[0].field1, "value1");
    assert_eq!(models[0].field2, "");
    assert_eq!(models[0].field3, "value3");
}

#[test]
fn test_require_all_columns() {
    let input = "column1,column2,other\na,b,c\n";
    let table = Table::<ValidModel>::new().read(input.as_bytes());

    assert!(table.marshal(&strict()).is_ok());
    assert_eq!(
        table.marshal(&strict().with_require_all_columns(true)),
        Err(TableError::InvalidHeaderValues {
            missing: vec!["column3".to_string()],
        })
    );
    // The full validation used by the accessors stays lenient.
    assert_eq!(table.error(), None);
}

#[test]
fn test_stray_quote_is_bound_into_cell() {
    let input = "name,lastname\n\"Lucas\"x,Montenegro\n";
    let table = Table::<Person>::new().read(input.as_bytes());
    assert_eq!(table.error(), None);
    assert_eq!(
        table.marshal(&strict()),
        Ok(vec![Person {
            name: "Lucasx".to_string(),
            last_name: "Montenegro".to_string(),
        }])
    );
}

#[test]
fn test_read_with_semicolons() {
    let people = Table::<Person>::new()
        .read_with(
            "name; lastname\nLucas; Montenegro\n".as_bytes(),
            &ReadOptions::new().with_delimiter(b';').with_trim(true),
        )
        .marshal(&strict())
        .unwrap();
    assert_eq!(people[0].last_name, "Montenegro");
}

#[test]
fn test_read_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\u{feff}name,lastname\nLucas,Montenegro\n").unwrap();
    file.as_file_mut().seek(SeekFrom::Start(0)).unwrap();

    let table = Table::<Person>::new().read(file.as_file());
    assert_eq!(table.row_count(), 1);
    assert_eq!(
        table.header(),
        Some(&["name".to_string(), "lastname".to_string()][..])
    );
}

#[test]
fn test_derived_schema_is_cached_and_ordered() {
    let first = ShuffledModel::schema();
    let second = ShuffledModel::schema();
    assert!(std::ptr::eq(first, second));

    let tags: Vec<_> = first.tags().collect();
    assert_eq!(
        tags,
        vec![
            ("field3", Some("column3")),
            ("field1", Some("column1")),
            ("field2", Some("column2")),
        ]
    );
    assert_eq!(MissingTagModel::schema().field(1).unwrap().tag(), None);
}
