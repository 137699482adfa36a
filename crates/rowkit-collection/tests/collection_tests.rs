// Collection behaviour: validation, attributes, CSV and JSON output
use rowkit_collection::Collection;
use rowkit_serializers::{
	Attributes, InvalidItems, InvalidSerializer, MethodFieldRegistry, Serializer,
	SerializerDefinition, SerializerError, attribute_source,
};
use rstest::*;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum Id {
	One(i64),
	Many(Vec<i64>),
}

impl fmt::Display for Id {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Id::One(id) => write!(f, "{}", id),
			Id::Many(ids) => write!(f, "{:?}", ids),
		}
	}
}

// A class being serialized
#[derive(Debug, Clone, PartialEq)]
struct Serialized {
	id: Id,
}

attribute_source!(Serialized { id });

// A serializer class
struct ItemSerializer;

impl Serializer for ItemSerializer {
	type Object = Serialized;

	fn attributes() -> Attributes {
		Attributes::from_static(&["id", "computed"])
	}

	fn method_fields(fields: &mut MethodFieldRegistry<Serialized>) {
		fields.register_fn("computed", |item| json!(format!("computed - {}", item.id)));
	}
}

#[fixture]
fn items() -> Vec<Serialized> {
	(0..3).map(|i| Serialized { id: Id::One(i) }).collect()
}

#[fixture]
fn collection(items: Vec<Serialized>) -> Collection<Serialized> {
	Collection::new(items, ItemSerializer).unwrap()
}

#[rstest]
fn test_requires_serializer_attributes() {
	let invalid = SerializerDefinition::<Serialized>::new("invalid");
	let error = Collection::<Serialized>::new(Vec::new(), invalid).unwrap_err();

	assert_eq!(
		error,
		SerializerError::InvalidSerializer(InvalidSerializer::MissingAttributes)
	);
	assert_eq!(
		error.to_string(),
		"serializer must implement a class-level attributes accessor"
	);
}

#[rstest]
fn test_requires_serializer_render() {
	let invalid = SerializerDefinition::<Serialized>::new("invalid").with_attributes(["id"]);
	let error = Collection::<Serialized>::new(Vec::new(), invalid).unwrap_err();

	assert_eq!(
		error.to_string(),
		"serializer must implement an instance-level render method"
	);
}

#[rstest]
fn test_accepts_valid_serializer() {
	let valid = SerializerDefinition::<Serialized>::new("valid")
		.with_attributes(Vec::<&'static str>::new())
		.with_default_render();
	assert!(Collection::<Serialized>::new(Vec::new(), valid).is_ok());
}

#[rstest]
fn test_json_items_must_be_iterable() {
	let definition = SerializerDefinition::<Value>::standard("item", ["id"]);
	let mut collection = Collection::<Value>::new(Vec::new(), definition).unwrap();
	let error = collection.try_set_items(json!("blat")).unwrap_err();

	assert_eq!(error, SerializerError::InvalidItems(InvalidItems::NotIterable));
	assert_eq!(error.to_string(), "argument must support iteration");
}

#[rstest]
fn test_attributes_match_serializer(collection: Collection<Serialized>) {
	assert_eq!(collection.attributes(), ItemSerializer::attributes());
}

#[rstest]
fn test_attributes_empty_without_items() {
	let collection = Collection::<Serialized>::new(Vec::new(), ItemSerializer).unwrap();
	assert!(collection.attributes().is_empty());
}

#[rstest]
fn test_to_csv(collection: Collection<Serialized>) {
	let expected = "\
id,computed
0,computed - 0
1,computed - 1
2,computed - 2
";
	assert_eq!(collection.to_csv().unwrap(), expected);
}

#[rstest]
fn test_to_csv_encodes_complex_cells(mut collection: Collection<Serialized>) {
	collection.set_items(vec![
		Serialized {
			id: Id::Many(vec![1, 2, 3]),
		},
		Serialized {
			id: Id::Many(vec![4, 5, 6]),
		},
	]);

	let expected = "\
id,computed
\"1,2,3\",\"computed - [1, 2, 3]\"
\"4,5,6\",\"computed - [4, 5, 6]\"
";
	assert_eq!(collection.to_csv().unwrap(), expected);
}

#[rstest]
fn test_to_json(collection: Collection<Serialized>) {
	assert_eq!(
		collection.to_json().unwrap(),
		concat!(
			"[",
			r#"{"id":0,"computed":"computed - 0"},"#,
			r#"{"id":1,"computed":"computed - 1"},"#,
			r#"{"id":2,"computed":"computed - 2"}"#,
			"]"
		)
	);
}

#[rstest]
fn test_to_json_keeps_arrays(mut collection: Collection<Serialized>) {
	collection.set_items(vec![Serialized {
		id: Id::Many(vec![1, 2, 3]),
	}]);

	assert_eq!(
		collection.to_json().unwrap(),
		r#"[{"id":[1,2,3],"computed":"computed - [1, 2, 3]"}]"#
	);
}

#[rstest]
fn test_empty_collection_output() {
	let collection = Collection::<Serialized>::new(Vec::new(), ItemSerializer).unwrap();
	assert_eq!(collection.to_csv().unwrap(), "\n");
	assert_eq!(collection.to_json().unwrap(), "[]");
}

#[rstest]
fn test_single_column_null_matches_multi_column_cells() {
	let single = Collection::<Value>::new(
		vec![json!({"a": null}), json!({"a": 1})],
		SerializerDefinition::<Value>::standard("single", ["a"]),
	)
	.unwrap();
	assert_eq!(single.to_csv().unwrap(), "a\n\n1\n");
	assert_eq!(single.to_json().unwrap(), r#"[{"a":null},{"a":1}]"#);

	let pair = Collection::<Value>::new(
		vec![json!({"a": "", "b": null})],
		SerializerDefinition::<Value>::standard("pair", ["a", "b"]),
	)
	.unwrap();
	assert_eq!(pair.to_csv().unwrap(), "a,b\n,\n");
}

#[rstest]
fn test_unknown_attribute_aborts_render() {
	let definition = SerializerDefinition::<Value>::standard("item", ["id", "name"]);
	let collection = Collection::new(
		vec![json!({"id": 1, "name": "a"}), json!({"id": 2})],
		definition,
	)
	.unwrap();

	let expected = SerializerError::unknown_attribute("name");
	assert_eq!(collection.to_csv().unwrap_err(), expected);
	assert_eq!(collection.to_json().unwrap_err(), expected);
}

#[rstest]
fn test_renders_are_repeatable(collection: Collection<Serialized>) {
	assert_eq!(collection.to_csv().unwrap(), collection.to_csv().unwrap());
	assert_eq!(collection.to_json().unwrap(), collection.to_json().unwrap());
}
