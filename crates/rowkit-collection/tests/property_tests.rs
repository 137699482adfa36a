// Properties relating the CSV and JSON renderings of the same collection
use proptest::prelude::*;
use rowkit_collection::Collection;
use rowkit_serializers::SerializerDefinition;
use serde_json::{Value, json};

const ATTRIBUTES: [&str; 3] = ["id", "name", "tags"];

fn collection(rows: &[(i64, String, Vec<String>)]) -> Collection<Value> {
	let items = rows
		.iter()
		.map(|(id, name, tags)| json!({"id": id, "name": name, "tags": tags}));
	Collection::new(items, SerializerDefinition::<Value>::standard("row", ATTRIBUTES)).unwrap()
}

fn rows_strategy() -> impl Strategy<Value = Vec<(i64, String, Vec<String>)>> {
	prop::collection::vec(
		(
			any::<i64>(),
			"[a-zA-Z0-9 ,\"]{0,12}",
			prop::collection::vec("[a-z]{0,4}", 0..4),
		),
		0..8,
	)
}

proptest! {
	#[test]
	fn csv_has_one_line_per_item_plus_header(rows in rows_strategy()) {
		let csv = collection(&rows).to_csv().unwrap();

		prop_assert!(csv.ends_with('\n'));
		prop_assert_eq!(csv.matches('\n').count(), rows.len() + 1);
	}

	#[test]
	fn json_has_one_object_per_item(rows in rows_strategy()) {
		let collection = collection(&rows);
		let parsed: Vec<serde_json::Map<String, Value>> =
			serde_json::from_str(&collection.to_json().unwrap()).unwrap();

		prop_assert_eq!(parsed.len(), rows.len());
		for object in &parsed {
			let keys: Vec<&str> = object.keys().map(String::as_str).collect();
			prop_assert_eq!(keys, ATTRIBUTES.to_vec());
		}
	}

	#[test]
	fn attributes_follow_item_presence(rows in rows_strategy()) {
		let collection = collection(&rows);
		if rows.is_empty() {
			prop_assert!(collection.attributes().is_empty());
		} else {
			prop_assert_eq!(collection.attributes(), ATTRIBUTES);
		}
	}

	#[test]
	fn csv_round_trips_against_json(rows in rows_strategy().prop_filter("non-empty", |r| !r.is_empty())) {
		let collection = collection(&rows);
		let json: Vec<Value> = serde_json::from_str(&collection.to_json().unwrap()).unwrap();
		let csv = collection.to_csv().unwrap();

		let mut reader = csv::ReaderBuilder::new()
			.has_headers(true)
			.from_reader(csv.as_bytes());
		let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
		prop_assert_eq!(headers, ATTRIBUTES.iter().map(|a| a.to_string()).collect::<Vec<_>>());

		let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
		prop_assert_eq!(records.len(), json.len());

		for (record, object) in records.iter().zip(&json) {
			prop_assert_eq!(&record[0], object["id"].to_string());
			prop_assert_eq!(&record[1], object["name"].as_str().unwrap());
			let tags: Vec<&str> = object["tags"]
				.as_array()
				.unwrap()
				.iter()
				.map(|tag| tag.as_str().unwrap())
				.collect();
			prop_assert_eq!(&record[2], tags.join(","));
		}
	}
}
