//! Item sequences supplied at runtime

use rowkit_serializers::{InvalidItems, Result};
use serde_json::Value;

/// Turn a JSON value into an item sequence.
///
/// Only arrays are item sequences. Scalars and `null` cannot be iterated;
/// an object iterates as key/value pairs, which do not map onto items.
pub fn json_items(value: Value) -> Result<Vec<Value>> {
	match value {
		Value::Array(items) => Ok(items),
		Value::Object(_) => Err(InvalidItems::NotMappable.into()),
		_ => Err(InvalidItems::NotIterable.into()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rowkit_serializers::SerializerError;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn test_array_is_accepted() {
		let items = json_items(json!([{"id": 1}, {"id": 2}])).unwrap();
		assert_eq!(items.len(), 2);
	}

	#[rstest]
	#[case(json!("blat"))]
	#[case(json!(1))]
	#[case(json!(true))]
	#[case(json!(null))]
	fn test_scalars_are_not_iterable(#[case] value: Value) {
		assert_eq!(
			json_items(value),
			Err(SerializerError::InvalidItems(InvalidItems::NotIterable))
		);
	}

	#[test]
	fn test_object_is_not_mappable() {
		assert_eq!(
			json_items(json!({"id": 1})),
			Err(SerializerError::InvalidItems(InvalidItems::NotMappable))
		);
	}
}
