//! Error types shared by the rowkit crates

/// Result alias used throughout rowkit
pub type Result<T> = std::result::Result<T, SerializerError>;

/// Reasons a serializer is rejected when a collection is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSerializer {
	/// The serializer does not declare an attribute list
	#[error("serializer must implement a class-level attributes accessor")]
	MissingAttributes,
	/// The serializer has no way to render an instance
	#[error("serializer must implement an instance-level render method")]
	MissingRender,
}

/// Reasons a value is rejected as a collection's item sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItems {
	/// The value cannot be iterated over
	#[error("argument must support iteration")]
	NotIterable,
	/// The value iterates, but not as a sequence of items
	#[error("argument must support transformation/mapping")]
	NotMappable,
}

/// Errors that can occur while serializing objects
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SerializerError {
	/// Neither the serializer nor the source object provides the attribute
	#[error("Unknown attribute :{name}")]
	UnknownAttribute { name: String },

	#[error(transparent)]
	InvalidSerializer(#[from] InvalidSerializer),

	#[error(transparent)]
	InvalidItems(#[from] InvalidItems),

	/// A value could not be converted into its serialized form
	#[error("Serde error: {message}")]
	Serde { message: String },

	/// An encoder failed while producing output text
	#[error("{format} encoding error: {message}")]
	Encoding {
		format: &'static str,
		message: String,
	},
}

impl SerializerError {
	/// Create an unknown attribute error
	pub fn unknown_attribute(name: impl Into<String>) -> Self {
		SerializerError::UnknownAttribute { name: name.into() }
	}

	/// Create an encoding error for the given output format
	pub fn encoding(format: &'static str, message: impl ToString) -> Self {
		SerializerError::Encoding {
			format,
			message: message.to_string(),
		}
	}

	/// Returns the attribute name if this is an unknown attribute error
	pub fn attribute_name(&self) -> Option<&str> {
		match self {
			SerializerError::UnknownAttribute { name } => Some(name),
			_ => None,
		}
	}

	/// Check if this error was raised by serializer validation
	pub fn is_invalid_serializer(&self) -> bool {
		matches!(self, SerializerError::InvalidSerializer(_))
	}

	/// Check if this error was raised by item validation
	pub fn is_invalid_items(&self) -> bool {
		matches!(self, SerializerError::InvalidItems(_))
	}
}

impl From<serde_json::Error> for SerializerError {
	fn from(err: serde_json::Error) -> Self {
		SerializerError::Serde {
			message: err.to_string(),
		}
	}
}
