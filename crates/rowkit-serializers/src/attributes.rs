//! Ordered attribute-name lists declared by serializer variants

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The ordered list of attribute names a serializer extracts.
///
/// Order is significant: it fixes the key order of every rendered mapping,
/// the CSV column order and the JSON key order.
///
/// # Examples
///
/// ```
/// use rowkit_serializers::Attributes;
///
/// let mut attributes = Attributes::new();
/// attributes.declare(["id", "name"]);
/// assert_eq!(attributes, ["id", "name"]);
///
/// // Declaring nothing reads the list back unchanged
/// attributes.declare(Vec::<&str>::new());
/// assert_eq!(attributes, ["id", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<Cow<'static, str>>);

impl Attributes {
	/// Create an empty attribute list
	pub const fn new() -> Self {
		Self(Vec::new())
	}

	/// Create an attribute list from static names without allocating per name
	pub fn from_static(names: &'static [&'static str]) -> Self {
		Self(names.iter().map(|name| Cow::Borrowed(*name)).collect())
	}

	/// Declare the attribute names.
	///
	/// A non-empty `names` replaces the current list. An empty `names`
	/// leaves the list untouched. Either way the current list is returned.
	pub fn declare<I, N>(&mut self, names: I) -> &Self
	where
		I: IntoIterator<Item = N>,
		N: Into<Cow<'static, str>>,
	{
		let names: Vec<Cow<'static, str>> = names.into_iter().map(Into::into).collect();
		if !names.is_empty() {
			self.0 = names;
		}
		self
	}

	/// Iterate the attribute names in declaration order
	pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.0.iter().map(|name| name.as_ref())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Check whether `name` is declared
	pub fn contains(&self, name: &str) -> bool {
		self.iter().any(|declared| declared == name)
	}

	/// Owned copies of the names, in order
	pub fn to_vec(&self) -> Vec<String> {
		self.iter().map(str::to_string).collect()
	}
}

impl<N> FromIterator<N> for Attributes
where
	N: Into<Cow<'static, str>>,
{
	fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = &'a str;
	type IntoIter = std::iter::Map<
		std::slice::Iter<'a, Cow<'static, str>>,
		fn(&'a Cow<'static, str>) -> &'a str,
	>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter().map(as_name as fn(&'a Cow<'static, str>) -> &'a str)
	}
}

fn as_name<'a>(name: &'a Cow<'static, str>) -> &'a str {
	name
}

impl<const N: usize> PartialEq<[&str; N]> for Attributes {
	fn eq(&self, other: &[&str; N]) -> bool {
		self.iter().eq(other.iter().copied())
	}
}

impl PartialEq<[&str]> for Attributes {
	fn eq(&self, other: &[&str]) -> bool {
		self.iter().eq(other.iter().copied())
	}
}

impl PartialEq<Vec<&str>> for Attributes {
	fn eq(&self, other: &Vec<&str>) -> bool {
		self.iter().eq(other.iter().copied())
	}
}

impl PartialEq<Vec<String>> for Attributes {
	fn eq(&self, other: &Vec<String>) -> bool {
		self.iter().eq(other.iter().map(String::as_str))
	}
}
