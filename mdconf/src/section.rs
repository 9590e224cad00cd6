use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::MdConfError;
use crate::MdConfResult;

/// Key to value mapping of a single section, kept in insertion order.
pub type ValueMap = IndexMap<String, String>;

/// One node of an MDConf tree: the implicit root or a header-delimited block.
///
/// A section owns its children outright and never refers back to its parent,
/// so every navigation starts from an ancestor and walks down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
	/// Nesting depth. `0` for the root, the number of `#` characters for a
	/// parsed header, or `parent.level + 1` when created through
	/// [`Section::add_section_local`].
	level: usize,
	/// Header title. Empty for the root.
	name: String,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	values: ValueMap,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	children: Vec<Section>,
}

impl Section {
	/// Create the root section of a new tree.
	pub fn root() -> Self {
		Self::default()
	}

	/// Create a detached section at `level` with the header title `name`.
	pub fn new(level: usize, name: impl Into<String>) -> Self {
		Self {
			level,
			name: name.into(),
			values: ValueMap::new(),
			children: vec![],
		}
	}

	pub fn level(&self) -> usize {
		self.level
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// The values set directly on this section.
	pub fn values(&self) -> &ValueMap {
		&self.values
	}

	/// Direct children in document or creation order.
	pub fn children(&self) -> &[Section] {
		&self.children
	}

	/// Whether any key has been written to this section. Keys are never
	/// removed, so an empty map and an absent map are the same thing.
	pub fn has_values(&self) -> bool {
		!self.values.is_empty()
	}

	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	/// Look up `key` in this section's own values without descending.
	pub fn lookup_value_local(&self, key: &str) -> MdConfResult<&str> {
		self.values
			.get(key)
			.map(String::as_str)
			.ok_or_else(|| MdConfError::not_found(key))
	}

	/// Find the first direct child called `name`.
	pub fn lookup_section_local(&self, name: &str) -> MdConfResult<&Section> {
		self.children
			.iter()
			.find(|child| child.name == name)
			.ok_or_else(|| MdConfError::not_found(name))
	}

	/// Mutable counterpart of [`Section::lookup_section_local`].
	pub fn lookup_section_local_mut(&mut self, name: &str) -> MdConfResult<&mut Section> {
		self.children
			.iter_mut()
			.find(|child| child.name == name)
			.ok_or_else(|| MdConfError::not_found(name))
	}

	/// Set `key` on this section, overwriting any previous value. An
	/// overwritten key keeps its original position.
	pub fn set_value_local(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.values.insert(key.into(), value.into());
	}

	/// Return the direct child called `name`, creating it one level below this
	/// section when it does not exist yet.
	///
	/// An existing child is returned untouched, even if its level differs from
	/// `self.level + 1`.
	pub fn add_section_local(&mut self, name: impl Into<String>) -> &mut Section {
		let name = name.into();
		let index = if let Some(index) = self.children.iter().position(|child| child.name == name) {
			index
		} else {
			let level = self.level + 1;
			self.children.push(Section::new(level, name));
			self.children.len() - 1
		};

		&mut self.children[index]
	}

	/// Append an already built child, keeping whatever level it carries.
	pub(crate) fn push_child(&mut self, child: Section) {
		self.children.push(child);
	}
}
