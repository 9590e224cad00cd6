//! Path based lookup and mutation.
//!
//! A path is a sequence of names. For key operations every element but the
//! last names a subsection to descend into and the last element is the key.
//! For section operations every element names a subsection. Names are
//! compared exactly and the first matching sibling wins.

use crate::MdConfError;
use crate::MdConfResult;
use crate::Section;

impl Section {
	/// Look up the value at `path`.
	///
	/// ```rust
	/// use mdconf::parse;
	///
	/// let root = parse("# server\n+ port: 8080\n").unwrap();
	/// assert_eq!(root.lookup_value(&["server", "port"]).unwrap(), "8080");
	/// ```
	pub fn lookup_value<S: AsRef<str>>(&self, path: &[S]) -> MdConfResult<&str> {
		let Some((key, sections)) = path.split_last() else {
			return Err(MdConfError::EmptyKey);
		};

		self.lookup_section(sections)?
			.lookup_value_local(key.as_ref())
	}

	/// Descend `path` as subsection names. An empty path returns `self`.
	pub fn lookup_section<S: AsRef<str>>(&self, path: &[S]) -> MdConfResult<&Section> {
		path.iter()
			.try_fold(self, |section, name| section.lookup_section_local(name.as_ref()))
	}

	/// Mutable counterpart of [`Section::lookup_section`].
	pub fn lookup_section_mut<S: AsRef<str>>(&mut self, path: &[S]) -> MdConfResult<&mut Section> {
		let mut section = self;

		for name in path {
			section = section.lookup_section_local_mut(name.as_ref())?;
		}

		Ok(section)
	}

	/// Set the value at `path`. Intermediate sections must already exist; they
	/// are never created here.
	pub fn set_value<S: AsRef<str>>(
		&mut self,
		path: &[S],
		value: impl Into<String>,
	) -> MdConfResult<()> {
		let Some((key, sections)) = path.split_last() else {
			return Err(MdConfError::EmptyKey);
		};

		self.lookup_section_mut(sections)?
			.set_value_local(key.as_ref(), value);

		Ok(())
	}

	/// Create or get the child `name` of the section found at `path`.
	///
	/// ```rust
	/// use mdconf::Section;
	///
	/// let mut root = Section::root();
	/// root.add_section(&[] as &[&str], "server")?;
	/// let tls = root.add_section(&["server"], "tls")?;
	/// assert_eq!(tls.level(), 2);
	/// # Ok::<(), mdconf::MdConfError>(())
	/// ```
	pub fn add_section<S: AsRef<str>>(
		&mut self,
		path: &[S],
		name: impl Into<String>,
	) -> MdConfResult<&mut Section> {
		Ok(self.lookup_section_mut(path)?.add_section_local(name))
	}
}
