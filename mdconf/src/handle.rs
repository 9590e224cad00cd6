//! Tree operations on a section that may be absent.
//!
//! Each function checks the handle before dispatching to the matching
//! [`Section`] method. Lookups on `None` fail with
//! [`MdConfError::NotFound`] and mutations fail with
//! [`MdConfError::EmptySubject`].
//!
//! ```rust
//! use mdconf::MdConfError;
//! use mdconf::handle;
//!
//! let root = mdconf::parse("# a\n+ k: v\n")?;
//! let missing = root.lookup_section(&["b"]).ok();
//! assert!(matches!(
//! 	handle::lookup_value(missing, &["k"]),
//! 	Err(MdConfError::NotFound(_))
//! ));
//! # Ok::<(), MdConfError>(())
//! ```

use crate::MdConfError;
use crate::MdConfResult;
use crate::Section;

/// `None` reports the requested path as missing.
fn subject<'a, S: AsRef<str>>(
	section: Option<&'a Section>,
	path: &[S],
) -> MdConfResult<&'a Section> {
	section.ok_or_else(|| MdConfError::not_found(describe_path(path)))
}

fn describe_path<S: AsRef<str>>(path: &[S]) -> String {
	if path.is_empty() {
		return "<absent section>".to_string();
	}

	path.iter()
		.map(AsRef::as_ref)
		.collect::<Vec<&str>>()
		.join(" > ")
}

fn subject_mut(section: Option<&mut Section>) -> MdConfResult<&mut Section> {
	section.ok_or(MdConfError::EmptySubject)
}

pub fn lookup_value<'a, S: AsRef<str>>(
	section: Option<&'a Section>,
	path: &[S],
) -> MdConfResult<&'a str> {
	subject(section, path)?.lookup_value(path)
}

pub fn lookup_value_local<'a>(section: Option<&'a Section>, key: &str) -> MdConfResult<&'a str> {
	subject(section, &[key])?.lookup_value_local(key)
}

pub fn lookup_section<'a, S: AsRef<str>>(
	section: Option<&'a Section>,
	path: &[S],
) -> MdConfResult<&'a Section> {
	subject(section, path)?.lookup_section(path)
}

pub fn lookup_section_local<'a>(
	section: Option<&'a Section>,
	name: &str,
) -> MdConfResult<&'a Section> {
	subject(section, &[name])?.lookup_section_local(name)
}

pub fn set_value<S: AsRef<str>>(
	section: Option<&mut Section>,
	path: &[S],
	value: impl Into<String>,
) -> MdConfResult<()> {
	subject_mut(section)?.set_value(path, value)
}

pub fn set_value_local(
	section: Option<&mut Section>,
	key: impl Into<String>,
	value: impl Into<String>,
) -> MdConfResult<()> {
	subject_mut(section)?.set_value_local(key, value);
	Ok(())
}

pub fn add_section<'a, S: AsRef<str>>(
	section: Option<&'a mut Section>,
	path: &[S],
	name: impl Into<String>,
) -> MdConfResult<&'a mut Section> {
	subject_mut(section)?.add_section(path, name)
}

pub fn add_section_local(
	section: Option<&mut Section>,
	name: impl Into<String>,
) -> MdConfResult<&mut Section> {
	Ok(subject_mut(section)?.add_section_local(name))
}
