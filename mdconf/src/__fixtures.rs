use std::io;
use std::io::Read;

use crate::Section;

/// A document exercising root values, nested sections, an empty section and
/// empty keys and values.
pub(crate) const NESTED_DOCUMENT: &str = "
+ key1: value1
+ key2: value2

# subsection1
+ key1.1: value1.1
+ key1.2: value1.2

## subsection1.1
+ key1.1.1: value1.1.1

# subsection2
//empty section
# subsection3
+ key3.1: value3.1
";

pub(crate) const EMPTY_VALUES_DOCUMENT: &str = "
+ key1: value1
+ key2: value2

# subsection1
+ key1.1: value1.1
+ key1.2: value1.2

## subsection1.1
+ key1.1.1: 

# subsection2
//empty section
# subsection3
+ key3.1:
+ : dsdf
";

/// `a > b > c`, each holding `k` with a value naming the section.
pub(crate) fn abc_tree() -> Section {
	let mut root = Section::root();
	let a = root.add_section_local("a");
	a.set_value_local("k", "in a");
	let b = a.add_section_local("b");
	b.set_value_local("k", "in b");
	let c = b.add_section_local("c");
	c.set_value_local("k", "in c");

	root
}

/// A tree whose values need escaping or continuation lines to survive a
/// round trip.
pub(crate) fn tricky_tree() -> Section {
	let mut root = Section::root();
	root.set_value_local("empty", "");
	root.set_value_local("padded", "  both ends  ");
	root.set_value_local("space", " ");
	root.set_value_local("backslash", r"C:\temp\");
	let server = root.add_section_local("server");
	server.set_value_local("banner", "first\n  second  \n\nfourth\\");
	server.set_value_local("colon", "a: b # c");
	server
		.add_section_local("tls")
		.set_value_local("trailing", "tab\t");

	root
}

/// Yields `data` and then fails every subsequent read.
pub(crate) struct FailingReader {
	data: &'static [u8],
	position: usize,
}

impl FailingReader {
	pub(crate) fn new(data: &'static [u8]) -> Self {
		Self { data, position: 0 }
	}
}

impl Read for FailingReader {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let remaining = &self.data[self.position..];

		if remaining.is_empty() {
			return Err(io::Error::other("connection reset"));
		}

		let count = remaining.len().min(buf.len());
		buf[..count].copy_from_slice(&remaining[..count]);
		self.position += count;

		Ok(count)
	}
}
