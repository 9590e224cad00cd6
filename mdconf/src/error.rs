use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
#[allow(variant_size_differences)]
pub enum MdConfError {
	#[error("failed to read configuration input: {0}")]
	#[diagnostic(
		code(mdconf::io_error),
		help("the input was truncated; use `ReadErrorPolicy::Truncate` to keep what was read")
	)]
	Io(#[from] std::io::Error),

	#[error("no section or key named `{0}`")]
	#[diagnostic(code(mdconf::not_found))]
	NotFound(String),

	#[error("key path is empty")]
	#[diagnostic(
		code(mdconf::empty_key),
		help("the last element of the path names the key to look up or set")
	)]
	EmptyKey,

	#[error("subject section is empty")]
	#[diagnostic(code(mdconf::empty_subject))]
	EmptySubject,
}

impl MdConfError {
	pub(crate) fn not_found(name: impl Into<String>) -> Self {
		Self::NotFound(name.into())
	}
}

pub type MdConfResult<T> = Result<T, MdConfError>;
