use serde::Deserialize;
use serde::Serialize;

/// What the parser does when the underlying reader fails part way through.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ReadErrorPolicy {
	/// Stop and return [`MdConfError::Io`](crate::MdConfError::Io).
	#[default]
	Fail,
	/// Treat the failure like the end of the input and keep everything parsed
	/// so far. A warning is logged so the truncation is not silent.
	Truncate,
}

/// Options controlling how MDConf text is parsed.
///
/// Applications that keep their own settings file can embed this table:
///
/// ```toml
/// on_read_error = "truncate"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseOptions {
	/// Behaviour on a read failure other than end of input. Defaults to
	/// [`ReadErrorPolicy::Fail`].
	#[serde(default)]
	pub on_read_error: ReadErrorPolicy,
}

impl ParseOptions {
	/// Options that reproduce the lenient behaviour of truncating on a read
	/// failure.
	pub fn lenient() -> Self {
		Self {
			on_read_error: ReadErrorPolicy::Truncate,
		}
	}

	pub fn with_read_error_policy(mut self, policy: ReadErrorPolicy) -> Self {
		self.on_read_error = policy;
		self
	}
}
