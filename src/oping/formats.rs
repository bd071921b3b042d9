//! Output formats for parsed forests
//!
//!     Formats are registered by name in a [FormatRegistry]. The defaults are:
//!         - `treeviz`: one line per node, for reading in a terminal;
//!         - `json`: pretty printed JSON;
//!         - `yaml`: YAML.

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
