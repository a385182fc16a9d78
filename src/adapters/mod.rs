//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements  | Connects to                 |
//! |---------------|-------------|-----------------------------|
//! | `config_file` | ConfigPort  | JSON file on disk           |
//! | `console`     | EventSink   | stdout (text or JSON lines) |
//! | `log_sink`    | EventSink   | `log` facade                |

pub mod config_file;
pub mod console;
pub mod log_sink;
