pub mod codec;
pub mod palette_loader;
pub mod script;

pub use codec::{decode_png, encode_png, read_png, write_png};
pub use palette_loader::{load_palette, parse_palette};
pub use script::{parse_line, ScriptRunner, Step};
