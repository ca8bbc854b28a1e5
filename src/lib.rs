mod converter;
mod error;
mod importer;
mod model;
mod serializer;
mod util;

pub use converter::*;
pub use error::*;
pub use importer::*;
pub use model::chart::*;
pub use model::config::*;
pub use model::note::*;
pub use serializer::*;
pub use util::*;
