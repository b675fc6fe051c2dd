//! Extract, Transform, Load abstractions
//!
//! Import is expressed as a [`Pipeline`]: the export file is the source,
//! each bundle entry is turned into an index request, and the requests are
//! replayed against Elasticsearch.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::Pipeline;
pub use transform::Transformer;
