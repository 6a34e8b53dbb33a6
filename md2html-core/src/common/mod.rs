//! Helpers shared by the markdown parser and the HTML serializer.

pub mod escape;
