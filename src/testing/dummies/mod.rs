mod headers;

pub use headers::header_xor;
