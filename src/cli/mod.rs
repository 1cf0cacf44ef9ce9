pub mod brochure;
pub mod inquiries;
pub mod migrate;
pub mod server;
