pub mod wallet;

mod router;
pub use router::get_router;
