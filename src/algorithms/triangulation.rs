pub mod delaunay;
pub mod earclip;

pub use delaunay::Delaunay;
pub use earclip::EarClipper;
