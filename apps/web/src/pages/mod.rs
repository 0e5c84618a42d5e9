mod docs;
mod landing;

pub use docs::DocsPage;
pub use landing::LandingPage;
