pub mod inquiries;
pub mod portfolio;
pub mod portfolio_images;
