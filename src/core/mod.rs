/// Dashboard metrics built from the product table
pub mod dashboard;
/// Product listing, creation, and seeding
pub mod product;
