pub mod payload;
pub mod repository;

pub use repository::DummyJsonRecipeRepository;
