pub use super::note::Entity as Note;
