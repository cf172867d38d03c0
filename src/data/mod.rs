//! Database repository layer.
//!
//! Repositories perform all queries against SeaORM entity models and return domain models
//! from `crate::model`, keeping the entity crate out of the service layer.

pub mod note;

#[cfg(test)]
mod test;
