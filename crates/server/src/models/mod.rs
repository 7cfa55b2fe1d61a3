//! Domain models.

pub mod admin_user;
pub mod product;
pub mod session;
pub mod setting;

pub use admin_user::AdminUser;
pub use product::{NewProduct, Product, ProductChanges, ProductUpdate, ValidProduct};
pub use session::{CurrentAdmin, session_keys};
pub use setting::Setting;
