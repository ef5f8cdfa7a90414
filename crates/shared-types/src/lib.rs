pub mod customer;
pub mod types;

pub use customer::{AdminVat, Address, Brand, ContactDetail, ContactType, Person, Proposition};
pub use types::{Coords, Item, Line, Page, PageRef, TemplateDoc};
