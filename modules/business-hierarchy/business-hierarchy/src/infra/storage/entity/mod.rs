pub mod brand;
pub mod collaborator;
pub mod economic_group;
pub mod unit;
