pub mod brand;
pub mod content;
pub mod industry;
pub mod lead;
