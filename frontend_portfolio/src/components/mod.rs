pub mod container;
pub mod icons;
pub mod social_link;
