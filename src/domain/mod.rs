pub mod facet;
pub mod slug;
pub mod track;
