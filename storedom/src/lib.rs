pub mod element;
pub mod event;

pub use element::{
    closest_with_class, collect_by_class, find_by_name, find_element, find_element_mut,
    find_where, insert_after, next_sibling, parent_id, remove_element, remove_siblings_where,
    remove_siblings_with_class, siblings_where, siblings_with_class, Content, Element,
};
pub use event::{apply_default, Event};
