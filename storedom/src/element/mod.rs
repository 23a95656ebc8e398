mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first descendant (or the root itself) whose `name` attribute matches.
pub fn find_by_name<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    if root.name() == Some(name) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_by_name(child, name))
}

/// Find the first element (depth-first, root included) accepted by `pred`.
pub fn find_where<'a>(root: &'a Element, pred: &impl Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_where(child, pred))
}

/// Nearest element carrying `class`, starting at `id` itself and walking up.
pub fn closest_with_class<'a>(root: &'a Element, id: &str, class: &str) -> Option<&'a Element> {
    let mut current = find_element(root, id)?;
    loop {
        if current.has_class(class) {
            return Some(current);
        }
        let parent = parent_id(root, &current.id)?;
        current = find_element(root, &parent)?;
    }
}

/// Detach the element `id` from the tree and return it.
/// The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let pid = parent_id(root, id)?;
    let parent = find_element_mut(root, &pid)?;

    let Content::Children(children) = &mut parent.content else {
        return None;
    };
    let index = children.iter().position(|child| child.id == id)?;
    log::trace!("[dom] removing {}", id);
    Some(children.remove(index))
}

/// Collect the IDs of every element carrying `class`, in document order.
pub fn collect_by_class(root: &Element, class: &str) -> Vec<String> {
    let mut result = Vec::new();
    collect_by_class_recursive(root, class, &mut result);
    result
}

fn collect_by_class_recursive(element: &Element, class: &str, result: &mut Vec<String>) {
    if element.has_class(class) {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_by_class_recursive(child, class, result);
    }
}

/// ID of the element that directly contains `id`.
pub fn parent_id(root: &Element, id: &str) -> Option<String> {
    for child in root.child_elements() {
        if child.id == id {
            return Some(root.id.clone());
        }
        if let Some(found) = parent_id(child, id) {
            return Some(found);
        }
    }
    None
}

/// Siblings of `id` (excluding itself) accepted by `pred`.
pub fn siblings_where<'a>(
    root: &'a Element,
    id: &str,
    pred: impl Fn(&Element) -> bool,
) -> Vec<&'a Element> {
    let Some(parent) = parent_id(root, id).and_then(|pid| find_element(root, &pid)) else {
        return Vec::new();
    };

    parent
        .child_elements()
        .iter()
        .filter(|sibling| sibling.id != id && pred(sibling))
        .collect()
}

/// Siblings of `id` (excluding itself) that carry `class`.
pub fn siblings_with_class<'a>(root: &'a Element, id: &str, class: &str) -> Vec<&'a Element> {
    siblings_where(root, id, |sibling| sibling.has_class(class))
}

/// The sibling directly after `id`, if any.
pub fn next_sibling<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let parent = parent_id(root, id).and_then(|pid| find_element(root, &pid))?;
    let children = parent.child_elements();
    let index = children.iter().position(|child| child.id == id)?;
    children.get(index + 1)
}

/// Remove every sibling of `id` accepted by `pred`.
/// Returns the number of elements removed.
pub fn remove_siblings_where(
    root: &mut Element,
    id: &str,
    pred: impl Fn(&Element) -> bool,
) -> usize {
    let Some(pid) = parent_id(root, id) else {
        return 0;
    };
    let Some(parent) = find_element_mut(root, &pid) else {
        return 0;
    };

    let Content::Children(children) = &mut parent.content else {
        return 0;
    };
    let before = children.len();
    children.retain(|sibling| sibling.id == id || !pred(sibling));
    let removed = before - children.len();
    if removed > 0 {
        log::trace!("[dom] removed {} sibling(s) of {}", removed, id);
    }
    removed
}

/// Remove every sibling of `id` that carries `class`.
/// Returns the number of elements removed.
pub fn remove_siblings_with_class(root: &mut Element, id: &str, class: &str) -> usize {
    remove_siblings_where(root, id, |sibling| sibling.has_class(class))
}

/// Insert `element` directly after the element `id` within its parent.
/// Returns false if `id` is the root or is not in the tree.
pub fn insert_after(root: &mut Element, id: &str, element: Element) -> bool {
    let Some(pid) = parent_id(root, id) else {
        return false;
    };
    let Some(parent) = find_element_mut(root, &pid) else {
        return false;
    };

    let Content::Children(children) = &mut parent.content else {
        return false;
    };
    match children.iter().position(|child| child.id == id) {
        Some(index) => {
            log::trace!("[dom] inserting {} after {}", element.id, id);
            children.insert(index + 1, element);
            true
        }
        None => false,
    }
}
