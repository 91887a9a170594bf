use crate::pdf_utils;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashSet;
use tracing::debug;

/// Finds the image XObjects referenced by each page of a document.
///
/// For every page the resource dictionary is located (inheriting from
/// ancestor `/Pages` nodes when the page has none of its own), then its
/// `/XObject` entries are walked in dictionary order. All image streams of a
/// resource level are collected first, then form XObjects are descended into
/// (when enabled) in the same order. Each image is listed at most once per
/// page.
pub struct ImageDiscovery<'a> {
    document: &'a Document,
    include_forms: bool,
}

impl<'a> ImageDiscovery<'a> {
    pub fn new(document: &'a Document, include_forms: bool) -> Self {
        Self {
            document,
            include_forms,
        }
    }

    /// Collect `(page_number, image_id)` pairs for the whole document,
    /// ordered by page and then by position within the page.
    pub fn collect_page_images(&self) -> Vec<(u32, ObjectId)> {
        let mut out = Vec::new();

        for (page_number, page_id) in self.document.get_pages() {
            let ids = self.images_on_page(page_id);
            debug!(page = page_number, images = ids.len(), "scanned page");
            out.extend(ids.into_iter().map(|id| (page_number, id)));
        }

        out
    }

    /// Image ids referenced from a single page.
    pub fn images_on_page(&self, page_id: ObjectId) -> Vec<ObjectId> {
        let mut found = Vec::new();
        let mut seen = HashSet::new();
        let mut visited_forms = HashSet::new();

        if let Some(resources) = self.page_resources(page_id) {
            self.collect_from_resources(resources, &mut found, &mut seen, &mut visited_forms);
        }

        found
    }

    /// Locate the resource dictionary in effect for a page.
    ///
    /// `/Resources` is an inheritable page attribute, so the `/Parent` chain
    /// is followed until one is found.
    fn page_resources(&self, page_id: ObjectId) -> Option<&'a Dictionary> {
        let mut node = self.document.get_dictionary(page_id).ok()?;
        let mut visited = HashSet::from([page_id]);

        loop {
            if let Ok(value) = node.get(b"Resources") {
                return pdf_utils::resolve_dict(self.document, value);
            }

            let parent_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
            if !visited.insert(parent_id) {
                return None;
            }
            node = self.document.get_dictionary(parent_id).ok()?;
        }
    }

    fn collect_from_resources(
        &self,
        resources: &'a Dictionary,
        found: &mut Vec<ObjectId>,
        seen: &mut HashSet<ObjectId>,
        visited_forms: &mut HashSet<ObjectId>,
    ) {
        let xobjects = match resources
            .get(b"XObject")
            .ok()
            .and_then(|v| pdf_utils::resolve_dict(self.document, v))
        {
            Some(dict) => dict,
            None => return,
        };

        // Only indirect streams have a cross-reference id.
        let streams: Vec<(ObjectId, &'a Stream)> = xobjects
            .iter()
            .filter_map(|(_name, value)| {
                let id = value.as_reference().ok()?;
                let stream = self.document.get_object(id).and_then(Object::as_stream).ok()?;
                Some((id, stream))
            })
            .collect();

        // Every image at this level comes before anything nested in a form.
        for (id, stream) in &streams {
            if pdf_utils::has_subtype(&stream.dict, b"Image") && seen.insert(*id) {
                found.push(*id);
            }
        }

        if !self.include_forms {
            return;
        }

        for (id, stream) in streams {
            if !pdf_utils::has_subtype(&stream.dict, b"Form") || !visited_forms.insert(id) {
                continue;
            }
            if let Some(form_resources) = stream
                .dict
                .get(b"Resources")
                .ok()
                .and_then(|v| pdf_utils::resolve_dict(self.document, v))
            {
                self.collect_from_resources(form_resources, found, seen, visited_forms);
            }
        }
    }
}
