use pdf_writer::{Finish, Pdf, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// Flat list of bookmarks, one per certificate section
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark<S: ToString>(&mut self, page_index: usize, title: S) {
        self.entries.push(OutlineEntry {
            page_index,
            title: title.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the outline tree. Returns [None] when there are no bookmarks to write.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        writer: &mut Pdf,
    ) -> Option<pdf_writer::Ref> {
        if self.is_empty() {
            return None;
        }

        let outlines_id = refs.gen(RefType::Outlines);
        let ids: Vec<pdf_writer::Ref> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        outline.first(ids[0]);
        outline.last(ids[ids.len() - 1]);
        outline.count(ids.len() as i32);
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let Some(page_ref) = refs.get(RefType::Page(entry.page_index)) else {
                continue;
            };
            let mut item = writer.outline_item(ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(ids[i - 1]);
            }
            if i + 1 < ids.len() {
                item.next(ids[i + 1]);
            }
            item.dest().page(page_ref).fit();
        }

        Some(outlines_id)
    }
}
