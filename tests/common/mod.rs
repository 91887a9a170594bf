// PDF builders shared by the integration test binaries.
//
// PDFs are assembled in memory with lopdf so no binary fixtures are needed.
// Image streams carry short ASCII payloads that stand in for encoded image
// data; the extractor never decodes them.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use question_assets::{PdfImageExtractor, PNG_DATA_URI_PREFIX};

pub fn image_stream(payload: &[u8], filter: Option<&str>) -> Stream {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => 1,
        "Height" => 1,
        "ColorSpace" => "DeviceGray",
        "BitsPerComponent" => 8,
    };
    if let Some(filter) = filter {
        dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
    }
    Stream::new(dict, payload.to_vec())
}

pub fn rect(width: i64, height: i64) -> Object {
    Object::Array(vec![0i64.into(), 0i64.into(), width.into(), height.into()])
}

pub fn add_image(doc: &mut Document, payload: &str) -> ObjectId {
    doc.add_object(image_stream(payload.as_bytes(), Some("DCTDecode")))
}

pub fn xobjects(ids: &[ObjectId]) -> Dictionary {
    let mut dict = Dictionary::new();
    for (i, id) in ids.iter().enumerate() {
        dict.set(format!("Im{i}"), *id);
    }
    dict
}

/// Attach `pages` (already-built page dictionaries) under a single page tree
/// node and return the serialised document.
pub fn finish(mut doc: Document, pages_id: ObjectId, pages: Vec<Dictionary>, tree_extra: Dictionary) -> Vec<u8> {
    let mut kids: Vec<Object> = Vec::new();
    for mut page in pages {
        page.set("Type", "Page");
        page.set("Parent", pages_id);
        page.set("MediaBox", rect(595, 842));
        kids.push(doc.add_object(page).into());
    }

    let mut tree = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
    };
    for (key, value) in tree_extra.iter() {
        tree.set(key.clone(), value.clone());
    }
    doc.objects.insert(pages_id, Object::Dictionary(tree));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// One page per entry; each page lists its image payloads in order.
pub fn pdf_with_images(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page_dicts = Vec::new();
    for payloads in pages {
        let ids: Vec<ObjectId> = payloads.iter().map(|p| add_image(&mut doc, p)).collect();
        page_dicts.push(dictionary! {
            "Resources" => dictionary! { "XObject" => xobjects(&ids) },
        });
    }

    finish(doc, pages_id, page_dicts, Dictionary::new())
}

pub fn decode_uri(uri: &str) -> String {
    let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).expect("PNG data URI prefix");
    String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
}

pub fn payloads(extractor: &PdfImageExtractor) -> Vec<String> {
    extractor
        .extract_data_uris()
        .unwrap()
        .iter()
        .map(|uri| decode_uri(uri))
        .collect()
}

pub fn pdf_with_form_image() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let direct = add_image(&mut doc, "direct");
    let nested = add_image(&mut doc, "nested");

    let form = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => rect(10, 10),
            "Resources" => dictionary! { "XObject" => xobjects(&[nested]) },
        },
        b"/Im0 Do".to_vec(),
    ));

    let mut page_xobjects = Dictionary::new();
    page_xobjects.set("Fm0", form);
    page_xobjects.set("Im9", direct);
    let pages = vec![dictionary! {
        "Resources" => dictionary! { "XObject" => page_xobjects },
    }];
    finish(doc, pages_id, pages, Dictionary::new())
}
