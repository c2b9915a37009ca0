#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;
use wipecert::{HpaStatus, WipeSessionRecord};

pub fn load(path: &Path) -> Document {
    Document::load(path).expect("certificate should parse as PDF")
}

/// Every string shown with `Tj` on the first page, in drawing order.
pub fn shown_strings(doc: &Document) -> Vec<String> {
    let page_id = *doc.get_pages().get(&1).expect("page 1");
    let content = doc.get_page_content(page_id).expect("page content");
    Content::decode(&content)
        .expect("content stream should decode")
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|o| o.as_str().ok())
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .collect()
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Dictionary {
    match object.as_reference() {
        Ok(id) => doc.get_object(id).and_then(Object::as_dict).expect("dictionary"),
        Err(_) => object.as_dict().expect("dictionary"),
    }
}

pub fn page_dict(doc: &Document) -> &Dictionary {
    let page_id = *doc.get_pages().get(&1).expect("page 1");
    doc.get_object(page_id).and_then(Object::as_dict).expect("page dictionary")
}

pub fn media_box(doc: &Document) -> Vec<f32> {
    page_dict(doc)
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("MediaBox")
        .iter()
        .map(|o| o.as_float().expect("number"))
        .collect()
}

pub fn image_xobject_count(doc: &Document) -> usize {
    let resources = resolve(doc, page_dict(doc).get(b"Resources").expect("Resources"));
    resources
        .get(b"XObject")
        .map(|x| resolve(doc, x).len())
        .unwrap_or(0)
}

/// A string entry from the document information dictionary.
pub fn info_entry(doc: &Document, key: &str) -> Option<String> {
    let info = resolve(doc, doc.trailer.get(b"Info").ok()?);
    info.get(key.as_bytes())
        .and_then(Object::as_str)
        .ok()
        .map(|s| String::from_utf8_lossy(s).into_owned())
}

/// A successful one-round ATA session with no serial number reported.
pub fn ata_session() -> WipeSessionRecord {
    WipeSessionRecord {
        device_model: "ST1000".into(),
        device_serial_no: String::new(),
        device_size: 1_000_000_000,
        device_size_text: "1TB".into(),
        device_type_str: "ATA".into(),
        hpa_status: HpaStatus::Disabled,
        start_time: 1_700_000_000,
        end_time: 1_700_003_600,
        duration_str: "01:00:00".into(),
        wipe_status_txt: "ERASED".into(),
        round_working: 1,
        bytes_erased: 1_000_000_000,
        throughput_txt: "270 MB".into(),
        ..Default::default()
    }
}
